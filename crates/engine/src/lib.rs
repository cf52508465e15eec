//! Workpulse metrics derivation and risk classification engine.
//!
//! Pure computation: one raw snapshot in, one immutable view model per
//! scope out. No I/O, no shared state, no timers; every call is a total
//! function of its input, so the engine may be invoked concurrently and
//! repeatedly without coordination.

pub mod normalize;
pub mod progress;
pub mod risk;
pub mod rollup;
pub mod workload;

pub use normalize::{normalize_scope, NormalizedScope};
pub use rollup::{assemble, assemble_all, EngineError};
