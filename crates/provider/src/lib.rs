//! Snapshot provider abstraction and adapters for Workpulse.
//!
//! Every external system (issue tracker, VCS host, CI/CD, docs, chat) sits
//! behind this seam: one adapter per source, all producing the same raw
//! snapshot contract. The engine itself never talks to a source directly.

#![warn(missing_docs)]

use async_trait::async_trait;
use workpulse_core::RawSnapshot;

mod json_file;
mod sample;

pub use json_file::JsonFileProvider;
pub use sample::SampleProvider;

/// Error type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors that can occur while fetching a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Source unreachable or not configured
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// A source of raw snapshots.
///
/// This trait allows different collectors to be plugged in.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Short source name for logs.
    fn source(&self) -> &str;

    /// Fetch the latest raw snapshot.
    async fn fetch(&self) -> Result<RawSnapshot>;
}
