//! Workpulse CLI - work-analytics reports from snapshots.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use workpulse_core::{Scope, ViewModel};
use workpulse_engine::{assemble, normalize_scope};
use workpulse_provider::{JsonFileProvider, SampleProvider, SnapshotProvider};

#[derive(Parser)]
#[command(name = "workpulse")]
#[command(about = "Work-analytics metrics and risk reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the report for one scope
    Report {
        /// Snapshot JSON file (omit for the built-in sample)
        #[arg(long)]
        snapshot: Option<PathBuf>,
        /// Scope to report on (team or personal)
        #[arg(long, default_value = "team")]
        scope: String,
        /// Emit pretty JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List normalization warnings per scope
    Warnings {
        /// Snapshot JSON file (omit for the built-in sample)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// List scopes present in a snapshot
    Scopes {
        /// Snapshot JSON file (omit for the built-in sample)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            snapshot,
            scope,
            json,
        } => {
            let scope: Scope = scope.parse()?;
            let raw = provider_for(snapshot).fetch().await?;
            let view = assemble(scope, &raw)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_report(&view);
            }
        }
        Commands::Warnings { snapshot } => {
            let raw = provider_for(snapshot).fetch().await?;
            for (scope, section) in [
                (Scope::Team, raw.team.as_ref()),
                (Scope::Personal, raw.personal.as_ref()),
            ] {
                let Some(section) = section else { continue };
                let normalized = normalize_scope(section);
                println!("{} ({} warnings)", scope, normalized.warnings.len());
                for warning in &normalized.warnings {
                    println!("  {} - {:?}", warning.field, warning.kind);
                }
            }
        }
        Commands::Scopes { snapshot } => {
            let raw = provider_for(snapshot).fetch().await?;
            if raw.team.is_some() {
                println!("team");
            }
            if raw.personal.is_some() {
                println!("personal");
            }
        }
    }

    Ok(())
}

fn provider_for(path: Option<PathBuf>) -> Box<dyn SnapshotProvider> {
    match path {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(SampleProvider),
    }
}

fn print_report(view: &ViewModel) {
    println!("Scope: {}", view.scope);
    println!();
    println!("Sprint: {} [{}]", view.sprint.name, view.sprint.status.label());
    println!("  Completion: {}%", view.sprint.completion_percent);
    println!("  Time elapsed: {}%", view.sprint.elapsed_percent);
    println!("  Velocity change: {}", view.sprint.velocity_change);
    println!("  Predicted completion: {}%", view.sprint.predicted_percent);
    println!(
        "  Remaining: {:.0} pts ({:.1} pts/day pace)",
        view.sprint.remaining_points, view.sprint.avg_points_per_day,
    );
    if view.sprint.scope_at_risk {
        println!("  Scope at risk: committed points exceed current velocity");
    }

    println!();
    println!("Risks ({})", view.risk.ranked.len());
    for risk in &view.risk.ranked {
        println!(
            "  [{:>8}] {:>3} {} - {}",
            risk.severity, risk.impact_score, risk.id, risk.title,
        );
        if let Some(mitigation) = &risk.mitigation {
            println!("             {}", mitigation);
        }
    }
    for entry in &view.risk.counts {
        println!("  {}: {} ({})", entry.severity, entry.count, entry.trend);
    }

    println!();
    println!("Workload ({} overloaded)", view.workload.overloaded_count);
    for member in &view.workload.members {
        println!(
            "  {:<16} {:>5.1} pts (avg {:.1})  x{:.2}  {}",
            member.name,
            member.assigned_points,
            member.rolling_avg_points,
            member.load_ratio,
            member.classification,
        );
    }
    if let Some(suggestion) = &view.workload.suggestion {
        println!("  Suggestion: {}", suggestion.summary);
    }

    if !view.warnings.is_empty() {
        println!();
        println!("Warnings ({})", view.warnings.len());
        for warning in &view.warnings {
            println!("  {} - {:?}", warning.field, warning.kind);
        }
    }
}
