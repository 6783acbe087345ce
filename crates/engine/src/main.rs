//! Airlift Engine - scenario runner.
//!
//! Usage: `airlift-engine [SCENARIO]`. Without an argument the scenario path
//! is read from `AIRLIFT_SCENARIO`.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airlift_engine::scenario::{load_scenario, run_scenario, StepOutcome};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airlift_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("AIRLIFT_SCENARIO").map(PathBuf::from))
        .context("no scenario given: pass a path or set AIRLIFT_SCENARIO")?;

    tracing::info!(path = %path.display(), "Loading scenario");
    let scenario = load_scenario(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let report = run_scenario(&scenario)?;

    for (step, outcome) in report.outcomes.iter().enumerate() {
        match outcome {
            StepOutcome::NoTargeter => tracing::info!(step, "No targeter for click"),
            StepOutcome::Resolved {
                order,
                cursor,
                resolution,
            } => tracing::info!(
                step,
                order = %order.order_string,
                target = %order.target,
                cursor = cursor.as_deref().unwrap_or("-"),
                resolution = ?resolution,
                "Order resolved"
            ),
            StepOutcome::Completed { replayed } => {
                tracing::info!(step, replayed = replayed.len(), "Activity completed");
                for order in replayed {
                    tracing::info!(
                        step,
                        order = %order.order_string,
                        target = %order.target,
                        queued = order.queued,
                        "Replaying deferred order"
                    );
                }
            }
            StepOutcome::Idle => tracing::info!(step, "Actor idle, nothing to complete"),
            StepOutcome::Gate { active } => tracing::info!(step, active, "Order trait gate"),
        }
    }

    tracing::info!(
        steps = report.outcomes.len(),
        target_lines = report.lines.len(),
        "Scenario finished"
    );
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
