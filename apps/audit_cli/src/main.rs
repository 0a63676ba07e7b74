mod render;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dashboard_core::{
    load_settings, replay, AuditRequest, AuditRun, Clock, DashboardSettings, ManualClock,
    PollOutcome, SeededRandom, Store,
};
use shared::{
    domain::AuditType,
    protocol::Action,
    state::{AppState, AuditLog},
};
use tracing_subscriber::EnvFilter;

/// Upper bound on simulated progress ticks before a run is considered stuck.
const MAX_TICKS: u32 = 10_000;

#[derive(Parser, Debug)]
#[command(about = "Headless front end for the audit dashboard simulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one simulated audit to completion and print its report.
    Run {
        #[arg(long)]
        target: String,
        #[arg(long, default_value = "mini-app")]
        audit_type: AuditType,
        /// Overrides `rng_seed` from the config file.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Fold a JSON array of actions through the reducer and print the final state.
    Replay {
        script: PathBuf,
        /// Print a one-line summary instead of the state as JSON.
        #[arg(long)]
        summary: bool,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings_with_logging() -> DashboardSettings {
    let (settings, config_error) = load_settings();
    init_tracing(&settings.log_filter);
    if let Some(err) = config_error {
        tracing::warn!("ignoring dashboard config: {err:#}");
    }
    settings
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings_with_logging();

    match cli.command {
        Command::Run {
            target,
            audit_type,
            seed,
            json,
        } => {
            if target.trim().is_empty() {
                bail!(shared::error::DomainError::EmptyTarget);
            }
            let request = AuditRequest::new(target.trim(), audit_type);
            let seed = seed.or(settings.rng_seed);
            let audit = run_audit(request, &settings, seed, |percent, step| {
                if !json {
                    println!("[{percent:>3}%] {step}");
                }
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&audit)?);
            } else {
                println!();
                print!("{}", render::render_report(&audit));
            }
        }
        Command::Replay { script, summary } => {
            let actions = load_script(&script)?;
            let state = replay_script(&settings, actions);
            if summary {
                print!("{}", render::render_summary(&state));
            } else {
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
        }
    }

    Ok(())
}

/// Drives a progress run on a manual clock until it commits. `on_step` sees
/// every new step label with the progress percentage at which it appeared.
fn run_audit(
    request: AuditRequest,
    settings: &DashboardSettings,
    seed: Option<u64>,
    mut on_step: impl FnMut(u8, &str),
) -> Result<AuditLog> {
    let clock = ManualClock::new();
    let mut rng = SeededRandom::from_optional_seed(seed);
    let mut store = Store::new(settings.initial_state());
    let mut run = AuditRun::start(request, settings.progress_tick(), clock.now());

    let mut last_step = "";
    for _ in 0..MAX_TICKS {
        clock.advance(settings.progress_tick());
        let outcome = run.poll(clock.now(), &mut rng, &mut store);
        if run.current_step() != last_step {
            last_step = run.current_step();
            on_step(run.progress_percent(), last_step);
        }
        if let PollOutcome::Completed(id) = outcome {
            return store
                .state()
                .find_audit(&id)
                .cloned()
                .with_context(|| format!("committed audit {id} missing from store"));
        }
    }
    bail!("audit did not complete within {MAX_TICKS} ticks")
}

fn load_script(path: &Path) -> Result<Vec<Action>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read action script '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to decode action script '{}'", path.display()))
}

fn replay_script(settings: &DashboardSettings, actions: Vec<Action>) -> AppState {
    let unrecognized = actions
        .iter()
        .filter(|action| matches!(action, Action::Unrecognized))
        .count();
    if unrecognized > 0 {
        tracing::warn!(unrecognized, "script contains unrecognized actions; skipping them");
    }
    tracing::info!(actions = actions.len(), "replaying action script");
    replay(settings.initial_state(), actions)
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
