//! src/main.rs
//! Builds the handler chain, dispatches one keyword command, exits 0 whether or not it matched.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use cmdchain_core::{
    LoggerBuilder,
    cli::Cli,
    config::Config,
    controller::{DispatchOutcome, HandlerRegistry},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path).await,
        None => Config::load().await,
    }
    .context("Failed to load configuration")?;

    let _guard = init_logging(&cli, &config);
    info!("Starting cmdchain");

    let mut registry = HandlerRegistry::from_config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for stats in registry.performance_report() {
            writeln!(
                out,
                "{}{}",
                stats.name,
                if stats.is_enabled { "" } else { " (disabled)" }
            )?;
        }

        return Ok(());
    }

    let tokens = cli
        .resolve_input(&config)
        .context("Failed to read command keywords")?;

    match registry
        .dispatch(&tokens, &mut out)
        .context("Command handler failed")?
    {
        DispatchOutcome::Matched { handler, succeeded } => {
            info!(handler, succeeded, "Command dispatched");
        }

        DispatchOutcome::NoMatch => {
            warn!(input = ?tokens.keywords(), "No handler matched");
            eprintln!("No handler matched");
        }

        DispatchOutcome::EmptyRegistry => {
            warn!("No handlers registered");
            eprintln!("No handlers registered");
        }
    }

    info!("cmdchain exited cleanly");
    Ok(())
}

/// Logging is best effort; the command still runs if the log directory is unusable.
fn init_logging(cli: &Cli, config: &Config) -> Option<WorkerGuard> {
    let mut builder = LoggerBuilder::new().with_config(config.logging.clone());

    if let Some(level) = &cli.log_level {
        builder = builder.with_level(level);
    }

    match builder.build() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    }
}
