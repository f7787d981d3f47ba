//! CLI entrypoint for snake-game
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use snake_application::{RunSimulationUseCase, SimulationConfig};
use snake_domain::{Actor, Bounds, ConfigField};
use snake_infrastructure::{ConfigResolver, ProcessEnvironment, init_logging, write_config_file};
use snake_presentation::{Cli, ConfigReport, ConsoleRenderer};
use std::future::Future;
use std::io;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Cancel `token` once `signal` fires.
///
/// A signal that cannot be listened for leaves the token alone, so the
/// simulation keeps running until its tick limit.
async fn cancel_on_signal<F>(signal: F, token: CancellationToken)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("Quit signal received");
            token.cancel();
        }
        Err(e) => warn!("Could not listen for the quit signal: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let resolved = ConfigResolver::standard()
        .resolve(
            &cli.explicit_args(),
            &ProcessEnvironment,
            cli.configuration_file.as_deref(),
        )
        .context("Failed to resolve configuration")?;

    if cli.show_config {
        print!("{}", ConfigReport::format(&resolved));
        return Ok(());
    }

    if let Some(path) = &cli.write_config {
        write_config_file(path, &resolved.configuration)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let configuration = &resolved.configuration;

    // === Logging ===
    let logging = init_logging(configuration).context("Failed to set up logging")?;
    info!("Starting snake-game");
    info!("Logging to {}", logging.path().display());
    if let Some(path) = resolved.sources.file() {
        info!("Loaded configuration file {}", path.display());
    }
    for field in ConfigField::ALL {
        info!(
            "{} = {} ({})",
            field,
            configuration.value_of(field),
            resolved.sources.layer_of(field)
        );
    }

    // === Simulation ===
    let bounds = Bounds::from_surface(configuration.surface_width, configuration.surface_height)?;
    let mut actor = Actor::spawn_centered(bounds);

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_signal(tokio::signal::ctrl_c(), cancel.clone()));

    let simulation = SimulationConfig::default()
        .with_tick_rate(cli.tick_rate)
        .with_max_ticks(cli.ticks);
    let use_case = RunSimulationUseCase::new(simulation, cancel);

    let summary = use_case.execute(&mut actor, &ConsoleRenderer::new()).await?;
    info!(
        "Simulation finished after {} ticks ({:?})",
        summary.ticks, summary.stop_reason
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_cancels_token() {
        let token = CancellationToken::new();
        cancel_on_signal(async { Ok(()) }, token.clone()).await;
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_signal_leaves_token_alone() {
        let token = CancellationToken::new();
        let failed = async { Err(io::Error::other("no signal handler")) };
        cancel_on_signal(failed, token.clone()).await;
        assert!(!token.is_cancelled());
    }
}
