//! # rbac-admin
//!
//! Terminal front end for the RBAC admin dashboard.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rbac_cli::{app, demo, shell};
use rbac_config::{ConfigLoad, ConfigLoader, ConfigOverrides};
use rbac_core::store::IdStrategy;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "rbac-admin", version)]
#[command(about = "Manage users and roles against an in-memory access layer")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Simulated latency per call, e.g. 500ms or 0ms (overrides config)
    #[arg(long, value_parser = humantime::parse_duration)]
    latency: Option<Duration>,

    /// Id assignment: monotonic or count_plus_one (overrides config)
    #[arg(long)]
    id_strategy: Option<IdStrategy>,

    /// Start with empty collections instead of the seed data
    #[arg(long)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Command {
    /// Read commands from stdin (default)
    #[default]
    Shell,
    /// Run a scripted scenario and print each step
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new().with_overrides(ConfigOverrides {
        latency: cli.latency,
        id_strategy: cli.id_strategy,
        seed: cli.no_seed.then_some(false),
        log_filter: None,
    });
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "loaded configuration file");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let mut dashboard = app::mount(&config).await;
    let mut stdout = tokio::io::stdout();

    match cli.command.unwrap_or_default() {
        Command::Demo => {
            let text = demo::run(&mut dashboard).await;
            stdout
                .write_all(text.as_bytes())
                .await
                .context("failed to write demo output")?;
            stdout.flush().await.context("failed to flush stdout")?;
        }
        Command::Shell => {
            let mut shell = shell::Shell::new(dashboard);
            let banner = rbac_cli::render::dashboard(shell.dashboard());
            stdout
                .write_all(banner.as_bytes())
                .await
                .context("failed to write dashboard")?;
            let stdin = BufReader::new(tokio::io::stdin());
            shell::run(&mut shell, stdin, &mut stdout)
                .await
                .context("shell i/o failed")?;
        }
    }

    Ok(())
}
