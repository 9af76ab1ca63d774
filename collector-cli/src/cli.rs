use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use collector_core::{Collector, Config};
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-collector",
    version,
    about = "Collects current weather for a list of cities into PostgreSQL"
)]
pub struct Cli {
    /// Config file; defaults to the platform config directory.
    #[arg(long, env = "COLLECTOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory for rotating log files.
    #[arg(long, env = "COLLECTOR_LOG_DIR", default_value = "logs", global = true)]
    pub log_dir: PathBuf,

    /// Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect weather, cycle after cycle, until interrupted.
    Run {
        /// Run a single cycle and exit; fails if the cycle aborts.
        #[arg(long)]
        once: bool,
    },

    /// Write a config file with the default settings.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        match self.command.unwrap_or(Command::Run { once: false }) {
            Command::Run { once } => {
                let mut config = Config::load_from(&path)?;
                config.apply_env_overrides(|key| std::env::var(key).ok())?;
                config.validate()?;

                info!(config = %path.display(), "Configuration loaded");
                let collector = Collector::from_config(&config)?;

                if once {
                    let report = collector.run_cycle().await.context("Ingestion cycle failed")?;
                    info!(?report, "Single cycle finished");
                    return Ok(());
                }

                tokio::select! {
                    _ = collector.run_forever() => {}
                    res = tokio::signal::ctrl_c() => {
                        res.context("Failed to listen for shutdown signal")?;
                        info!("Shutting down");
                    }
                }
            }
            Command::InitConfig { force } => {
                if path.exists() && !force {
                    bail!(
                        "Config file already exists: {}\n\
                         Hint: pass --force to overwrite it.",
                        path.display()
                    );
                }
                Config::default().save_to(&path)?;
                println!("Wrote default configuration to {}", path.display());
            }
        }

        Ok(())
    }
}
