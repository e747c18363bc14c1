//! Pomodoro Widget - an interactive terminal countdown
//!
//! Alternates focused Session and Break phases:
//! - 25 minute sessions and 5 minute breaks by default
//! - lengths adjustable between 1 and 60 minutes while stopped
//! - a beep at every phase change

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pomodoro_widget::cli::{Cli, Commands};
use pomodoro_widget::types::WidgetConfig;
use pomodoro_widget::ui;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        generate_completions(*shell);
        return Ok(());
    }

    let config = cli.to_config();
    config.validate().map_err(anyhow::Error::msg)?;

    init_tracing(&config)?;
    if config.verbose {
        tracing::info!("Verbose mode enabled");
    }
    tracing::debug!(config = %serde_json::to_string(&config)?, "configuration loaded");

    ui::run(&config).await
}

/// Initializes the tracing subscriber for logging.
///
/// The widget owns the terminal, so logs go to the configured file or
/// nowhere.
fn init_tracing(config: &WidgetConfig) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if config.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;

            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .without_time()
                .with_writer(std::io::sink)
                .init();
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
