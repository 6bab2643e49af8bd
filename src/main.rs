use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use senti_cli::analysis::AnalysisMode;
use senti_cli::config::Config;
use senti_cli::transport::{self, OutputFormat};
use senti_cli::tui;

#[derive(Parser)]
#[command(name = "senti")]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), env!("SENTI_VERSION_SUFFIX")),
    about = "Senti - sentiment analysis for transliterated Marathi text",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Prediction service URL (overrides config and SENTI_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive analysis form (TUI)
    Tui {
        /// Mode to start in (defaults to the configured mode)
        #[arg(short, long)]
        mode: Option<AnalysisMode>,
    },

    /// Analyze text once and print the result
    Analyze {
        /// Analyze as a single sentence or as a paragraph
        #[arg(short, long, value_enum, default_value_t = AnalysisMode::Paragraph)]
        mode: AnalysisMode,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Text to analyze; read from stdin when omitted
        text: Vec<String>,
    },

    /// Check that the service is up and its model is loaded
    Health,

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

fn init_logging(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let filter = if verbose {
        "senti_cli=debug,senti=debug"
    } else {
        "senti_cli=info,senti=info"
    };
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    match log_file {
        // The TUI owns the terminal, so its logs go to a file
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = matches!(cli.command, Commands::Tui { .. })
        .then(|| Config::log_dir().join("senti.log"));
    init_logging(cli.verbose, log_file)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.base_url.as_deref());
    let config_path = cli.config.clone().or_else(Config::config_path);
    tracing::debug!("Using service at {}", config.service.base_url);

    match cli.command {
        Commands::Tui { mode } => {
            let mut config = config;
            if let Some(mode) = mode {
                config.ui.default_mode = mode;
            }
            tui::run_tui(&config).await?;
        }
        Commands::Analyze { mode, format, text } => {
            let text = (!text.is_empty()).then(|| text.join(" "));
            transport::run_analyze(&config, mode, format, text).await?;
        }
        Commands::Health => {
            transport::run_health(&config).await?;
        }
        Commands::Config { save } => {
            transport::run_config(&config, config_path.as_deref(), save)?;
        }
    }

    Ok(())
}
