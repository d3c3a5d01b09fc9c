mod prompt;
mod stages;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use crauction_core::{AppConfig, ConfigError, LotRange};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "crauction")]
#[command(about = "Scrape auction lots and analyze price per square foot and per case")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch an auction page and save every lot to the full lot table
    Scrape {
        /// Auction page URL; prompted for when omitted
        url: Option<String>,
        /// Keep only lots numbered within this range (e.g. 10-25)
        #[arg(long)]
        lots: Option<LotRange>,
        /// Where to write the full lot table
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Reduce the full lot table to the trimmed column set
    Trim(StageArgs),
    /// Derive square footage from lot titles
    Sqft(StageArgs),
    /// Compute price per square foot and per case, then print the result
    Analyze(StageArgs),
    /// Scrape, trim and derive square footage in one go
    Run {
        /// Auction page URL; prompted for when omitted
        url: Option<String>,
        /// Keep only lots numbered within this range (e.g. 10-25)
        #[arg(long)]
        lots: Option<LotRange>,
        /// Also run the cost analysis
        #[arg(long)]
        analyze: bool,
    },
}

/// Input/output overrides shared by the CSV stages.
#[derive(Debug, Args)]
struct StageArgs {
    /// Input CSV (defaults to the previous stage's file in the data directory)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output CSV (defaults to this stage's file in the data directory)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(crauction_core::load_app_config)?;
    init_tracing(&config)?;

    let result = match cli.command {
        Some(Commands::Scrape { url, lots, output }) => {
            let url = prompt::url_or_prompt(url)?;
            stages::run_scrape(&config, &url, lots, output).await.map(|_| ())
        }
        Some(Commands::Trim(args)) => stages::run_trim(&config, args.input, args.output),
        Some(Commands::Sqft(args)) => stages::run_sqft(&config, args.input, args.output),
        Some(Commands::Analyze(args)) => stages::run_analyze(&config, args.input, args.output),
        Some(Commands::Run { url, lots, analyze }) => {
            let url = prompt::url_or_prompt(url)?;
            stages::run_all(&config, &url, lots, analyze).await
        }
        None => {
            let url = prompt::url_or_prompt(None)?;
            stages::run_all(&config, &url, None, false).await
        }
    };

    result.inspect_err(|e| tracing::error!(error = format_args!("{e:#}"), "execution failed"))
}

/// Runs `load`, logging a failure through a plain stderr subscriber since the
/// configured one cannot be built without a valid config.
fn load_config(
    load: impl FnOnce() -> Result<AppConfig, ConfigError>,
) -> anyhow::Result<AppConfig> {
    load()
        .inspect_err(|e| {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
            tracing::error!(error = %e, "invalid configuration");
        })
        .context("failed to load configuration")
}

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `CRAUCTION_LOG_LEVEL`. Logs go to the
/// configured file, or to stderr so stdout stays free for the analysis table.
fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}
