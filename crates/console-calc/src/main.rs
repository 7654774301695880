use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console_calc_config::AppConfig;
use console_calc_repl::Session;

/// An interactive calculator with undo/redo history.
#[derive(Parser, Debug)]
#[command(name = "console-calc", version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Run with default settings without reading or creating a config file.
    #[arg(long)]
    no_config: bool,

    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.no_config {
        AppConfig::default()
    } else {
        let path = cli.config.unwrap_or_else(AppConfig::config_path);
        tracing::debug!("Loading config from {}", path.display());
        AppConfig::load_or_create(&path)
    };

    tracing::info!("Starting console-calc");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
