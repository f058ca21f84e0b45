mod commands;
mod config;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "campus",
    version,
    about = "Terminal client for the Campus education platform"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::AppConfig::load()?;
    init_tracing(cli.verbose, &config.log.level);

    commands::run(cli.command, &config).await
}

/// RUST_LOG wins; otherwise the config level, raised by -v flags.
fn init_tracing(verbose: u8, config_level: &str) {
    let fallback = match verbose {
        0 => config_level.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
