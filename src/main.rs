use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use skywindow::config::Config;
use skywindow::logging::init_tracing;
use skywindow::ui::{run, LaunchOptions};

/// Browse a nine-day window of astronomy pictures of the day.
#[derive(Debug, Parser)]
#[command(name = "skywindow", version, about)]
struct Cli {
    /// Config file (default: <config dir>/skywindow/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Access key for the image service. Overrides config and environment.
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Image service endpoint URL.
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// First day of the window, YYYY-MM-DD.
    #[arg(long, value_name = "DATE")]
    start: Option<String>,

    /// Fetch immediately on startup.
    #[arg(long)]
    fetch: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path).context("loading configuration")?;
    config.apply_env();
    if let Some(key) = cli.api_key {
        config.api.key = key;
    }
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }
    config.validate().context("validating configuration")?;

    let launch = LaunchOptions {
        start: cli.start,
        fetch_on_start: cli.fetch,
    };
    run(config, launch)?;
    Ok(())
}
