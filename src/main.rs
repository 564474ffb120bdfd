use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use todocards::config::Config;
use todocards::logger::Logger;
use todocards::ui;

#[derive(Parser)]
#[command(name = "todocards", about = "A card-based todo list for the terminal")]
struct Cli {
    /// Path to a configuration file (default: ./todocards.toml, then the XDG config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Write logs to file even if disabled in the configuration
    #[arg(long)]
    logging: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logging_enabled = cli.logging || config.logging.enabled;
    let logger = Logger::from_config(logging_enabled)?;
    let level = if logging_enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger.install(level)?;
    log::info!("todocards starting (file logging: {})", logging_enabled);

    // Run the TUI application
    let result = ui::run_app(config, logger.clone()).await;
    if let Err(e) = &result {
        log::error!("todocards exited with error: {:#}", e);
    }
    logger.flush();

    result
}
