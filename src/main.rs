use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::config::AppConfig;
use grid_snake::highscore::FileHighscoreStore;
use grid_snake::modes::HumanMode;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 16x16 grid")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory that relative resource paths are resolved against
    #[arg(long)]
    resource_root: Option<PathBuf>,

    /// Highscore file, relative to the resource root
    #[arg(long)]
    highscore_path: Option<PathBuf>,

    /// Grid side length
    #[arg(long)]
    grid_size: Option<i32>,

    /// Game steps per second
    #[arg(long)]
    tick_rate: Option<u32>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(root) = self.resource_root {
            config.resource_root = root;
        }
        if let Some(path) = self.highscore_path {
            config.highscore_path = path;
        }
        if let Some(size) = self.grid_size {
            config.game.grid_size = size;
        }
        if let Some(rate) = self.tick_rate {
            config.game.tick_rate_hz = rate;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode.clone();
    let config = cli.into_config()?;

    // Set up logging before anything else; the terminal owns stdout/stderr
    let log_file = config.log_file();
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(&log_file)
            .with_context(|| format!("Failed to create log file {:?}", log_file))?,
    )
    .context("Failed to initialize logger")?;

    info!("starting with {:?}", config);
    // A terminal has no window icon to set
    info!("icon path {:?} is not used by the terminal front end", config.icon_file());

    let store = FileHighscoreStore::new(config.highscore_file());

    // Dispatch to appropriate mode
    match mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config.game, store)?;
            human_mode.run().await?;
        }
    }

    Ok(())
}
