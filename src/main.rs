use clap::Parser;
use memora::app::App;
use memora::config::GameConfig;
use memora::{error, MemoraError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Terminal memory-matching game
#[derive(Parser, Debug)]
#[command(name = "memora", version, about)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of tiles on the board (even)
    #[arg(long)]
    tiles: Option<usize>,
    /// Number of grid columns
    #[arg(long)]
    columns: Option<usize>,
    /// How long a flipped pair stays visible, e.g. "1s" or "750ms"
    #[arg(long, value_parser = humantime::parse_duration)]
    delay: Option<Duration>,
    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,
    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Apply command line overrides on top of the loaded config
    fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(tiles) = self.tiles {
            config = config.with_tile_count(tiles);
        }
        if let Some(columns) = self.columns {
            config = config.with_columns(columns);
        }
        if let Some(delay) = self.delay {
            config = config.with_resolution_delay(delay);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

/// The terminal belongs to the UI, so logs go to a file
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => dirs::data_local_dir()
            .ok_or_else(|| {
                MemoraError::ConfigError("Unable to determine data directory".to_string())
            })?
            .join(APP_NAME)
            .join(LOG_FILE),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let loaded = match &args.config {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load config, using defaults");
            GameConfig::default()
        }),
    };
    let config = args.apply(loaded);
    config.validate()?;
    Ok(config)
}

async fn run(args: Args) -> Result<()> {
    init_logging(args.log_file.clone())?;
    let config = load_config(&args)?;
    tracing::info!(?config, "starting memora");

    let mut app = App::new(config)?;
    app.init()?;
    app.run().await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = run(args).await {
        tracing::error!(%err, "memora exited with an error");
        eprintln!("{}", error::user_friendly_message(&err));
        std::process::exit(1);
    }
}
