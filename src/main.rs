use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a wrapping grid, in your terminal")]
struct Cli {
    /// Base tick rate; the snake's length is added on top
    #[arg(long, default_value = "10")]
    speed: u32,

    /// Seed for apple placement and restart directions
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write diagnostic logs (the terminal is taken by the game)
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let mut config = GameConfig::new(cli.speed);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    info!(?config, "starting grid_snake");
    grid_snake::app::run(config).await
}
