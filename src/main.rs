use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use snake::app::App;
use snake::config::{Args, GameConfig};
use snake::term::{TermGuard, TermInput, TermRenderer};

fn main() -> Result<()> {
    let args = Args::parse();

    // The screen belongs to the game, so logs only go to a file
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::from(&args);
    let guard = TermGuard::setup()?;
    let res = App::new(TermInput, TermRenderer::new(), config).run();
    drop(guard);

    res
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(())
}
