use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_MARGINS: u16 = 1;
pub const DEFAULT_TOP_PADDING: u16 = 3;

/// Upper bound on food resampling before the board is considered full.
pub const MAX_FOOD_ATTEMPTS: u32 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "snake", about = "Snake in your terminal")]
pub struct Args {
    /// Length of one game tick in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Empty cells kept between the screen edge and the board border
    #[arg(long, default_value_t = DEFAULT_MARGINS)]
    pub margins: u16,

    /// Rows above the board reserved for the score line and pause menu
    #[arg(long, default_value_t = DEFAULT_TOP_PADDING)]
    pub top_padding: u16,

    /// Seed for spawn and food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub margins: u16,
    pub top_padding: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { margins: DEFAULT_MARGINS, top_padding: DEFAULT_TOP_PADDING }
    }
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub tick: Duration,
    pub board: BoardConfig,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            board: BoardConfig::default(),
            seed: None,
        }
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        GameConfig {
            tick: Duration::from_millis(args.tick_ms),
            board: BoardConfig { margins: args.margins, top_padding: args.top_padding },
            seed: args.seed,
        }
    }
}
