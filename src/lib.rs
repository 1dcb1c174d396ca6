pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod pacing;
pub mod render;
pub mod scoreboard;
pub mod session;
pub mod snake;
pub mod term;

pub use error::GameError;

/// A grid cell, addressed the way the terminal is: row first, then column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }
}
