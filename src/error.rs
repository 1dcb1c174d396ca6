use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// The margins leave no interior cell to play in.
    #[error("terminal of {height}x{width} is too small for a board")]
    BoardTooSmall { height: u16, width: u16 },

    /// Food could not be placed off the snake within the retry cap.
    #[error("no free cell found for food after {attempts} attempts")]
    FoodPlacementExhausted { attempts: u32 },

    #[error("terminal I/O error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
