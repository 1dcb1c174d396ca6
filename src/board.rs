use rand::Rng;
use tracing::warn;

use crate::config::{BoardConfig, MAX_FOOD_ATTEMPTS};
use crate::error::{GameError, Result};
use crate::snake::Snake;
use crate::Position;

/// Playfield geometry for one session. Border cells themselves are not part
/// of the interior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    upper_border: i32,
    lower_border: i32,
    left_border: i32,
    right_border: i32,
}

impl Board {
    pub fn new(height: u16, width: u16, config: &BoardConfig) -> Result<Self> {
        let margins = config.margins as i32;
        let board = Board {
            upper_border: margins + config.top_padding as i32,
            lower_border: height as i32 - 1 - margins,
            left_border: margins,
            right_border: width as i32 - 1 - margins,
        };

        // Need at least one cell strictly between each pair of borders
        if board.lower_border - board.upper_border < 2 || board.right_border - board.left_border < 2 {
            return Err(GameError::BoardTooSmall { height, width });
        }

        Ok(board)
    }

    pub fn upper_border(&self) -> i32 {
        self.upper_border
    }

    pub fn lower_border(&self) -> i32 {
        self.lower_border
    }

    pub fn left_border(&self) -> i32 {
        self.left_border
    }

    pub fn right_border(&self) -> i32 {
        self.right_border
    }

    pub fn interior_contains(&self, pos: Position) -> bool {
        pos.row > self.upper_border
            && pos.row < self.lower_border
            && pos.col > self.left_border
            && pos.col < self.right_border
    }

    /// First row of a `lines`-tall block ending just above the upper border.
    pub fn header_row(&self, lines: usize) -> i32 {
        (self.upper_border - lines as i32).max(0)
    }

    pub fn interior_cells(&self) -> usize {
        let rows = (self.lower_border - self.upper_border - 1) as usize;
        let cols = (self.right_border - self.left_border - 1) as usize;
        rows * cols
    }

    pub fn random_interior_position<R: Rng>(&self, rng: &mut R) -> Position {
        let row = rng.gen_range(self.upper_border + 1..=self.lower_border - 1);
        let col = rng.gen_range(self.left_border + 1..=self.right_border - 1);
        Position::new(row, col)
    }

    /// Uniformly random interior cell. Says nothing about the snake.
    pub fn sample_food_position<R: Rng>(&self, rng: &mut R) -> Position {
        self.random_interior_position(rng)
    }

    pub fn place_food_avoiding_snake<R: Rng>(&self, snake: &Snake, rng: &mut R) -> Result<Position> {
        for _ in 0..MAX_FOOD_ATTEMPTS {
            let pos = self.sample_food_position(rng);
            if !snake.occupies(pos) {
                return Ok(pos);
            }
        }

        warn!(snake_len = snake.len(), cells = self.interior_cells(), "food placement gave up");
        Err(GameError::FoodPlacementExhausted { attempts: MAX_FOOD_ATTEMPTS })
    }
}
