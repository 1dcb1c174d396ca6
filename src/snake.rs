use crate::board::Board;
use crate::Position;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

/// The player's segment chain, head first. `direction` stays `None` until
/// the first directional input, and the snake sits still until then.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Position>,
    direction: Option<Direction>,
    score: u32,
}

impl Snake {
    pub fn spawn(pos: Position) -> Self {
        Snake { segments: vec![pos], direction: None, score: 0 }
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Reversing straight into the neck is ignored.
    pub fn set_direction(&mut self, requested: Direction) {
        match self.direction {
            Some(current) if current == requested.opposite() => {}
            _ => self.direction = Some(requested),
        }
    }

    pub fn advance(&mut self) {
        let Some(dir) = self.direction else {
            return;
        };

        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let (d_row, d_col) = dir.delta();
        let head = &mut self.segments[0];
        head.row += d_row;
        head.col += d_col;
    }

    /// Prepends `new_head`. Called with the food cell while the head still
    /// sits on it, so head and neck coincide until the next `advance`.
    pub fn grow(&mut self, new_head: Position) {
        self.segments.insert(0, new_head);
        self.score += 1;
    }

    /// The neck (index 1) is skipped: right after `grow` it shares the head's cell.
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(2).any(|&pos| pos == head)
    }

    /// Touching a border counts as hitting it.
    pub fn has_wall_collision(&self, board: &Board) -> bool {
        !board.interior_contains(self.head())
    }
}
