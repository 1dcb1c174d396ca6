use std::time::Duration;

use anyhow::Result;

use crate::snake::Direction;

/// One abstract key per tick. Platform key codes are mapped onto these by
/// the front end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    None,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

pub trait InputSource {
    /// Waits at most `timeout` for a key, `Key::None` if nothing came.
    fn poll_key(&mut self, timeout: Duration) -> Result<Key>;

    /// Blocks until a key other than `Key::None` arrives.
    fn wait_key(&mut self) -> Result<Key>;
}
