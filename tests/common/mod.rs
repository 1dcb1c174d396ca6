#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{bail, Result};
use snake::config::GameConfig;
use snake::input::{InputSource, Key};
use snake::render::{Renderer, Screen};

/// Feeds a fixed list of keys and fails once it runs dry, so a test that
/// goes off script errors out instead of spinning forever.
pub struct ScriptedInput {
    keys: VecDeque<Key>,
}

impl ScriptedInput {
    pub fn new(keys: &[Key]) -> Self {
        ScriptedInput { keys: keys.iter().copied().collect() }
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self, _timeout: Duration) -> Result<Key> {
        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!("input script exhausted"),
        }
    }

    fn wait_key(&mut self) -> Result<Key> {
        while let Some(key) = self.keys.pop_front() {
            if key != Key::None {
                return Ok(key);
            }
        }
        bail!("input script exhausted")
    }
}

pub struct RecordingRenderer {
    pub height: u16,
    pub width: u16,
    pub screens: Vec<Screen>,
}

impl RecordingRenderer {
    pub fn new(height: u16, width: u16) -> Self {
        RecordingRenderer { height, width, screens: Vec::new() }
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        self.screens.push(screen.clone());
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.height, self.width))
    }
}

pub fn fast_config(seed: u64) -> GameConfig {
    GameConfig { tick: Duration::from_millis(1), seed: Some(seed), ..GameConfig::default() }
}
