use std::thread::sleep;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::board::Board;
use crate::config::GameConfig;
use crate::input::{InputSource, Key};
use crate::menu::{MainMenuItem, Menu, MenuAnchor};
use crate::pacing::TickPacer;
use crate::render::{Renderer, Screen};
use crate::scoreboard::Scoreboard;
use crate::session::{GameSession, Outcome};

/// Top-level loop: main menu, play sessions, scoreboard.
pub struct App<I: InputSource, R: Renderer> {
    input: I,
    renderer: R,
    config: GameConfig,
    pacer: TickPacer,
    main_menu: Menu<MainMenuItem>,
    scoreboard: Scoreboard,
    rng: StdRng,
}

impl<I: InputSource, R: Renderer> App<I, R> {
    pub fn new(input: I, renderer: R, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        App {
            input,
            renderer,
            pacer: TickPacer::new(config.tick),
            config,
            main_menu: Menu::new(MainMenuItem::ALL.to_vec(), MenuAnchor::Center),
            scoreboard: Scoreboard::new(),
            rng,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.renderer.draw(&Screen::MainMenu(self.main_menu.view()))?;

            match self.input.wait_key()? {
                Key::Up => self.main_menu.move_selection(-1),
                Key::Down => self.main_menu.move_selection(1),
                Key::Cancel => break,
                Key::Confirm => {
                    let item = *self.main_menu.selected_item();
                    info!(%item, "main menu");
                    match item {
                        MainMenuItem::Play => {
                            if self.play()? == Outcome::PlayerQuitApp {
                                break;
                            }
                        }
                        MainMenuItem::Scoreboard => self.show_scores()?,
                        MainMenuItem::Exit => break,
                    }
                }
                _ => {}
            }
        }

        info!(games = self.scoreboard.len(), best = ?self.scoreboard.best(), "leaving");
        Ok(())
    }

    /// Runs one session until it is acknowledged and returns how it ended.
    pub fn play(&mut self) -> Result<Outcome> {
        let (height, width) = self.renderer.size()?;
        let board = Board::new(height, width, &self.config.board)?;
        let mut session = GameSession::start(board, &mut self.scoreboard, &mut self.rng)?;
        self.renderer.draw(&Screen::Session(session.snapshot()))?;

        while !session.is_exited() {
            // A collision ends the game before any input is read for the tick
            if session.start_tick()? {
                self.renderer.draw(&Screen::Session(session.snapshot()))?;
            }

            let key = if session.is_realtime() {
                let started = Instant::now();
                let key = self.input.poll_key(self.pacer.period())?;
                if let Some(delay) = self.pacer.post_read_delay(started.elapsed()) {
                    sleep(delay);
                }
                key
            } else {
                self.input.wait_key()?
            };

            session.tick(key)?;
            self.renderer.draw(&Screen::Session(session.snapshot()))?;
        }

        Ok(session.outcome())
    }

    fn show_scores(&mut self) -> Result<()> {
        self.renderer.draw(&Screen::Scores(self.scoreboard.ranked_descending()))?;
        self.input.wait_key()?;
        Ok(())
    }
}
