use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::Result;
use crate::input::Key;
use crate::menu::{Menu, MenuAnchor, MenuView, PauseMenuItem};
use crate::scoreboard::Scoreboard;
use crate::snake::{Direction, Snake};
use crate::Position;

/// Columns left free for the score line before the pause menu starts.
const STATUS_WIDTH: i32 = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    AteSelf,
    HitWall,
    PlayerQuitToMenu,
    PlayerQuitApp,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Ongoing => "",
            Outcome::AteSelf => "You ate yourself!",
            Outcome::HitWall => "You hit the wall!",
            Outcome::PlayerQuitToMenu => "Back to menu",
            Outcome::PlayerQuitApp => "Goodbye",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Phase {
    Running,
    Paused(Menu<PauseMenuItem>),
    GameOver(Outcome),
    Exited(Outcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhaseView {
    Running,
    Paused(MenuView),
    GameOver { outcome: Outcome, message: String, score: u32 },
    Exited(Outcome),
}

/// Everything a renderer needs for one frame of play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub segments: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub direction: Option<Direction>,
    pub phase: PhaseView,
}

/// One play-through, from spawn to a terminal outcome. The final score is
/// written to the scoreboard once, on entering game over.
pub struct GameSession<'a, R: Rng> {
    board: Board,
    snake: Snake,
    food: Position,
    phase: Phase,
    /// Set once the start-of-tick checks ran and input is still owed.
    tick_started: bool,
    scoreboard: &'a mut Scoreboard,
    rng: &'a mut R,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Spawns the snake at a random interior cell and places the first food.
    pub fn start(board: Board, scoreboard: &'a mut Scoreboard, rng: &'a mut R) -> Result<Self> {
        let snake = Snake::spawn(board.random_interior_position(rng));
        let food = board.place_food_avoiding_snake(&snake, rng)?;
        info!(head = ?snake.head(), ?food, "session started");
        Ok(Self::from_parts(board, snake, food, scoreboard, rng))
    }

    /// Builds a running session around an existing snake and food cell.
    pub fn from_parts(
        board: Board,
        snake: Snake,
        food: Position,
        scoreboard: &'a mut Scoreboard,
        rng: &'a mut R,
    ) -> Self {
        GameSession { board, snake, food, phase: Phase::Running, tick_started: false, scoreboard, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True while the snake moves on its own and input must be timed.
    pub fn is_realtime(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    pub fn is_exited(&self) -> bool {
        matches!(self.phase, Phase::Exited(_))
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::GameOver(outcome) | Phase::Exited(outcome) => outcome,
            Phase::Running | Phase::Paused(_) => Outcome::Ongoing,
        }
    }

    /// First half of a running tick: eat food under the head, then check
    /// for collisions. Returns true if this ended the game, in which case no
    /// input should be read for the tick. Does nothing outside Running or
    /// when already called for the current tick.
    pub fn start_tick(&mut self) -> Result<bool> {
        if !matches!(self.phase, Phase::Running) || self.tick_started {
            return Ok(false);
        }

        if self.snake.head() == self.food {
            self.snake.grow(self.food);
            self.food = self.board.place_food_avoiding_snake(&self.snake, self.rng)?;
            debug!(score = self.snake.score(), food = ?self.food, "food eaten");
        }

        // Self-collision wins if both fire on the same tick
        if self.snake.has_self_collision() {
            self.game_over(Outcome::AteSelf);
            return Ok(true);
        }
        if self.snake.has_wall_collision(&self.board) {
            self.game_over(Outcome::HitWall);
            return Ok(true);
        }

        self.tick_started = true;
        Ok(false)
    }

    /// Finishes the current tick with `key`. In Running this runs
    /// `start_tick` first unless the caller already did.
    pub fn tick(&mut self, key: Key) -> Result<()> {
        match &mut self.phase {
            Phase::Running => {
                if !self.start_tick()? {
                    self.apply_input(key);
                }
                self.tick_started = false;
            }
            Phase::Paused(menu) => {
                let next = match key {
                    Key::Up => {
                        menu.move_selection(-1);
                        None
                    }
                    Key::Down => {
                        menu.move_selection(1);
                        None
                    }
                    Key::Cancel => Some(PauseMenuItem::Resume),
                    Key::Confirm => Some(*menu.selected_item()),
                    _ => None,
                };

                match next {
                    Some(PauseMenuItem::Resume) => {
                        debug!("resumed");
                        self.phase = Phase::Running;
                    }
                    Some(PauseMenuItem::MainMenu) => self.game_over(Outcome::PlayerQuitToMenu),
                    Some(PauseMenuItem::Exit) => self.game_over(Outcome::PlayerQuitApp),
                    None => {}
                }
            }
            Phase::GameOver(outcome) => {
                let outcome = *outcome;
                if key != Key::None {
                    self.phase = Phase::Exited(outcome);
                }
            }
            Phase::Exited(_) => {}
        }

        Ok(())
    }

    fn apply_input(&mut self, key: Key) {
        if key == Key::Cancel {
            debug!("paused");
            self.phase = Phase::Paused(Menu::new(PauseMenuItem::ALL.to_vec(), self.pause_anchor()));
            return;
        }

        if let Some(dir) = key.direction() {
            self.snake.set_direction(dir);
        }
        self.snake.advance();
    }

    fn game_over(&mut self, outcome: Outcome) {
        let score = self.snake.score();
        self.scoreboard.record(score);
        info!(?outcome, score, "game over");
        self.phase = Phase::GameOver(outcome);
    }

    fn pause_anchor(&self) -> MenuAnchor {
        let row = self.board.header_row(PauseMenuItem::ALL.len());
        MenuAnchor::At(Position::new(row, self.board.left_border() + STATUS_WIDTH))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let phase = match &self.phase {
            Phase::Running => PhaseView::Running,
            Phase::Paused(menu) => PhaseView::Paused(menu.view()),
            Phase::GameOver(outcome) => PhaseView::GameOver {
                outcome: *outcome,
                message: outcome.message().to_string(),
                score: self.snake.score(),
            },
            Phase::Exited(outcome) => PhaseView::Exited(*outcome),
        };

        SessionSnapshot {
            board: self.board,
            segments: self.snake.segments().to_vec(),
            food: self.food,
            score: self.snake.score(),
            direction: self.snake.direction(),
            phase,
        }
    }
}
