use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::board::Board;
use crate::error;
use crate::input::{InputSource, Key};
use crate::menu::{MenuAnchor, MenuView};
use crate::render::{Renderer, Screen};
use crate::session::{PhaseView, SessionSnapshot};
use crate::snake::Direction;
use crate::Position;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    pub const PLAIN: Style = Style { fg: Color::Reset, bg: Color::Reset };
    pub const HIGHLIGHT: Style = Style { fg: Color::Black, bg: Color::White };
    pub const SNAKE: Style = Style { fg: Color::White, bg: Color::Reset };
    pub const FOOD: Style = Style { fg: Color::Red, bg: Color::Reset };
    pub const BORDER: Style = Style { fg: Color::Blue, bg: Color::Reset };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

const BLANK: Cell = Cell { ch: ' ', style: Style::PLAIN };

/// Off-screen character buffer. A frame is painted here first, then only the
/// cells that differ from the previous frame are sent to the terminal.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas { width, height, cells: vec![BLANK; width as usize * height as usize] }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Out-of-screen writes are dropped.
    pub fn put(&mut self, pos: Position, ch: char, style: Style) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn put_str(&mut self, pos: Position, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(Position::new(pos.row, pos.col + i as i32), ch, style);
        }
    }

    /// Text of one row with trailing blanks removed.
    pub fn row_text(&self, row: u16) -> String {
        let start = row as usize * self.width as usize;
        let line: String = self.cells[start..start + self.width as usize].iter().map(|c| c.ch).collect();
        line.trim_end().to_string()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let in_bounds = pos.row >= 0
            && pos.col >= 0
            && pos.row < self.height as i32
            && pos.col < self.width as i32;
        in_bounds.then(|| pos.row as usize * self.width as usize + pos.col as usize)
    }
}

pub fn paint(canvas: &mut Canvas, screen: &Screen) {
    match screen {
        Screen::MainMenu(menu) => paint_main_menu(canvas, menu),
        Screen::Scores(scores) => paint_scores(canvas, scores),
        Screen::Session(snapshot) => paint_session(canvas, snapshot),
    }
}

fn paint_main_menu(canvas: &mut Canvas, menu: &MenuView) {
    let center_row = canvas.height() as i32 / 2;
    paint_centered_line(canvas, center_row - 2, "SNAKE", Style::SNAKE);
    paint_menu(canvas, menu);

    let hint_row = center_row + menu.items.len() as i32 + 1;
    paint_centered_line(canvas, hint_row, "Arrows/WASD move, Enter selects, Esc pauses", Style::PLAIN);
}

fn paint_scores(canvas: &mut Canvas, scores: &[u32]) {
    let mut lines = vec!["Scoreboard".to_string(), String::new()];
    if scores.is_empty() {
        lines.push("No games played yet".to_string());
    } else {
        let room = (canvas.height() as usize).saturating_sub(6).max(1);
        lines.extend(scores.iter().take(room).enumerate().map(|(i, s)| format!("{:>2}. {}", i + 1, s)));
    }
    lines.push(String::new());
    lines.push("Press any key to return".to_string());

    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    paint_message(canvas, &lines);
}

fn paint_session(canvas: &mut Canvas, snapshot: &SessionSnapshot) {
    let board = &snapshot.board;
    paint_borders(canvas, board);

    let status = format!("Score: {}", snapshot.score);
    canvas.put_str(Position::new(board.header_row(1), board.left_border() + 1), &status, Style::PLAIN);

    canvas.put(snapshot.food, FOOD_CHAR, Style::FOOD);

    // Tail first so the head ends up on top when segments overlap
    for pos in snapshot.segments.iter().skip(1).rev() {
        canvas.put(*pos, SNAKE_BODY_CHAR, Style::SNAKE);
    }
    if let Some(head) = snapshot.segments.first() {
        canvas.put(*head, head_char(snapshot.direction), Style::SNAKE);
    }

    match &snapshot.phase {
        PhaseView::Paused(menu) => paint_menu(canvas, menu),
        PhaseView::GameOver { message, score, .. } => {
            let score_line = format!("Score: {}", score);
            paint_message(canvas, &[message.as_str(), score_line.as_str(), "", "Press any key to continue"]);
        }
        PhaseView::Running | PhaseView::Exited(_) => {}
    }
}

fn paint_borders(canvas: &mut Canvas, board: &Board) {
    let (top, bottom) = (board.upper_border(), board.lower_border());
    let (left, right) = (board.left_border(), board.right_border());

    for col in left..=right {
        let ch = if col == left || col == right { '+' } else { '-' };
        canvas.put(Position::new(top, col), ch, Style::BORDER);
        canvas.put(Position::new(bottom, col), ch, Style::BORDER);
    }

    for row in top + 1..bottom {
        canvas.put(Position::new(row, left), '|', Style::BORDER);
        canvas.put(Position::new(row, right), '|', Style::BORDER);
    }
}

fn paint_menu(canvas: &mut Canvas, menu: &MenuView) {
    for (i, label) in menu.items.iter().enumerate() {
        let pos = match menu.anchor {
            MenuAnchor::Center => Position::new(
                canvas.height() as i32 / 2 + i as i32,
                canvas.width() as i32 / 2 - label.chars().count() as i32 / 2,
            ),
            MenuAnchor::At(anchor) => Position::new(anchor.row + i as i32, anchor.col),
        };
        let style = if i == menu.selected { Style::HIGHLIGHT } else { Style::PLAIN };
        canvas.put_str(pos, label, style);
    }
}

/// Centered box with a blank line above and below the text.
fn paint_message(canvas: &mut Canvas, lines: &[&str]) {
    let msg_height = lines.len() as i32 + 2;
    let msg_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32 + 2;
    let top = canvas.height() as i32 / 2 - msg_height / 2;
    let left = canvas.width() as i32 / 2 - msg_width / 2;

    let blank = " ".repeat(msg_width as usize);
    canvas.put_str(Position::new(top, left), &blank, Style::PLAIN);
    canvas.put_str(Position::new(top + msg_height - 1, left), &blank, Style::PLAIN);

    for (i, line) in lines.iter().enumerate() {
        let padded = format!("{line: ^width$}", line = line, width = msg_width as usize);
        canvas.put_str(Position::new(top + 1 + i as i32, left), &padded, Style::PLAIN);
    }
}

fn paint_centered_line(canvas: &mut Canvas, row: i32, text: &str, style: Style) {
    let col = canvas.width() as i32 / 2 - text.chars().count() as i32 / 2;
    canvas.put_str(Position::new(row, col), text, style);
}

fn head_char(direction: Option<Direction>) -> char {
    match direction {
        Some(Direction::Up) => '^',
        Some(Direction::Down) => 'v',
        Some(Direction::Left) => '<',
        Some(Direction::Right) => '>',
        None => '@',
    }
}

/// Raw mode plus alternate screen for as long as it lives. Whatever was
/// switched on is switched off again on drop, also when setup fails halfway.
pub struct TermGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl TermGuard<Stdout> {
    pub fn setup() -> error::Result<Self> {
        Self::setup_with(stdout(), terminal::enable_raw_mode)
    }
}

impl<W: Write> TermGuard<W> {
    fn setup_with(mut out: W, enable_raw_mode: impl FnOnce() -> io::Result<()>) -> error::Result<Self> {
        execute!(out, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)?;
        let mut guard = TermGuard { out, raw_mode: false };

        enable_raw_mode()?;
        guard.raw_mode = true;
        Ok(guard)
    }
}

impl<W: Write> Drop for TermGuard<W> {
    fn drop(&mut self) {
        // Nothing sensible to do if restoring fails on the way out
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
        let _ = execute!(self.out, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen);
    }
}

pub struct TermRenderer {
    stdout: Stdout,
    front: Option<Canvas>,
}

impl TermRenderer {
    pub fn new() -> Self {
        TermRenderer { stdout: stdout(), front: None }
    }

    fn present(&mut self, canvas: Canvas) -> Result<()> {
        let front = self
            .front
            .as_ref()
            .filter(|f| f.width() == canvas.width() && f.height() == canvas.height());

        if front.is_none() {
            queue!(self.stdout, ResetColor, terminal::Clear(ClearType::All))?;
        }

        let mut current_style = None;
        for (i, cell) in canvas.cells.iter().enumerate() {
            let previous = front.map_or(BLANK, |f| f.cells[i]);
            if *cell == previous {
                continue;
            }

            let x = (i % canvas.width() as usize) as u16;
            let y = (i / canvas.width() as usize) as u16;
            queue!(self.stdout, cursor::MoveTo(x, y))?;
            if current_style != Some(cell.style) {
                queue!(self.stdout, SetForegroundColor(cell.style.fg), SetBackgroundColor(cell.style.bg))?;
                current_style = Some(cell.style);
            }
            queue!(self.stdout, Print(cell.ch))?;
        }

        queue!(self.stdout, ResetColor)?;
        self.stdout.flush()?;
        self.front = Some(canvas);
        Ok(())
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermRenderer {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        let (width, height) = terminal::size()?;
        let mut canvas = Canvas::new(width, height);
        paint(&mut canvas, screen);
        self.present(canvas)
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (width, height) = terminal::size()?;
        Ok((height, width))
    }
}

pub struct TermInput;

impl TermInput {
    /// Drops whatever piled up since the last read.
    fn discard_pending(&self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }
}

impl InputSource for TermInput {
    fn poll_key(&mut self, timeout: Duration) -> Result<Key> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(Key::None);
            }

            if let Event::Key(ev) = event::read()? {
                if let Some(key) = map_key(&ev) {
                    self.discard_pending()?;
                    return Ok(key);
                }
            }
        }
    }

    fn wait_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(ev) = event::read()? {
                if let Some(key) = map_key(&ev) {
                    return Ok(key);
                }
            }
        }
    }
}

/// `None` for events the game does not react to.
pub fn map_key(ev: &KeyEvent) -> Option<Key> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }

    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(ev.code, KeyCode::Char('c')).then_some(Key::Cancel);
    }

    let key = match ev.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Confirm,
        KeyCode::Esc => Key::Cancel,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Key::Up,
            's' => Key::Down,
            'a' => Key::Left,
            'd' => Key::Right,
            ' ' => Key::Confirm,
            'q' => Key::Cancel,
            _ => return None,
        },
        _ => return None,
    };

    Some(key)
}
