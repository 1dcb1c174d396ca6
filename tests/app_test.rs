mod common;

use std::time::{Duration, Instant};

use common::{fast_config, RecordingRenderer, ScriptedInput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use snake::app::App;
use snake::board::Board;
use snake::input::Key;
use snake::render::Screen;
use snake::session::{Outcome, PhaseView};

fn game_overs(screens: &[Screen]) -> Vec<Outcome> {
    screens
        .iter()
        .filter_map(|s| match s {
            Screen::Session(snap) => match snap.phase {
                PhaseView::GameOver { outcome, .. } => Some(outcome),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[test]
fn test_exit_from_main_menu() {
    let input = ScriptedInput::new(&[Key::Down, Key::Down, Key::Down, Key::Confirm]);
    let mut app = App::new(input, RecordingRenderer::new(20, 30), fast_config(1));
    app.run().unwrap();

    assert!(app.scoreboard().is_empty());
    match app.renderer().screens.last() {
        Some(Screen::MainMenu(menu)) => assert_eq!(menu.selected, 2),
        other => panic!("expected main menu, got {other:?}"),
    }
}

#[test]
fn test_empty_scoreboard_screen() {
    let keys = [Key::Down, Key::Confirm, Key::Confirm, Key::Cancel];
    let mut app = App::new(ScriptedInput::new(&keys), RecordingRenderer::new(20, 30), fast_config(2));
    app.run().unwrap();

    assert!(app.renderer().screens.contains(&Screen::Scores(vec![])));
}

#[test]
fn test_exit_app_from_pause_menu() {
    let keys = [
        Key::Confirm, // Play
        Key::Cancel,  // pause
        Key::Down,
        Key::Down,
        Key::Confirm, // Exit
        Key::Confirm, // acknowledge
    ];
    let mut app = App::new(ScriptedInput::new(&keys), RecordingRenderer::new(20, 30), fast_config(3));
    app.run().unwrap();

    assert_eq!(app.scoreboard().history(), &[0]);
    assert_eq!(game_overs(&app.renderer().screens).last(), Some(&Outcome::PlayerQuitApp));
}

#[test]
fn test_back_to_menu_then_scoreboard() {
    let keys = [
        Key::Confirm, // Play
        Key::Cancel,  // pause
        Key::Down,
        Key::Confirm, // Main menu
        Key::Cancel,  // acknowledge
        Key::Down,
        Key::Confirm, // Scoreboard
        Key::Up,      // any key
        Key::Down,
        Key::Confirm, // Exit
    ];
    let mut app = App::new(ScriptedInput::new(&keys), RecordingRenderer::new(20, 30), fast_config(4));
    app.run().unwrap();

    assert!(app.renderer().screens.contains(&Screen::Scores(vec![0])));
    assert_eq!(game_overs(&app.renderer().screens).last(), Some(&Outcome::PlayerQuitToMenu));
}

#[test]
fn test_running_into_the_wall() {
    let mut keys = vec![Key::Confirm];
    keys.extend([Key::Up; 20]);
    keys.extend([Key::Down, Key::Down, Key::Confirm]);

    let mut app = App::new(ScriptedInput::new(&keys), RecordingRenderer::new(20, 30), fast_config(5));
    app.run().unwrap();

    assert_eq!(app.scoreboard().len(), 1);
    assert_eq!(game_overs(&app.renderer().screens).last(), Some(&Outcome::HitWall));
}

#[test]
fn test_script_running_dry_is_an_error() {
    let mut app = App::new(ScriptedInput::new(&[Key::Down]), RecordingRenderer::new(20, 30), fast_config(6));
    assert!(app.run().is_err());
}

#[test]
fn test_wall_hit_is_acknowledged_by_the_next_key() {
    let seed = 21;
    let config = fast_config(seed);

    // The session draws its spawn cell first from the seeded rng
    let board = Board::new(20, 30, &config.board).unwrap();
    let spawn = board.random_interior_position(&mut StdRng::seed_from_u64(seed));
    let steps_to_border = (spawn.row - board.upper_border()) as usize;

    let mut keys = vec![Key::Confirm];
    keys.extend(std::iter::repeat(Key::Up).take(steps_to_border));
    keys.extend([Key::Confirm, Key::Down, Key::Down, Key::Confirm]);

    let mut app = App::new(ScriptedInput::new(&keys), RecordingRenderer::new(20, 30), config);
    app.run().unwrap();

    assert_eq!(app.scoreboard().len(), 1);
    assert_eq!(game_overs(&app.renderer().screens).last(), Some(&Outcome::HitWall));
    match app.renderer().screens.last() {
        Some(Screen::MainMenu(menu)) => assert_eq!(menu.selected, 2),
        other => panic!("expected main menu, got {other:?}"),
    }
}

#[test]
fn test_play_keeps_tick_period() {
    let tick = Duration::from_millis(30);
    let config = snake::config::GameConfig { tick, ..fast_config(7) };
    let keys = [
        Key::Confirm, // Play
        Key::None,
        Key::None,
        Key::None,
        Key::Cancel, // pause
        Key::Down,
        Key::Down,
        Key::Confirm, // Exit
        Key::Confirm, // acknowledge
    ];
    let mut app = App::new(ScriptedInput::new(&keys), RecordingRenderer::new(20, 30), config);

    let started = Instant::now();
    app.run().unwrap();

    // Four timed reads that return at once, each padded out to a full tick
    assert!(started.elapsed() >= tick * 4);
    assert_eq!(app.scoreboard().history(), &[0]);
}
