use thunder_fighter::config::GameConfig;
use thunder_fighter::engine::{Command, Engine};
use thunder_fighter::entities::*;
use thunder_fighter::error::GameError;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_engine() -> Engine<StdRng> {
    Engine::new(GameConfig::default(), StdRng::seed_from_u64(42)).expect("default config is valid")
}

fn screen_contains(engine: &Engine<StdRng>, needle: &str) -> bool {
    let screen = engine.screen();
    (0..screen.height() as i32).any(|y| screen.row_text(y).contains(needle))
}

/// Welcome → Idle → Play.
fn start_run(engine: &mut Engine<StdRng>) {
    engine.step();
    engine.handle_input(Command::Confirm);
}

#[test]
fn starts_on_welcome_and_settles_into_idle() {
    let mut engine = make_engine();
    assert_eq!(engine.status(), GameStatus::Welcome);
    assert_eq!(engine.screen().width(), 94);

    assert!(engine.step().is_none());

    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.game_counter(), 1);
    assert!(screen_contains(&engine, "ENTER - Start"));
}

#[test]
fn idle_does_nothing_until_confirmed() {
    let mut engine = make_engine();
    engine.step();
    engine.handle_input(Command::Right);
    engine.handle_input(Command::Fire);

    assert!(engine.step().is_none());
    assert_eq!(engine.status(), GameStatus::Idle);
    assert!(engine.state().player.bullets.is_empty());
    assert_eq!(engine.state().counter, 0);
}

#[test]
fn play_runs_ticks_and_takes_input() {
    let mut engine = make_engine();
    start_run(&mut engine);
    assert_eq!(engine.status(), GameStatus::Play);

    engine.handle_input(Command::Right);
    engine.handle_input(Command::Fire);
    let outcome = engine.step().expect("a tick ran");

    assert!(!outcome.player_destroyed);
    assert_eq!(engine.state().counter, 1);
    assert_eq!(engine.state().player.origin(), Point2D::new(11, 5));
    assert_eq!(engine.state().player.bullets.len(), 1);
    assert!(screen_contains(&engine, "THUNDER FIGHTER"));
}

#[test]
fn pause_and_resume() {
    let mut engine = make_engine();
    start_run(&mut engine);
    engine.step();

    engine.handle_input(Command::Pause);
    assert_eq!(engine.status(), GameStatus::Pause);
    engine.step();
    assert_eq!(engine.status(), GameStatus::Idle);
    assert!(screen_contains(&engine, "PAUSED"));

    // No ticks while idle.
    engine.step();
    assert_eq!(engine.state().counter, 1);

    engine.handle_input(Command::Confirm);
    assert_eq!(engine.status(), GameStatus::Play);
    engine.step();
    assert_eq!(engine.state().counter, 2);
}

#[test]
fn full_run_back_to_welcome() {
    let mut engine = make_engine();
    start_run(&mut engine);
    engine.step();

    engine.state_mut().scores.score = 350;
    engine.state_mut().scores.highest_score = 700;
    engine.state_mut().player.hit();
    for _ in 0..DESTRUCTION_TICKS {
        engine.step();
    }
    assert_eq!(engine.status(), GameStatus::GameOver);

    engine.step();
    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.top_scores().entries(), &[350]);
    assert!(screen_contains(&engine, "GAME  OVER"));
    assert!(!screen_contains(&engine, "NEW HIGH SCORE"));

    // The run is over, so Enter goes back to the menu.
    engine.handle_input(Command::Confirm);
    assert_eq!(engine.status(), GameStatus::Welcome);
    engine.step();

    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.game_counter(), 2);
    let state = engine.state();
    assert!(state.player.is_strong());
    assert!(state.enemies.is_empty());
    assert_eq!(state.scores, ScoreBoard { score: 0, highest_score: 700, lives: 1 });
    assert_eq!(state.level, GameLevel::Easy);
}

#[test]
fn record_run_shows_high_score_banner() {
    let mut engine = make_engine();
    start_run(&mut engine);

    engine.state_mut().scores.score = 900;
    engine.state_mut().scores.highest_score = 900;
    engine.state_mut().player.hit();
    while engine.status() == GameStatus::Play {
        engine.step();
    }
    engine.step();

    assert!(screen_contains(&engine, "NEW HIGH SCORE"));
    assert!(screen_contains(&engine, "GAME  OVER"));
}

#[test]
fn top_scores_screen_from_idle() {
    let mut engine = make_engine();
    engine.step();

    engine.handle_input(Command::TopScores);
    assert_eq!(engine.status(), GameStatus::TopScores);
    engine.step();

    assert_eq!(engine.status(), GameStatus::Idle);
    assert!(screen_contains(&engine, "TOP SCORES"));
}

#[test]
fn pause_ignored_outside_play() {
    let mut engine = make_engine();
    engine.step();
    engine.handle_input(Command::Pause);
    assert_eq!(engine.status(), GameStatus::Idle);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig { play_width: 10, ..GameConfig::default() };
    let err = Engine::new(config, StdRng::seed_from_u64(1)).err().expect("too narrow");
    assert!(matches!(err, GameError::InvalidConfig { field: "play_width", .. }));

    let config = GameConfig { play_width: u16::MAX, ..GameConfig::default() };
    let err = Engine::new(config, StdRng::seed_from_u64(1)).err().expect("too wide");
    assert!(matches!(err, GameError::InvalidConfig { field: "play_width", .. }));

    let config = GameConfig { enemies: vec!["zeppelin".to_string()], ..GameConfig::default() };
    let err = Engine::new(config, StdRng::seed_from_u64(1)).err().expect("unknown enemy");
    assert_eq!(
        err,
        GameError::UnknownVariant { category: "enemy", name: "zeppelin".to_string() }
    );
}
