//! The orchestrator: owns the game state, the screen buffer and the status
//! state machine, and dispatches one phase per loop iteration.
//!
//! ```text
//! Welcome → Idle → Play ⇄ Pause → Idle
//!                  Play → GameOver → Idle → Welcome
//! ```

use rand::Rng;
use tracing::info;

use crate::compute::{self, TickOutcome};
use crate::config::{GameConfig, INFO_PANEL_WIDTH};
use crate::entities::{Entity, GameState, GameStatus};
use crate::error::GameError;
use crate::render::ScreenBuffer;
use crate::score::TopScores;
use crate::screens::{self, InfoPanel};
use crate::spawner::Spawner;

/// Discrete input the engine understands.  The terminal layer maps keys onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Bomb,
    Pause,
    Confirm,
    TopScores,
}

pub struct Engine<R: Rng> {
    config: GameConfig,
    state: GameState,
    status: GameStatus,
    spawner: Spawner,
    rng: R,
    screen: ScreenBuffer,
    game_counter: u32,
    top_scores: TopScores,
}

impl<R: Rng> Engine<R> {
    /// Validate the config and build the variant registries.  Any failure here
    /// is fatal; nothing can fail once the loop runs.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let spawner = Spawner::from_config(&config)?;
        let (width, height) = config.screen_size();

        Ok(Engine {
            state: GameState::new(config.field()),
            status: GameStatus::Welcome,
            spawner,
            rng,
            screen: ScreenBuffer::new(width, height),
            game_counter: 0,
            top_scores: TopScores::default(),
            config,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn game_counter(&self) -> u32 {
        self.game_counter
    }

    pub fn top_scores(&self) -> &TopScores {
        &self.top_scores
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, command: Command) {
        match self.status {
            GameStatus::Play => match command {
                Command::Pause => self.set_status(GameStatus::Pause),
                Command::Up => self.state.player.steer(0, -1),
                Command::Down => self.state.player.steer(0, 1),
                Command::Left => self.state.player.steer(-1, 0),
                Command::Right => self.state.player.steer(1, 0),
                Command::Fire => {
                    self.state.player.fire();
                }
                Command::Bomb => {
                    self.state.player.drop_bomb();
                }
                Command::Confirm | Command::TopScores => {}
            },
            GameStatus::Idle => match command {
                Command::Confirm if self.run_finished() => self.set_status(GameStatus::Welcome),
                Command::Confirm => self.set_status(GameStatus::Play),
                Command::TopScores => self.set_status(GameStatus::TopScores),
                _ => {}
            },
            // One-shot states resolve on the next step.
            _ => {}
        }
    }

    fn run_finished(&self) -> bool {
        self.state.player.is_destroyed()
    }

    // ── Dispatch ──────────────────────────────────────────────────────────────

    /// Run whatever the current status calls for.  Returns the tick outcome
    /// when a Play tick ran.
    pub fn step(&mut self) -> Option<TickOutcome> {
        match self.status {
            GameStatus::Welcome => {
                self.welcome();
                None
            }
            GameStatus::Play => Some(self.play()),
            GameStatus::Pause => {
                screens::draw_pause(&mut self.screen, &self.state.field);
                self.set_status(GameStatus::Idle);
                None
            }
            GameStatus::GameOver => {
                self.game_over();
                None
            }
            GameStatus::TopScores => {
                screens::draw_top_scores(&mut self.screen, &self.state.field, &self.top_scores);
                self.set_status(GameStatus::Idle);
                None
            }
            GameStatus::Idle => None,
        }
    }

    fn welcome(&mut self) {
        self.screen.clear();
        self.state.reset();
        self.game_counter += 1;
        self.draw_info();
        screens::draw_welcome(&mut self.screen, &self.state.field);
        self.set_status(GameStatus::Idle);
    }

    fn play(&mut self) -> TickOutcome {
        let outcome = compute::tick(
            &mut self.state,
            &self.spawner,
            &mut self.rng,
            &mut self.screen,
            self.config.tick,
        );
        self.draw_info();

        if outcome.player_destroyed {
            info!(
                score = self.state.scores.score,
                level = ?self.state.level,
                ticks = self.state.counter,
                "game over"
            );
            self.set_status(GameStatus::GameOver);
        }
        outcome
    }

    fn game_over(&mut self) {
        let scores = self.state.scores.clone();
        self.top_scores.record(scores.score);

        if scores.highest_score <= scores.score {
            screens::draw_high_score(&mut self.screen, &self.state.field, scores.score);
        }
        screens::draw_game_over(
            &mut self.screen,
            &self.state.field,
            scores.score,
            scores.highest_score,
        );
        self.set_status(GameStatus::Idle);
    }

    fn draw_info(&mut self) {
        let info = InfoPanel::from_state(&self.state, self.game_counter);
        screens::draw_info(
            &mut self.screen,
            &self.state.field,
            &info,
            INFO_PANEL_WIDTH as i32,
        );
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            info!(from = ?self.status, to = ?status, "status changed");
            self.status = status;
        }
    }
}
