//! Startup configuration.  Everything here is checked once before the loop
//! starts; nothing is re-read mid-game.

use std::time::Duration;

use crate::actors::{BuildingKind, EnemyKind};
use crate::entities::Field;
use crate::error::GameError;

/// Columns reserved to the right of the play area for the info panel.
pub const INFO_PANEL_WIDTH: u16 = 24;

pub const MIN_PLAY_WIDTH: u16 = 30;
/// Enemies spawn in rows [2, height - 10), which must not be empty.
pub const MIN_PLAY_HEIGHT: u16 = 14;

pub const MAX_PLAY_WIDTH: u16 = 500;
pub const MAX_PLAY_HEIGHT: u16 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub play_width: u16,
    pub play_height: u16,
    /// Fixed delay between loop iterations.
    pub tick: Duration,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Enabled enemy variants, by name.
    pub enemies: Vec<String>,
    /// Enabled building variants, by name.
    pub buildings: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            play_width: 70,
            play_height: 24,
            tick: Duration::from_millis(50),
            seed: None,
            enemies: EnemyKind::ALL.iter().map(|k| k.name().to_string()).collect(),
            buildings: BuildingKind::ALL.iter().map(|k| k.name().to_string()).collect(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        check_range("play_width", self.play_width, MIN_PLAY_WIDTH, MAX_PLAY_WIDTH)?;
        check_range("play_height", self.play_height, MIN_PLAY_HEIGHT, MAX_PLAY_HEIGHT)?;
        if self.tick.is_zero() {
            return Err(GameError::InvalidConfig {
                field: "tick",
                reason: "tick delay must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.play_width as i32, self.play_height as i32)
    }

    /// Terminal cells needed for the play area plus the info panel.
    /// Saturates for configs that never went through `validate`.
    pub fn screen_size(&self) -> (u16, u16) {
        (self.play_width.saturating_add(INFO_PANEL_WIDTH), self.play_height)
    }
}

fn check_range(field: &'static str, value: u16, min: u16, max: u16) -> Result<(), GameError> {
    if value < min {
        return Err(GameError::InvalidConfig {
            field,
            reason: format!("{value} is below the minimum of {min}"),
        });
    }
    if value > max {
        return Err(GameError::InvalidConfig {
            field,
            reason: format!("{value} is above the maximum of {max}"),
        });
    }
    Ok(())
}
