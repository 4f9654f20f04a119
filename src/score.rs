//! Score and difficulty tracking.

use tracing::info;

use crate::entities::{GameLevel, ScoreBoard};

/// Bonus for shooting down an enemy bullet.
pub const ULTIMATE_BONUS: u32 = 200;

pub const NORMAL_THRESHOLD: u32 = 500;
pub const HARD_THRESHOLD: u32 = 1000;

/// Level a score qualifies for, ignoring the current level.
pub fn level_for_score(score: u32) -> GameLevel {
    if score >= HARD_THRESHOLD {
        GameLevel::Hard
    } else if score >= NORMAL_THRESHOLD {
        GameLevel::Normal
    } else {
        GameLevel::Easy
    }
}

impl ScoreBoard {
    /// Credit a kill and re-evaluate difficulty.  The level only ever rises.
    pub fn award(&mut self, points: u32, level: &mut GameLevel) {
        self.score = self.score.saturating_add(points);
        self.on_enemy_killed(level);
    }

    /// Record the highest score and promote the level if earned.
    pub fn on_enemy_killed(&mut self, level: &mut GameLevel) {
        if self.score > self.highest_score {
            self.highest_score = self.score;
        }

        let earned = level_for_score(self.score);
        if earned > *level {
            info!(from = ?*level, to = ?earned, score = self.score, "difficulty promoted");
            *level = earned;
        }
    }

    /// Player was hit.  Lives are binary, so this is always zero.
    pub fn lose_life(&mut self) {
        self.lives = 0;
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

/// Best finished-run scores of this process, highest first.
#[derive(Clone, Debug, Default)]
pub struct TopScores {
    entries: Vec<u32>,
}

impl TopScores {
    pub const CAPACITY: usize = 5;

    pub fn record(&mut self, score: u32) {
        self.entries.push(score);
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.truncate(Self::CAPACITY);
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }
}
