//! Core data model: geometry, entity lifecycle and the master game state.

use std::time::Duration;

use crate::actors::{Building, Enemy, Player};
use crate::render::{Canvas, Tint};

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Point2D { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Point2D { x: self.x + dx, y: self.y + dy }
    }
}

/// One occupied cell of an entity together with the glyph painted there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub coordinate: Point2D,
    pub symbol: char,
}

/// Cell offsets from an entity's origin, with the glyph for each cell.
pub type Sprite = &'static [(i32, i32, char)];

/// The ordered set of cells an entity currently occupies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    pixels: Vec<Pixel>,
}

impl Body {
    pub fn from_sprite(origin: Point2D, sprite: Sprite) -> Self {
        Body {
            pixels: sprite
                .iter()
                .map(|&(dx, dy, symbol)| Pixel { coordinate: origin.offset(dx, dy), symbol })
                .collect(),
        }
    }

    pub fn from_cells(cells: &[Point2D], symbol: char) -> Self {
        Body {
            pixels: cells.iter().map(|&coordinate| Pixel { coordinate, symbol }).collect(),
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.pixels.iter().map(|p| p.coordinate)
    }

    /// True when every cell satisfies `pred`.  An empty body is vacuously true.
    pub fn all(&self, pred: impl Fn(Point2D) -> bool) -> bool {
        self.coordinates().all(pred)
    }

    /// True when the two bodies have at least one identical coordinate.
    pub fn shares_cell(&self, other: &Body) -> bool {
        self.coordinates()
            .any(|a| other.coordinates().any(|b| a == b))
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityState {
    Strong,
    HalfDestroyed,
    Destroyed,
}

/// Ticks an entity spends in `HalfDestroyed` before it is retired.
pub const DESTRUCTION_TICKS: u8 = 3;

/// Debris glyph per remaining animation tick (index = ticks left - 1).
const DEBRIS: [char; DESTRUCTION_TICKS as usize] = ['.', '+', '*'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lifecycle {
    state: EntityState,
    ticks_left: u8,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::new(EntityState::Strong)
    }
}

impl Lifecycle {
    pub fn new(state: EntityState) -> Self {
        let ticks_left = match state {
            EntityState::HalfDestroyed => DESTRUCTION_TICKS,
            _ => 0,
        };
        Lifecycle { state, ticks_left }
    }

    pub fn state(&self) -> EntityState {
        self.state
    }

    /// Strong → HalfDestroyed.  Any other state is left alone.
    pub fn strike(&mut self) {
        if self.state == EntityState::Strong {
            self.state = EntityState::HalfDestroyed;
            self.ticks_left = DESTRUCTION_TICKS;
        }
    }

    /// Advance the destruction animation by one tick.
    pub fn advance(&mut self) {
        if self.state == EntityState::HalfDestroyed {
            self.ticks_left = self.ticks_left.saturating_sub(1);
            if self.ticks_left == 0 {
                self.state = EntityState::Destroyed;
            }
        }
    }

    pub fn debris(&self) -> char {
        let i = (self.ticks_left.max(1) - 1) as usize;
        DEBRIS[i.min(DEBRIS.len() - 1)]
    }
}

// ── Entity capability ─────────────────────────────────────────────────────────

/// Shared behaviour of every on-field object.
pub trait Entity {
    fn body(&self) -> &Body;
    fn lifecycle(&self) -> &Lifecycle;
    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    /// Per-tick velocity in whole cells.
    fn delta(&self) -> (i32, i32);

    /// Zero the velocity so a dying entity stays put.
    fn freeze(&mut self);

    /// Apply velocity and recompute the body.
    fn advance_position(&mut self);

    fn tint(&self) -> Tint;

    fn state(&self) -> EntityState {
        self.lifecycle().state()
    }

    fn is_strong(&self) -> bool {
        self.state() == EntityState::Strong
    }

    fn is_destroyed(&self) -> bool {
        self.state() == EntityState::Destroyed
    }

    fn hit(&mut self) {
        self.lifecycle_mut().strike();
        self.freeze();
    }

    fn clear(&mut self) {
        self.lifecycle_mut().advance();
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        match self.state() {
            EntityState::Strong => {
                let tint = self.tint();
                for p in self.body().pixels() {
                    canvas.put(p.coordinate.x, p.coordinate.y, p.symbol, tint);
                }
            }
            EntityState::HalfDestroyed => {
                let symbol = self.lifecycle().debris();
                for p in self.body().pixels() {
                    canvas.put(p.coordinate.x, p.coordinate.y, symbol, Tint::Debris);
                }
            }
            EntityState::Destroyed => {}
        }
    }
}

// ── Field, difficulty, status ─────────────────────────────────────────────────

/// The play area, in cells.  The info panel sits to its right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub play_width: i32,
    pub play_height: i32,
}

impl Field {
    pub fn new(play_width: i32, play_height: i32) -> Self {
        Field { play_width, play_height }
    }
}

/// Difficulty tier.  The discriminant doubles as the live enemy/building cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum GameLevel {
    Easy = 1,
    Normal = 2,
    Hard = 3,
}

impl GameLevel {
    pub fn cap(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            GameLevel::Easy => "EASY",
            GameLevel::Normal => "NORMAL",
            GameLevel::Hard => "HARD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Welcome,
    Idle,
    Play,
    Pause,
    GameOver,
    TopScores,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    /// Survives resets for the lifetime of the process.
    pub highest_score: u32,
    /// Binary: 1 while alive, 0 once hit.
    pub lives: u8,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        ScoreBoard { score: 0, highest_score: 0, lives: 1 }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the per-tick phases mutate.
#[derive(Clone, Debug)]
pub struct GameState {
    pub field: Field,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub buildings: Vec<Building>,
    pub scores: ScoreBoard,
    pub level: GameLevel,
    /// Play ticks since the last reset; drives the building cadence.
    pub counter: u64,
    /// Enemy bullets currently in flight across all enemies.
    pub bullets_engaged: u32,
    pub timer: Duration,
}

impl GameState {
    pub fn new(field: Field) -> Self {
        GameState {
            field,
            player: Player::spawn(),
            enemies: Vec::new(),
            buildings: Vec::new(),
            scores: ScoreBoard::default(),
            level: GameLevel::Easy,
            counter: 0,
            bullets_engaged: 0,
            timer: Duration::ZERO,
        }
    }

    /// Fresh run: empty collections, new player, Easy level.  The highest
    /// score is kept.
    pub fn reset(&mut self) {
        self.enemies.clear();
        self.buildings.clear();
        self.player = Player::spawn();
        self.scores.score = 0;
        self.scores.lives = 1;
        self.level = GameLevel::Easy;
        self.counter = 0;
        self.bullets_engaged = 0;
        self.timer = Duration::ZERO;
    }
}
