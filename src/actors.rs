//! Actors: the player's fighter, enemy aircraft and ground buildings.

use crate::entities::{Body, Entity, Field, Lifecycle, Point2D, Sprite};
use crate::projectiles::{Bomb, Bullet, BulletOwner};
use crate::render::Tint;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SPAWN: Point2D = Point2D::new(10, 5);
pub const MAX_PLAYER_BULLETS: usize = 4;
pub const MAX_PLAYER_BOMBS: usize = 2;

//   \
//   ==>
//   /
const FIGHTER_SPRITE: Sprite = &[
    (0, -1, '\\'),
    (0, 0, '='),
    (1, 0, '='),
    (2, 0, '>'),
    (0, 1, '/'),
];

#[derive(Clone, Debug)]
pub struct Player {
    origin: Point2D,
    body: Body,
    lifecycle: Lifecycle,
    /// Steering impulse for the next Move; reset afterwards.
    pub delta_x: i32,
    pub delta_y: i32,
    pub bullets: Vec<Bullet>,
    pub bombs: Vec<Bomb>,
}

impl Player {
    pub fn new(origin: Point2D) -> Self {
        Player {
            origin,
            body: Body::from_sprite(origin, FIGHTER_SPRITE),
            lifecycle: Lifecycle::default(),
            delta_x: 0,
            delta_y: 0,
            bullets: Vec::new(),
            bombs: Vec::new(),
        }
    }

    pub fn spawn() -> Self {
        Player::new(PLAYER_SPAWN)
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    /// Queue a one-cell move for the next tick.  Ignored once hit.
    pub fn steer(&mut self, dx: i32, dy: i32) {
        if self.is_strong() {
            self.delta_x = dx.signum();
            self.delta_y = dy.signum();
        }
    }

    /// Apply the queued impulse, keeping the whole sprite inside the field.
    pub fn move_within(&mut self, field: &Field) {
        let x = (self.origin.x + self.delta_x).clamp(0, (field.play_width - 3).max(0));
        let y = (self.origin.y + self.delta_y).clamp(1, (field.play_height - 2).max(1));
        self.delta_x = x - self.origin.x;
        self.delta_y = y - self.origin.y;
        self.advance_position();
        self.delta_x = 0;
        self.delta_y = 0;
    }

    /// Fire from the nose.  Returns false when capped or not alive.
    pub fn fire(&mut self) -> bool {
        if !self.is_strong() || self.bullets.len() >= MAX_PLAYER_BULLETS {
            return false;
        }
        self.bullets
            .push(Bullet::new(BulletOwner::Player, self.origin.offset(3, 0)));
        true
    }

    /// Release a bomb under the fuselage.  Returns false when capped or not alive.
    pub fn drop_bomb(&mut self) -> bool {
        if !self.is_strong() || self.bombs.len() >= MAX_PLAYER_BOMBS {
            return false;
        }
        self.bombs.push(Bomb::new(self.origin.offset(1, 1)));
        true
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn delta(&self) -> (i32, i32) {
        (self.delta_x, self.delta_y)
    }

    fn freeze(&mut self) {
        self.delta_x = 0;
        self.delta_y = 0;
    }

    fn advance_position(&mut self) {
        self.origin = self.origin.offset(self.delta_x, self.delta_y);
        self.body = Body::from_sprite(self.origin, FIGHTER_SPRITE);
    }

    fn tint(&self) -> Tint {
        Tint::Player
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Drone,
    Raider,
    Interceptor,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Drone, EnemyKind::Raider, EnemyKind::Interceptor];

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Drone => "drone",
            EnemyKind::Raider => "raider",
            EnemyKind::Interceptor => "interceptor",
        }
    }

    fn sprite(self) -> Sprite {
        match self {
            EnemyKind::Drone => &[(0, 0, '@')],
            EnemyKind::Raider => &[(0, 0, '<'), (1, 0, '#'), (2, 0, '=')],
            EnemyKind::Interceptor => &[(0, 0, '/'), (1, 0, '='), (0, 1, '\\'), (1, 1, '=')],
        }
    }

    fn delta_x(self) -> i32 {
        match self {
            EnemyKind::Drone | EnemyKind::Raider => -1,
            EnemyKind::Interceptor => -2,
        }
    }

    fn points(self) -> u32 {
        match self {
            EnemyKind::Drone => 50,
            EnemyKind::Raider => 100,
            EnemyKind::Interceptor => 150,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub kind: EnemyKind,
    origin: Point2D,
    body: Body,
    lifecycle: Lifecycle,
    pub delta_x: i32,
    pub delta_y: i32,
    pub shooting_enabled: bool,
    pub bullets: Vec<Bullet>,
}

impl Enemy {
    pub fn new(kind: EnemyKind, origin: Point2D) -> Self {
        Enemy {
            kind,
            origin,
            body: Body::from_sprite(origin, kind.sprite()),
            lifecycle: Lifecycle::default(),
            delta_x: kind.delta_x(),
            delta_y: 0,
            shooting_enabled: true,
            bullets: Vec::new(),
        }
    }

    pub fn drone(origin: Point2D) -> Self {
        Enemy::new(EnemyKind::Drone, origin)
    }

    pub fn raider(origin: Point2D) -> Self {
        Enemy::new(EnemyKind::Raider, origin)
    }

    pub fn interceptor(origin: Point2D) -> Self {
        Enemy::new(EnemyKind::Interceptor, origin)
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    pub fn points_gain_on_die(&self) -> u32 {
        self.kind.points()
    }

    pub fn is_off_field(&self) -> bool {
        self.body.all(|p| p.x < 0)
    }

    /// Every remaining bullet has flown past the left edge.
    pub fn bullets_gone(&self) -> bool {
        self.bullets.iter().all(|b| b.body().all(|p| p.x < 0))
    }

    /// Alive, armed and visible on the field.
    pub fn can_fire(&self, field: &Field) -> bool {
        self.is_strong()
            && self.shooting_enabled
            && (0..field.play_width).contains(&self.origin.x)
    }

    pub fn fire(&mut self) {
        self.bullets
            .push(Bullet::new(BulletOwner::Enemy, self.origin.offset(-1, 0)));
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn delta(&self) -> (i32, i32) {
        (self.delta_x, self.delta_y)
    }

    fn freeze(&mut self) {
        self.delta_x = 0;
        self.delta_y = 0;
    }

    fn hit(&mut self) {
        self.lifecycle.strike();
        self.freeze();
        self.shooting_enabled = false;
    }

    fn advance_position(&mut self) {
        self.origin = self.origin.offset(self.delta_x, self.delta_y);
        self.body = Body::from_sprite(self.origin, self.kind.sprite());
    }

    fn tint(&self) -> Tint {
        Tint::Enemy
    }
}

// ── Buildings ─────────────────────────────────────────────────────────────────

/// Scroll speed shared by every building, in cells per tick.
pub const BUILDING_DELTA_X: f32 = -0.5;

/// Whole cells a building may cover in one tick.
pub fn building_sweep() -> i32 {
    BUILDING_DELTA_X.abs().ceil() as i32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildingKind {
    Tower,
    Block,
    Hangar,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 3] = [
        BuildingKind::Tower,
        BuildingKind::Block,
        BuildingKind::Hangar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingKind::Tower => "tower",
            BuildingKind::Block => "block",
            BuildingKind::Hangar => "hangar",
        }
    }

    /// (width, height) in cells.
    fn size(self) -> (i32, i32) {
        match self {
            BuildingKind::Tower => (3, 6),
            BuildingKind::Block => (5, 4),
            BuildingKind::Hangar => (7, 3),
        }
    }

    fn glyph(self) -> char {
        match self {
            BuildingKind::Tower => '#',
            BuildingKind::Block => '%',
            BuildingKind::Hangar => '=',
        }
    }

    fn points(self) -> u32 {
        match self {
            BuildingKind::Tower => 60,
            BuildingKind::Block => 40,
            BuildingKind::Hangar => 30,
        }
    }
}

/// A ground target standing on `base_y` and growing upward.
#[derive(Clone, Debug)]
pub struct Building {
    pub kind: BuildingKind,
    /// Fractional column of the left wall; buildings scroll slower than one cell per tick.
    x: f32,
    base_y: i32,
    body: Body,
    lifecycle: Lifecycle,
}

impl Building {
    pub fn new(kind: BuildingKind, origin: Point2D) -> Self {
        let x = origin.x as f32;
        Building {
            kind,
            x,
            base_y: origin.y,
            body: Building::shape(kind, origin),
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn tower(origin: Point2D) -> Self {
        Building::new(BuildingKind::Tower, origin)
    }

    pub fn block(origin: Point2D) -> Self {
        Building::new(BuildingKind::Block, origin)
    }

    pub fn hangar(origin: Point2D) -> Self {
        Building::new(BuildingKind::Hangar, origin)
    }

    fn shape(kind: BuildingKind, origin: Point2D) -> Body {
        let (width, height) = kind.size();
        let cells: Vec<Point2D> = (0..height)
            .flat_map(|row| (0..width).map(move |col| origin.offset(col, -row)))
            .collect();
        Body::from_cells(&cells, kind.glyph())
    }

    /// Bottom-left cell.
    pub fn origin(&self) -> Point2D {
        Point2D::new(self.x.floor() as i32, self.base_y)
    }

    pub fn height(&self) -> i32 {
        self.kind.size().1
    }

    pub fn points_gain_on_destroy(&self) -> u32 {
        self.kind.points()
    }

    pub fn is_off_field(&self) -> bool {
        self.body.all(|p| p.x < 0)
    }
}

impl Entity for Building {
    fn body(&self) -> &Body {
        &self.body
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    /// Buildings share one fractional speed; reported rounded away from zero.
    fn delta(&self) -> (i32, i32) {
        (-building_sweep(), 0)
    }

    fn freeze(&mut self) {}

    fn advance_position(&mut self) {
        self.x += BUILDING_DELTA_X;
        self.body = Building::shape(self.kind, self.origin());
    }

    fn tint(&self) -> Tint {
        Tint::Building
    }
}
