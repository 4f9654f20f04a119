//! Bullets and bombs.  Each lives in exactly one owner's list.

use crate::entities::{Body, Entity, Field, Lifecycle, Point2D, Sprite};
use crate::render::Tint;

pub const PLAYER_BULLET_DELTA_X: i32 = 2;
pub const ENEMY_BULLET_DELTA_X: i32 = -2;
pub const BOMB_DELTA: (i32, i32) = (1, 1);

const PLAYER_BULLET_SPRITE: Sprite = &[(0, 0, '-')];
const ENEMY_BULLET_SPRITE: Sprite = &[(0, 0, '~')];
const BOMB_SPRITE: Sprite = &[(0, 0, 'o')];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub owner: BulletOwner,
    origin: Point2D,
    body: Body,
    lifecycle: Lifecycle,
    pub delta_x: i32,
    pub delta_y: i32,
}

impl Bullet {
    pub fn new(owner: BulletOwner, origin: Point2D) -> Self {
        let delta_x = match owner {
            BulletOwner::Player => PLAYER_BULLET_DELTA_X,
            BulletOwner::Enemy => ENEMY_BULLET_DELTA_X,
        };
        Bullet::with_delta(owner, origin, delta_x)
    }

    /// Bullet with an explicit horizontal speed.
    pub fn with_delta(owner: BulletOwner, origin: Point2D, delta_x: i32) -> Self {
        let body = Body::from_sprite(origin, Bullet::sprite(owner));
        Bullet {
            owner,
            origin,
            body,
            lifecycle: Lifecycle::default(),
            delta_x,
            delta_y: 0,
        }
    }

    fn sprite(owner: BulletOwner) -> Sprite {
        match owner {
            BulletOwner::Player => PLAYER_BULLET_SPRITE,
            BulletOwner::Enemy => ENEMY_BULLET_SPRITE,
        }
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    /// Fully past the edge it travels towards.
    pub fn is_off_field(&self, field: &Field) -> bool {
        match self.owner {
            BulletOwner::Player => self.body.all(|p| p.x >= field.play_width),
            BulletOwner::Enemy => self.body.all(|p| p.x < 0),
        }
    }
}

impl Entity for Bullet {
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
        self.body = Body::from_sprite(self.origin, Bullet::sprite(self.owner));
    }

    fn tint(&self) -> Tint {
        match self.owner {
            BulletOwner::Player => Tint::PlayerShot,
            BulletOwner::Enemy => Tint::EnemyShot,
        }
    }
}

// ── Bomb ──────────────────────────────────────────────────────────────────────

/// Dropped by the player; falls diagonally forward onto buildings.
#[derive(Clone, Debug)]
pub struct Bomb {
    origin: Point2D,
    body: Body,
    lifecycle: Lifecycle,
    pub delta_x: i32,
    pub delta_y: i32,
}

impl Bomb {
    pub fn new(origin: Point2D) -> Self {
        Bomb {
            origin,
            body: Body::from_sprite(origin, BOMB_SPRITE),
            lifecycle: Lifecycle::default(),
            delta_x: BOMB_DELTA.0,
            delta_y: BOMB_DELTA.1,
        }
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    /// Below the floor or past the right edge.
    pub fn is_off_field(&self, field: &Field) -> bool {
        self.body.all(|p| p.y >= field.play_height) || self.body.all(|p| p.x >= field.play_width)
    }
}

impl Entity for Bomb {
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
        self.body = Body::from_sprite(self.origin, BOMB_SPRITE);
    }

    fn tint(&self) -> Tint {
        Tint::PlayerShot
    }
}
