//! Per-tick phases: Clear, Move, Draw, and the tick that sequences them.
//!
//! Every function mutates the `GameState` it is handed; randomness comes
//! through the injected RNG so callers control determinism.  Retirement is
//! done with order-preserving `retain` passes, so surviving entities keep
//! their relative order.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::collision::{detect_collisions, CollisionReport};
use crate::entities::{Entity, GameState};
use crate::render::{Canvas, Tint};
use crate::spawner::Spawner;

/// Cap on enemy bullets in flight across all enemies.
pub const MAX_ENEMY_BULLETS: u32 = 4;
/// Each eligible enemy fires with probability 1 / ENEMY_FIRE_ODDS per tick.
pub const ENEMY_FIRE_ODDS: u32 = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub collisions: CollisionReport,
    pub player_destroyed: bool,
}

// ── Tick ──────────────────────────────────────────────────────────────────────

/// One Play tick: clear → move → collide → draw, then bump the counter.
pub fn tick<R: Rng>(
    state: &mut GameState,
    spawner: &Spawner,
    rng: &mut R,
    canvas: &mut dyn Canvas,
    tick_len: Duration,
) -> TickOutcome {
    clear_phase(state);
    move_phase(state, spawner, rng);
    let collisions = detect_collisions(state);
    let player_destroyed = draw_phase(state, canvas, tick_len);
    state.counter += 1;
    TickOutcome { collisions, player_destroyed }
}

// ── Clear ─────────────────────────────────────────────────────────────────────

pub fn clear_phase(state: &mut GameState) {
    state.player.clear();
    enemies_clear(state);
    buildings_clear(state);
    bullets_clear(state);
    bombs_clear(state);
}

/// A destroyed enemy lingers until every bullet it fired has left the field.
pub fn enemies_clear(state: &mut GameState) {
    let engaged = &mut state.bullets_engaged;
    state.enemies.retain_mut(|enemy| {
        enemy.clear();
        if enemy.is_destroyed() && enemy.bullets_gone() {
            *engaged = engaged.saturating_sub(enemy.bullets.len() as u32);
            debug!(kind = enemy.kind.name(), "enemy retired");
            false
        } else {
            true
        }
    });
}

pub fn buildings_clear(state: &mut GameState) {
    state.buildings.retain_mut(|building| {
        building.clear();
        !building.is_destroyed()
    });
}

pub fn bullets_clear(state: &mut GameState) {
    state.player.bullets.retain_mut(|bullet| {
        bullet.clear();
        !bullet.is_destroyed()
    });

    let engaged = &mut state.bullets_engaged;
    for enemy in state.enemies.iter_mut() {
        enemy.bullets.retain_mut(|bullet| {
            bullet.clear();
            if bullet.is_destroyed() {
                *engaged = engaged.saturating_sub(1);
                false
            } else {
                true
            }
        });
    }
}

pub fn bombs_clear(state: &mut GameState) {
    state.player.bombs.retain_mut(|bomb| {
        bomb.clear();
        !bomb.is_destroyed()
    });
}

// ── Move ──────────────────────────────────────────────────────────────────────

pub fn move_phase<R: Rng>(state: &mut GameState, spawner: &Spawner, rng: &mut R) {
    state.player.move_within(&state.field);
    enemies_move(state, spawner, rng);
    buildings_move(state, spawner, rng);
    bullets_move(state);
    bombs_move(state);
}

/// Advance, drop enemies that left through the left edge, top up, then fire.
pub fn enemies_move<R: Rng>(state: &mut GameState, spawner: &Spawner, rng: &mut R) {
    for enemy in state.enemies.iter_mut() {
        enemy.advance_position();
    }

    let engaged = &mut state.bullets_engaged;
    state.enemies.retain(|enemy| {
        if enemy.is_off_field() {
            *engaged = engaged.saturating_sub(enemy.bullets.len() as u32);
            false
        } else {
            true
        }
    });

    spawner.spawn_enemies(&mut state.enemies, state.level, &state.field, rng);
    enemies_fire(state, rng);
}

pub fn enemies_fire<R: Rng>(state: &mut GameState, rng: &mut R) {
    let field = state.field;
    for enemy in state.enemies.iter_mut() {
        if state.bullets_engaged >= MAX_ENEMY_BULLETS {
            break;
        }
        if enemy.can_fire(&field) && rng.gen_ratio(1, ENEMY_FIRE_ODDS) {
            enemy.fire();
            state.bullets_engaged += 1;
        }
    }
}

pub fn buildings_move<R: Rng>(state: &mut GameState, spawner: &Spawner, rng: &mut R) {
    for building in state.buildings.iter_mut() {
        building.advance_position();
    }
    state.buildings.retain(|building| !building.is_off_field());

    spawner.spawn_buildings(
        &mut state.buildings,
        state.level,
        &state.field,
        state.counter,
        rng,
    );
}

pub fn bullets_move(state: &mut GameState) {
    let field = state.field;

    for bullet in state.player.bullets.iter_mut() {
        bullet.advance_position();
    }
    state.player.bullets.retain(|bullet| !bullet.is_off_field(&field));

    let engaged = &mut state.bullets_engaged;
    for enemy in state.enemies.iter_mut() {
        for bullet in enemy.bullets.iter_mut() {
            bullet.advance_position();
        }
        enemy.bullets.retain(|bullet| {
            if bullet.is_off_field(&field) {
                *engaged = engaged.saturating_sub(1);
                false
            } else {
                true
            }
        });
    }
}

pub fn bombs_move(state: &mut GameState) {
    let field = state.field;
    for bomb in state.player.bombs.iter_mut() {
        bomb.advance_position();
    }
    state.player.bombs.retain(|bomb| !bomb.is_off_field(&field));
}

// ── Draw ──────────────────────────────────────────────────────────────────────

/// Paint the play area and advance the run timer.  Returns true once the
/// player's destruction animation has finished.
pub fn draw_phase(state: &mut GameState, canvas: &mut dyn Canvas, tick_len: Duration) -> bool {
    let field = state.field;
    canvas.clear_region(0, 0, field.play_width - 1, field.play_height - 1);

    state.player.draw(canvas);
    for enemy in &state.enemies {
        enemy.draw(canvas);
    }
    for building in &state.buildings {
        building.draw(canvas);
    }
    for bullet in &state.player.bullets {
        bullet.draw(canvas);
    }
    for bullet in state.enemies.iter().flat_map(|e| e.bullets.iter()) {
        bullet.draw(canvas);
    }
    for bomb in &state.player.bombs {
        bomb.draw(canvas);
    }

    state.timer += tick_len;
    canvas.draw_rectangle(0, 0, field.play_width - 1, field.play_height - 1, Tint::Frame);

    state.player.is_destroyed()
}
