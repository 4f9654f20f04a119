//! Pairwise collision detection between entity categories.
//!
//! Every pair type runs through [`resolve_pairs`]: an outer collection is
//! scanned in index order, and for each outer entity the inner collection is
//! scanned until the first overlapping live partner.  Both partners are hit,
//! then the pair's outcome handler runs.  An entity that is no longer
//! `Strong` never matches again, so later pair types in the same tick skip it.

use tracing::debug;

use crate::actors::{building_sweep, Building, Enemy, Player};
use crate::entities::{Body, Entity, GameState};
use crate::projectiles::{Bomb, Bullet};
use crate::score::ULTIMATE_BONUS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Same row; horizontal gap within the reach.
    Row,
    /// Same column; vertical gap within the reach.
    Column,
}

/// Swept-interval overlap: some anchor cell and probe cell are aligned on
/// `axis` and `0 <= probe - anchor <= reach` along it.
pub fn swept_overlap(anchor: &Body, probe: &Body, axis: Axis, reach: i32) -> bool {
    anchor.coordinates().any(|a| {
        probe.coordinates().any(|p| {
            let (aligned, gap) = match axis {
                Axis::Row => (a.y == p.y, p.x - a.x),
                Axis::Column => (a.x == p.x, p.y - a.y),
            };
            aligned && 0 <= gap && gap <= reach
        })
    })
}

/// Geometry of one category pair.
pub struct PairRule<A, B> {
    pub name: &'static str,
    pub axis: Axis,
    /// Tolerance along `axis`, usually the mover's per-tick travel.
    pub reach: fn(&A, &B) -> i32,
}

/// Resolve one pair type.  Returns the number of pairs that collided.
pub fn resolve_pairs<'a, A, B, I>(
    outer: I,
    inner: &mut [B],
    rule: &PairRule<A, B>,
    mut on_hit: impl FnMut(&A, &B),
) -> usize
where
    A: Entity + 'a,
    B: Entity,
    I: IntoIterator<Item = &'a mut A>,
{
    let mut resolved = 0;
    for a in outer {
        for b in inner.iter_mut() {
            if !(a.is_strong() && b.is_strong()) {
                continue;
            }
            let reach = (rule.reach)(&*a, &*b);
            if swept_overlap(a.body(), b.body(), rule.axis, reach) {
                a.hit();
                b.hit();
                on_hit(&*a, &*b);
                resolved += 1;
                debug!(pair = rule.name, "collision resolved");
                break;
            }
        }
    }
    resolved
}

/// Outcome of one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub resolved: usize,
    pub player_hit: bool,
    pub points: u32,
}

/// Run every pair type once, in the fixed order below.
pub fn detect_collisions(state: &mut GameState) -> CollisionReport {
    let GameState { player, enemies, buildings, scores, level, .. } = state;
    let mut report = CollisionReport::default();

    // Enemy bullet vs player
    let rule: PairRule<Bullet, Player> = PairRule {
        name: "enemy-bullet/player",
        axis: Axis::Row,
        reach: |bullet: &Bullet, _: &Player| bullet.delta_x.abs(),
    };
    report.resolved += resolve_pairs(
        enemies.iter_mut().flat_map(|e| e.bullets.iter_mut()),
        std::slice::from_mut(player),
        &rule,
        |_, _| {
            scores.lose_life();
            report.player_hit = true;
        },
    );

    // Enemy vs player
    let rule: PairRule<Enemy, Player> = PairRule {
        name: "enemy/player",
        axis: Axis::Row,
        reach: |enemy: &Enemy, _: &Player| enemy.delta_x.abs(),
    };
    report.resolved += resolve_pairs(
        enemies.iter_mut(),
        std::slice::from_mut(player),
        &rule,
        |_, _| {
            scores.lose_life();
            report.player_hit = true;
        },
    );

    // Enemy vs player bullet
    let rule: PairRule<Enemy, Bullet> = PairRule {
        name: "enemy/player-bullet",
        axis: Axis::Row,
        reach: |_: &Enemy, bullet: &Bullet| bullet.delta_x,
    };
    report.resolved += resolve_pairs(
        enemies.iter_mut(),
        player.bullets.as_mut_slice(),
        &rule,
        |enemy, _| {
            let points = enemy.points_gain_on_die();
            scores.award(points, level);
            report.points += points;
        },
    );

    // Enemy vs player bomb
    let rule: PairRule<Enemy, Bomb> = PairRule {
        name: "enemy/bomb",
        axis: Axis::Row,
        reach: |_: &Enemy, bomb: &Bomb| bomb.delta_x,
    };
    report.resolved += resolve_pairs(
        enemies.iter_mut(),
        player.bombs.as_mut_slice(),
        &rule,
        |enemy, _| {
            let points = enemy.points_gain_on_die();
            scores.award(points, level);
            report.points += points;
        },
    );

    // Enemy bullet vs player bullet
    let rule: PairRule<Bullet, Bullet> = PairRule {
        name: "enemy-bullet/player-bullet",
        axis: Axis::Row,
        reach: |enemy_bullet: &Bullet, _: &Bullet| enemy_bullet.delta_x.abs(),
    };
    report.resolved += resolve_pairs(
        enemies.iter_mut().flat_map(|e| e.bullets.iter_mut()),
        player.bullets.as_mut_slice(),
        &rule,
        |_, _| {
            scores.award(ULTIMATE_BONUS, level);
            report.points += ULTIMATE_BONUS;
        },
    );

    // Building vs player
    let rule: PairRule<Building, Player> = PairRule {
        name: "building/player",
        axis: Axis::Row,
        reach: |_: &Building, _: &Player| building_sweep(),
    };
    report.resolved += resolve_pairs(
        buildings.iter_mut(),
        std::slice::from_mut(player),
        &rule,
        |_, _| {
            scores.lose_life();
            report.player_hit = true;
        },
    );

    // Building vs player bomb
    let rule: PairRule<Building, Bomb> = PairRule {
        name: "building/bomb",
        axis: Axis::Column,
        reach: |building: &Building, _: &Bomb| building.height(),
    };
    report.resolved += resolve_pairs(
        buildings.iter_mut(),
        player.bombs.as_mut_slice(),
        &rule,
        |building, _| {
            let points = building.points_gain_on_destroy();
            scores.award(points, level);
            report.points += points;
        },
    );

    if report.player_hit {
        debug!(score = scores.score, "player destroyed");
    }
    report
}
