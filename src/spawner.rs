//! Procedural placement of enemies and buildings.
//!
//! Variants are registered explicitly by name at startup; the spawner picks
//! among them uniformly.

use rand::Rng;
use tracing::debug;

use crate::actors::{Building, Enemy, BUILDING_DELTA_X};
use crate::config::GameConfig;
use crate::entities::{Entity, Field, GameLevel, Point2D};
use crate::error::GameError;

/// Upper bound on placement attempts per enemy spawn call.
pub const MAX_SPAWN_ATTEMPTS: usize = 64;

pub type Constructor<T> = fn(Point2D) -> T;

// ── Registry ──────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct VariantRegistry<T> {
    category: &'static str,
    entries: Vec<(&'static str, Constructor<T>)>,
}

impl<T> VariantRegistry<T> {
    pub fn new(category: &'static str) -> Self {
        VariantRegistry { category, entries: Vec::new() }
    }

    pub fn register(mut self, name: &'static str, constructor: Constructor<T>) -> Self {
        self.entries.push((name, constructor));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Keep only the named variants, in the order given.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, GameError> {
        let mut entries = Vec::with_capacity(names.len());
        for wanted in names {
            let wanted = wanted.as_ref();
            let entry = self
                .entries
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| GameError::UnknownVariant {
                    category: self.category,
                    name: wanted.to_string(),
                })?;
            entries.push(*entry);
        }
        let selected = VariantRegistry { category: self.category, entries };
        selected.ensure_non_empty()?;
        Ok(selected)
    }

    pub fn ensure_non_empty(&self) -> Result<(), GameError> {
        if self.entries.is_empty() {
            Err(GameError::EmptyRegistry { category: self.category })
        } else {
            Ok(())
        }
    }

    /// Uniformly random variant index.  The registry must not be empty.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.entries.len())
    }

    pub fn build(&self, index: usize, at: Point2D) -> T {
        (self.entries[index].1)(at)
    }

    pub fn name_of(&self, index: usize) -> &'static str {
        self.entries[index].0
    }
}

pub fn enemy_registry() -> VariantRegistry<Enemy> {
    VariantRegistry::new("enemy")
        .register("drone", Enemy::drone)
        .register("raider", Enemy::raider)
        .register("interceptor", Enemy::interceptor)
}

pub fn building_registry() -> VariantRegistry<Building> {
    VariantRegistry::new("building")
        .register("tower", Building::tower)
        .register("block", Building::block)
        .register("hangar", Building::hangar)
}

/// Ticks between building spawn attempts, proportional to scroll speed.
pub fn building_cadence() -> u64 {
    (1.0 / BUILDING_DELTA_X.abs()).ceil().max(1.0) as u64
}

// ── Spawner ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Spawner {
    enemies: VariantRegistry<Enemy>,
    buildings: VariantRegistry<Building>,
}

impl Spawner {
    pub fn new(
        enemies: VariantRegistry<Enemy>,
        buildings: VariantRegistry<Building>,
    ) -> Result<Self, GameError> {
        enemies.ensure_non_empty()?;
        buildings.ensure_non_empty()?;
        Ok(Spawner { enemies, buildings })
    }

    /// Registries restricted to the variants named in the config.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Spawner::new(
            enemy_registry().select(&config.enemies)?,
            building_registry().select(&config.buildings)?,
        )
    }

    pub fn enemy_variants(&self) -> &VariantRegistry<Enemy> {
        &self.enemies
    }

    pub fn building_variants(&self) -> &VariantRegistry<Building> {
        &self.buildings
    }

    /// Top enemies up to the level cap, one to two field widths to the right.
    pub fn spawn_enemies<R: Rng>(
        &self,
        enemies: &mut Vec<Enemy>,
        level: GameLevel,
        field: &Field,
        rng: &mut R,
    ) -> usize {
        let field = *field;
        self.spawn_enemies_with(enemies, level, rng, |rng| {
            Point2D::new(
                rng.gen_range(field.play_width..2 * field.play_width),
                rng.gen_range(2..field.play_height - 10),
            )
        })
    }

    /// Same as [`Spawner::spawn_enemies`] with the placement supplied by the caller.
    ///
    /// A candidate sharing any cell with an existing enemy is discarded and the
    /// same variant is tried again at the next position.
    pub fn spawn_enemies_with<R, F>(
        &self,
        enemies: &mut Vec<Enemy>,
        level: GameLevel,
        rng: &mut R,
        mut next_point: F,
    ) -> usize
    where
        R: Rng,
        F: FnMut(&mut R) -> Point2D,
    {
        let mut spawned = 0;
        let mut attempts = 0;
        let mut index = self.enemies.pick(rng);

        while enemies.len() < level.cap() {
            if attempts == MAX_SPAWN_ATTEMPTS {
                debug!(
                    live = enemies.len(),
                    "enemy spawn gave up after {MAX_SPAWN_ATTEMPTS} attempts"
                );
                break;
            }
            attempts += 1;

            let at = next_point(rng);
            let candidate = self.enemies.build(index, at);
            if enemies.iter().any(|e| e.body().shares_cell(candidate.body())) {
                continue;
            }

            debug!(variant = self.enemies.name_of(index), x = at.x, y = at.y, "enemy spawned");
            enemies.push(candidate);
            spawned += 1;
            index = self.enemies.pick(rng);
        }
        spawned
    }

    /// Top buildings up to the level cap on cadence ticks.  The first blocked
    /// placement ends the attempt for this tick.
    pub fn spawn_buildings<R: Rng>(
        &self,
        buildings: &mut Vec<Building>,
        level: GameLevel,
        field: &Field,
        counter: u64,
        rng: &mut R,
    ) -> usize {
        let cadence = building_cadence();
        // `1 % cadence` keeps the gate open every tick when cadence is 1.
        if counter % cadence != 1 % cadence {
            return 0;
        }

        let mut spawned = 0;
        let mut index = self.buildings.pick(rng);

        while buildings.len() < level.cap() {
            let at = Point2D::new(
                rng.gen_range(field.play_width..field.play_width + field.play_width / 2),
                field.play_height - 1,
            );
            let candidate = self.buildings.build(index, at);
            if buildings.iter().any(|b| blocks(b, &candidate)) {
                debug!(x = at.x, "building spawn blocked");
                break;
            }

            debug!(variant = self.buildings.name_of(index), x = at.x, "building spawned");
            buildings.push(candidate);
            spawned += 1;
            index = self.buildings.pick(rng);
        }
        spawned
    }
}

/// A new building may only appear strictly to the right of every existing
/// cell on the rows it shares.
fn blocks(existing: &Building, candidate: &Building) -> bool {
    existing.body().coordinates().any(|p| {
        candidate
            .body()
            .coordinates()
            .any(|n| n.y == p.y && n.x - p.x <= 0)
    })
}

