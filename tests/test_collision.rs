use thunder_fighter::actors::*;
use thunder_fighter::collision::*;
use thunder_fighter::entities::*;
use thunder_fighter::projectiles::*;

/// Player sits at its spawn point (10, 5): cells (10,4) (10,5) (11,5) (12,5) (10,6).
fn make_state() -> GameState {
    GameState::new(Field::new(80, 24))
}

fn cells(points: &[(i32, i32)]) -> Body {
    let points: Vec<Point2D> = points.iter().map(|&(x, y)| Point2D::new(x, y)).collect();
    Body::from_cells(&points, '#')
}

// ── swept_overlap ─────────────────────────────────────────────────────────────

#[test]
fn row_overlap_is_one_sided() {
    let anchor = cells(&[(20, 5)]);
    assert!(swept_overlap(&anchor, &cells(&[(20, 5)]), Axis::Row, 1));
    assert!(swept_overlap(&anchor, &cells(&[(22, 5)]), Axis::Row, 2));
    assert!(!swept_overlap(&anchor, &cells(&[(23, 5)]), Axis::Row, 2));
    assert!(!swept_overlap(&anchor, &cells(&[(19, 5)]), Axis::Row, 2));
    assert!(!swept_overlap(&anchor, &cells(&[(20, 6)]), Axis::Row, 2));
}

#[test]
fn column_overlap_measures_downwards() {
    let anchor = cells(&[(5, 10), (5, 11)]);
    assert!(swept_overlap(&anchor, &cells(&[(5, 13)]), Axis::Column, 2));
    assert!(!swept_overlap(&anchor, &cells(&[(5, 14)]), Axis::Column, 2));
    assert!(!swept_overlap(&anchor, &cells(&[(5, 9)]), Axis::Column, 2));
    assert!(!swept_overlap(&anchor, &cells(&[(6, 11)]), Axis::Column, 2));
}

// ── Enemy vs player bullet ────────────────────────────────────────────────────

#[test]
fn bullet_on_enemy_scores_and_freezes_both() {
    let mut state = make_state();
    state.enemies.push(Enemy::drone(Point2D::new(20, 5)));
    state
        .player
        .bullets
        .push(Bullet::with_delta(BulletOwner::Player, Point2D::new(20, 5), 1));

    let report = detect_collisions(&mut state);

    assert_eq!(report.resolved, 1);
    assert_eq!(report.points, 50);
    assert!(!report.player_hit);
    assert_eq!(state.enemies[0].state(), EntityState::HalfDestroyed);
    assert_eq!(state.player.bullets[0].state(), EntityState::HalfDestroyed);
    assert_eq!(state.enemies[0].delta(), (0, 0));
    assert_eq!(state.player.bullets[0].delta(), (0, 0));
    assert!(!state.enemies[0].shooting_enabled);
    assert_eq!(state.scores.score, 50);
    assert_eq!(state.scores.highest_score, 50);
}

#[test]
fn fast_bullet_cannot_tunnel_through_enemy() {
    let mut state = make_state();
    state.enemies.push(Enemy::drone(Point2D::new(20, 5)));
    // Started at (20, 5) and already moved by its full speed this tick.
    state
        .player
        .bullets
        .push(Bullet::new(BulletOwner::Player, Point2D::new(22, 5)));

    let report = detect_collisions(&mut state);
    assert_eq!(report.points, 50);
}

#[test]
fn bullet_behind_enemy_misses() {
    let mut state = make_state();
    state.enemies.push(Enemy::drone(Point2D::new(20, 5)));
    state
        .player
        .bullets
        .push(Bullet::new(BulletOwner::Player, Point2D::new(19, 5)));

    let report = detect_collisions(&mut state);
    assert_eq!(report.resolved, 0);
    assert!(state.enemies[0].is_strong());
}

#[test]
fn first_matching_bullet_wins() {
    let mut state = make_state();
    state.enemies.push(Enemy::drone(Point2D::new(20, 5)));
    for _ in 0..2 {
        state
            .player
            .bullets
            .push(Bullet::new(BulletOwner::Player, Point2D::new(21, 5)));
    }

    detect_collisions(&mut state);

    assert_eq!(state.player.bullets[0].state(), EntityState::HalfDestroyed);
    assert!(state.player.bullets[1].is_strong());
}

#[test]
fn one_bullet_kills_one_enemy() {
    let mut state = make_state();
    state.enemies.push(Enemy::drone(Point2D::new(20, 5)));
    state.enemies.push(Enemy::drone(Point2D::new(20, 5)));
    state
        .player
        .bullets
        .push(Bullet::new(BulletOwner::Player, Point2D::new(20, 5)));

    let report = detect_collisions(&mut state);

    assert_eq!(report.resolved, 1);
    assert_eq!(state.scores.score, 50);
    assert!(state.enemies[1].is_strong());
}

#[test]
fn dying_entities_never_collide() {
    let mut state = make_state();
    let mut enemy = Enemy::drone(Point2D::new(20, 5));
    enemy.hit();
    state.enemies.push(enemy);
    state
        .player
        .bullets
        .push(Bullet::new(BulletOwner::Player, Point2D::new(20, 5)));

    let report = detect_collisions(&mut state);
    assert_eq!(report, CollisionReport::default());
    assert!(state.player.bullets[0].is_strong());
}

#[test]
fn bomb_hits_enemy_on_its_row() {
    let mut state = make_state();
    state.enemies.push(Enemy::raider(Point2D::new(30, 8)));
    state.player.bombs.push(Bomb::new(Point2D::new(31, 8)));

    let report = detect_collisions(&mut state);
    assert_eq!(report.points, 100);
    assert_eq!(state.player.bombs[0].state(), EntityState::HalfDestroyed);
}

#[test]
fn kill_can_promote_difficulty() {
    let mut state = make_state();
    state.scores.score = 480;
    state.enemies.push(Enemy::drone(Point2D::new(20, 5)));
    state
        .player
        .bullets
        .push(Bullet::new(BulletOwner::Player, Point2D::new(20, 5)));

    detect_collisions(&mut state);

    assert_eq!(state.scores.score, 530);
    assert_eq!(state.level, GameLevel::Normal);
}

// ── Player hits ───────────────────────────────────────────────────────────────

#[test]
fn enemy_ramming_player_costs_the_life() {
    let mut state = make_state();
    state.enemies.push(Enemy::drone(Point2D::new(9, 5)));
    state.player.steer(0, 1);

    let report = detect_collisions(&mut state);

    assert!(report.player_hit);
    assert_eq!(state.scores.lives, 0);
    assert_eq!(state.player.state(), EntityState::HalfDestroyed);
    assert_eq!(state.player.delta(), (0, 0));
    assert_eq!(state.enemies[0].state(), EntityState::HalfDestroyed);
    assert_eq!(state.enemies[0].delta(), (0, 0));
    assert!(!state.enemies[0].shooting_enabled);
    assert_eq!(state.scores.score, 0);
}

#[test]
fn enemy_bullet_hits_player() {
    let mut state = make_state();
    let mut shooter = Enemy::drone(Point2D::new(60, 12));
    shooter
        .bullets
        .push(Bullet::new(BulletOwner::Enemy, Point2D::new(9, 4)));
    state.enemies.push(shooter);

    let report = detect_collisions(&mut state);

    assert!(report.player_hit);
    assert_eq!(state.scores.lives, 0);
    assert_eq!(state.enemies[0].bullets[0].delta(), (0, 0));
    assert!(state.enemies[0].is_strong());
}

#[test]
fn flying_into_a_building_costs_the_life() {
    let mut state = make_state();
    // Hangar footprint: x 8..=14, y 4..=6.
    state.buildings.push(Building::hangar(Point2D::new(8, 6)));
    state.player.steer(1, 0);

    let report = detect_collisions(&mut state);

    assert!(report.player_hit);
    assert_eq!(state.scores.lives, 0);
    assert_eq!(state.player.state(), EntityState::HalfDestroyed);
    assert_eq!(state.player.delta(), (0, 0));
    assert_eq!(state.buildings[0].state(), EntityState::HalfDestroyed);
    assert_eq!(state.scores.score, 0);
}

// ── Bullet vs bullet ──────────────────────────────────────────────────────────

#[test]
fn shooting_down_an_enemy_bullet_pays_the_bonus() {
    let mut state = make_state();
    let mut shooter = Enemy::drone(Point2D::new(60, 12));
    shooter
        .bullets
        .push(Bullet::new(BulletOwner::Enemy, Point2D::new(30, 8)));
    state.enemies.push(shooter);
    state
        .player
        .bullets
        .push(Bullet::new(BulletOwner::Player, Point2D::new(31, 8)));

    let report = detect_collisions(&mut state);

    assert_eq!(report.points, 200);
    assert_eq!(state.scores.score, 200);
    assert_eq!(state.enemies[0].bullets[0].state(), EntityState::HalfDestroyed);
    assert_eq!(state.player.bullets[0].state(), EntityState::HalfDestroyed);
    assert_eq!(state.player.bullets[0].delta(), (0, 0));
}

#[test]
fn bullet_spent_on_player_is_not_resolved_again() {
    let mut state = make_state();
    let mut shooter = Enemy::drone(Point2D::new(60, 12));
    shooter
        .bullets
        .push(Bullet::new(BulletOwner::Enemy, Point2D::new(9, 5)));
    state.enemies.push(shooter);
    state
        .player
        .bullets
        .push(Bullet::new(BulletOwner::Player, Point2D::new(10, 5)));

    let report = detect_collisions(&mut state);

    assert_eq!(report.resolved, 1);
    assert!(report.player_hit);
    assert_eq!(state.scores.score, 0);
    assert!(state.player.bullets[0].is_strong());
}

// ── Buildings vs bombs ────────────────────────────────────────────────────────

#[test]
fn bomb_destroys_building_below_it() {
    let mut state = make_state();
    // Tower footprint: x 40..=42, y 18..=23.
    state.buildings.push(Building::tower(Point2D::new(40, 23)));
    state.player.bombs.push(Bomb::new(Point2D::new(41, 20)));

    let report = detect_collisions(&mut state);

    assert_eq!(report.points, 60);
    assert_eq!(state.buildings[0].state(), EntityState::HalfDestroyed);
    assert_eq!(state.player.bombs[0].delta(), (0, 0));
}

#[test]
fn bomb_beside_building_misses() {
    let mut state = make_state();
    state.buildings.push(Building::tower(Point2D::new(40, 23)));
    state.player.bombs.push(Bomb::new(Point2D::new(45, 20)));

    let report = detect_collisions(&mut state);
    assert_eq!(report.resolved, 0);
}

// ── resolve_pairs ─────────────────────────────────────────────────────────────

#[test]
fn resolve_pairs_reports_each_outer_hit_once() {
    let mut enemies = vec![
        Enemy::drone(Point2D::new(20, 5)),
        Enemy::drone(Point2D::new(30, 7)),
    ];
    let mut bullets = vec![
        Bullet::new(BulletOwner::Player, Point2D::new(31, 7)),
        Bullet::new(BulletOwner::Player, Point2D::new(20, 5)),
    ];
    let rule: PairRule<Enemy, Bullet> = PairRule {
        name: "test",
        axis: Axis::Row,
        reach: |_: &Enemy, b: &Bullet| b.delta_x,
    };

    let mut hits = Vec::new();
    let resolved = resolve_pairs(enemies.iter_mut(), &mut bullets, &rule, |e, b| {
        hits.push((e.origin(), b.origin()));
    });

    assert_eq!(resolved, 2);
    assert_eq!(
        hits,
        vec![
            (Point2D::new(20, 5), Point2D::new(20, 5)),
            (Point2D::new(30, 7), Point2D::new(31, 7)),
        ]
    );
}
