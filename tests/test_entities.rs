use invaders::entities::{Heading, Rect};
use invaders::sound::{Cue, Silent};
use invaders::tick::{Frame, Tickable};
use invaders::{Enemy, GameConfig, PlayerCraft, Projectile};

use invaders::projectile::BoltSpec;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> GameConfig {
    GameConfig {
        alien_fire_chance: 0.0,
        ..GameConfig::default()
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_moves_by_heading_times_velocity() {
    let spec = BoltSpec::from_config(&config());
    let mut up = Projectile::new(spec, 100, 300, Heading::Up);
    let mut down = Projectile::new(spec, 100, 300, Heading::Down);
    let (up_y, down_y) = (up.rect().y, down.rect().y);

    up.step();
    down.step();

    assert_eq!(up.rect().y - up_y, -10);
    assert_eq!(down.rect().y - down_y, 10);
    assert_eq!(up.rect().x, 96); // horizontal position never changes
}

#[test]
fn projectile_expires_only_when_fully_above_top() {
    let spec = BoltSpec::from_config(&config());
    // 24 tall, centered at y=12 → spans 0..24
    let mut p = Projectile::new(spec, 100, 12, Heading::Up);
    p.step(); // -10..14
    p.step(); // -20..4
    assert!(!p.is_expired());
    p.step(); // -30..-6
    assert!(p.is_expired());
}

#[test]
fn projectile_expires_only_when_fully_below_bottom() {
    let spec = BoltSpec::from_config(&config());
    // spans 680..704, window height 700
    let mut p = Projectile::new(spec, 100, 692, Heading::Down);
    p.step(); // 690..714
    assert!(!p.is_expired());
    p.step(); // 700..724, top == height still visible on the edge
    assert!(!p.is_expired());
    p.step(); // 710..734
    assert!(p.is_expired());
}

#[test]
fn projectile_advances_through_tickable() {
    let spec = BoltSpec::from_config(&config());
    let mut p = Projectile::new(spec, 100, 300, Heading::Down);
    let mut rng = seeded_rng();
    let mut sounds = Silent;
    let start = p.rect().y;

    for _ in 0..3 {
        let mut frame = Frame::new(1, &mut rng, &mut sounds);
        p.advance(&mut frame);
    }

    assert_eq!(p.rect().y, start + 30);
}

// ── PlayerCraft ───────────────────────────────────────────────────────────────

#[test]
fn craft_starts_centered_on_bottom_edge() {
    let craft = PlayerCraft::new(&config());
    assert_eq!(craft.rect(), Rect::new(568, 636, 64, 64));
    assert_eq!(craft.lives(), 3);
    assert!(craft.projectiles().is_empty());
}

#[test]
fn fire_spawns_upward_bolt_at_center_and_plays_cue() {
    let mut craft = PlayerCraft::new(&config());
    let mut cues: Vec<Cue> = Vec::new();

    assert!(craft.fire(&mut cues));

    assert_eq!(craft.projectiles().len(), 1);
    let bolt = &craft.projectiles()[0];
    assert_eq!(bolt.heading(), Heading::Up);
    assert_eq!(bolt.rect().center_x(), craft.rect().center_x());
    assert_eq!(bolt.rect().center_y(), craft.rect().center_y());
    assert_eq!(cues, vec![Cue::PlayerFire]);
}

#[test]
fn fire_is_refused_at_capacity() {
    let mut craft = PlayerCraft::new(&config());
    let mut cues: Vec<Cue> = Vec::new();

    for _ in 0..5 {
        assert!(craft.fire(&mut cues));
    }
    assert!(!craft.fire(&mut cues));

    assert_eq!(craft.projectiles().len(), 5);
    assert_eq!(cues.len(), 5); // refused shot is silent
}

#[test]
fn magazine_refills_as_bolts_leave_the_screen() {
    let mut craft = PlayerCraft::new(&config());
    let mut rng = seeded_rng();
    let mut sounds = Silent;
    for _ in 0..5 {
        craft.fire(&mut sounds);
    }

    // bolt spans 656..680; gone once bottom < 0, i.e. after 69 steps
    for _ in 0..69 {
        let mut frame = Frame::new(1, &mut rng, &mut sounds);
        craft.advance(&mut frame);
    }
    assert!(craft.projectiles().is_empty());
    assert!(craft.fire(&mut sounds));
}

#[test]
fn craft_moves_by_velocity_and_recenters() {
    let mut craft = PlayerCraft::new(&config());
    craft.move_left();
    assert_eq!(craft.rect().x, 560);
    craft.move_right();
    craft.move_right();
    assert_eq!(craft.rect().x, 576);

    craft.reset_position();
    assert_eq!(craft.rect().center_x(), 600);
}

#[test]
fn craft_movement_bounds_are_reported_not_enforced() {
    let mut craft = PlayerCraft::new(&config());
    while craft.can_move_left() {
        craft.move_left();
    }
    assert!(craft.rect().left() <= 0);
    assert!(craft.can_move_right());
}

#[test]
fn lives_never_go_negative() {
    let mut craft = PlayerCraft::new(&config());
    for _ in 0..5 {
        craft.lose_life();
    }
    assert_eq!(craft.lives(), 0);
    craft.restore_lives();
    assert_eq!(craft.lives(), 3);
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_speed_scales_with_round() {
    let mut enemy = Enemy::new(&config(), 100, 100);
    let mut rng = seeded_rng();
    let mut sounds = Silent;

    let mut frame = Frame::new(1, &mut rng, &mut sounds);
    enemy.advance(&mut frame);
    assert_eq!(enemy.rect().x, 101);

    let mut frame = Frame::new(3, &mut rng, &mut sounds);
    enemy.advance(&mut frame);
    assert_eq!(enemy.rect().x, 104);
    assert_eq!(enemy.rect().y, 100);
}

#[test]
fn enemy_reverse_drops_flips_and_steps_back() {
    let mut enemy = Enemy::new(&config(), 100, 100);
    assert_eq!(enemy.direction(), 1);

    enemy.reverse(10, 2);

    assert_eq!(enemy.direction(), -1);
    assert_eq!(enemy.rect().y, 110);
    assert_eq!(enemy.rect().x, 98);
}

#[test]
fn enemy_never_fires_with_zero_chance() {
    let mut enemy = Enemy::new(&config(), 100, 100);
    let mut rng = seeded_rng();
    let mut cues: Vec<Cue> = Vec::new();
    for _ in 0..1000 {
        assert!(!enemy.try_fire(&mut rng, &mut cues));
    }
    assert!(cues.is_empty());
}

#[test]
fn enemy_fire_is_capped_at_two_bolts() {
    let cfg = GameConfig {
        alien_fire_chance: 1.0,
        ..GameConfig::default()
    };
    let mut enemy = Enemy::new(&cfg, 100, 100);
    let mut rng = seeded_rng();
    let mut cues: Vec<Cue> = Vec::new();

    assert!(enemy.try_fire(&mut rng, &mut cues));
    assert!(enemy.try_fire(&mut rng, &mut cues));
    assert!(!enemy.try_fire(&mut rng, &mut cues));

    assert_eq!(enemy.projectiles().len(), 2);
    assert!(enemy.projectiles().iter().all(|p| p.heading() == Heading::Down));
    assert_eq!(enemy.projectiles()[0].rect().center_x(), enemy.rect().center_x());
    assert_eq!(cues, vec![Cue::EnemyFire, Cue::EnemyFire]);
}

#[test]
fn enemy_touches_sides() {
    let cfg = config();
    assert!(Enemy::new(&cfg, 0, 100).touches_side(1200));
    assert!(Enemy::new(&cfg, 1136, 100).touches_side(1200));
    assert!(!Enemy::new(&cfg, 1, 100).touches_side(1200));
    assert!(!Enemy::new(&cfg, 1135, 100).touches_side(1200));
}
