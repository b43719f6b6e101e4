use glam::Vec2;
use proptest::prelude::*;

use crate::commands::{Controls, HostCommand, SceneConfig};
use crate::components::Enemy;
use crate::enums::*;
use crate::events::{EnemyReport, EventKind, GameEvent};
use crate::types::*;

fn body_at(x: f32, y: f32, size: f32) -> Body {
    Body::new(Vec2::new(x, y)).with_size(size)
}

// ---- Geometry ----

#[test]
fn test_advance_integrates_heading_and_speed() {
    let mut body = Body::new(Vec2::ZERO).with_heading(DOWN).with_speed(4.0);
    body.advance(0.5);
    assert!((body.position.y + 2.0).abs() < 1e-6, "y = {}", body.position.y);
    assert!(body.position.x.abs() < 1e-6);
}

#[test]
fn test_with_heading_normalizes() {
    let body = Body::new(Vec2::ZERO).with_heading(Vec2::new(3.0, 4.0));
    assert!((body.heading.length() - 1.0).abs() < 1e-6);
}

#[test]
fn test_normalized_zero_vector_is_zero() {
    assert_eq!(normalized(Vec2::ZERO), Vec2::ZERO);
    assert_eq!(scaled_to(Vec2::ZERO, 5.0), Vec2::ZERO);
}

#[test]
fn test_truncate_caps_length_only() {
    let long = truncate(Vec2::new(0.0, 10.0), 0.5);
    assert!((long.length() - 0.5).abs() < 1e-6);
    let short = truncate(Vec2::new(0.1, 0.0), 0.5);
    assert_eq!(short, Vec2::new(0.1, 0.0));
}

#[test]
fn test_collision_is_square_not_circular() {
    // Corner-to-corner: circular test would miss, square overlap hits.
    let a = body_at(0.0, 0.0, 1.0);
    let b = body_at(0.9, 0.9, 1.0);
    assert!(collides(&a, &b));
    assert!(a.distance_to(&b) > 1.0);
}

#[test]
fn test_collision_edges_are_exclusive() {
    let a = body_at(0.0, 0.0, 1.0);
    let touching = body_at(1.0, 0.0, 1.0);
    assert!(!collides(&a, &touching), "Touching edges do not overlap");
}

#[test]
fn test_top_center() {
    let body = body_at(1.0, -9.0, 1.0);
    assert_eq!(body.top_center(), Vec2::new(1.0, -8.5));
}

// ---- Damage ----

#[test]
fn test_collision_damage_without_armor() {
    let mut health = Health::new(20);
    health.damage(7, DamageKind::Collision);
    assert_eq!(health.current, 13);
}

#[test]
fn test_damage_kinds_treat_armor_differently() {
    let mut collision = Health::new(20).with_armor(2);
    collision.damage(10, DamageKind::Collision);
    assert_eq!(collision.current, 12, "Collision subtracts armor once");

    let mut bullet = Health::new(20).with_armor(2);
    bullet.damage(10, DamageKind::Bullet);
    assert_eq!(bullet.current, 14, "Bullet subtracts armor twice");

    let mut shield = Health::new(20).with_armor(2);
    shield.damage(10, DamageKind::Shield);
    assert_eq!(shield.current, 10, "Shield ignores armor");
}

#[test]
fn test_damage_never_heals_and_has_no_floor() {
    let mut armored = Health::new(5).with_armor(10);
    armored.damage(3, DamageKind::Collision);
    assert_eq!(armored.current, 5, "Hit below armor does nothing");

    let mut fragile = Health::new(1);
    fragile.damage(1000, DamageKind::Shield);
    assert_eq!(fragile.current, -999);
    assert!(fragile.is_depleted());
}

// ---- Points ----

#[test]
fn test_enemy_points_follow_bonus_flag() {
    let mut enemy = Enemy {
        kind: EnemyKind::Patrol,
        sensor_distance: 4.0,
        player_spotted: false,
        base_points: 10,
        bonus_points: 10,
        bonus_active: true,
        upgrade_points: 1,
    };
    assert_eq!(enemy.points(), 20);
    enemy.bonus_active = false;
    assert_eq!(enemy.points(), 10);
}

// ---- Commands & events ----

#[test]
fn test_controls_default_to_zero() {
    let controls = Controls::steering(1.0, -1.0);
    assert_eq!(controls.get(Controls::HORIZONTAL), 1.0);
    assert_eq!(controls.get(Controls::VERTICAL), -1.0);
    assert_eq!(controls.get("throttle"), 0.0);
}

#[test]
fn test_event_kind_matches_variant() {
    let killed = GameEvent::EnemyKilled {
        enemy: EnemyReport {
            seq: 3,
            kind: EnemyKind::Cargo,
            position: Vec2::ZERO,
            points: 1,
            upgrade_points: 5,
        },
    };
    assert_eq!(killed.kind(), EventKind::EnemyKilled);
    assert_eq!(GameEvent::EnemiesClear.kind(), EventKind::EnemiesClear);
    assert_eq!(GameEvent::ScoreChange { score: 4 }.kind(), EventKind::ScoreChange);
}

#[test]
fn test_host_command_serde_tagged() {
    let command = HostCommand::StartScene {
        config: SceneConfig {
            spawn_strategy: SpawnStrategyKind::Endless,
        },
    };
    let json = serde_json::to_string(&command).unwrap();
    assert!(json.contains("\"type\":\"StartScene\""), "json = {json}");
    let back: HostCommand = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        back,
        HostCommand::StartScene { config } if config.spawn_strategy == SpawnStrategyKind::Endless
    ));
}

proptest! {
    #[test]
    fn prop_collision_is_symmetric(
        ax in -10.0f32..10.0, ay in -10.0f32..10.0, asize in 0.1f32..3.0,
        bx in -10.0f32..10.0, by in -10.0f32..10.0, bsize in 0.1f32..3.0,
    ) {
        let a = body_at(ax, ay, asize);
        let b = body_at(bx, by, bsize);
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
    }

    #[test]
    fn prop_collision_damage_subtracts_net_of_armor(
        start in -50i32..100, amount in 0i32..200, armor in 0i32..20,
    ) {
        let mut health = Health::new(start).with_armor(armor);
        health.damage(amount, DamageKind::Collision);
        prop_assert_eq!(health.current, start - (amount - armor).max(0));
        prop_assert!(health.current <= start);
    }
}
