use glam::Vec2;

use raider_core::components::Volley;
use raider_core::constants::*;
use raider_core::enums::EnemyKind;
use raider_core::types::DOWN;

use crate::fire_control::{ace_weapons, tick_ace, tick_volley};
use crate::fsm::{attack_force, edge_force, evaluate, AceContext, AcePhase};
use crate::profiles::get_profile;
use crate::steering::{accelerate, escort_heading, intercept_heading, Sighting};

fn ace_at(position: Vec2, player: Option<Vec2>, health: i32) -> AceContext {
    AceContext {
        position,
        player,
        health,
        max_health: ACE_HEALTH,
        attack_range: ACE_ATTACK_RANGE,
        max_thrust: ACE_MAX_THRUST,
    }
}

// ---- Profiles ----

#[test]
fn test_profiles_cover_every_kind() {
    for kind in EnemyKind::ALL {
        let profile = get_profile(kind);
        assert!(profile.health > 0, "{kind:?} must start alive");
        assert!(profile.speed > 0.0, "{kind:?} must move");
        assert!(profile.sensor_distance > 0.0, "{kind:?} must have a sensor");
    }
}

#[test]
fn test_only_cargo_and_zero_have_thrusters() {
    for kind in EnemyKind::ALL {
        let has = get_profile(kind).thruster.is_some();
        let expected = matches!(kind, EnemyKind::Cargo | EnemyKind::Zero);
        assert_eq!(has, expected, "thruster mismatch for {kind:?}");
    }
}

#[test]
fn test_patrol_bonus_on_offer_at_spawn() {
    assert!(get_profile(EnemyKind::Patrol).bonus_at_start);
    assert!(!get_profile(EnemyKind::Zero).bonus_at_start);
}

// ---- Steering ----

#[test]
fn test_accelerate_compounds_and_clamps() {
    let speed = accelerate(2.0, 1.5, 10.0);
    assert!((speed - 3.0).abs() < 1e-6);
    assert_eq!(accelerate(9.0, 1.5, 10.0), 10.0, "must clamp at max");
    assert_eq!(accelerate(12.0, 1.5, 10.0), 12.0, "already past max stays put");
}

#[test]
fn test_escort_without_charge_flies_down() {
    assert_eq!(escort_heading(Vec2::new(1.0, 1.0), None), DOWN);
}

#[test]
fn test_escort_on_station_drifts_down() {
    // Exactly on station: the correction term vanishes.
    let charge = Vec2::new(0.0, 0.0);
    let escort = Vec2::new(ESCORT_STATION_DISTANCE, 0.0);
    let heading = escort_heading(escort, Some(charge));
    assert!((heading - DOWN).length() < 1e-5, "heading = {heading}");
}

#[test]
fn test_escort_far_away_closes_in() {
    let charge = Vec2::new(0.0, 0.0);
    let escort = Vec2::new(4.5, 0.0);
    let heading = escort_heading(escort, Some(charge));
    assert!(heading.x < 0.0, "should move toward the charge: {heading}");
    assert!(heading.y < 0.0, "should still drift down: {heading}");
}

#[test]
fn test_escort_too_close_backs_off() {
    let heading = escort_heading(Vec2::new(1.0, 0.0), Some(Vec2::ZERO));
    assert!(heading.x > 0.0, "should back away from the charge: {heading}");
}

#[test]
fn test_intercept_leads_moving_player() {
    let player = Sighting {
        position: Vec2::new(0.0, -5.0),
        heading: Vec2::X,
        speed: 4.0,
    };
    let heading = intercept_heading(Vec2::new(0.0, 5.0), DOWN, &player, ZERO_LEAD_TIME);
    // Aim point is one unit right of the player.
    let expected = (Vec2::new(1.0, -5.0) - Vec2::new(0.0, 5.0)).normalize();
    assert!((heading - expected).length() < 1e-5);
}

#[test]
fn test_intercept_on_aim_point_keeps_heading() {
    let player = Sighting {
        position: Vec2::ZERO,
        heading: Vec2::ZERO,
        speed: 0.0,
    };
    assert_eq!(intercept_heading(Vec2::ZERO, Vec2::X, &player, 1.0), Vec2::X);
}

// ---- Ace FSM ----

#[test]
fn test_ace_forces_cancel_at_attack_range() {
    let player = Vec2::new(0.0, -8.0);
    let ace = player + Vec2::new(0.0, ACE_ATTACK_RANGE);
    let force = attack_force(ace, player, ACE_ATTACK_RANGE, ACE_MAX_THRUST);
    assert!(force.length() < 1e-4, "force = {force}");
}

#[test]
fn test_ace_closes_in_from_far_away() {
    let player = Vec2::new(0.0, -8.0);
    let ace = Vec2::new(0.0, 9.0);
    let maneuver = evaluate(&ace_at(ace, Some(player), ACE_HEALTH), DOWN, ACE_CRUISE_SPEED);
    assert_eq!(maneuver.phase, AcePhase::Attack);
    assert!(maneuver.heading.y < 0.0, "should dive toward the player");
    assert!(maneuver.weapons_free);
}

#[test]
fn test_ace_backs_off_when_too_close() {
    let player = Vec2::new(0.0, -8.0);
    let ace = Vec2::new(0.0, -6.0);
    let maneuver = evaluate(&ace_at(ace, Some(player), ACE_HEALTH), DOWN, ACE_CRUISE_SPEED);
    assert!(maneuver.heading.y > 0.0, "should climb away from the player");
}

#[test]
fn test_edge_force_only_near_walls() {
    assert_eq!(edge_force(0.0), Vec2::ZERO);
    assert!(edge_force(WORLD_LEFT + 0.5).x > 0.0, "left wall pushes right");
    assert!(edge_force(WORLD_RIGHT - 0.5).x < 0.0, "right wall pushes left");
    // Quadratic: one unit inside the margin gives one unit of force.
    let x = WORLD_LEFT + ACE_EDGE_MARGIN - 1.0;
    assert!((edge_force(x).x - 1.0).abs() < 1e-5);
}

#[test]
fn test_ace_retreats_at_half_health() {
    let maneuver = evaluate(
        &ace_at(Vec2::ZERO, Some(Vec2::new(0.0, -8.0)), ACE_HEALTH / 2),
        Vec2::X,
        1.0,
    );
    assert_eq!(maneuver.phase, AcePhase::Retreat);
    assert_eq!(maneuver.heading, DOWN);
    assert_eq!(maneuver.speed, ACE_MAX_THRUST);
    assert!(!maneuver.weapons_free, "retreating ace holds fire");
}

#[test]
fn test_ace_without_player_holds_course() {
    let maneuver = evaluate(&ace_at(Vec2::ZERO, None, ACE_HEALTH), DOWN, 2.5);
    assert_eq!(maneuver.heading, DOWN);
    assert_eq!(maneuver.speed, 2.5);
    assert!(!maneuver.weapons_free);
}

// ---- Fire control ----

#[test]
fn test_volley_fires_three_then_cools_down() {
    let mut volley = Volley::default();
    let player = Some(Vec2::new(1.0, -8.0));
    let dt = 0.05;
    let mut shots = Vec::new();
    let mut gaps = Vec::new();
    let mut since_last = 0.0;
    for _ in 0..200 {
        since_last += dt;
        if let Some(target) = tick_volley(&mut volley, dt, player) {
            shots.push(target);
            gaps.push(since_last);
            since_last = 0.0;
        }
        if shots.len() == 4 {
            break;
        }
    }
    assert_eq!(shots.len(), 4, "should have opened a second volley");
    // First volley aims low to high: the last pushed aim point fires first.
    assert_eq!(shots[0], Vec2::new(1.0, -10.0));
    assert_eq!(shots[1], Vec2::new(1.0, -8.0));
    assert_eq!(shots[2], Vec2::new(1.0, -6.0));
    assert!(gaps[1] < ESCORT_VOLLEY_COOLDOWN, "in-volley pause must be short");
    assert!(gaps[3] >= ESCORT_VOLLEY_COOLDOWN - 1e-4, "volleys separated by cooldown");
}

#[test]
fn test_volley_aim_fixed_at_opening() {
    let mut volley = Volley::default();
    let first = tick_volley(&mut volley, 0.0, Some(Vec2::ZERO));
    assert_eq!(first, Some(Vec2::new(0.0, -2.0)));
    // Player moves; the rest of the volley still goes to the old spot.
    let second = tick_volley(&mut volley, 1.0, Some(Vec2::new(4.0, 4.0)));
    assert_eq!(second, Some(Vec2::ZERO));
}

#[test]
fn test_volley_needs_a_player_to_open() {
    let mut volley = Volley::default();
    assert_eq!(tick_volley(&mut volley, 1.0, None), None);
    assert!(volley.pending.is_empty());
    assert!(tick_volley(&mut volley, 0.0, Some(Vec2::ZERO)).is_some());
}

#[test]
fn test_ace_drone_salvo_rhythm() {
    let mut weapons = ace_weapons();
    weapons.drone_cooldown = 0.0;
    let dt = 0.1;
    let mut launches = Vec::new();
    let mut t = 0.0;
    while t < 6.0 {
        if tick_ace(&mut weapons, dt).drone {
            launches.push(t);
        }
        t += dt;
    }
    // Salvo of three close together, then the long cooldown.
    assert!(launches.len() >= 4, "launches = {launches:?}");
    assert!(launches[2] - launches[0] < 1.0);
    assert!(launches[3] - launches[2] > ACE_DRONE_COOLDOWN - 0.2);
}

#[test]
fn test_ace_bullet_cooldown() {
    let mut weapons = ace_weapons();
    weapons.bullet_cooldown = 0.0;
    assert!(tick_ace(&mut weapons, 0.1).bullet);
    assert!(!tick_ace(&mut weapons, 0.1).bullet);
    assert_eq!(weapons.drones_remaining, ACE_DRONE_SALVO);
}
