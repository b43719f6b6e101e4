//! Kind-specific stat profiles.
//!
//! Consolidates per-kind parameters used when an enemy is spawned.

use raider_core::enums::EnemyKind;

/// Stat profile for an enemy kind.
pub struct EnemyProfile {
    pub health: i32,
    pub armor: i32,
    /// Initial speed (units/s).
    pub speed: f32,
    pub size: f32,
    pub sensor_distance: f32,
    pub base_points: u32,
    pub bonus_points: u32,
    /// Whether the bonus is on offer before the player is spotted.
    pub bonus_at_start: bool,
    pub upgrade_points: u32,
    /// Compounding acceleration once the player is spotted: (factor, max speed).
    pub thruster: Option<(f32, f32)>,
}

/// Get the stat profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use raider_core::constants::*;

    match kind {
        EnemyKind::Generic => EnemyProfile {
            health: ENEMY_HEALTH,
            armor: 0,
            speed: ENEMY_SPEED,
            size: SHIP_SIZE,
            sensor_distance: ENEMY_SENSOR_DISTANCE,
            base_points: ENEMY_POINTS,
            bonus_points: 0,
            bonus_at_start: false,
            upgrade_points: ENEMY_UPGRADE_POINTS,
            thruster: None,
        },
        EnemyKind::Patrol => EnemyProfile {
            health: PATROL_HEALTH,
            armor: 0,
            speed: PATROL_SPEED,
            size: SHIP_SIZE,
            sensor_distance: PATROL_SENSOR_DISTANCE,
            base_points: PATROL_POINTS,
            bonus_points: PATROL_BONUS,
            // Lost the moment it reports in.
            bonus_at_start: true,
            upgrade_points: ENEMY_UPGRADE_POINTS,
            thruster: None,
        },
        EnemyKind::Cargo => EnemyProfile {
            health: CARGO_HEALTH,
            armor: CARGO_ARMOR,
            speed: CARGO_SPEED,
            size: SHIP_SIZE,
            sensor_distance: CARGO_SENSOR_DISTANCE,
            base_points: ENEMY_POINTS,
            bonus_points: 0,
            bonus_at_start: false,
            upgrade_points: CARGO_UPGRADE_POINTS,
            thruster: Some((CARGO_ACCELERATION, CARGO_MAX_SPEED)),
        },
        EnemyKind::Escort => EnemyProfile {
            health: ESCORT_HEALTH,
            armor: 0,
            speed: ESCORT_SPEED,
            size: SHIP_SIZE,
            sensor_distance: ENEMY_SENSOR_DISTANCE,
            base_points: ESCORT_POINTS,
            bonus_points: 0,
            bonus_at_start: false,
            upgrade_points: ENEMY_UPGRADE_POINTS,
            thruster: None,
        },
        EnemyKind::Zero => EnemyProfile {
            health: ZERO_HEALTH,
            armor: 0,
            speed: ZERO_SPEED,
            size: SHIP_SIZE,
            sensor_distance: ZERO_SENSOR_DISTANCE,
            base_points: ZERO_POINTS,
            bonus_points: ZERO_BONUS,
            // Earned once it starts homing.
            bonus_at_start: false,
            upgrade_points: ENEMY_UPGRADE_POINTS,
            thruster: Some((ZERO_ACCELERATION, ZERO_MAX_SPEED)),
        },
        EnemyKind::Ace => EnemyProfile {
            health: ACE_HEALTH,
            armor: ACE_ARMOR,
            speed: ACE_CRUISE_SPEED,
            size: SHIP_SIZE,
            sensor_distance: ACE_SENSOR_DISTANCE,
            base_points: ACE_POINTS,
            bonus_points: 0,
            bonus_at_start: false,
            upgrade_points: ACE_UPGRADE_POINTS,
            thruster: None,
        },
    }
}
