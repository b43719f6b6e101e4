//! Entity spawn factories.
//!
//! Builds the component bundle for each actor type and hands it to the
//! scene.

use glam::Vec2;
use hecs::{Entity, EntityBuilder};

use raider_ai::fire_control::ace_weapons;
use raider_ai::profiles::get_profile;
use raider_core::components::*;
use raider_core::constants::*;
use raider_core::enums::*;
use raider_core::types::{Body, Health, DOWN, UP};

use crate::scene::Scene;

/// Spawn an enemy ship of `kind` flying straight down.
pub fn spawn_enemy(scene: &mut Scene, kind: EnemyKind, position: Vec2) -> Entity {
    let profile = get_profile(kind);

    let mut builder = EntityBuilder::new();
    builder
        .add(
            Body::new(position)
                .with_heading(DOWN)
                .with_speed(profile.speed)
                .with_size(profile.size),
        )
        .add(Health::new(profile.health).with_armor(profile.armor))
        .add(Ship { mass: SHIP_MASS })
        .add(Faction::Enemy)
        .add(Enemy {
            kind,
            sensor_distance: profile.sensor_distance,
            player_spotted: false,
            base_points: profile.base_points,
            bonus_points: profile.bonus_points,
            bonus_active: profile.bonus_at_start,
            upgrade_points: profile.upgrade_points,
        });

    if let Some((factor, max_speed)) = profile.thruster {
        builder.add(Thruster { factor, max_speed });
    }
    match kind {
        EnemyKind::Escort => {
            builder.add(Escort::default());
        }
        EnemyKind::Ace => {
            builder.add(ace_weapons());
        }
        _ => {}
    }

    scene.add(Actor::Enemy, builder.build())
}

/// Spawn a half-size zero launched by an ace.
pub fn spawn_drone(scene: &mut Scene, position: Vec2, heading: Vec2) -> Entity {
    let drone = spawn_enemy(scene, EnemyKind::Zero, position);
    if let Ok(mut body) = scene.world().get::<&mut Body>(drone) {
        body.size = DRONE_SIZE;
        *body = body.with_heading(heading);
    }
    drone
}

/// Spawn a fresh player ship at the bottom of the field.
pub fn spawn_player(scene: &mut Scene) -> Entity {
    scene.add(
        Actor::Player,
        (
            Body::new(Vec2::new(0.0, PLAYER_SPAWN_Y))
                .with_speed(PLAYER_BASE_SPEED)
                .with_size(SHIP_SIZE),
            Health::new(PLAYER_HEALTH),
            Ship { mass: SHIP_MASS },
            Faction::Player,
            Player::default(),
        ),
    )
}

/// Spawn a bullet that damages the first `target` it touches.
pub fn spawn_bullet(scene: &mut Scene, position: Vec2, heading: Vec2, target: Faction) -> Entity {
    add_bullet(scene, position, heading, target, false)
}

/// Spawn a bullet that damages every `target` it overlaps on the frame it
/// connects.
pub fn spawn_piercing_bullet(
    scene: &mut Scene,
    position: Vec2,
    heading: Vec2,
    target: Faction,
) -> Entity {
    add_bullet(scene, position, heading, target, true)
}

fn add_bullet(
    scene: &mut Scene,
    position: Vec2,
    heading: Vec2,
    target: Faction,
    piercing: bool,
) -> Entity {
    scene.add(
        Actor::Bullet,
        (
            Body::new(position)
                .with_heading(heading)
                .with_speed(BULLET_SPEED)
                .with_size(BULLET_SIZE),
            Bullet {
                target,
                intensity: BULLET_INTENSITY,
                piercing,
            },
        ),
    )
}

/// Spawn a shield bubble around `parent`.
pub fn spawn_shield(scene: &mut Scene, parent: Entity, position: Vec2) -> Entity {
    scene.add(
        Actor::Shield,
        (
            Body::new(position).with_size(SHIELD_SIZE),
            Health::new(SHIELD_HEALTH),
            Faction::Player,
            Shield {
                parent,
                impact: SHIELD_IMPACT,
            },
        ),
    )
}

pub fn spawn_powerup(scene: &mut Scene, kind: PowerUpKind, position: Vec2) -> Entity {
    scene.add(
        Actor::PowerUp,
        (
            Body::new(position)
                .with_heading(DOWN)
                .with_speed(POWERUP_SPEED)
                .with_size(POWERUP_SIZE),
            PowerUp { kind },
        ),
    )
}

pub fn spawn_beacon(scene: &mut Scene, position: Vec2) -> Entity {
    scene.add(
        Actor::Beacon,
        (
            Body::new(position)
                .with_heading(DOWN)
                .with_speed(BEACON_SPEED)
                .with_size(BEACON_SIZE),
            Beacon {
                life_secs: BEACON_LIFE_SECS,
            },
        ),
    )
}

pub fn spawn_flare(scene: &mut Scene, position: Vec2) -> Entity {
    scene.add(
        Actor::Flare,
        (
            Body::new(position)
                .with_heading(UP)
                .with_speed(FLARE_SPEED)
                .with_size(FLARE_SIZE),
            Flare,
        ),
    )
}

pub fn spawn_wreck(scene: &mut Scene, position: Vec2) -> Entity {
    scene.add(
        Actor::Wreck,
        (
            Body::new(position).with_size(WRECK_SIZE),
            Wreck {
                remaining_secs: PLAYER_WRECK_SECS,
            },
        ),
    )
}
