//! The player's ship: steering, trigger, and upgrades.

use glam::Vec2;
use hecs::Entity;

use raider_core::commands::Controls;
use raider_core::components::Player;
use raider_core::constants::*;
use raider_core::enums::{Actor, Faction, PowerUpKind};
use raider_core::types::{normalized, Body, Health, UP};

use crate::bus::Signal;
use crate::scene::Scene;
use crate::systems::combat;
use crate::world_setup;

/// Run one frame for the player's ship.
pub fn step(scene: &mut Scene, signal: &mut Signal, entity: Entity, controls: &Controls, dt: f32) {
    let dead = scene
        .world()
        .get::<&Health>(entity)
        .map(|h| h.is_depleted())
        .unwrap_or(false);
    if dead {
        combat::reap(scene, signal, entity);
        return;
    }
    let engines = match scene.world().get::<&Player>(entity) {
        Ok(player) => player.engines,
        Err(_) => return,
    };

    if let Ok(mut body) = scene.world().get::<&mut Body>(entity) {
        let steering = Vec2::new(
            controls.get(Controls::HORIZONTAL),
            controls.get(Controls::VERTICAL),
        );
        body.heading = normalized(steering);
        body.speed = speed_for(engines);
        body.advance(dt);
        body.position = clamp_to_field(body.position, body.size);
    }
}

pub fn speed_for(engines: u32) -> f32 {
    PLAYER_BASE_SPEED + engines as f32 * PLAYER_ENGINE_BONUS
}

fn clamp_to_field(position: Vec2, size: f32) -> Vec2 {
    let half = size / 2.0;
    Vec2::new(
        position.x.clamp(WORLD_LEFT + half, WORLD_RIGHT - half),
        position.y.clamp(WORLD_BOTTOM + half, WORLD_TOP - half),
    )
}

/// Fire one trigger pull: `2 * guns + 1` bullets fanned out across the
/// nose. Returns the number of bullets fired.
pub fn shoot(scene: &mut Scene) -> usize {
    let Some(entity) = scene.player() else {
        return 0;
    };
    let guns = match scene.world().get::<&Player>(entity) {
        Ok(player) => player.guns,
        Err(_) => return 0,
    };
    let Some(body) = scene.body(entity) else {
        return 0;
    };

    let nose = body.top_center();
    let count = 2 * guns + 1;
    for i in 0..count {
        let x = nose.x - PLAYER_GUN_SPACING * guns as f32 + PLAYER_GUN_SPACING * i as f32;
        world_setup::spawn_bullet(scene, Vec2::new(x, nose.y), UP, Faction::Enemy);
    }
    log::trace!("Player fired {count} bullets");
    count as usize
}

/// Apply a collected power-up to the player's ship.
pub fn apply_power_up(scene: &mut Scene, kind: PowerUpKind) {
    let Some(entity) = scene.player() else {
        return;
    };
    match kind {
        PowerUpKind::Gun | PowerUpKind::Engine => {
            if let Ok(mut player) = scene.world().get::<&mut Player>(entity) {
                let (level, max) = match kind {
                    PowerUpKind::Gun => (&mut player.guns, PLAYER_GUN_MAX),
                    _ => (&mut player.engines, PLAYER_ENGINE_MAX),
                };
                if *level < max {
                    *level += 1;
                }
            }
        }
        PowerUpKind::Shield => {
            if scene.count(Actor::Shield) > 0 {
                return;
            }
            if let Some(body) = scene.body(entity) {
                world_setup::spawn_shield(scene, entity, body.position);
            }
        }
    }
    log::info!("Power-up {kind:?} applied");
}
