//! Short-lived actors: distress beacons, alert flares, and wrecks.

use hecs::Entity;

use raider_core::components::{Beacon, Wreck};
use raider_core::constants::*;
use raider_core::enums::Actor;
use raider_core::events::{AlertSource, GameEvent};
use raider_core::types::Body;

use crate::bus::Signal;
use crate::scene::Scene;

/// A beacon burns out after its lifetime, or alerts the first enemy ship
/// that comes close enough to pick it up.
pub fn step_beacon(scene: &mut Scene, signal: &mut Signal, entity: Entity, dt: f32) {
    let expired = match scene.world().get::<&mut Beacon>(entity) {
        Ok(mut beacon) => {
            beacon.life_secs -= dt;
            beacon.life_secs <= 0.0
        }
        Err(_) => return,
    };
    if expired {
        scene.remove(entity);
        return;
    }
    let Some(body) = advance(scene, entity, dt) else {
        return;
    };

    let heard = scene
        .actors(Actor::Enemy)
        .into_iter()
        .filter_map(|enemy| scene.body(enemy))
        .any(|enemy| enemy.distance_to(&body) < BEACON_PICKUP_RANGE);
    if !heard {
        return;
    }
    let Some(seq) = scene.seq(entity) else {
        return;
    };
    if scene.remove(entity) {
        log::debug!("Beacon #{seq} picked up");
        signal.emit(
            scene,
            GameEvent::EnemyAlerted {
                source: AlertSource {
                    seq,
                    position: body.position,
                },
            },
        );
    }
}

/// Flares rise until they leave the field.
pub fn step_flare(scene: &mut Scene, entity: Entity, dt: f32) {
    let Some(body) = advance(scene, entity, dt) else {
        return;
    };
    if body.position.y > WORLD_TOP || body.position.y < WORLD_BOTTOM {
        scene.remove(entity);
    }
}

/// A wreck announces the player's death when it burns out.
pub fn step_wreck(scene: &mut Scene, signal: &mut Signal, entity: Entity, dt: f32) {
    let burnt_out = match scene.world().get::<&mut Wreck>(entity) {
        Ok(mut wreck) => {
            wreck.remaining_secs -= dt;
            wreck.remaining_secs <= 0.0
        }
        Err(_) => return,
    };
    if burnt_out && scene.remove(entity) {
        log::info!("Player died");
        signal.emit(scene, GameEvent::PlayerDied);
    }
}

fn advance(scene: &mut Scene, entity: Entity, dt: f32) -> Option<Body> {
    let mut body = scene.world().get::<&mut Body>(entity).ok()?;
    body.advance(dt);
    Some(*body)
}
