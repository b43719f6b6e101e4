//! Shield bubbles.

use hecs::Entity;

use raider_core::components::Shield;
use raider_core::enums::{Actor, DamageKind};
use raider_core::types::{Body, Health};

use crate::bus::Signal;
use crate::scene::Scene;
use crate::systems::combat;

/// Run one frame for one shield: follow the parent, discharge into the
/// first enemy ship it touches, and drop once depleted or orphaned.
pub fn step(scene: &mut Scene, signal: &mut Signal, entity: Entity) {
    let shield = match scene.world().get::<&Shield>(entity) {
        Ok(shield) => *shield,
        Err(_) => return,
    };
    let Some(parent) = scene.body(shield.parent) else {
        log::debug!("Shield {entity:?} lost its parent");
        scene.remove(entity);
        return;
    };
    if depleted(scene, entity) {
        drop_shield(scene, entity);
        return;
    }

    let body = match scene.world().get::<&mut Body>(entity) {
        Ok(mut body) => {
            body.position = parent.position;
            *body
        }
        Err(_) => return,
    };

    for enemy in scene.actors(Actor::Enemy) {
        let Some(enemy_body) = scene.body(enemy) else {
            continue;
        };
        if body.collides_with(&enemy_body) {
            let mass = combat::mass_of(scene, enemy);
            combat::strike(scene, signal, enemy, shield.impact, DamageKind::Shield);
            combat::strike(scene, signal, entity, mass, DamageKind::Collision);
            break;
        }
    }

    if depleted(scene, entity) {
        drop_shield(scene, entity);
    }
}

fn depleted(scene: &Scene, entity: Entity) -> bool {
    scene
        .world()
        .get::<&Health>(entity)
        .map(|h| h.is_depleted())
        .unwrap_or(true)
}

fn drop_shield(scene: &mut Scene, entity: Entity) {
    if scene.remove(entity) {
        log::debug!("Shield {entity:?} down");
    }
}
