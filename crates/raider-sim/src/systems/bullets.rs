//! Projectile movement and hits.

use hecs::Entity;

use raider_core::components::Bullet;
use raider_core::constants::*;
use raider_core::enums::DamageKind;
use raider_core::types::Body;

use crate::bus::Signal;
use crate::scene::Scene;
use crate::systems::combat;

/// Run one frame for one bullet.
///
/// A bullet that leaves the field vanishes without effect. Otherwise it
/// moves, damages the first overlapping member of its target faction (or
/// every one, if piercing), and is removed after any hit.
pub fn step(scene: &mut Scene, signal: &mut Signal, entity: Entity, dt: f32) {
    let bullet = match scene.world().get::<&Bullet>(entity) {
        Ok(bullet) => *bullet,
        Err(_) => return,
    };
    let Some(body) = scene.body(entity) else {
        return;
    };
    if out_of_bounds(&body) {
        scene.remove(entity);
        return;
    }

    let body = match scene.world().get::<&mut Body>(entity) {
        Ok(mut body) => {
            body.advance(dt);
            *body
        }
        Err(_) => return,
    };

    let mut hit = false;
    for target in scene.members(bullet.target) {
        let Some(target_body) = scene.body(target) else {
            continue;
        };
        if body.collides_with(&target_body) {
            combat::strike(scene, signal, target, bullet.intensity, DamageKind::Bullet);
            hit = true;
            if !bullet.piercing {
                break;
            }
        }
    }
    if hit {
        scene.remove(entity);
    }
}

fn out_of_bounds(body: &Body) -> bool {
    let p = body.position;
    p.y > WORLD_TOP || p.y < WORLD_BOTTOM || p.x < WORLD_LEFT - WORLD_WIDTH || p.x > WORLD_RIGHT + WORLD_WIDTH
}
