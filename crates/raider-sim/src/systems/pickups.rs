//! Power-up pickups drifting down the field.

use hecs::Entity;

use raider_core::components::PowerUp;
use raider_core::constants::WORLD_BOTTOM;
use raider_core::events::GameEvent;
use raider_core::types::Body;

use crate::bus::Signal;
use crate::scene::Scene;

/// Run one frame for one pickup. Touching the player consumes it.
pub fn step(scene: &mut Scene, signal: &mut Signal, entity: Entity, dt: f32) {
    let kind = match scene.world().get::<&PowerUp>(entity) {
        Ok(powerup) => powerup.kind,
        Err(_) => return,
    };
    let body = match scene.world().get::<&mut Body>(entity) {
        Ok(mut body) => {
            body.advance(dt);
            *body
        }
        Err(_) => return,
    };

    if let Some(player) = scene.player().and_then(|p| scene.body(p)) {
        if in_reach(&body, &player) {
            log::debug!("Picked up {kind:?}");
            scene.remove(entity);
            signal.emit(scene, GameEvent::PowerUp { kind });
            return;
        }
    }

    if body.position.y < WORLD_BOTTOM - body.size {
        scene.remove(entity);
    }
}

/// Centres closer than the mean of the two sizes.
pub fn in_reach(pickup: &Body, player: &Body) -> bool {
    pickup.distance_to(player) * 2.0 < pickup.size + player.size
}
