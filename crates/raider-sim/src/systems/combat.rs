//! Damage application and death bookkeeping.
//!
//! Everything that hurts an entity goes through `strike`, which reaps
//! ships the moment their health runs out. Reaping is tied to a successful
//! scene removal, so an entity is announced dead at most once.

use hecs::Entity;

use raider_core::components::{Enemy, Ship, Spawned};
use raider_core::enums::{Actor, DamageKind};
use raider_core::events::{EnemyReport, GameEvent};
use raider_core::types::{Body, Health};

use crate::bus::Signal;
use crate::scene::Scene;
use crate::world_setup;

/// Apply `amount` of `kind` damage to `target`. Returns false if the target
/// has no health to damage (or is already gone).
pub fn strike(
    scene: &mut Scene,
    signal: &mut Signal,
    target: Entity,
    amount: i32,
    kind: DamageKind,
) -> bool {
    let depleted = match scene.world().get::<&mut Health>(target) {
        Ok(mut health) => {
            health.damage(amount, kind);
            log::trace!("{target:?} took {amount} {kind:?}, {} left", health.current);
            health.is_depleted()
        }
        Err(_) => return false,
    };
    if depleted {
        reap(scene, signal, target);
    }
    true
}

/// Remove a ship whose health has run out. Shields are left to their own
/// step.
pub fn reap(scene: &mut Scene, signal: &mut Signal, entity: Entity) {
    let actor = match scene.world().get::<&Spawned>(entity) {
        Ok(spawned) => spawned.actor,
        Err(_) => return,
    };
    match actor {
        Actor::Enemy => kill_enemy(scene, signal, entity),
        Actor::Player => wreck_player(scene, entity),
        _ => {}
    }
}

/// Remove an enemy and announce the kill.
pub fn kill_enemy(scene: &mut Scene, signal: &mut Signal, entity: Entity) {
    let Some(enemy) = enemy_report(scene, entity) else {
        return;
    };
    if scene.remove(entity) {
        log::debug!("{:?} #{} killed", enemy.kind, enemy.seq);
        signal.emit(scene, GameEvent::EnemyKilled { enemy });
    }
}

/// Remove an enemy that slipped off the bottom of the field.
pub fn escape_enemy(scene: &mut Scene, signal: &mut Signal, entity: Entity) {
    let Some(enemy) = enemy_report(scene, entity) else {
        return;
    };
    if scene.remove(entity) {
        log::debug!("{:?} #{} escaped", enemy.kind, enemy.seq);
        signal.emit(scene, GameEvent::EnemyEscaped { enemy });
    }
}

/// Swap the player's ship for a burning wreck. The wreck announces the
/// death when it burns out.
pub fn wreck_player(scene: &mut Scene, entity: Entity) {
    let Some(body) = scene.body(entity) else {
        return;
    };
    if scene.remove(entity) {
        log::info!("Player ship destroyed at {}", body.position);
        world_setup::spawn_wreck(scene, body.position);
    }
}

/// Collision damage `entity` deals on impact.
pub fn mass_of(scene: &Scene, entity: Entity) -> i32 {
    scene
        .world()
        .get::<&Ship>(entity)
        .map(|ship| ship.mass)
        .unwrap_or(0)
}

pub fn enemy_report(scene: &Scene, entity: Entity) -> Option<EnemyReport> {
    let world = scene.world();
    let seq = world.get::<&Spawned>(entity).ok()?.seq;
    let enemy = world.get::<&Enemy>(entity).ok()?;
    let body = world.get::<&Body>(entity).ok()?;
    Some(EnemyReport {
        seq,
        kind: enemy.kind,
        position: body.position,
        points: enemy.points(),
        upgrade_points: enemy.upgrade_points,
    })
}
