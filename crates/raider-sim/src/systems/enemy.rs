//! Enemy behaviour engine.
//!
//! Every enemy runs the same baseline step: reap if dead, escape past the
//! bottom edge, move, then ram or sense the player. Each kind hooks into
//! that step through `EnemyBehavior`; the hooks run at fixed points so the
//! baseline always comes first.

use glam::Vec2;
use hecs::Entity;

use raider_ai::fire_control::{tick_ace, tick_volley};
use raider_ai::fsm::{self, AceContext};
use raider_ai::profiles::get_profile;
use raider_ai::steering::{accelerate, escort_heading, intercept_heading, Sighting};
use raider_core::components::{AceWeapons, Enemy, Escort, Spawned, Thruster};
use raider_core::constants::*;
use raider_core::enums::{DamageKind, EnemyKind, Faction};
use raider_core::events::{AlertSource, GameEvent};
use raider_core::types::{normalized, truncate, Body, Health};

use crate::bus::Signal;
use crate::scene::Scene;
use crate::systems::combat;
use crate::world_setup;

/// Per-kind hooks into the baseline step. All default to no-ops.
pub trait EnemyBehavior: Sync {
    /// Before movement: pick a heading.
    fn steer(&self, _scene: &mut Scene, _entity: Entity) {}

    /// The first frame the player is within sensor range.
    fn on_detect(&self, _scene: &mut Scene, _signal: &mut Signal, _entity: Entity) {}

    /// Every frame the player is within sensor range, detection frame included.
    fn track(&self, _scene: &mut Scene, _entity: Entity, _player: &Sighting) {}

    /// After the baseline step, if the enemy survived it.
    fn after_step(&self, _scene: &mut Scene, _signal: &mut Signal, _entity: Entity, _dt: f32) {}
}

struct Baseline;
struct PatrolBehavior;
struct CargoBehavior;
struct EscortBehavior;
struct ZeroBehavior;
struct AceBehavior;

pub fn behavior_for(kind: EnemyKind) -> &'static dyn EnemyBehavior {
    match kind {
        EnemyKind::Generic => &Baseline,
        EnemyKind::Patrol => &PatrolBehavior,
        EnemyKind::Cargo => &CargoBehavior,
        EnemyKind::Escort => &EscortBehavior,
        EnemyKind::Zero => &ZeroBehavior,
        EnemyKind::Ace => &AceBehavior,
    }
}

/// Run one frame for one enemy.
pub fn step(scene: &mut Scene, signal: &mut Signal, entity: Entity, dt: f32) {
    let (kind, sensor_distance, spotted) = match scene.world().get::<&Enemy>(entity) {
        Ok(enemy) => (enemy.kind, enemy.sensor_distance, enemy.player_spotted),
        Err(_) => return,
    };
    let dead = scene
        .world()
        .get::<&Health>(entity)
        .map(|h| h.is_depleted())
        .unwrap_or(false);
    if dead {
        combat::kill_enemy(scene, signal, entity);
        return;
    }
    let Some(body) = scene.body(entity) else {
        return;
    };
    if body.position.y <= ESCAPE_LINE {
        combat::escape_enemy(scene, signal, entity);
        return;
    }

    let behavior = behavior_for(kind);
    behavior.steer(scene, entity);
    let Some(body) = advance(scene, entity, dt) else {
        return;
    };

    if let Some(player) = scene.player() {
        if let Some(player_body) = scene.body(player) {
            if body.collides_with(&player_body) {
                let player_mass = combat::mass_of(scene, player);
                let mass = combat::mass_of(scene, entity);
                combat::strike(scene, signal, entity, player_mass, DamageKind::Collision);
                combat::strike(scene, signal, player, mass, DamageKind::Collision);
            } else if body.distance_to(&player_body) <= sensor_distance {
                if !spotted {
                    if let Ok(mut enemy) = scene.world().get::<&mut Enemy>(entity) {
                        enemy.player_spotted = true;
                    }
                    log::trace!("{kind:?} {entity:?} spotted the player");
                    behavior.on_detect(scene, signal, entity);
                }
                let sighting = Sighting {
                    position: player_body.position,
                    heading: player_body.heading,
                    speed: player_body.speed,
                };
                behavior.track(scene, entity, &sighting);
            }
        }
    }

    if scene.contains(entity) {
        behavior.after_step(scene, signal, entity, dt);
    }
}

fn advance(scene: &mut Scene, entity: Entity, dt: f32) -> Option<Body> {
    let mut body = scene.world().get::<&mut Body>(entity).ok()?;
    body.advance(dt);
    Some(*body)
}

fn is_spotted(scene: &Scene, entity: Entity) -> bool {
    scene
        .world()
        .get::<&Enemy>(entity)
        .map(|e| e.player_spotted)
        .unwrap_or(false)
}

fn set_bonus(scene: &mut Scene, entity: Entity, active: bool) {
    if let Ok(mut enemy) = scene.world().get::<&mut Enemy>(entity) {
        enemy.bonus_active = active;
    }
}

/// Compounding speed-up once the player has been seen.
fn thrust(scene: &mut Scene, entity: Entity) {
    if !is_spotted(scene, entity) {
        return;
    }
    let world = scene.world();
    let (Ok(thruster), Ok(mut body)) = (
        world.get::<&Thruster>(entity),
        world.get::<&mut Body>(entity),
    ) else {
        return;
    };
    body.speed = accelerate(body.speed, thruster.factor, thruster.max_speed);
}

fn player_position(scene: &Scene) -> Option<Vec2> {
    scene.player().and_then(|p| scene.body(p)).map(|b| b.position)
}

impl EnemyBehavior for Baseline {}

impl EnemyBehavior for PatrolBehavior {
    fn on_detect(&self, scene: &mut Scene, signal: &mut Signal, entity: Entity) {
        set_bonus(scene, entity, false);
        let (Some(seq), Some(body)) = (scene.seq(entity), scene.body(entity)) else {
            return;
        };
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

impl EnemyBehavior for CargoBehavior {
    fn after_step(&self, scene: &mut Scene, _signal: &mut Signal, entity: Entity, _dt: f32) {
        thrust(scene, entity);
    }
}

impl EnemyBehavior for ZeroBehavior {
    fn on_detect(&self, scene: &mut Scene, _signal: &mut Signal, entity: Entity) {
        set_bonus(scene, entity, true);
    }

    fn track(&self, scene: &mut Scene, entity: Entity, player: &Sighting) {
        if let Ok(mut body) = scene.world().get::<&mut Body>(entity) {
            body.heading = intercept_heading(body.position, body.heading, player, ZERO_LEAD_TIME);
        }
    }

    fn after_step(&self, scene: &mut Scene, _signal: &mut Signal, entity: Entity, _dt: f32) {
        thrust(scene, entity);
    }
}

impl EnemyBehavior for EscortBehavior {
    fn steer(&self, scene: &mut Scene, entity: Entity) {
        let current = scene
            .world()
            .get::<&Escort>(entity)
            .ok()
            .and_then(|e| e.escorting);
        let charge = current
            .filter(|&c| is_cargo(scene, c))
            .or_else(|| first_cargo(scene));

        let charge_position = charge.and_then(|c| scene.body(c)).map(|b| b.position);
        let world = scene.world();
        if let Ok(mut escort) = world.get::<&mut Escort>(entity) {
            escort.escorting = charge;
        }
        if let Ok(mut body) = world.get::<&mut Body>(entity) {
            body.heading = escort_heading(body.position, charge_position);
        }
    }

    fn after_step(&self, scene: &mut Scene, _signal: &mut Signal, entity: Entity, dt: f32) {
        let player = player_position(scene);
        let shot = match scene.world().get::<&mut Escort>(entity) {
            Ok(mut escort) => tick_volley(&mut escort.volley, dt, player),
            Err(_) => return,
        };
        let (Some(target), Some(body)) = (shot, scene.body(entity)) else {
            return;
        };
        world_setup::spawn_bullet(scene, body.position, target - body.position, Faction::Player);
    }
}

fn is_cargo(scene: &Scene, entity: Entity) -> bool {
    scene
        .world()
        .get::<&Enemy>(entity)
        .map(|e| e.kind == EnemyKind::Cargo)
        .unwrap_or(false)
}

/// Oldest cargo ship on the field.
fn first_cargo(scene: &Scene) -> Option<Entity> {
    let mut cargo: Vec<(u64, Entity)> = scene
        .world()
        .query::<(&Spawned, &Enemy)>()
        .iter()
        .filter(|(_, (_, enemy))| enemy.kind == EnemyKind::Cargo)
        .map(|(entity, (spawned, _))| (spawned.seq, entity))
        .collect();
    cargo.sort_unstable_by_key(|(seq, _)| *seq);
    cargo.first().map(|(_, entity)| *entity)
}

impl EnemyBehavior for AceBehavior {
    fn after_step(&self, scene: &mut Scene, _signal: &mut Signal, entity: Entity, dt: f32) {
        if !is_spotted(scene, entity) {
            return;
        }
        let Some(body) = scene.body(entity) else {
            return;
        };
        let health = scene
            .world()
            .get::<&Health>(entity)
            .map(|h| h.current)
            .unwrap_or(0);
        let player = player_position(scene);
        let maneuver = fsm::evaluate(
            &AceContext {
                position: body.position,
                player,
                health,
                max_health: get_profile(EnemyKind::Ace).health,
                attack_range: ACE_ATTACK_RANGE,
                max_thrust: ACE_MAX_THRUST,
            },
            body.heading,
            body.speed,
        );
        if let Ok(mut body) = scene.world().get::<&mut Body>(entity) {
            body.heading = maneuver.heading;
            body.speed = maneuver.speed;
        }

        let Some(player) = player.filter(|_| maneuver.weapons_free) else {
            return;
        };
        let salvo = match scene.world().get::<&mut AceWeapons>(entity) {
            Ok(mut weapons) => tick_ace(&mut weapons, dt),
            Err(_) => return,
        };
        let towards = player - body.position;
        let muzzle = body.position + truncate(towards, ACE_MUZZLE);
        if salvo.bullet {
            world_setup::spawn_bullet(scene, muzzle, towards, Faction::Player);
        }
        if salvo.drone {
            world_setup::spawn_drone(scene, muzzle, normalized(towards));
        }
    }
}
