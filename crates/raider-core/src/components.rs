//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in the sim crate's
//! systems and the behaviour math in raider-ai.
//!
//! `Body` and `Health` (see `types.rs`) are components too: every actor
//! carries a `Body`, everything that can be shot carries a `Health`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Insertion stamp attached to every entity by the scene.
/// `seq` orders the update pass and identifies entities in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawned {
    pub seq: u64,
    pub actor: Actor,
}

/// Anything that rams for damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    /// Collision damage dealt to whatever this ship hits.
    pub mass: i32,
}

/// The player's ship and its upgrade levels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player {
    pub guns: u32,
    pub engines: u32,
}

/// Shared enemy state. Variant-specific state lives in its own component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Radius within which the player is detected.
    pub sensor_distance: f32,
    pub player_spotted: bool,
    pub base_points: u32,
    pub bonus_points: u32,
    /// Whether `bonus_points` would currently be awarded.
    pub bonus_active: bool,
    pub upgrade_points: u32,
}

/// Compounding speed-up once the player has been spotted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thruster {
    /// Multiplier applied to speed each frame.
    pub factor: f32,
    pub max_speed: f32,
}

/// Escort frigate state.
#[derive(Debug, Clone, Default)]
pub struct Escort {
    /// Cargo ship being shadowed. Not an owner: re-validated every frame.
    pub escorting: Option<hecs::Entity>,
    pub volley: Volley,
}

/// Fire-control timer for three-shot aimed volleys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Volley {
    /// Time since the last shot.
    pub cooldown_counter: f32,
    /// Time that must pass before the next shot.
    pub next_shot: f32,
    /// Aim points still to fire in the current volley, last one first.
    pub pending: Vec<Vec2>,
}

/// Ace weapon timers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AceWeapons {
    pub bullet_cooldown: f32,
    pub drone_cooldown: f32,
    /// Drones left before the salvo closes on a long cooldown.
    pub drones_remaining: u32,
}

/// A projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    /// Faction this bullet damages.
    pub target: Faction,
    /// Damage dealt on hit.
    pub intensity: i32,
    /// Hits every overlapping target in one frame instead of only the first.
    pub piercing: bool,
}

/// A damage-absorbing bubble following its parent ship.
#[derive(Debug, Clone, Copy)]
pub struct Shield {
    /// Not an owner: the shield drops when the parent is gone.
    pub parent: hecs::Entity,
    /// Damage dealt to an enemy that rams the shield.
    pub impact: i32,
}

/// A pickup granting the player an upgrade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// Distress beacon dropped by a dying cargo ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Beacon {
    pub life_secs: f32,
}

/// Harmless visual cue marking where an alert came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flare;

/// Burning remains of the player's ship. Announces the death when it burns out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wreck {
    pub remaining_secs: f32,
}

impl Enemy {
    /// Points awarded if this enemy died right now.
    pub fn points(&self) -> u32 {
        if self.bonus_active {
            self.base_points + self.bonus_points
        } else {
            self.base_points
        }
    }
}
