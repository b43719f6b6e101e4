//! Enemy radio traffic: distress beacons and alert flares.

use raider_core::enums::EnemyKind;
use raider_core::events::{AlertSource, EnemyReport};

use crate::scene::Scene;
use crate::world_setup;

#[derive(Debug, Clone, Copy, Default)]
pub struct Comms;

impl Comms {
    /// A dying cargo ship leaves a distress beacon behind.
    pub fn on_enemy_killed(&self, scene: &mut Scene, enemy: &EnemyReport) {
        if enemy.kind == EnemyKind::Cargo {
            world_setup::spawn_beacon(scene, enemy.position);
        }
    }

    pub fn on_enemy_alerted(&self, scene: &mut Scene, source: &AlertSource) {
        world_setup::spawn_flare(scene, source.position);
    }

    /// Escapes light a flare but do not raise danger.
    pub fn on_enemy_escaped(&self, scene: &mut Scene, enemy: &EnemyReport) {
        world_setup::spawn_flare(scene, enemy.position);
    }
}
