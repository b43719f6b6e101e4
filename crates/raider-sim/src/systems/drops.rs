//! Power-up drops, paid out every so many kills.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use raider_core::constants::*;
use raider_core::enums::PowerUpKind;
use raider_core::events::EnemyReport;

use crate::scene::Scene;
use crate::world_setup;

#[derive(Debug, Clone)]
pub struct PowerUpDrops {
    /// Kills since the last drop.
    count: u32,
    /// Kills needed for the next drop.
    next_powerup: u32,
}

impl Default for PowerUpDrops {
    fn default() -> Self {
        Self {
            count: 0,
            next_powerup: POWERUP_FIRST_DROP,
        }
    }
}

impl PowerUpDrops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a kill, dropping a random power-up where the enemy died once
    /// enough kills have piled up. Returns the kind dropped, if any.
    pub fn on_enemy_killed(
        &mut self,
        scene: &mut Scene,
        rng: &mut ChaCha8Rng,
        enemy: &EnemyReport,
    ) -> Option<PowerUpKind> {
        self.count += 1;
        if self.count < self.next_powerup {
            return None;
        }
        let kind = *PowerUpKind::ALL.choose(rng)?;
        world_setup::spawn_powerup(scene, kind, enemy.position);
        self.count = 0;
        self.next_powerup = jitter(self.next_powerup, rng.gen_range(-POWERUP_JITTER..=POWERUP_JITTER));
        log::info!(
            "Dropped {kind:?} power-up, next after {} kills",
            self.next_powerup
        );
        Some(kind)
    }

    pub fn next_powerup(&self) -> u32 {
        self.next_powerup
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Shift the drop interval by `delta`, kept inside the allowed range.
pub fn jitter(interval: u32, delta: i32) -> u32 {
    let shifted = interval as i64 + delta as i64;
    shifted.clamp(POWERUP_MIN_INTERVAL as i64, POWERUP_MAX_INTERVAL as i64) as u32
}
