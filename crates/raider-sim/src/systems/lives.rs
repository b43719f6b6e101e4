//! Life counter and respawn timer.

use raider_core::constants::PLAYER_RESPAWN_SECS;
use raider_core::events::GameEvent;

use crate::scene::Scene;
use crate::world_setup;

#[derive(Debug, Clone)]
pub struct LifeCounter {
    starting_lives: u32,
    lives: u32,
    /// Seconds until the next ship appears, while one is on the way.
    respawn_in: Option<f32>,
    game_over: bool,
}

impl LifeCounter {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            starting_lives,
            lives: starting_lives,
            respawn_in: None,
            game_over: false,
        }
    }

    /// Back to a full set of lives with no respawn pending.
    pub fn reset(&mut self) {
        self.lives = self.starting_lives;
        self.respawn_in = None;
        self.game_over = false;
    }

    /// Reset and put a ship on the field.
    pub fn on_set_lives(&mut self, scene: &mut Scene) {
        self.reset();
        log::info!("Lives set to {}", self.lives);
        spawn_if_missing(scene);
    }

    /// Lose a life. Returns `GameOver` once the last one is gone.
    pub fn on_player_died(&mut self) -> Option<GameEvent> {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.respawn_in = Some(PLAYER_RESPAWN_SECS);
            log::info!("{} lives left", self.lives);
            None
        } else {
            self.respawn_in = None;
            self.game_over = true;
            log::info!("Game over");
            Some(GameEvent::GameOver)
        }
    }

    pub fn on_spawn_player(&mut self, scene: &mut Scene) {
        spawn_if_missing(scene);
    }

    /// Run the respawn timer. Returns `SpawnPlayer` when it runs out.
    pub fn tick(&mut self, dt: f32) -> Option<GameEvent> {
        let remaining = self.respawn_in.as_mut()?;
        *remaining -= dt;
        if *remaining > 0.0 {
            return None;
        }
        self.respawn_in = None;
        Some(GameEvent::SpawnPlayer)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn respawn_pending(&self) -> bool {
        self.respawn_in.is_some()
    }
}

fn spawn_if_missing(scene: &mut Scene) {
    if scene.player().is_none() {
        world_setup::spawn_player(scene);
    }
}
