//! Encounter director: decides when and what to spawn.
//!
//! The director is session-scoped. `manage_strategy` replaces its strategy
//! whenever a scene starts or continues; everything else is driven by the
//! Idle pass and by bus events.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use raider_core::constants::*;
use raider_core::enums::SpawnStrategyKind;
use raider_core::state::DirectorView;

use crate::formations::{Formation, FormationCatalog};
use crate::scene::Scene;
use crate::world_setup;

/// Live-enemy cap at a given danger level.
pub fn maximum_ships(danger: u32) -> usize {
    (danger / 9) as usize
}

/// Enemy count the field is expected to hold at a given danger level.
pub fn minimum_ships(danger: u32) -> usize {
    (danger / 10) as usize
}

/// State of an endless session.
#[derive(Debug, Clone, PartialEq)]
pub struct EndlessStrategy {
    /// Time since the session began.
    pub counter: f32,
    pub next_spawn_time: f32,
    pub danger: u32,
    /// Time since danger last went up on its own.
    pub danger_counter: f32,
    pub paused: bool,
}

impl Default for EndlessStrategy {
    fn default() -> Self {
        Self {
            counter: 0.0,
            next_spawn_time: DIRECTOR_FIRST_SPAWN_SECS,
            danger: DIRECTOR_START_DANGER,
            danger_counter: 0.0,
            paused: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SpawnStrategy {
    /// No spawning. Every operation is a no-op.
    #[default]
    Inactive,
    Endless(EndlessStrategy),
}

/// What one `advance` call did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorOutcome {
    /// Names of the formations spawned, in order.
    pub spawned: Vec<String>,
    /// The director was paused, saw an empty field, and resumed.
    pub cleared: bool,
}

pub struct EnemyDirector {
    catalog: FormationCatalog,
    strategy: SpawnStrategy,
}

impl EnemyDirector {
    pub fn new(catalog: FormationCatalog) -> Self {
        Self {
            catalog,
            strategy: SpawnStrategy::Inactive,
        }
    }

    /// Start a fresh strategy of the requested kind.
    pub fn manage_strategy(&mut self, kind: SpawnStrategyKind) {
        self.strategy = match kind {
            SpawnStrategyKind::None => SpawnStrategy::Inactive,
            SpawnStrategyKind::Endless => SpawnStrategy::Endless(EndlessStrategy::default()),
        };
        log::info!("Spawn strategy set to {kind:?}");
    }

    /// Run one Idle step of the current strategy.
    pub fn advance(&mut self, scene: &mut Scene, rng: &mut ChaCha8Rng, dt: f32) -> DirectorOutcome {
        let mut outcome = DirectorOutcome::default();
        let SpawnStrategy::Endless(state) = &mut self.strategy else {
            return outcome;
        };

        if state.paused {
            if scene.enemy_count() == 0 {
                state.paused = false;
                outcome.cleared = true;
                log::info!("Field clear, spawning resumes at danger {}", state.danger);
            }
            return outcome;
        }

        state.counter += dt;
        state.danger_counter += dt;

        while state.counter >= state.next_spawn_time
            && scene.enemy_count() < maximum_ships(state.danger)
        {
            if let Some(formation) = self.catalog.select(state.danger, rng) {
                let origin = spawn_formation(scene, formation, rng);
                log::info!(
                    "Spawned formation {:?} at danger {} (x = {:.2})",
                    formation.name(),
                    state.danger,
                    origin.x
                );
                outcome.spawned.push(formation.name().to_string());
            }
            state.next_spawn_time += DIRECTOR_SPAWN_INTERVAL;
        }

        if state.danger_counter >= DIRECTOR_DANGER_PERIOD {
            state.danger += 1;
            state.danger_counter = 0.0;
            log::info!("Danger rises to {}", state.danger);
        }

        outcome
    }

    /// Stop spawning until the field is clear.
    pub fn pause(&mut self) {
        if let SpawnStrategy::Endless(state) = &mut self.strategy {
            state.paused = true;
            log::info!("Spawning paused");
        }
    }

    /// An enemy (or beacon) reported the player.
    pub fn alerted(&mut self) {
        if let SpawnStrategy::Endless(state) = &mut self.strategy {
            state.danger += 1;
            log::debug!("Alert raised danger to {}", state.danger);
        }
    }

    /// Current danger, or `None` outside an endless session.
    pub fn danger(&self) -> Option<u32> {
        match &self.strategy {
            SpawnStrategy::Endless(state) => Some(state.danger),
            SpawnStrategy::Inactive => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(&self.strategy, SpawnStrategy::Endless(state) if state.paused)
    }

    pub fn strategy(&self) -> &SpawnStrategy {
        &self.strategy
    }

    pub fn catalog(&self) -> &FormationCatalog {
        &self.catalog
    }

    pub fn view(&self) -> DirectorView {
        DirectorView {
            strategy: match self.strategy {
                SpawnStrategy::Inactive => SpawnStrategyKind::None,
                SpawnStrategy::Endless(_) => SpawnStrategyKind::Endless,
            },
            danger: self.danger(),
            paused: self.is_paused(),
        }
    }
}

/// Place every ship of `formation` at the top of the world, at a random x
/// that keeps the whole spread on screen. Returns the formation origin.
pub fn spawn_formation(scene: &mut Scene, formation: &Formation, rng: &mut ChaCha8Rng) -> Vec2 {
    let spread = formation.spread();
    let min_x = WORLD_LEFT + spread / 2.0;
    let x = min_x + rng.gen::<f32>() * (WORLD_WIDTH - spread);
    let origin = Vec2::new(x, WORLD_TOP);
    for (kind, offset) in formation.ships() {
        world_setup::spawn_enemy(scene, kind, origin + offset);
    }
    origin
}
