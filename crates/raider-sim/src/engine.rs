//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the scene, processes host commands, runs the
//! Update and Idle passes, and produces `FrameSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use raider_core::commands::{Controls, HostCommand, SceneConfig};
use raider_core::constants::PLAYER_STARTING_LIVES;
use raider_core::enums::{Actor, GamePhase};
use raider_core::events::{EventKind, GameEvent};
use raider_core::state::FrameSnapshot;
use raider_core::types::SimTime;

use crate::bus::{EventBus, Reactors, Signal};
use crate::director::EnemyDirector;
use crate::formations::{FormationCatalog, FormationError};
use crate::scene::Scene;
use crate::systems;
use crate::systems::comms::Comms;
use crate::systems::drops::PowerUpDrops;
use crate::systems::lives::LifeCounter;
use crate::systems::scoring::Scoring;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Lives granted by `SetLives`.
    pub lives: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            lives: PLAYER_STARTING_LIVES,
        }
    }
}

/// The simulation engine. Owns the scene and all session state.
pub struct SimulationEngine {
    scene: Scene,
    time: SimTime,
    started: bool,
    rng: ChaCha8Rng,
    controls: Controls,
    command_queue: VecDeque<HostCommand>,
    reactors: Reactors,
    bus: EventBus,
}

impl SimulationEngine {
    /// Create an engine with the built-in formation catalog.
    pub fn new(config: SimConfig) -> Result<Self, FormationError> {
        Ok(Self::with_catalog(config, FormationCatalog::standard()?))
    }

    pub fn with_catalog(config: SimConfig, catalog: FormationCatalog) -> Self {
        Self {
            scene: Scene::new(),
            time: SimTime::default(),
            started: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            controls: Controls::default(),
            command_queue: VecDeque::new(),
            reactors: Reactors {
                director: EnemyDirector::new(catalog),
                comms: Comms,
                drops: PowerUpDrops::new(),
                scoring: Scoring::new(),
                lives: LifeCounter::new(config.lives),
            },
            bus: EventBus::new(),
        }
    }

    /// Queue a host command for processing at the start of the next Update.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the analog control state read by the player's ship.
    pub fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    /// Call `handler` synchronously for every event of `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        self.bus.subscribe(kind, handler);
    }

    /// Run one full frame (Update then Idle) and return the resulting snapshot.
    pub fn frame(&mut self, dt: f32) -> FrameSnapshot {
        self.update(dt);
        self.idle(dt);
        if self.started {
            self.time.advance(dt);
        }
        let events = self.bus.take_journal();
        systems::snapshot::build_snapshot(&self.scene, &self.time, self.phase(), &self.reactors, events)
    }

    /// Update pass: host commands, then one step per live entity in
    /// insertion order. Entities added during the pass wait for the next
    /// frame; entities removed during it are skipped.
    pub fn update(&mut self, dt: f32) {
        self.process_commands();
        if !self.started {
            return;
        }

        let mut signal = Signal {
            reactors: &mut self.reactors,
            bus: &mut self.bus,
            rng: &mut self.rng,
        };
        for (entity, actor) in self.scene.snapshot() {
            if !self.scene.contains(entity) {
                continue;
            }
            let scene = &mut self.scene;
            match actor {
                Actor::Player => systems::player::step(scene, &mut signal, entity, &self.controls, dt),
                Actor::Enemy => systems::enemy::step(scene, &mut signal, entity, dt),
                Actor::Bullet => systems::bullets::step(scene, &mut signal, entity, dt),
                Actor::Shield => systems::shields::step(scene, &mut signal, entity),
                Actor::PowerUp => systems::pickups::step(scene, &mut signal, entity, dt),
                Actor::Beacon => systems::effects::step_beacon(scene, &mut signal, entity, dt),
                Actor::Flare => systems::effects::step_flare(scene, entity, dt),
                Actor::Wreck => systems::effects::step_wreck(scene, &mut signal, entity, dt),
            }
        }
    }

    /// Idle pass: director, respawn timer, score diff.
    pub fn idle(&mut self, dt: f32) {
        if !self.started {
            return;
        }
        let outcome = self
            .reactors
            .director
            .advance(&mut self.scene, &mut self.rng, dt);

        let mut signal = Signal {
            reactors: &mut self.reactors,
            bus: &mut self.bus,
            rng: &mut self.rng,
        };
        if outcome.cleared {
            signal.emit(&mut self.scene, GameEvent::EnemiesClear);
        }
        if let Some(event) = signal.reactors.lives.tick(dt) {
            signal.emit(&mut self.scene, event);
        }
        if let Some(score) = signal.reactors.scoring.take_change() {
            signal.emit(&mut self.scene, GameEvent::ScoreChange { score });
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::Menu
        } else if self.reactors.lives.is_game_over() {
            GamePhase::GameOver
        } else {
            GamePhase::Active
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn director(&self) -> &EnemyDirector {
        &self.reactors.director
    }

    pub fn scoring(&self) -> &Scoring {
        &self.reactors.scoring
    }

    pub fn lives(&self) -> &LifeCounter {
        &self.reactors.lives
    }

    pub fn drops(&self) -> &PowerUpDrops {
        &self.reactors.drops
    }

    /// Mutable scene access for tests that stage entities directly.
    #[cfg(test)]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Dispatch an event as if an entity had raised it.
    #[cfg(test)]
    pub fn emit(&mut self, event: GameEvent) {
        let mut signal = Signal {
            reactors: &mut self.reactors,
            bus: &mut self.bus,
            rng: &mut self.rng,
        };
        signal.emit(&mut self.scene, event);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::StartScene { config } => {
                self.scene.clear();
                self.reactors.scoring.start_session();
                self.reactors.drops = PowerUpDrops::new();
                self.reactors.lives.reset();
                self.time = SimTime::default();
                self.start(config);
                log::info!("Scene started with {:?}", config.spawn_strategy);
            }
            HostCommand::ContinueScene { config } => {
                self.start(config);
                log::info!("Scene continued with {:?}", config.spawn_strategy);
            }
            HostCommand::Shoot => {
                if self.started {
                    systems::player::shoot(&mut self.scene);
                }
            }
            HostCommand::SetLives => {
                if self.started {
                    let mut signal = Signal {
                        reactors: &mut self.reactors,
                        bus: &mut self.bus,
                        rng: &mut self.rng,
                    };
                    signal.emit(&mut self.scene, GameEvent::SetLives);
                }
            }
        }
    }

    fn start(&mut self, config: SceneConfig) {
        self.reactors.director.manage_strategy(config.spawn_strategy);
        self.started = true;
    }
}
