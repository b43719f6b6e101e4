//! Synchronous event bus.
//!
//! `Signal::emit` dispatches an event to the built-in reactive systems and
//! then to external subscribers before returning. Events raised while
//! handling are queued locally and dispatched by the same `emit` call, so
//! the caller sees every consequence of its event once `emit` returns.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;

use raider_core::events::{EventKind, GameEvent};

use crate::director::EnemyDirector;
use crate::scene::Scene;
use crate::systems::comms::Comms;
use crate::systems::drops::PowerUpDrops;
use crate::systems::lives::LifeCounter;
use crate::systems::player;
use crate::systems::scoring::Scoring;

type Handler = Box<dyn FnMut(&GameEvent)>;

/// External subscribers plus a journal of everything published this frame.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(EventKind, Handler)>,
    journal: Vec<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every event of `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        self.subscribers.push((kind, Box::new(handler)));
    }

    fn publish(&mut self, event: &GameEvent) {
        self.journal.push(event.clone());
        let kind = event.kind();
        for (wanted, handler) in &mut self.subscribers {
            if *wanted == kind {
                handler(event);
            }
        }
    }

    /// Events published since the last call.
    pub fn take_journal(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.journal)
    }
}

/// Session-scoped systems that react to events.
pub struct Reactors {
    pub director: EnemyDirector,
    pub comms: Comms,
    pub drops: PowerUpDrops,
    pub scoring: Scoring,
    pub lives: LifeCounter,
}

/// Everything an emitter needs to dispatch an event mid-frame.
pub struct Signal<'a> {
    pub reactors: &'a mut Reactors,
    pub bus: &'a mut EventBus,
    pub rng: &'a mut ChaCha8Rng,
}

impl Signal<'_> {
    pub fn emit(&mut self, scene: &mut Scene, event: GameEvent) {
        let mut pending = VecDeque::from([event]);
        while let Some(event) = pending.pop_front() {
            log::trace!("Dispatching {:?}", event.kind());
            self.route(scene, &event, &mut pending);
            self.bus.publish(&event);
        }
    }

    /// Built-in handlers, in a fixed order per event.
    fn route(&mut self, scene: &mut Scene, event: &GameEvent, pending: &mut VecDeque<GameEvent>) {
        let reactors = &mut *self.reactors;
        match event {
            GameEvent::EnemyKilled { enemy } => {
                reactors.scoring.on_enemy_killed(enemy);
                reactors.drops.on_enemy_killed(scene, self.rng, enemy);
                reactors.comms.on_enemy_killed(scene, enemy);
            }
            GameEvent::EnemyEscaped { enemy } => {
                reactors.comms.on_enemy_escaped(scene, enemy);
            }
            GameEvent::EnemyAlerted { source } => {
                reactors.director.alerted();
                reactors.comms.on_enemy_alerted(scene, source);
            }
            GameEvent::PlayerDied => {
                reactors.director.pause();
                pending.extend(reactors.lives.on_player_died());
            }
            GameEvent::PowerUp { kind } => {
                player::apply_power_up(scene, *kind);
            }
            GameEvent::GameOver => {
                reactors.scoring.on_game_over();
            }
            GameEvent::SpawnPlayer => {
                reactors.lives.on_spawn_player(scene);
            }
            GameEvent::SetLives => {
                reactors.lives.on_set_lives(scene);
            }
            GameEvent::ScoreChange { .. } | GameEvent::EnemiesClear => {}
        }
    }
}
