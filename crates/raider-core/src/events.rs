//! Events published on the bus during a frame.
//!
//! Entities are identified by their spawn sequence number, which stays
//! meaningful after the entity itself has left the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// What is known about an enemy at the moment it left the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyReport {
    pub seq: u64,
    pub kind: EnemyKind,
    pub position: Vec2,
    /// Point value at the time of death or escape.
    pub points: u32,
    pub upgrade_points: u32,
}

/// Whatever raised an alert: an enemy ship or a distress beacon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertSource {
    pub seq: u64,
    pub position: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemyKilled { enemy: EnemyReport },
    EnemyEscaped { enemy: EnemyReport },
    EnemyAlerted { source: AlertSource },
    PlayerDied,
    PowerUp { kind: PowerUpKind },
    ScoreChange { score: u32 },
    /// The director saw the field empty after a pause and resumed spawning.
    EnemiesClear,
    GameOver,
    SpawnPlayer,
    SetLives,
}

/// Event names, for subscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    EnemyKilled,
    EnemyEscaped,
    EnemyAlerted,
    PlayerDied,
    PowerUp,
    ScoreChange,
    EnemiesClear,
    GameOver,
    SpawnPlayer,
    SetLives,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::EnemyKilled { .. } => EventKind::EnemyKilled,
            GameEvent::EnemyEscaped { .. } => EventKind::EnemyEscaped,
            GameEvent::EnemyAlerted { .. } => EventKind::EnemyAlerted,
            GameEvent::PlayerDied => EventKind::PlayerDied,
            GameEvent::PowerUp { .. } => EventKind::PowerUp,
            GameEvent::ScoreChange { .. } => EventKind::ScoreChange,
            GameEvent::EnemiesClear => EventKind::EnemiesClear,
            GameEvent::GameOver => EventKind::GameOver,
            GameEvent::SpawnPlayer => EventKind::SpawnPlayer,
            GameEvent::SetLives => EventKind::SetLives,
        }
    }
}
