//! Frame snapshot: the visible state handed back to the host each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete state summary produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub director: DirectorView,
    pub score: ScoreView,
    pub lives: u32,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    /// Live projectiles of either faction.
    pub bullets: usize,
    pub powerups: usize,
    /// Every event published during this frame, in dispatch order.
    pub events: Vec<GameEvent>,
}

/// Spawn director status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DirectorView {
    pub strategy: SpawnStrategyKind,
    /// `None` while no endless session is running.
    pub danger: Option<u32>,
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub high_score: u32,
    /// Upgrade points banked from kills.
    pub upgrades: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub health: i32,
    pub guns: u32,
    pub engines: u32,
    pub shielded: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub seq: u64,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: i32,
    pub player_spotted: bool,
}
