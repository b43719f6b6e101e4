//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy ship variants. Each selects a behaviour and a stat profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Bare enemy ship: one hit point, flies straight down.
    #[default]
    Generic,
    /// Fast scout. Worth a bonus if killed before it spots the player.
    Patrol,
    /// Slow freighter that bolts once it spots the player.
    Cargo,
    /// Frigate that shadows cargo ships and fires aimed volleys.
    Escort,
    /// Homing interceptor.
    Zero,
    /// Elite fighter that holds range, shoots, and launches drones.
    Ace,
}

/// Which side an entity fights for. Bullets carry the faction they damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// What a pickup grants the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Gun,
    Shield,
    Engine,
}

/// How a hit interacts with armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    /// Ship-to-ship impact. Armor subtracted once.
    Collision,
    /// Projectile hit. Armor subtracted twice.
    Bullet,
    /// Shield discharge. Ignores armor.
    Shield,
}

/// Spawn strategy requested by the scene for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnStrategyKind {
    /// No procedural spawning.
    #[default]
    None,
    /// Endless difficulty-gated formations.
    Endless,
}

/// Per-entity type tag used to dispatch the update pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Enemy,
    Bullet,
    Shield,
    PowerUp,
    Beacon,
    Flare,
    Wreck,
}

/// Session lifecycle as seen by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No scene started yet.
    #[default]
    Menu,
    /// A scene is running.
    Active,
    /// The last life has been lost. Entities keep moving.
    GameOver,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Gun, PowerUpKind::Shield, PowerUpKind::Engine];
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 6] = [
        EnemyKind::Generic,
        EnemyKind::Patrol,
        EnemyKind::Cargo,
        EnemyKind::Escort,
        EnemyKind::Zero,
        EnemyKind::Ace,
    ];
}
