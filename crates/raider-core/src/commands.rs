//! Commands and input supplied by the host.
//!
//! Commands are queued and processed at the start of the next update pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::SpawnStrategyKind;

/// Per-session configuration carried by scene start/continue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub spawn_strategy: SpawnStrategyKind,
}

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// A new game scene has started.
    StartScene { config: SceneConfig },
    /// A paused scene has been returned to.
    ContinueScene { config: SceneConfig },
    /// Trigger pressed.
    Shoot,
    /// Reset the life counter and put a ship on the field.
    SetLives,
}

/// Read-only view of the analog controls, by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    values: BTreeMap<String, f32>,
}

impl Controls {
    pub const HORIZONTAL: &'static str = "horizontal";
    pub const VERTICAL: &'static str = "vertical";

    /// Controls with both steering axes set.
    pub fn steering(horizontal: f32, vertical: f32) -> Self {
        let mut controls = Self::default();
        controls.set(Self::HORIZONTAL, horizontal);
        controls.set(Self::VERTICAL, vertical);
        controls
    }

    pub fn set(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_string(), value);
    }

    /// Current value of a control; unknown controls read as zero.
    pub fn get(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }
}
