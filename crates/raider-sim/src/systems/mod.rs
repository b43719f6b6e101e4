//! Systems that operate on the scene each frame.
//!
//! Per-entity steps run in the Update pass, one call per live entity in
//! insertion order. Reactive systems hold session state and are driven by
//! the bus and the Idle pass.

pub mod bullets;
pub mod combat;
pub mod comms;
pub mod drops;
pub mod effects;
pub mod enemy;
pub mod lives;
pub mod pickups;
pub mod player;
pub mod scoring;
pub mod shields;
pub mod snapshot;
