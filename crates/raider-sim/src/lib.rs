//! Simulation engine for RAIDER.
//!
//! Owns the scene, runs the per-frame Update and Idle passes, and
//! produces `FrameSnapshot`s for the host.

pub mod bus;
pub mod director;
pub mod engine;
pub mod formations;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use raider_core as core;
