//! RAIDER headless host.
//!
//! Runs the simulation on its own thread, drives it with a scripted pilot,
//! and reports what happened.

pub mod game_loop;
pub mod logging;
pub mod runner;
pub mod state;

pub use raider_core as core;
