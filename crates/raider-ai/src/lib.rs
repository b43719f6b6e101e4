//! Enemy behaviour math for RAIDER.
//!
//! Stat profiles per enemy kind, steering rules, the ace's two-phase
//! state machine, and weapon timers. Pure functions over plain data;
//! the sim crate applies the results to the world.

pub mod fire_control;
pub mod fsm;
pub mod profiles;
pub mod steering;

pub use raider_core as core;

#[cfg(test)]
mod tests;
