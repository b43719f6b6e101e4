//! Core types and definitions for the RAIDER simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, host commands, frame snapshots, events, and
//! tuning constants. It knows nothing about how a frame is scheduled.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
