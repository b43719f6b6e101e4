//! Ace behaviour state machine.
//!
//! Pure functions that pick the ace's phase from its health and compute the
//! resulting heading and speed over plain data.

use glam::Vec2;

use raider_core::constants::*;
use raider_core::types::{normalized, scaled_to, DOWN};

/// The two phases of an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcePhase {
    /// Holding at attack range with weapons free.
    Attack,
    /// Below half health: diving off the bottom of the screen, weapons cold.
    Retreat,
}

/// Input to the ace FSM.
pub struct AceContext {
    pub position: Vec2,
    /// `None` when there is no player on the field.
    pub player: Option<Vec2>,
    pub health: i32,
    pub max_health: i32,
    pub attack_range: f32,
    pub max_thrust: f32,
}

/// Output from the ace FSM.
#[derive(Debug, Clone, Copy)]
pub struct AceManeuver {
    pub phase: AcePhase,
    pub heading: Vec2,
    pub speed: f32,
    /// Weapons may fire this frame.
    pub weapons_free: bool,
}

pub fn phase_for(health: i32, max_health: i32) -> AcePhase {
    if health * 2 > max_health {
        AcePhase::Attack
    } else {
        AcePhase::Retreat
    }
}

/// Evaluate the FSM for one ace. The current heading and speed are kept when an
/// attacking ace has no player to position against.
pub fn evaluate(ctx: &AceContext, current_heading: Vec2, current_speed: f32) -> AceManeuver {
    match phase_for(ctx.health, ctx.max_health) {
        AcePhase::Retreat => AceManeuver {
            phase: AcePhase::Retreat,
            heading: DOWN,
            speed: ctx.max_thrust,
            weapons_free: false,
        },
        AcePhase::Attack => match ctx.player {
            Some(player) => {
                let force = attack_force(ctx.position, player, ctx.attack_range, ctx.max_thrust);
                AceManeuver {
                    phase: AcePhase::Attack,
                    heading: normalized(force),
                    // Net force magnitude, uncapped.
                    speed: force.length(),
                    weapons_free: true,
                }
            }
            None => AceManeuver {
                phase: AcePhase::Attack,
                heading: current_heading,
                speed: current_speed,
                weapons_free: false,
            },
        },
    }
}

/// Sum of the forces holding an ace at `attack_range` from the player and
/// away from the side walls.
///
/// The push away from the player is constant at `max_thrust`; the pull
/// toward the player grows linearly with distance and equals `max_thrust`
/// exactly at `attack_range`, so the two cancel there.
pub fn attack_force(position: Vec2, player: Vec2, attack_range: f32, max_thrust: f32) -> Vec2 {
    let towards = player - position;
    let mut force = scaled_to(-towards, max_thrust);
    force += scaled_to(towards, towards.length() / attack_range * max_thrust);
    force + edge_force(position.x)
}

/// Quadratic push back toward the middle near either side wall.
pub fn edge_force(x: f32) -> Vec2 {
    let avoid_left = ((WORLD_LEFT + ACE_EDGE_MARGIN) - x).max(0.0);
    let avoid_right = (x - (WORLD_RIGHT - ACE_EDGE_MARGIN)).max(0.0);
    Vec2::new(avoid_left * avoid_left - avoid_right * avoid_right, 0.0)
}
