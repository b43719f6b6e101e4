//! Steering rules for escorts and zeros, and the shared thruster curve.

use glam::Vec2;

use raider_core::constants::ESCORT_STATION_DISTANCE;
use raider_core::types::{normalized, scaled_to, DOWN};

/// What a sensor sweep knows about the player.
#[derive(Debug, Clone, Copy)]
pub struct Sighting {
    pub position: Vec2,
    pub heading: Vec2,
    pub speed: f32,
}

/// One frame of compounding acceleration, clamped at `max_speed`.
pub fn accelerate(speed: f32, factor: f32, max_speed: f32) -> f32 {
    if speed < max_speed {
        (speed * factor).min(max_speed)
    } else {
        speed
    }
}

/// Heading for an escort: keep station `ESCORT_STATION_DISTANCE` from the
/// charge, on the side the escort is already on, while still drifting down.
/// With nothing to escort, fly straight down.
pub fn escort_heading(position: Vec2, charge: Option<Vec2>) -> Vec2 {
    let Some(charge) = charge else {
        return DOWN;
    };
    let station = charge + scaled_to(position - charge, ESCORT_STATION_DISTANCE);
    let heading = normalized(DOWN + (station - position));
    if heading == Vec2::ZERO {
        DOWN
    } else {
        heading
    }
}

/// Where the player will be `lead_secs` from now if they hold course.
pub fn predicted_position(player: &Sighting, lead_secs: f32) -> Vec2 {
    player.position + player.heading * player.speed * lead_secs
}

/// Heading for a homing zero: at the predicted position, not the current one.
/// Keeps `current` when already sitting on the aim point.
pub fn intercept_heading(position: Vec2, current: Vec2, player: &Sighting, lead_secs: f32) -> Vec2 {
    let heading = normalized(predicted_position(player, lead_secs) - position);
    if heading == Vec2::ZERO {
        current
    } else {
        heading
    }
}
