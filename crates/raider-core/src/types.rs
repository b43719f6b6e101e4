//! Fundamental geometric and simulation types.
//!
//! World units: the playfield is `WORLD_WIDTH` wide and `WORLD_HEIGHT`
//! tall, centred on the origin, with +y pointing up the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::DamageKind;

/// Straight down the screen, the direction every enemy flies by default.
pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);

/// Straight up the screen, the direction player bullets fly.
pub const UP: Vec2 = Vec2::new(0.0, 1.0);

/// Position, heading and extent of any actor in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    /// Unit vector, or zero when standing still.
    pub heading: Vec2,
    /// World units per second along `heading`.
    pub speed: f32,
    /// Side length of the square bounding box.
    pub size: f32,
}

/// Hit points plus the flat reduction applied before they are lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub armor: i32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame number (increments by 1 each frame).
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Body {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            heading: Vec2::ZERO,
            speed: 0.0,
            size: 1.0,
        }
    }

    pub fn with_heading(mut self, heading: Vec2) -> Self {
        self.heading = normalized(heading);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Integrate one step: `position += heading * speed * dt`.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.heading * self.speed * dt;
    }

    pub fn collides_with(&self, other: &Body) -> bool {
        collides(self, other)
    }

    pub fn distance_to(&self, other: &Body) -> f32 {
        self.position.distance(other.position)
    }

    /// Midpoint of the top edge of the bounding box.
    pub fn top_center(&self) -> Vec2 {
        self.position + Vec2::new(0.0, self.size / 2.0)
    }
}

impl Health {
    pub fn new(current: i32) -> Self {
        Self { current, armor: 0 }
    }

    pub fn with_armor(mut self, armor: i32) -> Self {
        self.armor = armor;
        self
    }

    /// Net loss after armor for a hit of `amount`. Never negative.
    pub fn mitigated(&self, amount: i32, kind: DamageKind) -> i32 {
        let reduction = match kind {
            DamageKind::Collision => self.armor,
            DamageKind::Bullet => self.armor * 2,
            DamageKind::Shield => 0,
        };
        (amount - reduction).max(0)
    }

    /// Apply a hit. Health may go negative; deciding what "dead" means is
    /// left to whoever owns the entity.
    pub fn damage(&mut self, amount: i32, kind: DamageKind) {
        self.current -= self.mitigated(amount, kind);
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += f64::from(dt);
    }
}

/// Square-bound overlap test: both axis gaps must be under the mean size.
pub fn collides(a: &Body, b: &Body) -> bool {
    let half = (a.size + b.size) / 2.0;
    (a.position.x - b.position.x).abs() < half && (a.position.y - b.position.y).abs() < half
}

/// Unit vector in the direction of `v`, or zero when `v` has no length.
pub fn normalized(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// `v` with its length capped at `max`.
pub fn truncate(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}

/// `v` rescaled to exactly `length` (zero stays zero).
pub fn scaled_to(v: Vec2, length: f32) -> Vec2 {
    normalized(v) * length
}
