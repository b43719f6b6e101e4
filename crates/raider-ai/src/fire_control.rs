//! Weapon timers for escorts and aces.

use glam::Vec2;

use raider_core::components::{AceWeapons, Volley};
use raider_core::constants::*;

/// What an ace launches this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AceSalvo {
    pub bullet: bool,
    pub drone: bool,
}

/// Advance an escort's volley timer. Returns the aim point of the shot to
/// fire this frame, if any.
///
/// Aim points are captured once, at the first shot of a volley, so all three
/// shots go where the player was when the volley opened. Without a player
/// and with nothing queued the timer keeps running and the volley opens as
/// soon as a player appears.
pub fn tick_volley(volley: &mut Volley, dt: f32, player: Option<Vec2>) -> Option<Vec2> {
    volley.cooldown_counter += dt;
    if volley.cooldown_counter < volley.next_shot {
        return None;
    }
    if volley.pending.is_empty() {
        let player = player?;
        let spread = Vec2::new(0.0, ESCORT_VOLLEY_SPREAD);
        volley.pending = vec![player + spread, player, player - spread];
    }
    let target = volley.pending.pop()?;
    volley.cooldown_counter = 0.0;
    volley.next_shot = if volley.pending.is_empty() {
        ESCORT_VOLLEY_COOLDOWN
    } else {
        ESCORT_VOLLEY_PAUSE
    };
    Some(target)
}

/// Weapon state for a freshly spawned ace.
pub fn ace_weapons() -> AceWeapons {
    AceWeapons {
        bullet_cooldown: ACE_BULLET_COOLDOWN,
        drone_cooldown: ACE_DRONE_COOLDOWN,
        drones_remaining: ACE_DRONE_SALVO,
    }
}

/// Advance the ace's two weapon timers.
///
/// The drone launcher fires `ACE_DRONE_SALVO` drones on the short gap, then
/// one closing drone that refills the count and starts the long cooldown.
pub fn tick_ace(weapons: &mut AceWeapons, dt: f32) -> AceSalvo {
    let mut salvo = AceSalvo::default();

    if weapons.bullet_cooldown <= 0.0 {
        salvo.bullet = true;
        weapons.bullet_cooldown = ACE_BULLET_COOLDOWN;
    } else {
        weapons.bullet_cooldown -= dt;
    }

    if weapons.drone_cooldown <= 0.0 {
        salvo.drone = true;
        if weapons.drones_remaining > 0 {
            weapons.drones_remaining -= 1;
            weapons.drone_cooldown = ACE_DRONE_SALVO_GAP;
        } else {
            weapons.drones_remaining = ACE_DRONE_SALVO;
            weapons.drone_cooldown = ACE_DRONE_COOLDOWN;
        }
    } else {
        weapons.drone_cooldown -= dt;
    }

    salvo
}
