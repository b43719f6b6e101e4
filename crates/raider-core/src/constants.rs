//! Simulation constants and tuning parameters.

// --- World bounds ---

/// Playfield width in world units.
pub const WORLD_WIDTH: f32 = 10.0;

/// Playfield height in world units.
pub const WORLD_HEIGHT: f32 = 20.0;

/// Left edge (x).
pub const WORLD_LEFT: f32 = -WORLD_WIDTH / 2.0;

/// Right edge (x).
pub const WORLD_RIGHT: f32 = WORLD_WIDTH / 2.0;

/// Top edge (y). Formations spawn here.
pub const WORLD_TOP: f32 = WORLD_HEIGHT / 2.0;

/// Bottom edge (y).
pub const WORLD_BOTTOM: f32 = -WORLD_HEIGHT / 2.0;

/// Enemies at or below this y have slipped past the player.
pub const ESCAPE_LINE: f32 = WORLD_BOTTOM - 1.0;

// --- Ships ---

/// Collision damage every ship deals on impact.
pub const SHIP_MASS: i32 = 100;

/// Default side length of a ship's bounding box.
pub const SHIP_SIZE: f32 = 1.0;

// --- Player ---

pub const PLAYER_HEALTH: i32 = 20;
pub const PLAYER_BASE_SPEED: f32 = 3.0;

/// Speed added per engine upgrade.
pub const PLAYER_ENGINE_BONUS: f32 = 1.5;
pub const PLAYER_ENGINE_MAX: u32 = 3;
pub const PLAYER_GUN_MAX: u32 = 3;

/// Where a fresh player ship appears.
pub const PLAYER_SPAWN_Y: f32 = -9.0;

/// Horizontal spacing between bullets of one trigger pull.
pub const PLAYER_GUN_SPACING: f32 = 0.5;

/// Delay between the player's ship exploding and `PlayerDied`.
pub const PLAYER_WRECK_SECS: f32 = 0.25;
pub const WRECK_SIZE: f32 = 2.0;

pub const PLAYER_STARTING_LIVES: u32 = 3;

/// Delay between losing a life and the replacement ship appearing.
pub const PLAYER_RESPAWN_SECS: f32 = 1.0;

// --- Bullets ---

pub const BULLET_SIZE: f32 = 0.25;
pub const BULLET_SPEED: f32 = 10.0;
pub const BULLET_INTENSITY: i32 = 5;

// --- Shield ---

pub const SHIELD_SIZE: f32 = 2.0;
pub const SHIELD_HEALTH: i32 = 15;

/// Damage dealt to an enemy that rams the shield.
pub const SHIELD_IMPACT: i32 = 1000;

// --- Generic enemy ---

pub const ENEMY_HEALTH: i32 = 1;
pub const ENEMY_SPEED: f32 = 3.0;
pub const ENEMY_SENSOR_DISTANCE: f32 = 1.0;
pub const ENEMY_POINTS: u32 = 1;
pub const ENEMY_UPGRADE_POINTS: u32 = 1;

// --- Patrol ---

pub const PATROL_HEALTH: i32 = 15;
pub const PATROL_SPEED: f32 = 5.0;
pub const PATROL_SENSOR_DISTANCE: f32 = 4.0;
pub const PATROL_POINTS: u32 = 10;

/// Extra points for killing a patrol before it reports the player.
pub const PATROL_BONUS: u32 = 10;

// --- Cargo ---

pub const CARGO_HEALTH: i32 = 25;
pub const CARGO_ARMOR: i32 = 1;
pub const CARGO_SPEED: f32 = 2.0;
pub const CARGO_MAX_SPEED: f32 = 5.0;

/// Per-frame speed multiplier once the player is spotted.
pub const CARGO_ACCELERATION: f32 = 1.02;
pub const CARGO_SENSOR_DISTANCE: f32 = 5.0;
pub const CARGO_UPGRADE_POINTS: u32 = 5;

// --- Escort ---

pub const ESCORT_HEALTH: i32 = 10;
pub const ESCORT_SPEED: f32 = 3.0;
pub const ESCORT_POINTS: u32 = 15;

/// Pause between shots inside one volley.
pub const ESCORT_VOLLEY_PAUSE: f32 = 0.33;

/// Pause between volleys.
pub const ESCORT_VOLLEY_COOLDOWN: f32 = 2.5;

/// Vertical spread of the three aim points of a volley.
pub const ESCORT_VOLLEY_SPREAD: f32 = 2.0;

/// Distance the escort keeps from its charge.
pub const ESCORT_STATION_DISTANCE: f32 = 3.0;

// --- Zero ---

pub const ZERO_HEALTH: i32 = 10;
pub const ZERO_SPEED: f32 = 4.0;
pub const ZERO_MAX_SPEED: f32 = 15.0;
pub const ZERO_ACCELERATION: f32 = 1.05;
pub const ZERO_SENSOR_DISTANCE: f32 = 10.0;
pub const ZERO_POINTS: u32 = 5;

/// Extra points for downing a zero that is already homing.
pub const ZERO_BONUS: u32 = 20;

/// Fraction of a second of player motion a zero leads its aim by.
pub const ZERO_LEAD_TIME: f32 = 0.25;

/// Size of the drones an ace launches.
pub const DRONE_SIZE: f32 = 0.5;

// --- Ace ---

pub const ACE_HEALTH: i32 = 40;
pub const ACE_ARMOR: i32 = 1;
pub const ACE_CRUISE_SPEED: f32 = 3.0;
pub const ACE_SENSOR_DISTANCE: f32 = 8.0;
pub const ACE_POINTS: u32 = 50;
pub const ACE_UPGRADE_POINTS: u32 = 3;

/// Stand-off distance the ace tries to hold from the player.
pub const ACE_ATTACK_RANGE: f32 = 5.0;
pub const ACE_MAX_THRUST: f32 = 6.0;
pub const ACE_BULLET_COOLDOWN: f32 = 1.0;

/// Cooldown between drone salvos.
pub const ACE_DRONE_COOLDOWN: f32 = 4.0;

/// Cooldown between drones inside one salvo.
pub const ACE_DRONE_SALVO_GAP: f32 = 0.2;

/// Drones fired on the short gap before the salvo closes.
pub const ACE_DRONE_SALVO: u32 = 2;

/// Distance from the side walls at which the ace starts to veer inward.
pub const ACE_EDGE_MARGIN: f32 = 2.0;

/// Muzzle offset toward the target for anything the ace launches.
pub const ACE_MUZZLE: f32 = 0.5;

// --- Director ---

/// Danger level a fresh endless session starts at.
pub const DIRECTOR_START_DANGER: u32 = 10;

/// Time until the first formation may spawn.
pub const DIRECTOR_FIRST_SPAWN_SECS: f32 = 0.5;

/// Added to the next spawn time after every spawn attempt.
pub const DIRECTOR_SPAWN_INTERVAL: f32 = 0.75;

/// Seconds of survival per point of danger.
pub const DIRECTOR_DANGER_PERIOD: f32 = 10.0;

// --- Comms ---

pub const BEACON_LIFE_SECS: f32 = 2.0;
pub const BEACON_SIZE: f32 = 0.5;
pub const BEACON_SPEED: f32 = 1.0;

/// An enemy this close to a beacon picks up the distress call.
pub const BEACON_PICKUP_RANGE: f32 = 1.0;

pub const FLARE_SIZE: f32 = 0.5;
pub const FLARE_SPEED: f32 = 5.0;

// --- Power-ups ---

pub const POWERUP_SPEED: f32 = 1.0;
pub const POWERUP_SIZE: f32 = 1.0;

/// Kills before the first drop.
pub const POWERUP_FIRST_DROP: u32 = 10;
pub const POWERUP_MIN_INTERVAL: u32 = 10;
pub const POWERUP_MAX_INTERVAL: u32 = 20;

/// Maximum change to the drop interval after each drop.
pub const POWERUP_JITTER: i32 = 3;
