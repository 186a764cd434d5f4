// ============================================================================
// Frame Timing
// ============================================================================

// Longest frame the simulation accepts; anything longer (or non-positive) is a no-op step.
pub const MAX_FRAME_DELTA: f32 = 1.0; // seconds

// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons (near-zero checks, division guards).
pub const PHYSICS_EPSILON: f32 = 1e-6;

// ============================================================================
// World & River
// ============================================================================

pub const WORLD_SIZE: f32 = 260.0; // Edge length of the square ground plane (meters)
pub const RIVER_WIDTH: f32 = 12.0; // River half-width
pub const RIVER_AMPLITUDE: f32 = 18.0; // Sideways swing of the centerline
pub const RIVER_FREQUENCY: f32 = 0.03; // Centerline oscillation per meter along Z
pub const RIVER_BAND_RATIO: f32 = 0.6; // Fraction of the half-width that slows movement

// ============================================================================
// Obstacles
// ============================================================================

pub const TREE_COUNT: usize = 120;
pub const ROCK_COUNT: usize = 50;
pub const TREE_RADIUS: f32 = 1.5; // collision radius
pub const ROCK_RADIUS: f32 = 1.2; // collision radius
pub const TREE_RIVER_CLEARANCE: f32 = 1.0; // x river width
pub const ROCK_RIVER_CLEARANCE: f32 = 0.8; // x river width
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

// ============================================================================
// Player
// ============================================================================

pub const PLAYER_EYE_HEIGHT: f32 = 1.7; // meters
pub const PLAYER_START_X: f32 = 0.0;
pub const PLAYER_START_Z: f32 = 10.0;
pub const PLAYER_SPEED: f32 = 12.0; // meters per second
pub const PLAYER_RADIUS: f32 = 0.8;
pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_RIVER_PENALTY: f32 = 0.4;
pub const LOOK_SENSITIVITY: f32 = 0.0022; // radians per pointer pixel
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

// ============================================================================
// Monsters
// ============================================================================

pub const MONSTER_COUNT: usize = 10;
pub const MONSTER_SPAWN_SPREAD: f32 = 0.8; // fraction of world size
pub const MONSTER_MIN_SCALE: f32 = 0.6;
pub const MONSTER_MAX_SCALE: f32 = 1.5;
pub const MONSTER_REFERENCE_SCALE: f32 = 0.8; // scale at which base speeds/damage apply
pub const MONSTER_RADIUS_FACTOR: f32 = 0.8; // collision radius = scale * factor
pub const MONSTER_ROOT_HEIGHT: f32 = 0.7; // height of the body frame origin
pub const MONSTER_RIVER_PENALTY: f32 = 0.5;
pub const MONSTER_MIN_MOVE_SPEED: f32 = 0.01;

// Behavior
pub const DETECTION_RANGE: f32 = 20.0;
pub const PURSUIT_BASE_SPEED: f32 = 3.5;
pub const PURSUIT_SIZE_COEFFICIENT: f32 = 2.0;
pub const WANDER_BASE_SPEED: f32 = 1.8;
pub const WANDER_SIZE_COEFFICIENT: f32 = 1.0;
pub const WANDER_TURN_PROBABILITY: f64 = 0.02; // per frame
pub const BLOCKED_REVERSE_PROBABILITY: f64 = 0.5;
pub const BLOCKED_SPEED_FACTOR: f32 = 0.5;

// Attacks
pub const ATTACK_BASE_RANGE: f32 = 1.8;
pub const ATTACK_RANGE_SIZE_COEFFICIENT: f32 = 0.5;
pub const ATTACK_BASE_DAMAGE: f32 = 15.0; // health per second
pub const ATTACK_DAMAGE_SIZE_COEFFICIENT: f32 = 10.0;

// ============================================================================
// Weapon
// ============================================================================

pub const SHOT_COOLDOWN: f32 = 0.18; // seconds between accepted shots
pub const TRACER_LIFETIME: f32 = 0.05; // seconds
pub const TRACER_MUZZLE_OFFSET: f32 = 0.6; // meters in front of the eye
pub const TRACER_LENGTH: f32 = 24.0; // meters

// ============================================================================
// Animation
// ============================================================================

pub const BREATHING_RATE: f32 = 1.5;
pub const BREATHING_AMPLITUDE: f32 = 0.02;
pub const TAIL_SWING_RATE: f32 = 2.5;
pub const TAIL_SWING_AMPLITUDE: f32 = 0.3;
pub const WALK_CYCLE_RATE: f32 = 6.0;
pub const LEG_SWING_AMPLITUDE: f32 = 0.4;
pub const LEG_REST_DECAY: f32 = 0.9; // per 1/60 s
pub const HEAD_BOB_RATE: f32 = 0.8;
pub const HEAD_BOB_AMPLITUDE: f32 = 0.05;
pub const MOVING_SPEED_THRESHOLD: f32 = 0.1;
pub const AGGRESSIVE_BODY_TILT: f32 = -0.2;
pub const CALM_HEAD_HEIGHT: f32 = 0.9;
pub const AGGRESSIVE_HEAD_HEIGHT: f32 = 0.7;
pub const MONSTER_SPAWN_ATTEMPTS: usize = 200; // redraws per monster before giving up
