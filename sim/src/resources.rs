use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use common::input::FrameInput;

// ============================================================================
// Bevy Resources
// ============================================================================

// Single seeded RNG shared by everything random after world generation
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl SimRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

// Input to feed into the next simulation step
#[derive(Resource, Default)]
pub struct PendingInput(pub FrameInput);

// Presence enables the scripted player
#[derive(Resource, Debug, Clone, Copy)]
pub struct Autopilot {
    pub engage_distance: f32, // walk toward targets further away than this
    pub fire_tolerance: f32,  // max aim error (radians) that still pulls the trigger
    pub max_turn: f32,        // pointer pixels per frame
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            engage_distance: 8.0,
            fire_tolerance: 0.02,
            max_turn: 60.0,
        }
    }
}

// Counters accumulated over the whole run
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct RunStats {
    pub steps: u64,
    pub skipped: u64,
    pub shots: u64,
    pub kills: u64,
    pub damage_taken: f32,
    pub depleted_logged: bool,
}

// JSON snapshot output cadence; None disables snapshots
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SnapshotConfig {
    pub every: Option<u64>,
}
