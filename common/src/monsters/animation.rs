#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use std::f32::consts::PI;

use super::{Gait, Monster};
use crate::constants::*;

// Walk-cycle phase per leg: diagonal pairs swing together.
// Order matches `Gait::legs`: front-left, front-right, back-left, back-right.
const LEG_PHASES: [f32; 4] = [0.0, PI, PI, 0.0];

// Presentation-only pose; nothing here feeds back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Pose {
    pub breathing: f32,  // vertical body offset
    pub tail_swing: f32, // radians
    pub legs: [f32; 4],  // radians
    pub head_bob: f32,   // vertical head offset, calm only
    pub body_tilt: f32,  // radians
    pub head_height: f32,
    pub eyes_glowing: bool,
}

// Swings the legs while walking; otherwise eases them back toward rest.
pub fn advance_gait(gait: &mut Gait, clock: f32, speed: f32, delta: f32) {
    if speed > MOVING_SPEED_THRESHOLD {
        for (leg, phase) in gait.legs.iter_mut().zip(LEG_PHASES) {
            *leg = clock.mul_add(WALK_CYCLE_RATE, phase).sin() * LEG_SWING_AMPLITUDE;
        }
    } else {
        // Decay rate is defined per 1/60 s frame
        let decay = LEG_REST_DECAY.powf(delta * 60.0);
        for leg in &mut gait.legs {
            *leg *= decay;
        }
    }
}

#[must_use]
pub fn pose(monster: &Monster) -> Pose {
    let t = monster.animation_clock;
    let aggressive = monster.is_aggressive();

    Pose {
        breathing: (t * BREATHING_RATE).sin() * BREATHING_AMPLITUDE,
        tail_swing: (t * TAIL_SWING_RATE).sin() * TAIL_SWING_AMPLITUDE,
        legs: monster.gait.legs,
        head_bob: if aggressive {
            0.0
        } else {
            (t * HEAD_BOB_RATE).sin() * HEAD_BOB_AMPLITUDE
        },
        body_tilt: if aggressive { AGGRESSIVE_BODY_TILT } else { 0.0 },
        head_height: if aggressive {
            AGGRESSIVE_HEAD_HEIGHT
        } else {
            CALM_HEAD_HEIGHT
        },
        eyes_glowing: aggressive,
    }
}
