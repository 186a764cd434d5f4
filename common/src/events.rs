#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{components::MonsterId, monsters::BodyPartKind};

// ============================================================================
// Simulation Messages
// ============================================================================

/// A monster was removed by a shot. At most one per accepted shot.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct AgentDestroyed {
    pub monster: MonsterId,
    pub part: BodyPartKind,
    pub distance: f32,
}

/// A monster entered (`aggressive == true`) or left the pursuing posture this frame.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PostureChanged {
    pub monster: MonsterId,
    pub aggressive: bool,
}

// What happened to the fire edge of a frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ShotOutcome {
    #[default]
    NotFired,
    // Trigger pulled inside the cooldown window; no hit test was performed
    CoolingDown,
    Missed,
    Hit(AgentDestroyed),
}

impl ShotOutcome {
    #[must_use]
    pub const fn destroyed(&self) -> Option<AgentDestroyed> {
        match self {
            Self::Hit(destroyed) => Some(*destroyed),
            _ => None,
        }
    }
}
