#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::constants::PHYSICS_EPSILON;

// ============================================================================
// Common Data Types
// ============================================================================

// Ground-plane position in meters. Height is implied by the entity kind (flat terrain).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f32,
    pub z: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        (self.x - other.x).hypot(self.z - other.z)
    }

    // Position reached after travelling along `vel` for `delta` seconds.
    #[must_use]
    pub fn advanced(&self, vel: &Velocity, delta: f32) -> Self {
        Self {
            x: vel.x.mul_add(delta, self.x),
            z: vel.z.mul_add(delta, self.z),
        }
    }
}

// Ground-plane velocity in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Velocity {
    pub x: f32,
    pub z: f32,
}

impl Velocity {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    // Velocity of the given speed along a heading angle (0 = +X, counter-clockwise toward +Z).
    #[must_use]
    pub fn from_heading(angle: f32, speed: f32) -> Self {
        Self {
            x: angle.cos() * speed,
            z: angle.sin() * speed,
        }
    }

    // Unit vector from `from` toward `to` scaled by `speed`; None when the points coincide.
    #[must_use]
    pub fn toward(from: &Position, to: &Position, speed: f32) -> Option<Self> {
        let dx = to.x - from.x;
        let dz = to.z - from.z;
        let len = dx.hypot(dz);
        if len <= PHYSICS_EPSILON {
            return None;
        }
        Some(Self {
            x: dx / len * speed,
            z: dz / len * speed,
        })
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.x.hypot(self.z)
    }

    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            z: self.z * factor,
        }
    }
}

// Yaw that turns a body's local +X axis onto the ground direction (dx, dz).
// Matches `Quat::from_rotation_y`, which maps +X to (cos yaw, 0, -sin yaw).
#[must_use]
pub fn yaw_facing(dx: f32, dz: f32) -> f32 {
    (-dz).atan2(dx)
}

// Monster ID - stable for the lifetime of the monster, never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MonsterId(pub u32);

// Hit-geometry ID - one per body part, mapped back to its owning monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PartId(pub u32);
