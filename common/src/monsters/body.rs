#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use bevy_math::Vec3;

use crate::{
    collision::helpers::{ray_vs_capsule, ray_vs_sphere},
    components::PartId,
};

// ============================================================================
// Body Parts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum BodyPartKind {
    Body,
    Head,
    LeftEye,
    RightEye,
    FrontLeftLeg,
    FrontRightLeg,
    BackLeftLeg,
    BackRightLeg,
    Tail,
}

// Hit volume in the monster's unscaled body frame (origin at the body root, +X toward the head)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitShape {
    Sphere { center: Vec3, radius: f32 },
    Capsule { a: Vec3, b: Vec3, radius: f32 },
}

impl HitShape {
    // Distance along a unit-length ray expressed in the same frame as the shape.
    #[must_use]
    pub fn ray_distance(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        match *self {
            Self::Sphere { center, radius } => ray_vs_sphere(origin, dir, center, radius),
            Self::Capsule { a, b, radius } => ray_vs_capsule(origin, dir, a, b, radius),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub id: PartId,
    pub kind: BodyPartKind,
    pub shape: HitShape,
}

const fn leg(x: f32, z: f32) -> HitShape {
    HitShape::Capsule {
        a: Vec3::new(x, 0.15, z),
        b: Vec3::new(x, 0.55, z),
        radius: 0.15,
    }
}

const fn eye(z: f32) -> HitShape {
    HitShape::Sphere {
        center: Vec3::new(1.0, 1.0, z),
        radius: 0.08,
    }
}

// Four-legged creature: horizontal torso, head and eyes at +X, tail at -X.
pub const CREATURE_LAYOUT: [(BodyPartKind, HitShape); 9] = [
    (
        BodyPartKind::Body,
        HitShape::Capsule {
            a: Vec3::new(-0.6, 0.8, 0.0),
            b: Vec3::new(0.6, 0.8, 0.0),
            radius: 0.4,
        },
    ),
    (
        BodyPartKind::Head,
        HitShape::Sphere {
            center: Vec3::new(0.8, 0.9, 0.0),
            radius: 0.35,
        },
    ),
    (BodyPartKind::LeftEye, eye(0.15)),
    (BodyPartKind::RightEye, eye(-0.15)),
    (BodyPartKind::FrontLeftLeg, leg(0.4, 0.3)),
    (BodyPartKind::FrontRightLeg, leg(0.4, -0.3)),
    (BodyPartKind::BackLeftLeg, leg(-0.4, 0.3)),
    (BodyPartKind::BackRightLeg, leg(-0.4, -0.3)),
    (
        BodyPartKind::Tail,
        HitShape::Capsule {
            a: Vec3::new(-1.2, 0.8, 0.0),
            b: Vec3::new(-0.6, 0.8, 0.0),
            radius: 0.1,
        },
    ),
];
