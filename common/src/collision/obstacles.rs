#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use super::helpers::overlap_circles;
use crate::{
    components::Position,
    constants::{ROCK_RADIUS, TREE_RADIUS},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum ObstacleKind {
    Tree,
    Rock,
}

impl ObstacleKind {
    #[must_use]
    pub const fn radius(self) -> f32 {
        match self {
            Self::Tree => TREE_RADIUS,
            Self::Rock => ROCK_RADIUS,
        }
    }
}

// Static scenery placed once at population time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Obstacle {
    pub position: Position,
    pub kind: ObstacleKind,
    pub rotation: f32, // cosmetic yaw, ignored by collision
}

impl Obstacle {
    #[must_use]
    pub const fn new(kind: ObstacleKind, x: f32, z: f32) -> Self {
        Self {
            position: Position::new(x, z),
            kind,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.kind.radius()
    }
}

#[must_use]
pub fn overlap_circle_vs_obstacle(pos: &Position, radius: f32, obstacle: &Obstacle) -> bool {
    overlap_circles(pos, radius, &obstacle.position, obstacle.radius())
}

#[must_use]
pub fn overlap_circle_vs_obstacles(pos: &Position, radius: f32, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .any(|obstacle| overlap_circle_vs_obstacle(pos, radius, obstacle))
}
