pub mod helpers;
pub mod hitscan;
pub mod monsters;
pub mod obstacles;

pub use hitscan::{ShotHit, fire_shot};
pub use monsters::overlap_circle_vs_monsters;
pub use obstacles::{Obstacle, ObstacleKind, overlap_circle_vs_obstacles};

use crate::{
    components::{MonsterId, Position},
    monsters::MonsterRegistry,
};

// ============================================================================
// Occupancy
// ============================================================================

// Read-only view of everything that can block a footprint this frame. Linear scans
// are enough at a few hundred obstacles and a handful of monsters.
#[derive(Clone, Copy)]
pub struct Occupancy<'a> {
    pub obstacles: &'a [Obstacle],
    pub monsters: &'a MonsterRegistry,
}

impl<'a> Occupancy<'a> {
    #[must_use]
    pub const fn new(obstacles: &'a [Obstacle], monsters: &'a MonsterRegistry) -> Self {
        Self { obstacles, monsters }
    }

    #[must_use]
    pub fn overlaps_obstacle(&self, x: f32, z: f32, radius: f32) -> bool {
        overlap_circle_vs_obstacles(&Position::new(x, z), radius, self.obstacles)
    }

    #[must_use]
    pub fn overlaps_monster(&self, x: f32, z: f32, radius: f32, excluding: Option<MonsterId>) -> bool {
        overlap_circle_vs_monsters(&Position::new(x, z), radius, self.monsters, excluding)
    }
}
