use rand::Rng;
use std::f32::consts::TAU;
use tracing::{debug, warn};

use crate::{
    collision::{Obstacle, ObstacleKind},
    config::WorldSettings,
    constants::*,
    map::World,
};

// ============================================================================
// Obstacle Population
// ============================================================================

// Keep-out half-width around the river centerline for each kind of scenery.
fn river_clearance(world: &World, kind: ObstacleKind) -> f32 {
    let factor = match kind {
        ObstacleKind::Tree => TREE_RIVER_CLEARANCE,
        ObstacleKind::Rock => ROCK_RIVER_CLEARANCE,
    };
    world.river.width * factor
}

// Scatters `count` obstacles of one kind uniformly over the world, redrawing any
// position too close to the river. Gives up after `MAX_PLACEMENT_ATTEMPTS` draws.
pub fn scatter_obstacles(world: &World, kind: ObstacleKind, count: usize, rng: &mut impl Rng) -> Vec<Obstacle> {
    let half = world.half_extent();
    let clearance = river_clearance(world, kind);
    let mut placed = Vec::with_capacity(count);
    let mut attempts = 0;

    while placed.len() < count {
        if attempts >= MAX_PLACEMENT_ATTEMPTS {
            warn!(
                "placed only {}/{count} {kind:?} obstacles after {attempts} attempts",
                placed.len()
            );
            break;
        }
        attempts += 1;

        let x = rng.random_range(-half..half);
        let z = rng.random_range(-half..half);
        if world.river.offset_from_center(x, z) < clearance {
            continue;
        }

        placed.push(Obstacle {
            rotation: rng.random_range(0.0..TAU),
            ..Obstacle::new(kind, x, z)
        });
    }

    debug!("{kind:?}: {} placed in {attempts} draws", placed.len());
    placed
}

/// Builds the static scenery for a session: trees first, then rocks.
#[must_use]
pub fn populate_obstacles(world: &World, settings: &WorldSettings, rng: &mut impl Rng) -> Vec<Obstacle> {
    let mut obstacles = scatter_obstacles(world, ObstacleKind::Tree, settings.tree_count, rng);
    obstacles.extend(scatter_obstacles(world, ObstacleKind::Rock, settings.rock_count, rng));
    obstacles
}
