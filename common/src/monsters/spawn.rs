use rand::Rng;
use std::f32::consts::TAU;
use tracing::{debug, warn};

use super::{Coat, MonsterRegistry, MonsterSpec};
use crate::{
    collision::{Obstacle, Occupancy},
    components::{MonsterId, Position},
    constants::*,
    map::World,
};

// Draws one monster: uniform in the central square, random size, phase, facing and coat.
pub fn random_monster_spec(world: &World, rng: &mut impl Rng) -> MonsterSpec {
    let half_spread = world.size * MONSTER_SPAWN_SPREAD / 2.0;
    MonsterSpec {
        position: Position::new(
            rng.random_range(-half_spread..half_spread),
            rng.random_range(-half_spread..half_spread),
        ),
        scale: rng.random_range(MONSTER_MIN_SCALE..MONSTER_MAX_SCALE),
        facing_yaw: rng.random_range(0.0..TAU),
        animation_clock: rng.random_range(0.0..TAU),
        coat: Coat::ALL[rng.random_range(0..Coat::ALL.len())],
    }
}

fn is_free(spec: &MonsterSpec, world: &World, occupancy: &Occupancy<'_>) -> bool {
    let radius = spec.scale * MONSTER_RADIUS_FACTOR;
    let Position { x, z } = spec.position;
    world.contains(&spec.position, radius)
        && !occupancy.overlaps_obstacle(x, z, radius)
        && !occupancy.overlaps_monster(x, z, radius, None)
}

/// Populates the registry with up to `count` monsters.
///
/// Draws that would start inside an obstacle or another monster are redrawn a
/// bounded number of times; a monster that never finds room is skipped.
pub fn spawn_monsters(
    registry: &mut MonsterRegistry,
    world: &World,
    obstacles: &[Obstacle],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<MonsterId> {
    let mut spawned = Vec::with_capacity(count);

    for _ in 0..count {
        let mut placed = None;
        for attempt in 0..MONSTER_SPAWN_ATTEMPTS {
            let spec = random_monster_spec(world, rng);
            if is_free(&spec, world, &Occupancy::new(obstacles, registry)) {
                placed = Some(spec);
                break;
            }
            debug!("monster spawn attempt {attempt} blocked at {:?}", spec.position);
        }

        match placed {
            Some(spec) => spawned.push(registry.insert(spec)),
            None => warn!("no free spot for monster after {MONSTER_SPAWN_ATTEMPTS} attempts"),
        }
    }

    spawned
}
