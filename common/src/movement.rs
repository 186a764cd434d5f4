use crate::{
    collision::Occupancy,
    components::{MonsterId, Position, Velocity},
    constants::{MONSTER_RIVER_PENALTY, PHYSICS_EPSILON, PLAYER_RIVER_PENALTY},
    map::World,
};

// Who is moving decides the river penalty and whether other monsters block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mover {
    Player,
    Monster(MonsterId),
}

impl Mover {
    #[must_use]
    pub const fn river_penalty(self) -> f32 {
        match self {
            Self::Player => PLAYER_RIVER_PENALTY,
            Self::Monster(_) => MONSTER_RIVER_PENALTY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    // No displacement was requested
    Idle,
    // Candidate accepted; the new position to commit
    Moved(Position),
    // Candidate rejected; the mover stays where it is
    Blocked,
}

/// Resolves one frame of movement for a circular footprint.
///
/// The river penalty is chosen from the *current* position. The candidate is
/// rejected outright when it overlaps a static obstacle, leaves the world square,
/// or (monsters only) overlaps another monster; there is no sliding.
#[must_use]
pub fn try_move(
    world: &World,
    occupancy: &Occupancy<'_>,
    mover: Mover,
    from: &Position,
    radius: f32,
    velocity: &Velocity,
    delta: f32,
) -> MoveOutcome {
    if velocity.speed() <= PHYSICS_EPSILON || delta <= 0.0 {
        return MoveOutcome::Idle;
    }

    let speed_factor = if world.is_in_river(from.x, from.z) {
        mover.river_penalty()
    } else {
        1.0
    };
    let candidate = from.advanced(&velocity.scaled(speed_factor), delta);

    if !world.contains(&candidate, radius) || occupancy.overlaps_obstacle(candidate.x, candidate.z, radius) {
        return MoveOutcome::Blocked;
    }

    if let Mover::Monster(id) = mover
        && occupancy.overlaps_monster(candidate.x, candidate.z, radius, Some(id))
    {
        return MoveOutcome::Blocked;
    }

    MoveOutcome::Moved(candidate)
}
