use rand::Rng;
use std::f32::consts::TAU;

use super::{BehaviorState, Monster, MonsterRegistry, animation::advance_gait};
use crate::{
    collision::{Obstacle, Occupancy},
    components::{Position, Velocity, yaw_facing},
    constants::*,
    events::PostureChanged,
    map::World,
    movement::{MoveOutcome, Mover, try_move},
};

// Everything the monster pass produced this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonstersReport {
    pub postures: Vec<PostureChanged>,
    pub damage: f32, // health to subtract from the player
}

// ============================================================================
// Helper Functions
// ============================================================================

fn random_heading(rng: &mut impl Rng) -> f32 {
    rng.random_range(0.0..TAU)
}

fn head_along(monster: &mut Monster, heading: f32, speed: f32) {
    monster.velocity = Velocity::from_heading(heading, speed);
    monster.facing_yaw = yaw_facing(monster.velocity.x, monster.velocity.z);
}

// Level-triggered: the state always follows the current distance.
fn evaluate_state(distance: f32) -> BehaviorState {
    if distance < DETECTION_RANGE {
        BehaviorState::Pursuing
    } else {
        BehaviorState::Wander
    }
}

fn steer(monster: &mut Monster, player: &Position, rng: &mut impl Rng) {
    match monster.state {
        BehaviorState::Pursuing => {
            if let Some(velocity) = Velocity::toward(&monster.position, player, monster.pursuit_speed()) {
                monster.velocity = velocity;
                monster.facing_yaw = yaw_facing(velocity.x, velocity.z);
            }
        }
        BehaviorState::Wander => {
            if rng.random_bool(WANDER_TURN_PROBABILITY) {
                let heading = random_heading(rng);
                head_along(monster, heading, monster.wander_speed());
            }
        }
    }
}

// Reaction of a wandering monster whose move was rejected.
pub(crate) fn bounce(monster: &mut Monster, rng: &mut impl Rng) {
    if rng.random_bool(BLOCKED_REVERSE_PROBABILITY) {
        monster.velocity = monster.velocity.scaled(-BLOCKED_SPEED_FACTOR);
    } else {
        let speed = monster.velocity.speed() * BLOCKED_SPEED_FACTOR;
        let heading = random_heading(rng);
        head_along(monster, heading, speed);
    }
}

// ============================================================================
// Monster Update
// ============================================================================

/// Runs one frame of the monster state machine for every live monster.
///
/// Per monster: measure the player distance, advance the animation clock,
/// re-evaluate the posture, steer, attempt the move and finally accumulate
/// attack damage using the distance measured before the move. Monsters are
/// processed in registry order so earlier moves are visible to later ones.
pub fn update_monsters(
    registry: &mut MonsterRegistry,
    world: &World,
    obstacles: &[Obstacle],
    player: &Position,
    delta: f32,
    rng: &mut impl Rng,
) -> MonstersReport {
    let mut report = MonstersReport::default();

    for index in 0..registry.len() {
        let distance = {
            let monster = &mut registry.as_mut_slice()[index];
            let distance = monster.position.distance(player);
            monster.animation_clock += delta;

            let next = evaluate_state(distance);
            if next != monster.state {
                monster.state = next;
                report.postures.push(PostureChanged {
                    monster: monster.id,
                    aggressive: next == BehaviorState::Pursuing,
                });
            }

            steer(monster, player, rng);
            distance
        };

        let outcome = {
            let monster = &registry.as_slice()[index];
            if monster.velocity.speed() > MONSTER_MIN_MOVE_SPEED {
                try_move(
                    world,
                    &Occupancy::new(obstacles, registry),
                    Mover::Monster(monster.id),
                    &monster.position,
                    monster.radius(),
                    &monster.velocity,
                    delta,
                )
            } else {
                MoveOutcome::Idle
            }
        };

        let monster = &mut registry.as_mut_slice()[index];
        match outcome {
            MoveOutcome::Moved(to) => monster.position = to,
            // A pursuer keeps pushing toward the player; only wanderers bounce
            MoveOutcome::Blocked if monster.state == BehaviorState::Wander => bounce(monster, rng),
            MoveOutcome::Blocked | MoveOutcome::Idle => {}
        }

        advance_gait(&mut monster.gait, monster.animation_clock, monster.velocity.speed(), delta);

        if distance < monster.attack_range() {
            report.damage += monster.attack_damage_rate() * delta;
        }
    }

    report
}
