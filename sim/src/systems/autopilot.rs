use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::resources::{Autopilot, PendingInput};
use common::{
    constants::{LOOK_SENSITIVITY, MONSTER_ROOT_HEIGHT, PLAYER_EYE_HEIGHT},
    input::FrameInput,
    simulation::Simulation,
};

// Torso height in the monster's unscaled body frame
const AIM_HEIGHT: f32 = 0.8;

// ============================================================================
// Helper Functions
// ============================================================================

fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Scripted player: turn toward the nearest monster, close in while it is far
/// away and pull the trigger once this frame's look lands on target.
#[must_use]
pub fn plan_input(sim: &Simulation, autopilot: &Autopilot) -> FrameInput {
    let player = &sim.player;
    let Some(target) = sim.monsters.iter().min_by(|a, b| {
        a.position
            .distance(&player.position)
            .total_cmp(&b.position.distance(&player.position))
    }) else {
        return FrameInput::default();
    };

    let dx = target.position.x - player.position.x;
    let dz = target.position.z - player.position.z;
    let distance = dx.hypot(dz);

    // View direction on the ground is (-sin yaw, -cos yaw)
    let desired_yaw = (-dx).atan2(-dz);
    let desired_pitch = AIM_HEIGHT
        .mul_add(target.scale, MONSTER_ROOT_HEIGHT - PLAYER_EYE_HEIGHT)
        .atan2(distance);

    let yaw_error = wrap_angle(player.yaw - desired_yaw);
    let pitch_error = player.pitch - desired_pitch;
    let pointer_dx = (yaw_error / LOOK_SENSITIVITY).clamp(-autopilot.max_turn, autopilot.max_turn);
    let pointer_dy = (pitch_error / LOOK_SENSITIVITY).clamp(-autopilot.max_turn, autopilot.max_turn);

    // Aim error left after this frame's look is applied
    let yaw_left = pointer_dx.mul_add(-LOOK_SENSITIVITY, yaw_error);
    let pitch_left = pointer_dy.mul_add(-LOOK_SENSITIVITY, pitch_error);
    let on_target = yaw_left.abs() <= autopilot.fire_tolerance && pitch_left.abs() <= autopilot.fire_tolerance;

    FrameInput {
        forward: distance > autopilot.engage_distance,
        pointer_dx,
        pointer_dy,
        fire: on_target && sim.weapon.is_ready(),
        ..FrameInput::default()
    }
}

pub fn autopilot_system(sim: Res<Simulation>, autopilot: Res<Autopilot>, mut pending: ResMut<PendingInput>) {
    pending.0 = plan_input(&sim, &autopilot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use common::{
        components::Position,
        map::World,
        monsters::{MonsterRegistry, MonsterSpec},
        players::Player,
    };

    fn session_with(x: f32, z: f32) -> Simulation {
        let mut monsters = MonsterRegistry::new();
        monsters.insert(MonsterSpec::at(x, z, 1.0));
        Simulation::new(World::default(), Vec::new(), monsters, Player::new(Position::new(0.0, 0.0)))
    }

    #[test]
    fn wrap_angle_stays_in_half_turn() {
        assert_relative_eq!(wrap_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(0.3), 0.3, epsilon = 1e-6);
    }

    #[test]
    fn target_straight_ahead_is_fired_upon() {
        // Default yaw looks down -Z
        let sim = session_with(0.0, -5.0);
        let input = plan_input(&sim, &Autopilot::default());
        assert!(input.fire);
        assert!(!input.forward);
        assert!(input.pointer_dx.abs() < 1e-3);
    }

    #[test]
    fn target_behind_turns_without_firing() {
        let sim = session_with(0.0, 30.0);
        let autopilot = Autopilot::default();
        let input = plan_input(&sim, &autopilot);
        assert!(!input.fire);
        assert!(input.forward);
        assert_relative_eq!(input.pointer_dx.abs(), autopilot.max_turn);
    }

    #[test]
    fn target_to_the_right_turns_right() {
        let sim = session_with(10.0, 0.0);
        let input = plan_input(&sim, &Autopilot::default());
        // yaw -= dx * sensitivity, and turning right lowers yaw
        assert!(input.pointer_dx > 0.0);
    }

    #[test]
    fn no_monsters_no_input() {
        let sim = Simulation::new(World::default(), Vec::new(), MonsterRegistry::new(), Player::default());
        assert_eq!(plan_input(&sim, &Autopilot::default()), FrameInput::default());
    }
}
