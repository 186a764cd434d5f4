use bevy_math::Vec3;

use crate::{
    collision::Occupancy,
    components::{Position, Velocity},
    constants::*,
    input::FrameInput,
    map::World,
    movement::{MoveOutcome, Mover, try_move},
};

// ============================================================================
// Player
// ============================================================================

// First-person player. The eye height is pinned; only x/z ever change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Position,
    pub yaw: f32,   // radians, 0 looks down -Z
    pub pitch: f32, // radians, positive looks up
    pub health: f32,
}

impl Player {
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            health: PLAYER_MAX_HEALTH,
        }
    }

    #[must_use]
    pub const fn eye_position(&self) -> Vec3 {
        Vec3::new(self.position.x, PLAYER_EYE_HEIGHT, self.position.z)
    }

    // Unit view direction from yaw (about Y) then pitch (about the camera X axis).
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    // View direction flattened onto the ground plane (unit length).
    #[must_use]
    pub fn forward(&self) -> Velocity {
        Velocity::new(-self.yaw.sin(), -self.yaw.cos())
    }

    // forward x up
    #[must_use]
    pub fn right(&self) -> Velocity {
        Velocity::new(self.yaw.cos(), -self.yaw.sin())
    }

    pub fn apply_look(&mut self, pointer_dx: f32, pointer_dy: f32) {
        if !pointer_dx.is_finite() || !pointer_dy.is_finite() {
            return;
        }
        self.yaw -= pointer_dx * LOOK_SENSITIVITY;
        self.pitch = pointer_dy
            .mul_add(-LOOK_SENSITIVITY, self.pitch)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // Walking velocity requested by the held keys; zero when they cancel out.
    #[must_use]
    pub fn desired_velocity(&self, input: &FrameInput) -> Velocity {
        let forward = self.forward();
        let right = self.right();
        let mut dir_x = 0.0;
        let mut dir_z = 0.0;

        if input.forward {
            dir_x += forward.x;
            dir_z += forward.z;
        }
        if input.backward {
            dir_x -= forward.x;
            dir_z -= forward.z;
        }
        if input.left {
            dir_x -= right.x;
            dir_z -= right.z;
        }
        if input.right {
            dir_x += right.x;
            dir_z += right.z;
        }

        let len = f32::hypot(dir_x, dir_z);
        if len <= PHYSICS_EPSILON {
            return Velocity::ZERO;
        }
        Velocity::new(dir_x / len * PLAYER_SPEED, dir_z / len * PLAYER_SPEED)
    }

    // Applies damage with the health floored at zero; returns the amount actually removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        let before = self.health;
        self.health = (self.health - amount).max(0.0);
        before - self.health
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.health <= 0.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Position::new(PLAYER_START_X, PLAYER_START_Z))
    }
}

// Moves the player for one frame; static scenery blocks, monsters never do.
pub fn move_player(
    player: &mut Player,
    world: &World,
    occupancy: &Occupancy<'_>,
    input: &FrameInput,
    delta: f32,
) -> MoveOutcome {
    let velocity = player.desired_velocity(input);
    let outcome = try_move(
        world,
        occupancy,
        Mover::Player,
        &player.position,
        PLAYER_RADIUS,
        &velocity,
        delta,
    );
    if let MoveOutcome::Moved(to) = outcome {
        player.position = to;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monsters::MonsterRegistry;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn default_view_looks_down_negative_z() {
        let player = Player::default();
        let dir = player.view_direction();
        assert_relative_eq!(dir.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(player.eye_position().y, PLAYER_EYE_HEIGHT);
    }

    #[test]
    fn right_is_perpendicular_to_forward() {
        let mut player = Player::default();
        player.yaw = 0.7;
        let f = player.forward();
        let r = player.right();
        assert_relative_eq!(f.x * r.x + f.z * r.z, 0.0, epsilon = 1e-6);
        // At yaw 0 right is +X
        player.yaw = 0.0;
        assert_relative_eq!(player.right().x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let player = Player::default();
        let input = FrameInput {
            forward: true,
            right: true,
            ..FrameInput::default()
        };
        assert_relative_eq!(player.desired_velocity(&input).speed(), PLAYER_SPEED, epsilon = 1e-4);
    }

    #[test]
    fn opposite_keys_cancel() {
        let player = Player::default();
        let input = FrameInput {
            forward: true,
            backward: true,
            ..FrameInput::default()
        };
        assert_eq!(player.desired_velocity(&input), Velocity::ZERO);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut player = Player::default();
        player.apply_look(0.0, -100_000.0);
        assert_relative_eq!(player.pitch, PITCH_LIMIT);
        player.apply_look(0.0, 100_000.0);
        assert_relative_eq!(player.pitch, -PITCH_LIMIT);
        assert!(player.pitch.abs() < FRAC_PI_2);
    }

    #[test]
    fn pointer_right_turns_right() {
        let mut player = Player::default();
        player.apply_look(100.0, 0.0);
        assert!(player.view_direction().x > 0.0);
    }

    #[test]
    fn health_floors_at_zero() {
        let mut player = Player::default();
        assert_relative_eq!(player.take_damage(30.0), 30.0);
        assert_relative_eq!(player.take_damage(500.0), 70.0);
        assert!(player.is_depleted());
        assert_relative_eq!(player.take_damage(-5.0), 0.0);
    }

    #[test]
    fn eye_height_is_pinned_while_walking() {
        let world = World::default();
        let monsters = MonsterRegistry::new();
        let occupancy = Occupancy::new(&[], &monsters);
        let mut player = Player::new(Position::new(60.0, 0.0));
        let input = FrameInput {
            forward: true,
            ..FrameInput::default()
        };
        for _ in 0..10 {
            move_player(&mut player, &world, &occupancy, &input, 0.016);
        }
        assert!(player.position.z < 0.0);
        assert_relative_eq!(player.eye_position().y, PLAYER_EYE_HEIGHT);
    }
}
