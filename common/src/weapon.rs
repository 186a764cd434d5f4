use bevy_math::Vec3;
use bevy_time::{Timer, TimerMode};
use std::time::Duration;

use crate::constants::{SHOT_COOLDOWN, TRACER_LENGTH, TRACER_LIFETIME, TRACER_MUZZLE_OFFSET};

// ============================================================================
// Weapon
// ============================================================================

// Hit-scan rifle with a fixed cooldown between accepted shots. Starts ready.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    cooldown: Timer, // restarted by every accepted shot
}

impl Weapon {
    #[must_use]
    pub fn new() -> Self {
        let mut cooldown = Timer::from_seconds(SHOT_COOLDOWN, TimerMode::Once);
        let full = cooldown.duration();
        cooldown.tick(full);
        Self { cooldown }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.cooldown.tick(delta);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cooldown.is_finished()
    }

    // Seconds until the next shot is accepted (0 when ready)
    #[must_use]
    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown.remaining_secs()
    }

    // Consumes the trigger pull if the cooldown has elapsed; otherwise the pull is ignored.
    pub fn try_trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.cooldown.reset();
        true
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tracer
// ============================================================================

// Short-lived visual streak along the shot; no gameplay effect.
#[derive(Debug, Clone)]
pub struct Tracer {
    pub origin: Vec3,
    pub end: Vec3,
    pub lifetime: Timer,
}

impl Tracer {
    // Streak from just in front of the eye out along the (unit) view direction.
    #[must_use]
    pub fn from_view(eye: Vec3, dir: Vec3) -> Self {
        let origin = eye + dir * TRACER_MUZZLE_OFFSET;
        Self {
            origin,
            end: origin + dir * TRACER_LENGTH,
            lifetime: Timer::from_seconds(TRACER_LIFETIME, TimerMode::Once),
        }
    }
}

// Ages every tracer and drops the expired ones.
pub fn update_tracers(tracers: &mut Vec<Tracer>, delta: Duration) {
    tracers.retain_mut(|tracer| {
        tracer.lifetime.tick(delta);
        !tracer.lifetime.is_finished()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_shot_is_accepted() {
        let mut weapon = Weapon::new();
        assert!(weapon.is_ready());
        assert!(weapon.try_trigger());
    }

    #[test]
    fn shots_inside_cooldown_are_ignored() {
        let mut weapon = Weapon::new();
        assert!(weapon.try_trigger());

        weapon.advance(Duration::from_millis(100));
        assert!(!weapon.try_trigger());
        assert_relative_eq!(weapon.cooldown_remaining(), 0.08, epsilon = 1e-5);

        // The rejected pull did not restart the cooldown
        weapon.advance(Duration::from_millis(100));
        assert!(weapon.try_trigger());
    }

    #[test]
    fn weapon_rearms_deep_into_a_session() {
        let mut weapon = Weapon::new();
        weapon.advance(Duration::from_secs(600_000));
        assert!(weapon.try_trigger());

        let frame = Duration::from_secs_f32(1.0 / 60.0);
        let mut accepted = 0;
        for _ in 0..600 {
            weapon.advance(frame);
            if weapon.try_trigger() {
                accepted += 1;
            }
        }
        // One shot every 11 frames (0.1833 s) over 10 s
        assert_eq!(accepted, 54);
    }

    #[test]
    fn idle_time_does_not_bank_shots() {
        let mut weapon = Weapon::new();
        weapon.advance(Duration::from_secs(10));
        assert!(weapon.try_trigger());
        assert!(!weapon.try_trigger());
        assert_relative_eq!(weapon.cooldown_remaining(), SHOT_COOLDOWN, epsilon = 1e-5);
    }

    #[test]
    fn tracer_spans_from_muzzle() {
        let tracer = Tracer::from_view(Vec3::new(0.0, 1.7, 0.0), Vec3::NEG_Z);
        assert_relative_eq!(tracer.origin.z, -TRACER_MUZZLE_OFFSET);
        assert_relative_eq!(tracer.origin.distance(tracer.end), TRACER_LENGTH, epsilon = 1e-4);
    }

    #[test]
    fn tracers_expire() {
        let mut tracers = vec![Tracer::from_view(Vec3::ZERO, Vec3::X)];
        update_tracers(&mut tracers, Duration::from_millis(30));
        assert_eq!(tracers.len(), 1);
        update_tracers(&mut tracers, Duration::from_millis(30));
        assert!(tracers.is_empty());
    }
}
