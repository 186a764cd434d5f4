#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, trace};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    collision::{Obstacle, Occupancy, fire_shot},
    components::{MonsterId, Position},
    config::WorldSettings,
    constants::MAX_FRAME_DELTA,
    events::{AgentDestroyed, PostureChanged, ShotOutcome},
    input::FrameInput,
    map::World,
    monsters::{Coat, MonsterRegistry, animation::{Pose, pose}, spawn_monsters, update_monsters},
    movement::MoveOutcome,
    players::{Player, move_player},
    spawning::populate_obstacles,
    weapon::{Tracer, Weapon, update_tracers},
};

// Accepts only finite, positive frame times no longer than `MAX_FRAME_DELTA`.
#[must_use]
pub fn sanitize_delta(delta: f32) -> Option<f32> {
    (delta.is_finite() && delta > 0.0 && delta <= MAX_FRAME_DELTA).then_some(delta)
}

// Everything one step produced, for the host to log or forward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub skipped: bool, // delta was rejected; nothing changed
    pub shot: ShotOutcome,
    pub player_move: Option<MoveOutcome>,
    pub postures: Vec<PostureChanged>,
    pub damage_taken: f32,
}

impl FrameReport {
    #[must_use]
    pub const fn destroyed(&self) -> Option<AgentDestroyed> {
        self.shot.destroyed()
    }
}

// ============================================================================
// Simulation Context
// ============================================================================

/// The whole session state. One `step` runs to completion before anything reads it.
#[derive(Resource, Debug)]
pub struct Simulation {
    pub world: World,
    pub obstacles: Vec<Obstacle>,
    pub monsters: MonsterRegistry,
    pub player: Player,
    pub weapon: Weapon,
    pub tracers: Vec<Tracer>,
    pub score: u32,
    pub frame: u64,
    pub elapsed: f32, // simulated seconds
}

impl Simulation {
    #[must_use]
    pub fn new(world: World, obstacles: Vec<Obstacle>, monsters: MonsterRegistry, player: Player) -> Self {
        Self {
            world,
            obstacles,
            monsters,
            player,
            weapon: Weapon::new(),
            tracers: Vec::new(),
            score: 0,
            frame: 0,
            elapsed: 0.0,
        }
    }

    // Builds and populates a fresh session. Same settings and RNG state give the same world.
    pub fn generate(settings: &WorldSettings, rng: &mut impl Rng) -> Self {
        let world = World::from_settings(settings);
        let obstacles = populate_obstacles(&world, settings, rng);
        let mut monsters = MonsterRegistry::new();
        spawn_monsters(&mut monsters, &world, &obstacles, settings.monster_count, rng);
        info!(
            "world generated: {} obstacles, {} monsters, size {}",
            obstacles.len(),
            monsters.len(),
            world.size
        );
        Self::new(world, obstacles, monsters, Player::default())
    }

    /// Advances the session by one frame.
    ///
    /// Order: look, fire, player move, every monster, tracer decay. A rejected
    /// delta turns the whole step into a no-op.
    pub fn step(&mut self, input: &FrameInput, delta: f32, rng: &mut impl Rng) -> FrameReport {
        let Some(delta) = sanitize_delta(delta) else {
            trace!("skipping step with delta {delta}");
            return FrameReport {
                frame: self.frame,
                skipped: true,
                ..FrameReport::default()
            };
        };

        let tick = Duration::from_secs_f32(delta);
        self.player.apply_look(input.pointer_dx, input.pointer_dy);
        self.weapon.advance(tick);

        let shot = if input.fire { self.fire() } else { ShotOutcome::NotFired };

        let player_move = move_player(
            &mut self.player,
            &self.world,
            &Occupancy::new(&self.obstacles, &self.monsters),
            input,
            delta,
        );

        let monsters = update_monsters(
            &mut self.monsters,
            &self.world,
            &self.obstacles,
            &self.player.position,
            delta,
            rng,
        );
        let damage_taken = self.player.take_damage(monsters.damage);

        update_tracers(&mut self.tracers, tick);

        self.elapsed += delta;
        self.frame += 1;

        FrameReport {
            frame: self.frame,
            skipped: false,
            shot,
            player_move: Some(player_move),
            postures: monsters.postures,
            damage_taken,
        }
    }

    // Cooldown gate first; only an accepted pull performs the hit test.
    fn fire(&mut self) -> ShotOutcome {
        if !self.weapon.try_trigger() {
            return ShotOutcome::CoolingDown;
        }

        let eye = self.player.eye_position();
        let dir = self.player.view_direction();
        self.tracers.push(Tracer::from_view(eye, dir));

        let Some(hit) = fire_shot(&self.monsters, eye, dir) else {
            return ShotOutcome::Missed;
        };
        if self.monsters.remove(hit.monster).is_none() {
            return ShotOutcome::Missed;
        }

        self.score += 1;
        debug!(
            "monster {:?} destroyed ({:?} at {:.1}m), score {}",
            hit.monster, hit.part, hit.distance, self.score
        );
        ShotOutcome::Hit(AgentDestroyed {
            monster: hit.monster,
            part: hit.part,
            distance: hit.distance,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            elapsed: self.elapsed,
            score: self.score,
            player: PlayerView {
                position: self.player.position,
                eye: self.player.eye_position(),
                yaw: self.player.yaw,
                pitch: self.player.pitch,
                health: self.player.health,
            },
            monsters: self
                .monsters
                .iter()
                .map(|monster| MonsterView {
                    id: monster.id,
                    position: monster.position,
                    facing_yaw: monster.facing_yaw,
                    scale: monster.scale,
                    aggressive: monster.is_aggressive(),
                    coat: monster.coat,
                    pose: pose(monster),
                })
                .collect(),
            tracers: self
                .tracers
                .iter()
                .map(|tracer| TracerView {
                    origin: tracer.origin,
                    end: tracer.end,
                    remaining: tracer.lifetime.remaining_secs(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Snapshot
// ============================================================================

// Read-only per-frame view for a presentation layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub frame: u64,
    pub elapsed: f32,
    pub score: u32,
    pub player: PlayerView,
    pub monsters: Vec<MonsterView>,
    pub tracers: Vec<TracerView>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PlayerView {
    pub position: Position,
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MonsterView {
    pub id: MonsterId,
    pub position: Position,
    pub facing_yaw: f32,
    pub scale: f32,
    pub aggressive: bool,
    pub coat: Coat,
    pub pose: Pose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct TracerView {
    pub origin: Vec3,
    pub end: Vec3,
    pub remaining: f32, // seconds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monsters::MonsterSpec;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    fn empty_session() -> Simulation {
        Simulation::new(World::default(), Vec::new(), MonsterRegistry::new(), Player::default())
    }

    #[rstest]
    #[case(0.016, true)]
    #[case(1.0, true)]
    #[case(0.0, false)]
    #[case(-0.1, false)]
    #[case(1.5, false)]
    #[case(f32::NAN, false)]
    #[case(f32::INFINITY, false)]
    fn delta_sanitizing(#[case] delta: f32, #[case] accepted: bool) {
        assert_eq!(sanitize_delta(delta).is_some(), accepted);
    }

    #[test]
    fn rejected_delta_changes_nothing() {
        let mut sim = empty_session();
        sim.monsters.insert(MonsterSpec::at(0.0, 0.0, 1.0));
        let before = sim.snapshot();
        let input = FrameInput {
            forward: true,
            fire: true,
            pointer_dx: 40.0,
            ..FrameInput::default()
        };

        let report = sim.step(&input, f32::NAN, &mut StdRng::seed_from_u64(1));
        assert!(report.skipped);
        assert_eq!(report.shot, ShotOutcome::NotFired);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn fire_spawns_tracer_even_on_miss() {
        let mut sim = empty_session();
        let input = FrameInput {
            fire: true,
            ..FrameInput::default()
        };
        let report = sim.step(&input, 0.016, &mut StdRng::seed_from_u64(2));
        assert_eq!(report.shot, ShotOutcome::Missed);
        assert_eq!(sim.tracers.len(), 1);

        // Tracer is gone after its lifetime
        sim.step(&FrameInput::default(), 0.06, &mut StdRng::seed_from_u64(2));
        assert!(sim.tracers.is_empty());
    }

    #[test]
    fn snapshot_reflects_session() {
        let mut sim = Simulation::generate(&WorldSettings::default(), &mut StdRng::seed_from_u64(9));
        sim.step(&FrameInput::default(), 0.016, &mut StdRng::seed_from_u64(9));
        let snapshot = sim.snapshot();

        assert_eq!(snapshot.frame, 1);
        assert_eq!(snapshot.monsters.len(), sim.monsters.len());
        assert!((snapshot.player.eye.y - crate::constants::PLAYER_EYE_HEIGHT).abs() < 1e-6);
    }

    #[cfg(feature = "json")]
    #[test]
    fn snapshot_serializes_to_json() {
        let mut sim = empty_session();
        sim.monsters.insert(MonsterSpec::at(30.0, 0.0, 1.0));
        let value = serde_json::to_value(sim.snapshot()).unwrap();

        assert_eq!(value["frame"], 0);
        assert_eq!(value["monsters"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["monsters"][0]["aggressive"], false);
        assert!(value["player"]["health"].is_number());

        let back: Snapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back.monsters[0].position, Position::new(30.0, 0.0));
    }
}
