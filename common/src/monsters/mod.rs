pub mod animation;
pub mod behavior;
pub mod body;
pub mod spawn;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use bevy_math::{Quat, Vec3};
use std::collections::HashMap;

pub use behavior::{MonstersReport, update_monsters};
pub use body::{BodyPart, BodyPartKind, CREATURE_LAYOUT, HitShape};
pub use spawn::spawn_monsters;

use crate::{
    components::{MonsterId, PartId, Position, Velocity},
    constants::*,
};

// ============================================================================
// Monster
// ============================================================================

// Level-triggered behavior state, re-evaluated from the player distance every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum BehaviorState {
    #[default]
    Wander,
    Pursuing,
}

// Color scheme picked at spawn; only the presentation layer cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Coat {
    Brown,
    Grey,
    DarkBrown,
    Red,
    DarkGreen,
}

impl Coat {
    pub const ALL: [Self; 5] = [Self::Brown, Self::Grey, Self::DarkBrown, Self::Red, Self::DarkGreen];
}

// Leg swing angles carried between frames so idle legs can ease back to rest
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gait {
    pub legs: [f32; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub id: MonsterId,
    pub position: Position,
    pub facing_yaw: f32,
    pub velocity: Velocity,
    pub scale: f32, // fixed at spawn
    pub state: BehaviorState,
    pub animation_clock: f32,
    pub coat: Coat,
    pub gait: Gait,
    pub body: Vec<BodyPart>,
}

impl Monster {
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.scale * MONSTER_RADIUS_FACTOR
    }

    #[must_use]
    pub fn pursuit_speed(&self) -> f32 {
        (self.scale - MONSTER_REFERENCE_SCALE).mul_add(PURSUIT_SIZE_COEFFICIENT, PURSUIT_BASE_SPEED)
    }

    #[must_use]
    pub fn wander_speed(&self) -> f32 {
        (self.scale - MONSTER_REFERENCE_SCALE).mul_add(WANDER_SIZE_COEFFICIENT, WANDER_BASE_SPEED)
    }

    #[must_use]
    pub fn attack_range(&self) -> f32 {
        self.scale.mul_add(ATTACK_RANGE_SIZE_COEFFICIENT, ATTACK_BASE_RANGE)
    }

    // Health per second drained from the player while in attack range
    #[must_use]
    pub fn attack_damage_rate(&self) -> f32 {
        (self.scale - MONSTER_REFERENCE_SCALE).mul_add(ATTACK_DAMAGE_SIZE_COEFFICIENT, ATTACK_BASE_DAMAGE)
    }

    #[must_use]
    pub fn is_aggressive(&self) -> bool {
        self.state == BehaviorState::Pursuing
    }

    // World-space body root and orientation used to place the hit volumes.
    #[must_use]
    pub fn body_frame(&self) -> (Vec3, Quat) {
        (
            Vec3::new(self.position.x, MONSTER_ROOT_HEIGHT, self.position.z),
            Quat::from_rotation_y(self.facing_yaw),
        )
    }
}

// Parameters for a monster about to be inserted into the registry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterSpec {
    pub position: Position,
    pub scale: f32,
    pub facing_yaw: f32,
    pub animation_clock: f32,
    pub coat: Coat,
}

impl MonsterSpec {
    #[must_use]
    pub const fn at(x: f32, z: f32, scale: f32) -> Self {
        Self {
            position: Position::new(x, z),
            scale,
            facing_yaw: 0.0,
            animation_clock: 0.0,
            coat: Coat::Brown,
        }
    }
}

// ============================================================================
// Monster Registry
// ============================================================================

// Sole owner of the live monsters plus the hit-part -> monster lookup table.
#[derive(Debug, Default)]
pub struct MonsterRegistry {
    monsters: Vec<Monster>,
    part_owners: HashMap<PartId, MonsterId>,
    next_monster_id: u32,
    next_part_id: u32,
}

impl MonsterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, spec: MonsterSpec) -> MonsterId {
        let id = MonsterId(self.next_monster_id);
        self.next_monster_id += 1;

        let mut body = Vec::with_capacity(CREATURE_LAYOUT.len());
        for (kind, shape) in CREATURE_LAYOUT {
            let part = PartId(self.next_part_id);
            self.next_part_id += 1;
            self.part_owners.insert(part, id);
            body.push(BodyPart { id: part, kind, shape });
        }

        self.monsters.push(Monster {
            id,
            position: spec.position,
            facing_yaw: spec.facing_yaw,
            velocity: Velocity::ZERO,
            scale: spec.scale.clamp(MONSTER_MIN_SCALE, MONSTER_MAX_SCALE),
            state: BehaviorState::Wander,
            animation_clock: spec.animation_clock,
            coat: spec.coat,
            gait: Gait::default(),
            body,
        });
        id
    }

    // Removes the monster and its hit parts; later queries no longer see it.
    pub fn remove(&mut self, id: MonsterId) -> Option<Monster> {
        let index = self.monsters.iter().position(|m| m.id == id)?;
        let monster = self.monsters.remove(index);
        for part in &monster.body {
            self.part_owners.remove(&part.id);
        }
        Some(monster)
    }

    #[must_use]
    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: MonsterId) -> bool {
        self.get(id).is_some()
    }

    // Resolves a hit part to its top-level monster; None once the monster is gone.
    #[must_use]
    pub fn owner_of(&self, part: PartId) -> Option<MonsterId> {
        self.part_owners.get(&part).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Monster] {
        &self.monsters
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Monster] {
        &mut self.monsters
    }
}
