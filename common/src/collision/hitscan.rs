use bevy_math::Vec3;

use crate::{
    components::{MonsterId, PartId},
    constants::PHYSICS_EPSILON,
    monsters::{BodyPartKind, Monster, MonsterRegistry},
};

// Closest body part struck by a ray on a single monster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartHit {
    pub part: PartId,
    pub kind: BodyPartKind,
    pub distance: f32,
}

// Resolved shot: the owning monster, never a sub-part identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotHit {
    pub monster: MonsterId,
    pub part: BodyPartKind,
    pub distance: f32,
}

// Casts a unit-length world ray against every hit volume of one monster.
//
// The ray is moved into the monster's body frame (undo translation, yaw and scale);
// distances found there are converted back to world meters.
#[must_use]
pub fn ray_vs_monster(origin: Vec3, dir: Vec3, monster: &Monster) -> Option<PartHit> {
    let (root, rotation) = monster.body_frame();
    let inverse = rotation.inverse();
    let local_origin = inverse * (origin - root) / monster.scale;
    let local_dir = inverse * dir / monster.scale;

    let local_len = local_dir.length();
    if local_len <= PHYSICS_EPSILON {
        return None;
    }
    let local_unit = local_dir / local_len;

    monster
        .body
        .iter()
        .filter_map(|part| {
            part.shape.ray_distance(local_origin, local_unit).map(|t| PartHit {
                part: part.id,
                kind: part.kind,
                distance: t / local_len,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Hit-scan resolution against the live monsters.
///
/// Takes the nearest intersection over all hit volumes and maps the struck part back
/// to its owner through the registry's lookup table. A zero-length direction never
/// hits. At most one monster is returned per call.
#[must_use]
pub fn fire_shot(monsters: &MonsterRegistry, origin: Vec3, direction: Vec3) -> Option<ShotHit> {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return None;
    }

    let nearest = monsters
        .iter()
        .filter_map(|monster| ray_vs_monster(origin, dir, monster))
        .min_by(|a, b| a.distance.total_cmp(&b.distance))?;

    let monster = monsters.owner_of(nearest.part)?;
    Some(ShotHit {
        monster,
        part: nearest.kind,
        distance: nearest.distance,
    })
}
