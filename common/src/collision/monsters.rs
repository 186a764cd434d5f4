use super::helpers::overlap_circles;
use crate::{
    components::{MonsterId, Position},
    monsters::{Monster, MonsterRegistry},
};

#[must_use]
pub fn overlap_circle_vs_monster(pos: &Position, radius: f32, monster: &Monster) -> bool {
    overlap_circles(pos, radius, &monster.position, monster.radius())
}

// Overlap against every live monster except `excluding` (the mover itself).
#[must_use]
pub fn overlap_circle_vs_monsters(
    pos: &Position,
    radius: f32,
    monsters: &MonsterRegistry,
    excluding: Option<MonsterId>,
) -> bool {
    monsters
        .iter()
        .filter(|monster| Some(monster.id) != excluding)
        .any(|monster| overlap_circle_vs_monster(pos, radius, monster))
}
