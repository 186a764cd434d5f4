use crate::constants::{MONSTER_COUNT, RIVER_WIDTH, ROCK_COUNT, TREE_COUNT, WORLD_SIZE};

// ============================================================================
// World Settings
// ============================================================================

// Session parameters chosen before population; everything else is a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSettings {
    pub size: f32,
    pub river_width: f32,
    pub tree_count: usize,
    pub rock_count: usize,
    pub monster_count: usize,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            size: WORLD_SIZE,
            river_width: RIVER_WIDTH,
            tree_count: TREE_COUNT,
            rock_count: ROCK_COUNT,
            monster_count: MONSTER_COUNT,
        }
    }
}
