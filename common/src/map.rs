use crate::{
    components::Position,
    config::WorldSettings,
    constants::{RIVER_AMPLITUDE, RIVER_BAND_RATIO, RIVER_FREQUENCY},
};

// ============================================================================
// River
// ============================================================================

// Winding river whose centerline is x = sin(z * frequency) * amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct River {
    pub width: f32, // half-width
    pub amplitude: f32,
    pub frequency: f32,
}

impl River {
    #[must_use]
    pub const fn new(width: f32) -> Self {
        Self {
            width,
            amplitude: RIVER_AMPLITUDE,
            frequency: RIVER_FREQUENCY,
        }
    }

    #[must_use]
    pub fn center_x(&self, z: f32) -> f32 {
        (z * self.frequency).sin() * self.amplitude
    }

    // Sideways distance from the centerline at the given depth.
    #[must_use]
    pub fn offset_from_center(&self, x: f32, z: f32) -> f32 {
        (x - self.center_x(z)).abs()
    }
}

// ============================================================================
// World
// ============================================================================

// Immutable terrain description: a flat square with one river running along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub size: f32,
    pub river: River,
}

impl World {
    #[must_use]
    pub const fn new(size: f32, river_width: f32) -> Self {
        Self {
            size,
            river: River::new(river_width),
        }
    }

    #[must_use]
    pub const fn from_settings(settings: &WorldSettings) -> Self {
        Self::new(settings.size, settings.river_width)
    }

    /// Terrain classification: true when (x, z) lies strictly inside the slow-water band.
    #[must_use]
    pub fn is_in_river(&self, x: f32, z: f32) -> bool {
        self.river.offset_from_center(x, z) < self.river.width * RIVER_BAND_RATIO
    }

    #[must_use]
    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }

    // Returns true if a circle of `radius` at `pos` lies completely on the ground plane.
    #[must_use]
    pub fn contains(&self, pos: &Position, radius: f32) -> bool {
        let limit = self.half_extent() - radius;
        pos.x.abs() <= limit && pos.z.abs() <= limit
    }
}

impl Default for World {
    fn default() -> Self {
        Self::from_settings(&WorldSettings::default())
    }
}
