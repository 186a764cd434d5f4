#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

// Raw per-frame input as sampled by the host: held movement keys, pointer motion
// accumulated since the previous frame and the fire button's press edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct FrameInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub pointer_dx: f32, // pixels
    pub pointer_dy: f32, // pixels
    pub fire: bool,
}
