pub mod collision;
pub mod components;
pub mod config;
pub mod constants;
pub mod events;
pub mod input;
pub mod map;
pub mod monsters;
pub mod movement;
pub mod players;
pub mod simulation;
pub mod spawning;
pub mod weapon;

pub use simulation::{FrameReport, Simulation, Snapshot};
