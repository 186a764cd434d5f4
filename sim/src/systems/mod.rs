pub mod autopilot;
pub mod reporting;
pub mod simulation;

pub use autopilot::{autopilot_system, plan_input};
pub use reporting::reporting_system;
pub use simulation::simulation_step_system;
