pub mod config;
pub mod resources;
pub mod systems;

use bevy::{prelude::*, time::TimeUpdateStrategy};
use tracing::info;

use common::{
    events::{AgentDestroyed, PostureChanged},
    simulation::Simulation,
};
use config::RunConfig;
use resources::{Autopilot, PendingInput, RunStats, SimRng, SnapshotConfig};
use systems::{autopilot_system, reporting_system, simulation_step_system};

// ============================================================================
// App Setup
// ============================================================================

/// Builds the headless app: generated world, seeded RNG and the frame systems.
///
/// The caller drives it with `App::update`, one call per frame.
#[must_use]
pub fn build_app(config: &RunConfig) -> App {
    let mut rng = SimRng::seeded(config.seed);
    let sim = Simulation::generate(&config.settings, &mut rng.0);
    info!(
        "seed {}: {} trees/rocks, {} monsters",
        config.seed,
        sim.obstacles.len(),
        sim.monsters.len()
    );

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<AgentDestroyed>()
        .add_message::<PostureChanged>()
        .insert_resource(sim)
        .insert_resource(rng)
        .insert_resource(PendingInput::default())
        .insert_resource(RunStats::default())
        .insert_resource(SnapshotConfig {
            every: config.snapshot_every,
        })
        .add_systems(
            Update,
            (
                // Input must be planned before the step, and the step must finish before anything
                // reads its results
                autopilot_system.run_if(resource_exists::<Autopilot>),
                simulation_step_system,
                reporting_system,
            )
                .chain(),
        );

    if config.autopilot {
        app.insert_resource(Autopilot::default());
    }
    if config.fixed_step {
        app.insert_resource(TimeUpdateStrategy::ManualDuration(config.tick_duration()));
    }

    app
}
