use bevy::prelude::*;

use crate::resources::{PendingInput, RunStats, SimRng};
use common::{
    events::{AgentDestroyed, PostureChanged, ShotOutcome},
    simulation::Simulation,
};

// Runs one simulation step with this frame's delta and forwards its events as messages.
pub fn simulation_step_system(
    time: Res<Time>,
    mut sim: ResMut<Simulation>,
    mut pending: ResMut<PendingInput>,
    mut rng: ResMut<SimRng>,
    mut stats: ResMut<RunStats>,
    mut destroyed: MessageWriter<AgentDestroyed>,
    mut postures: MessageWriter<PostureChanged>,
) {
    // The fire edge is consumed by exactly one step
    let input = std::mem::take(&mut pending.0);
    let report = sim.step(&input, time.delta_secs(), &mut rng.0);

    if report.skipped {
        stats.skipped += 1;
        return;
    }
    stats.steps += 1;
    stats.damage_taken += report.damage_taken;

    if matches!(report.shot, ShotOutcome::Missed | ShotOutcome::Hit(_)) {
        stats.shots += 1;
    }
    if let Some(event) = report.destroyed() {
        stats.kills += 1;
        destroyed.write(event);
    }
    for event in report.postures {
        postures.write(event);
    }
}
