use bevy::prelude::*;
use tracing::{debug, info, warn};

use crate::resources::{RunStats, SnapshotConfig};
use common::{
    events::{AgentDestroyed, PostureChanged},
    simulation::Simulation,
};

// Logs this frame's messages and prints JSON snapshots at the configured cadence.
pub fn reporting_system(
    sim: Res<Simulation>,
    snapshots: Res<SnapshotConfig>,
    mut stats: ResMut<RunStats>,
    mut destroyed: MessageReader<AgentDestroyed>,
    mut postures: MessageReader<PostureChanged>,
    mut last_snapshot: Local<Option<u64>>,
) {
    for event in destroyed.read() {
        info!(
            "monster {:?} down ({:?}, {:.1}m), {} left, score {}",
            event.monster,
            event.part,
            event.distance,
            sim.monsters.len(),
            sim.score
        );
    }

    for event in postures.read() {
        if event.aggressive {
            debug!("monster {:?} is hunting", event.monster);
        } else {
            debug!("monster {:?} lost interest", event.monster);
        }
    }

    if sim.player.is_depleted() && !stats.depleted_logged {
        warn!("player health depleted at frame {}", sim.frame);
        stats.depleted_logged = true;
    }

    let Some(every) = snapshots.every else {
        return;
    };
    // Skipped steps leave the frame counter unchanged; print each frame once
    if sim.frame == 0 || sim.frame % every != 0 || *last_snapshot == Some(sim.frame) {
        return;
    }
    *last_snapshot = Some(sim.frame);

    match serde_json::to_string(&sim.snapshot()) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!("failed to serialize snapshot: {e}"),
    }
}
