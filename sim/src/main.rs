use anyhow::Result;
use clap::Parser;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{info, warn};

use common::simulation::Simulation;
use sim::{
    build_app,
    config::{Args, RunConfig, init_tracing},
    resources::RunStats,
};

// ============================================================================
// Main
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    let config = RunConfig::try_from(args)?;

    let mut app = build_app(&config);

    info!(
        "starting simulation loop at {} fps{}",
        config.fps,
        if config.fixed_step { " (fixed step)" } else { "" }
    );

    // Run the app in a loop manually at the configured frame rate
    let tick_duration = config.tick_duration();
    let mut interval = time::interval(tick_duration);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frame: u64 = 0;
    while config.frames.is_none_or(|limit| frame < limit) {
        interval.tick().await;

        let update_start = Instant::now();
        app.update();
        let update_elapsed = update_start.elapsed();

        if update_elapsed > tick_duration {
            warn!(
                "frame {} took {:.2}ms (exceeded {:.2}ms budget)",
                frame,
                update_elapsed.as_secs_f64() * 1000.0,
                tick_duration.as_secs_f64() * 1000.0
            );
        }

        frame += 1;
    }

    let stats = app.world().resource::<RunStats>();
    let sim = app.world().resource::<Simulation>();
    info!(
        "done after {} frames: {} steps ({} skipped), {} shots, {} kills, {:.1} damage taken, health {:.1}, {} monsters left",
        frame,
        stats.steps,
        stats.skipped,
        stats.shots,
        stats.kills,
        stats.damage_taken,
        sim.player.health,
        sim.monsters.len()
    );

    Ok(())
}
