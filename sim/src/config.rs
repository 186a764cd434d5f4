use anyhow::{Result, bail};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use common::config::WorldSettings;

const DEFAULT_LOG_FILTER: &str = "info";
const MAX_FPS: u32 = 240;

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "River Hunt headless simulation", long_about = None)]
pub struct Args {
    /// Seed for world generation and monster behavior
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Number of monsters to spawn
    #[arg(long, default_value_t = common::constants::MONSTER_COUNT)]
    pub monsters: usize,

    /// Number of trees to scatter
    #[arg(long, default_value_t = common::constants::TREE_COUNT)]
    pub trees: usize,

    /// Number of rocks to scatter
    #[arg(long, default_value_t = common::constants::ROCK_COUNT)]
    pub rocks: usize,

    /// Stop after this many frames (runs until interrupted when omitted)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Frame rate of the host loop
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Advance simulated time by exactly 1/fps per frame instead of wall-clock time
    #[arg(long, default_value_t = false)]
    pub fixed_step: bool,

    /// Print a JSON snapshot every N frames
    #[arg(long)]
    pub snapshot_every: Option<u64>,

    // Disable the scripted player
    #[arg(long, default_value_t = false)]
    pub no_autopilot: bool,
}

// Validated run parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub settings: WorldSettings,
    pub seed: u64,
    pub frames: Option<u64>,
    pub fps: u32,
    pub fixed_step: bool,
    pub snapshot_every: Option<u64>,
    pub autopilot: bool,
}

impl RunConfig {
    #[must_use]
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            settings: WorldSettings::default(),
            seed: 1,
            frames: None,
            fps: 60,
            fixed_step: false,
            snapshot_every: None,
            autopilot: true,
        }
    }
}

impl TryFrom<Args> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        if args.fps == 0 || args.fps > MAX_FPS {
            bail!("--fps must be between 1 and {MAX_FPS}, got {}", args.fps);
        }
        if args.snapshot_every == Some(0) {
            bail!("--snapshot-every must be at least 1");
        }
        if args.frames == Some(0) {
            bail!("--frames must be at least 1");
        }

        Ok(Self {
            settings: WorldSettings {
                tree_count: args.trees,
                rock_count: args.rocks,
                monster_count: args.monsters,
                ..WorldSettings::default()
            },
            seed: args.seed,
            frames: args.frames,
            fps: args.fps,
            fixed_step: args.fixed_step,
            snapshot_every: args.snapshot_every,
            autopilot: !args.no_autopilot,
        })
    }
}

// ============================================================================
// Logging
// ============================================================================

// RUST_LOG overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
