use clap::{Parser, ValueEnum};

use raider_app::game_loop::LoopSettings;
use raider_app::runner::{self, RunOptions};
use raider_app::{core::enums::SpawnStrategyKind, logging};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// No procedural spawning
    None,
    /// Endless difficulty-gated formations
    Endless,
}

impl From<Strategy> for SpawnStrategyKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::None => SpawnStrategyKind::None,
            Strategy::Endless => SpawnStrategyKind::Endless,
        }
    }
}

/// Headless vertical shooter simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed; the same seed replays the same session
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Lives per session
    #[arg(long, default_value_t = 3)]
    lives: u32,
    #[arg(long, value_enum, default_value_t = Strategy::Endless)]
    strategy: Strategy,
    /// Frames between autopilot trigger pulls
    #[arg(long, default_value_t = 12)]
    fire_interval: u64,
    /// Leave the ship idle instead of flying the autopilot
    #[arg(long)]
    idle: bool,
    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.dt.is_nan() || args.dt <= 0.0 {
        anyhow::bail!("--dt must be positive, got {}", args.dt);
    }

    let summary = runner::run(&RunOptions {
        seed: args.seed,
        lives: args.lives,
        strategy: args.strategy.into(),
        loop_settings: LoopSettings {
            dt: args.dt,
            frames: args.frames,
            realtime: args.realtime,
        },
        fire_interval: (!args.idle).then_some(args.fire_interval),
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        log::info!(
            "{} frames: score {} (high {}), {} kills, {} escapes, {} alerts, {} ships lost",
            summary.frames,
            summary.score,
            summary.high_score,
            summary.kills,
            summary.escapes,
            summary.alerts,
            summary.deaths
        );
        if let Some(danger) = summary.danger {
            log::info!("Final danger {danger}");
        }
        if summary.game_over {
            log::info!("Game over");
        }
    }
    Ok(())
}
