//! Game loop thread: runs the simulation engine and streams snapshots.
//!
//! The engine is created inside the thread since its event subscribers are
//! not `Send`. Commands arrive via `mpsc`; snapshots go back the same way.
//! With `realtime` set the loop sleeps to hold one frame per `dt`,
//! otherwise it runs flat out.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use raider_core::commands::HostCommand;
use raider_core::state::FrameSnapshot;
use raider_sim::formations::FormationCatalog;
use raider_sim::{SimConfig, SimulationEngine};

use crate::runner::Autopilot;
use crate::state::LoopCommand;

/// How the loop thread paces and bounds itself.
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Seconds of simulation per frame.
    pub dt: f32,
    /// Stop after this many frames.
    pub frames: u64,
    /// Sleep between frames to match wall-clock time.
    pub realtime: bool,
}

/// Handles to a running loop thread.
pub struct GameLoop {
    pub commands: mpsc::Sender<LoopCommand>,
    pub snapshots: mpsc::Receiver<FrameSnapshot>,
    pub handle: JoinHandle<()>,
}

/// Spawn the game loop in a new thread.
///
/// `opening` is queued before the first frame. With a pilot, the loop
/// plans controls from each snapshot before running the next frame, so a
/// piloted run is deterministic for a given seed.
pub fn spawn_game_loop(
    config: SimConfig,
    catalog: FormationCatalog,
    settings: LoopSettings,
    opening: Vec<HostCommand>,
    pilot: Option<Autopilot>,
) -> std::io::Result<GameLoop> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<FrameSnapshot>();

    let handle = std::thread::Builder::new()
        .name("raider-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::with_catalog(config, catalog);
            engine.queue_commands(opening);
            run_game_loop(&mut engine, settings, pilot, &cmd_rx, &snap_tx);
        })?;

    Ok(GameLoop {
        commands: cmd_tx,
        snapshots: snap_rx,
        handle,
    })
}

/// The game loop. Runs until the frame budget is spent, a Shutdown
/// command arrives, or either channel disconnects.
fn run_game_loop(
    engine: &mut SimulationEngine,
    settings: LoopSettings,
    pilot: Option<Autopilot>,
    cmd_rx: &mpsc::Receiver<LoopCommand>,
    snap_tx: &mpsc::Sender<FrameSnapshot>,
) {
    let frame_duration = Duration::from_secs_f32(settings.dt.max(0.0));
    let mut next_frame_time = Instant::now();
    let mut last: Option<FrameSnapshot> = None;

    for _ in 0..settings.frames {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Host(command)) => engine.queue_command(command),
                Ok(LoopCommand::Controls(controls)) => engine.set_controls(controls),
                Ok(LoopCommand::Shutdown) => {
                    log::info!("Game loop shut down by host");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Let the pilot react to the previous frame
        if let (Some(pilot), Some(snapshot)) = (&pilot, &last) {
            let plan = pilot.plan(snapshot);
            engine.set_controls(plan.controls);
            if plan.shoot {
                engine.queue_command(HostCommand::Shoot);
            }
        }

        // 3. Advance one frame and hand the snapshot out
        let snapshot = engine.frame(settings.dt);
        if snap_tx.send(snapshot.clone()).is_err() {
            return;
        }
        last = Some(snapshot);

        // 4. Sleep until the next frame
        if settings.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind: reset to avoid a catch-up spiral
                next_frame_time = now;
            }
        }
    }
    log::debug!("Game loop finished {} frames", settings.frames);
}

#[cfg(test)]
mod tests {
    use super::*;
    use raider_core::commands::{Controls, SceneConfig};
    use raider_core::enums::{GamePhase, SpawnStrategyKind};

    fn settings(frames: u64) -> LoopSettings {
        LoopSettings {
            dt: 1.0 / 60.0,
            frames,
            realtime: false,
        }
    }

    fn start() -> Vec<HostCommand> {
        vec![
            HostCommand::StartScene {
                config: SceneConfig {
                    spawn_strategy: SpawnStrategyKind::Endless,
                },
            },
            HostCommand::SetLives,
        ]
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Host(HostCommand::Shoot)).unwrap();
        tx.send(LoopCommand::Controls(Controls::steering(1.0, 0.0)))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], LoopCommand::Host(HostCommand::Shoot)));
        assert!(matches!(commands[1], LoopCommand::Controls(_)));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_streams_every_frame() {
        let game = spawn_game_loop(
            SimConfig::default(),
            FormationCatalog::standard().unwrap(),
            settings(30),
            start(),
            None,
        )
        .unwrap();

        let snapshots: Vec<FrameSnapshot> = game.snapshots.iter().collect();
        game.handle.join().unwrap();

        assert_eq!(snapshots.len(), 30);
        assert_eq!(snapshots[0].phase, GamePhase::Active);
        assert!(snapshots[0].player.is_some(), "SetLives ran before frame one");
        assert_eq!(snapshots[29].time.frame, 30);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let game = spawn_game_loop(
            SimConfig::default(),
            FormationCatalog::standard().unwrap(),
            settings(u64::MAX),
            start(),
            None,
        )
        .unwrap();

        let first = game.snapshots.recv().unwrap();
        assert_eq!(first.time.frame, 1);
        game.commands.send(LoopCommand::Shutdown).unwrap();
        game.handle.join().unwrap();
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let game = spawn_game_loop(
            SimConfig::default(),
            FormationCatalog::standard().unwrap(),
            settings(300),
            start(),
            None,
        )
        .unwrap();
        let snapshot = game.snapshots.iter().last().unwrap();
        game.handle.join().unwrap();

        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
