//! Messages into the game loop thread and the tally that comes out of it.

use serde::Serialize;

use raider_core::commands::{Controls, HostCommand};
use raider_core::events::GameEvent;
use raider_core::state::FrameSnapshot;

/// Commands sent from the host thread to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A host command to forward to the simulation engine.
    Host(HostCommand),
    /// Replace the analog controls.
    Controls(Controls),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// What happened over a whole run, for the log or for `--json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: u32,
    pub high_score: u32,
    /// Danger when the run ended, if the endless director was running.
    pub danger: Option<u32>,
    pub kills: u32,
    pub escapes: u32,
    pub alerts: u32,
    pub deaths: u32,
    pub powerups: u32,
    pub game_over: bool,
}

impl RunSummary {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Fold one frame into the summary.
    pub fn observe(&mut self, snapshot: &FrameSnapshot) {
        for event in &snapshot.events {
            match event {
                GameEvent::EnemyKilled { .. } => self.kills += 1,
                GameEvent::EnemyEscaped { .. } => self.escapes += 1,
                GameEvent::EnemyAlerted { .. } => self.alerts += 1,
                GameEvent::PlayerDied => self.deaths += 1,
                GameEvent::PowerUp { .. } => self.powerups += 1,
                GameEvent::GameOver => self.game_over = true,
                _ => {}
            }
        }
        self.frames = snapshot.time.frame;
        self.score = snapshot.score.score;
        self.high_score = snapshot.score.high_score;
        self.danger = snapshot.director.danger;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use raider_core::enums::{EnemyKind, PowerUpKind};
    use raider_core::events::EnemyReport;

    fn killed() -> GameEvent {
        GameEvent::EnemyKilled {
            enemy: EnemyReport {
                seq: 3,
                kind: EnemyKind::Patrol,
                position: Vec2::ZERO,
                points: 20,
                upgrade_points: 1,
            },
        }
    }

    #[test]
    fn test_summary_counts_events() {
        let mut summary = RunSummary::new(7);
        let mut snap = FrameSnapshot {
            events: vec![killed(), killed(), GameEvent::PlayerDied],
            ..Default::default()
        };
        snap.time.frame = 10;
        snap.score.score = 40;
        summary.observe(&snap);

        let mut snap = FrameSnapshot {
            events: vec![
                GameEvent::PowerUp {
                    kind: PowerUpKind::Gun,
                },
                GameEvent::GameOver,
            ],
            ..Default::default()
        };
        snap.time.frame = 11;
        snap.score.score = 40;
        snap.score.high_score = 40;
        summary.observe(&snap);

        assert_eq!(summary.seed, 7);
        assert_eq!(summary.kills, 2);
        assert_eq!(summary.deaths, 1);
        assert_eq!(summary.powerups, 1);
        assert!(summary.game_over);
        assert_eq!(summary.frames, 11);
        assert_eq!(summary.high_score, 40);
    }

    #[test]
    fn test_summary_serializes_flat() {
        let json = serde_json::to_value(RunSummary::new(1)).unwrap();
        assert_eq!(json["seed"], 1);
        assert_eq!(json["danger"], serde_json::Value::Null);
        assert_eq!(json["game_over"], false);
    }
}
