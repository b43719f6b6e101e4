//! Session score and high score.

use raider_core::events::EnemyReport;
use raider_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct Scoring {
    score: u32,
    high_score: u32,
    /// Score at the last Idle pass.
    last_score: u32,
    upgrades: u32,
}

impl Scoring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the running score. The high score survives.
    pub fn start_session(&mut self) {
        self.score = 0;
        self.last_score = 0;
        self.upgrades = 0;
    }

    pub fn on_enemy_killed(&mut self, enemy: &EnemyReport) {
        self.score += enemy.points;
        self.upgrades += enemy.upgrade_points;
    }

    pub fn on_game_over(&mut self) {
        if self.score > self.high_score {
            log::info!("New high score {}", self.score);
            self.high_score = self.score;
        }
    }

    /// The new score if it moved since the last call.
    pub fn take_change(&mut self) -> Option<u32> {
        if self.score == self.last_score {
            return None;
        }
        self.last_score = self.score;
        Some(self.score)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            high_score: self.high_score,
            upgrades: self.upgrades,
        }
    }
}
