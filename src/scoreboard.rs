//! Win/loss/draw tally across games, persisted to ~/.tictactoe/stats.json.

use crate::tictactoe::Outcome;
use crate::utils::persistence::{load_json_or_default, save_json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// File name of the persisted tally.
pub const STATS_FILE: &str = "stats.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Unix timestamp of the last finished game (0 = never)
    #[serde(default)]
    pub last_played: i64,
}

impl Scoreboard {
    /// Count a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWins => self.wins += 1,
            Outcome::AiWins => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        self.last_played = Utc::now().timestamp();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Games not lost, as a percentage. None before the first game.
    pub fn unbeaten_percent(&self) -> Option<u32> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some((self.wins + self.draws) * 100 / total)
    }

    pub fn load(dir: &Path) -> Self {
        load_json_or_default(dir, STATS_FILE)
    }

    pub fn save(&self, dir: &Path) -> io::Result<()> {
        save_json(dir, STATS_FILE, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut score = Scoreboard::default();
        score.record(Outcome::HumanWins);
        score.record(Outcome::AiWins);
        score.record(Outcome::AiWins);
        score.record(Outcome::Draw);
        assert_eq!(score.wins, 1);
        assert_eq!(score.losses, 2);
        assert_eq!(score.draws, 1);
        assert_eq!(score.total(), 4);
        assert!(score.last_played > 0);
    }

    #[test]
    fn test_in_progress_not_recorded() {
        let mut score = Scoreboard::default();
        score.record(Outcome::InProgress);
        assert_eq!(score, Scoreboard::default());
    }

    #[test]
    fn test_unbeaten_percent() {
        let mut score = Scoreboard::default();
        assert_eq!(score.unbeaten_percent(), None);
        score.record(Outcome::Draw);
        score.record(Outcome::AiWins);
        assert_eq!(score.unbeaten_percent(), Some(50));
    }

    #[test]
    fn test_clear() {
        let mut score = Scoreboard::default();
        score.record(Outcome::HumanWins);
        score.clear();
        assert_eq!(score, Scoreboard::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("tictactoe_stats_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");

        let mut score = Scoreboard::default();
        score.record(Outcome::HumanWins);
        score.record(Outcome::Draw);
        score.save(&dir).expect("save should succeed");

        let loaded = Scoreboard::load(&dir);
        assert_eq!(loaded, score);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
