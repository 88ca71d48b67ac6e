//! Simulation report generation.

use super::config::SimConfig;
use super::runner::GameRecord;
use crate::tictactoe::{Difficulty, Outcome};
use serde::Serialize;

/// Aggregated results from a batch of games.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub human: Difficulty,
    pub ai: Difficulty,
    pub seed: Option<u64>,
    pub games: u32,
    pub human_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
    pub avg_moves: f64,
    /// Game length histogram, indexed by number of moves (0..=9)
    pub length_distribution: Vec<u32>,
}

impl SimReport {
    pub fn from_games(config: &SimConfig, records: &[GameRecord]) -> Self {
        let games = records.len() as u32;
        let count = |outcome: Outcome| records.iter().filter(|r| r.outcome == outcome).count() as u32;

        let mut length_distribution = vec![0u32; 10];
        for record in records {
            if let Some(slot) = length_distribution.get_mut(record.moves) {
                *slot += 1;
            }
        }

        let avg_moves = records.iter().map(|r| r.moves as f64).sum::<f64>() / games.max(1) as f64;

        Self {
            human: config.human,
            ai: config.ai,
            seed: config.seed,
            games,
            human_wins: count(Outcome::HumanWins),
            ai_wins: count(Outcome::AiWins),
            draws: count(Outcome::Draw),
            avg_moves,
            length_distribution,
        }
    }

    fn percent(&self, n: u32) -> f64 {
        n as f64 * 100.0 / self.games.max(1) as f64
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Games: {}   X = {}   O = {}\n\n",
            self.games, self.human, self.ai
        ));

        report.push_str("── RESULTS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  X wins ({}):{:>8}  ({:.1}%)\n",
            self.human,
            self.human_wins,
            self.percent(self.human_wins)
        ));
        report.push_str(&format!(
            "  O wins ({}):{:>8}  ({:.1}%)\n",
            self.ai,
            self.ai_wins,
            self.percent(self.ai_wins)
        ));
        report.push_str(&format!(
            "  Draws:{:>15}  ({:.1}%)\n",
            self.draws,
            self.percent(self.draws)
        ));
        report.push_str(&format!("  Avg game length:  {:.2} moves\n\n", self.avg_moves));

        report.push_str("── GAME LENGTH ──────────────────────────────────────────────────\n");
        for (moves, &count) in self.length_distribution.iter().enumerate() {
            if count > 0 {
                report.push_str(&format!("  {} moves: {:>8}\n", moves, count));
            }
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
