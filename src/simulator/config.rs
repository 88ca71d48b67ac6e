//! Simulation configuration.

use crate::tictactoe::Difficulty;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_games: u32,

    /// Strategy playing the Human side (moves first)
    pub human: Difficulty,

    /// Strategy playing the AI side
    pub ai: Difficulty,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = every game)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_games: 1000,
            human: Difficulty::Easy,
            ai: Difficulty::Hard,
            seed: None,
            verbosity: 1,
        }
    }
}
