//! Simulation runner driving real games through the turn driver.

use super::config::SimConfig;
use super::report::SimReport;
use crate::tictactoe::ai::select_move;
use crate::tictactoe::{
    process_ai_thinking, process_human_move, Difficulty, Outcome, Player, TicTacToeGame,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: Outcome,
    /// Total marks placed by both sides
    pub moves: usize,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut records = Vec::with_capacity(config.num_games as usize);

    for game_idx in 0..config.num_games {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(game_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let record = play_game(config.human, config.ai, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Game {}/{} - {:?} in {} moves",
                game_idx + 1,
                config.num_games,
                record.outcome,
                record.moves
            );
        }
        records.push(record);
    }

    SimReport::from_games(config, &records)
}

/// Play one game to completion. The Human side moves first.
pub fn play_game<R: Rng>(human: Difficulty, ai: Difficulty, rng: &mut R) -> GameRecord {
    // Zero thinking delay: the scheduled move fires on the first tick
    let mut game = TicTacToeGame::new(ai, 0);

    while !game.outcome().is_terminal() {
        let Some(index) = select_move(&game.board, human, Player::Human, rng) else {
            break;
        };
        process_human_move(&mut game, index);
        process_ai_thinking(&mut game, rng);
    }

    GameRecord {
        outcome: game.outcome(),
        moves: game.move_history.len(),
    }
}
