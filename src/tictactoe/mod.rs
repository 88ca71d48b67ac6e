//! Tic-Tac-Toe against a computer opponent with three difficulty tiers.

pub mod ai;
pub mod logic;
pub mod types;

pub use logic::{
    empty_cells, evaluate, process_ai_thinking, process_human_move, process_input, reset,
    winning_line, TicTacToeInput, WINNING_LINES,
};
pub use types::*;
