//! Tic-Tac-Toe - terminal game against a three-tier computer opponent.
//!
//! The library exposes the game engine, persistence and the simulator for
//! testing and for the `simulate` binary.

pub mod build_info;
pub mod constants;
pub mod input;
pub mod scoreboard;
pub mod simulator;
pub mod tictactoe;
pub mod ui;
pub mod utils;

pub use scoreboard::Scoreboard;
pub use tictactoe::{Difficulty, Outcome, Player, TicTacToeGame};
pub use utils::Config;
