//! Headless strategy-vs-strategy simulator.
//!
//! Plays batches of games through the same driver the terminal game uses
//! (Human always moves first) and aggregates win/loss/draw rates, e.g. to
//! confirm Hard never loses or to gauge how often Medium beats Easy.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{play_game, run_simulation, GameRecord};
