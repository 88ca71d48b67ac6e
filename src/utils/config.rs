//! User preferences stored in ~/.tictactoe/config.json.

use super::persistence::{load_json_or_default, save_json};
use crate::constants::{DEFAULT_THINK_DELAY_MS, TICK_INTERVAL_MS};
use crate::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Difficulty selected when the game starts
    pub difficulty: Difficulty,
    /// How long the opponent "thinks" before moving
    pub think_delay_ms: u64,
    /// tracing filter used when TICTACTOE_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(dir: &Path) -> Self {
        load_json_or_default(dir, CONFIG_FILE)
    }

    pub fn save(&self, dir: &Path) -> io::Result<()> {
        save_json(dir, CONFIG_FILE, self)
    }

    /// Thinking delay in game ticks, rounded up.
    pub fn think_ticks(&self) -> u32 {
        self.think_delay_ms.div_ceil(TICK_INTERVAL_MS) as u32
    }
}
