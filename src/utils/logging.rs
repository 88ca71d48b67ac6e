//! File logging. The terminal belongs to the UI, so events go to
//! ~/.tictactoe/tictactoe.log instead of stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "tictactoe.log";

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";

/// Resolve the filter: TICTACTOE_LOG wins, then the configured default.
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `dir/tictactoe.log`.
pub fn init(dir: &Path, default_filter: &str) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_falls_back() {
        // Must not panic on garbage
        let filter = build_filter("[[[not a filter");
        assert!(!filter.to_string().is_empty());
    }
}
