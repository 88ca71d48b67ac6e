//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("TICTACTOE_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("TICTACTOE_BUILD_DATE");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!("tictactoe {} ({} {})", VERSION, BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // Should be 7 chars or "unknown" (CI may inject anything non-empty)
        assert!(!BUILD_COMMIT.is_empty());
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_line() {
        let line = version_line();
        assert!(line.starts_with("tictactoe "));
        assert!(line.contains(BUILD_DATE));
    }
}
