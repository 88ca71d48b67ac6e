//! JSON persistence helpers for files under ~/.tictactoe/.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the data directory under the user's home.
pub const DATA_DIR_NAME: &str = ".tictactoe";

/// Get the ~/.tictactoe/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file from `dir`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(
    dir: &Path,
    filename: &str,
) -> T {
    match fs::read_to_string(dir.join(filename)) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON into `dir`.
pub fn save_json<T: serde::Serialize>(dir: &Path, filename: &str, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(dir.join(filename), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = temp_dir("tictactoe_persist_missing");
        let val: Vec<String> = load_json_or_default(&dir, "nonexistent_test_file_12345.json");
        assert!(val.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let dir = temp_dir("tictactoe_persist_corrupt");
        fs::write(dir.join("bad.json"), "{not json").expect("write");
        let val: Vec<u32> = load_json_or_default(&dir, "bad.json");
        assert!(val.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = temp_dir("tictactoe_persist_roundtrip");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&dir, "persistence_test.json", &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&dir, "persistence_test.json");
        assert_eq!(loaded, data);
        let _ = fs::remove_dir_all(&dir);
    }
}
