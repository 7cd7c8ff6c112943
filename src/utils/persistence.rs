//! JSON persistence helpers for the game's data directory.
//!
//! The data directory is `$TRAVELING_DRAGON_HOME` when set, otherwise
//! `~/.traveling-dragon/`. Player records, settings and the log file live there.

use crate::constants::{DATA_DIR_ENV, DATA_DIR_NAME, LEGACY_PLAYERS_FILE};
use crate::error::{GameError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the data directory path, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => dirs::home_dir()
            .ok_or(GameError::HomeDirNotFound)?
            .join(DATA_DIR_NAME),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in the data directory.
pub fn data_file(filename: &str) -> Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Directory holding the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Where older releases kept the player list: `data/players.txt` beside the executable.
pub fn legacy_save_file() -> Result<PathBuf> {
    Ok(executable_dir()?.join("data").join(LEGACY_PLAYERS_FILE))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable JSON file");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Load a JSON file, failing if it is missing or invalid.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("traveling-dragon-test-{}", std::process::id()))
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default(&scratch_path("nonexistent_12345.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_invalid_returns_default() {
        let path = scratch_path("invalid.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let val: Vec<u32> = load_json_or_default(&path);
        assert!(val.is_empty());
        assert!(load_json::<Vec<u32>>(&path).is_err());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let path = scratch_path("nested/deeper/values.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json(&path).expect("load should succeed");
        assert_eq!(loaded, data);

        fs::remove_dir_all(scratch_path("nested")).ok();
    }

    #[test]
    fn test_legacy_save_file_beside_executable() {
        let path = legacy_save_file().unwrap();
        assert!(path.ends_with("data/players.txt"));
        assert_eq!(path.parent().unwrap().parent().unwrap(), executable_dir().unwrap());
    }

    #[test]
    fn test_load_json_missing_is_io_error() {
        let result: Result<Vec<u32>> = load_json(&scratch_path("missing_again.json"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
