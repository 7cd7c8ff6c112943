//! Error types for Traveling Dragon.

use thiserror::Error;

/// Top-level error type for game operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No home directory to put the data directory in
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Resolution string or value that can't be used
    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),

    /// Malformed line in a legacy player file
    #[error("Malformed legacy record on line {line}: {reason}")]
    LegacyRecord {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_legacy_record_message() {
        let err = GameError::LegacyRecord {
            line: 3,
            reason: "expected 4 fields".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed legacy record on line 3: expected 4 fields"
        );
    }
}
