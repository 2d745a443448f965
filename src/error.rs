//! Error types for the engine and its configuration

use std::path::PathBuf;

/// Errors returned by board construction and move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board shape: {0}")]
    InvalidBoardShape(String),

    #[error("invalid mark {0:?}, expected 'X' or 'O'")]
    InvalidMark(String),

    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("no empty cell left on the board")]
    NoLegalMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = EngineError::OutOfBounds { row: 15, col: 3, size: 15 };
        assert_eq!(err.to_string(), "position (15, 3) is outside a 15x15 board");
    }

    #[test]
    fn test_invalid_mark_display() {
        let err = EngineError::InvalidMark("Z".to_string());
        assert_eq!(err.to_string(), "invalid mark \"Z\", expected 'X' or 'O'");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board_size must be at least 5".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board_size must be at least 5"
        );
    }
}
