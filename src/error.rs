use crate::core::{Color, Position};
use std::path::PathBuf;

/// Rejected placements. None of these mutate the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate {pos} is outside the board")]
    InvalidCoordinate { pos: Position },

    #[error("{color} cannot place at {pos}")]
    IllegalMove { pos: Position, color: Color },

    #[error("game is already finished")]
    GameFinished,

    #[error("{color} is played by the computer")]
    NotHumanTurn { color: Color },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::IllegalMove {
            pos: Position::new(0, 0),
            color: Color::White,
        };
        assert_eq!(err.to_string(), "White cannot place at (0, 0)");

        let err = MoveError::InvalidCoordinate {
            pos: Position::new(9, 2),
        };
        assert_eq!(err.to_string(), "coordinate (9, 2) is outside the board");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("weights must have 8 rows".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: weights must have 8 rows"
        );
    }
}
