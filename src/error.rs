//! Error types for the Gomoku core

use thiserror::Error;

/// Errors reported by board mutation.
///
/// Search never fails; the only rejected operation is placing a stone
/// somewhere it cannot go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: i32,
        col: i32,
        reason: InvalidReason,
    },
}

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfBounds,
    Occupied,
    EmptyStone,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidReason::OutOfBounds => "outside the board",
            InvalidReason::Occupied => "cell is occupied",
            InvalidReason::EmptyStone => "cannot place an empty stone",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = GameError::InvalidMove {
            row: 15,
            col: 3,
            reason: InvalidReason::OutOfBounds,
        };
        assert_eq!(err.to_string(), "invalid move at (15, 3): outside the board");
    }
}
