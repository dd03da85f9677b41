//! Errors reported by the board engine and the notation parser.

use crate::grid::Color;

/// Errors that can occur while playing or parsing a board.
///
/// Every error is reported before the board is mutated, so the caller can
/// simply try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoError {
    #[error("point ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("point ({row}, {col}) is already occupied by {color}")]
    CellOccupied { row: usize, col: usize, color: Color },

    #[error("malformed board: {0}")]
    MalformedBoard(String),

    #[error("invalid board character {ch:?} at ({row}, {col})")]
    InvalidBoardCharacter { row: usize, col: usize, ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_occupied_display() {
        let err = GoError::CellOccupied {
            row: 6,
            col: 6,
            color: Color::White,
        };
        assert_eq!(err.to_string(), "point (6, 6) is already occupied by White");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = GoError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4,
        };
        assert_eq!(err.to_string(), "point (4, 0) is outside the 4x4 board");
    }

    #[test]
    fn test_invalid_character_display() {
        let err = GoError::InvalidBoardCharacter {
            row: 1,
            col: 2,
            ch: 'x',
        };
        assert_eq!(err.to_string(), "invalid board character 'x' at (1, 2)");
    }
}
