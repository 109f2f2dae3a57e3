//! Error types for board construction.

use std::fmt;

/// Error type for layout-diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Diagram does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank line does not have exactly 8 squares
    WrongFileCount { rank: usize, found: usize },
    /// Unrecognized square character
    InvalidSquare { rank: usize, file: usize, found: char },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRankCount { found } => {
                write!(f, "Layout must have 8 ranks, found {found}")
            }
            LayoutError::WrongFileCount { rank, found } => {
                write!(f, "Rank {rank} must have 8 squares, found {found}")
            }
            LayoutError::InvalidSquare { rank, file, found } => {
                write!(f, "Invalid square character '{found}' at rank {rank}, file {file}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_positions() {
        let err = LayoutError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));

        let err = LayoutError::WrongFileCount { rank: 3, found: 9 };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('9'));

        let err = LayoutError::InvalidSquare {
            rank: 0,
            file: 2,
            found: 'x',
        };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn errors_compare_and_clone() {
        let err = LayoutError::WrongRankCount { found: 2 };
        assert_eq!(err.clone(), err);
    }
}
