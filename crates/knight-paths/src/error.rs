use std::fmt;

use knight_core::Square;

/// Errors reported by a knight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A coordinate of `square` lies outside `[0, board_size)`.
    InvalidSquare { square: Square, board_size: i32 },
    /// The frontier emptied without ever reaching `destination`.
    PathNotFound { source: Square, destination: Square },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSquare { square, board_size } => {
                write!(f, "square {square} is outside the {board_size}x{board_size} board")
            }
            Self::PathNotFound {
                source,
                destination,
            } => write!(f, "no knight path from {source} to {destination}"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = SearchError::InvalidSquare {
            square: Square::new(8, 0),
            board_size: 8,
        };
        assert_eq!(e.to_string(), "square (8, 0) is outside the 8x8 board");
        let e = SearchError::PathNotFound {
            source: Square::new(0, 0),
            destination: Square::new(1, 1),
        };
        assert_eq!(e.to_string(), "no knight path from (0, 0) to (1, 1)");
    }
}
