use knight_core::{Board, Square};

use crate::error::SearchError;
use crate::moves::KnightPather;

/// A square together with its move count from the search source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub square: Square,
    pub distance: u32,
}

impl SearchNode {
    #[inline]
    pub const fn new(square: Square, distance: u32) -> Self {
        Self { square, distance }
    }

    /// The node every search starts from.
    #[inline]
    pub const fn source(square: Square) -> Self {
        Self::new(square, 0)
    }
}

// ---------------------------------------------------------------------------
// KnightPathFinder
// ---------------------------------------------------------------------------

/// Breadth-first knight searches on one N×N board.
///
/// The finder only remembers the board. Every query allocates its own
/// frontier and visited set, so a single finder can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightPathFinder {
    pub(crate) pather: KnightPather,
}

impl Default for KnightPathFinder {
    fn default() -> Self {
        Self::with_board(Board::standard())
    }
}

impl KnightPathFinder {
    /// Create a finder for a `board_size`×`board_size` board.
    pub fn new(board_size: i32) -> Self {
        Self::with_board(Board::new(board_size))
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            pather: KnightPather::new(board),
        }
    }

    /// The board being searched.
    #[inline]
    pub fn board(&self) -> Board {
        self.pather.board()
    }

    /// Fail with [`SearchError::InvalidSquare`] unless `sq` is on the board.
    pub(crate) fn check(&self, sq: Square) -> Result<(), SearchError> {
        let board = self.board();
        if board.contains(sq) {
            Ok(())
        } else {
            Err(SearchError::InvalidSquare {
                square: sq,
                board_size: board.size(),
            })
        }
    }
}

/// Minimum number of knight moves from `source` to `destination` on a
/// `board_size`×`board_size` board.
///
/// Both squares are validated first; see [`KnightPathFinder::find`].
pub fn find_shortest_path(
    source: Square,
    destination: Square,
    board_size: i32,
) -> Result<u32, SearchError> {
    KnightPathFinder::new(board_size).find(source, destination)
}

#[cfg(feature = "serde")]
impl serde::Serialize for KnightPathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.board(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for KnightPathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let board = <Board as serde::Deserialize>::deserialize(deserializer)?;
        Ok(KnightPathFinder::with_board(board))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_node_round_trip() {
        let node = SearchNode::new(Square::new(3, 7), 42);
        let json = serde_json::to_string(&node).unwrap();
        let back: SearchNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn finder_round_trip() {
        let finder = KnightPathFinder::new(12);
        let json = serde_json::to_string(&finder).unwrap();
        assert_eq!(json, r#"{"size":12}"#);
        let back: KnightPathFinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.board(), Board::new(12));
    }
}
