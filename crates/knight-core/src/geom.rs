//! Geometry primitives: [`Square`] and [`Board`].
//!
//! Squares use plain `(x, y)` board coordinates; a [`Board`] is the
//! half-open N×N rectangle `[0, N) × [0, N)` anchored at the origin.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board cell identified by its integer coordinates.
///
/// Equality and hashing depend only on `(x, y)`, so squares can be used
/// directly as set and map keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new square.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the square shifted by (dx, dy), or `None` if either
    /// coordinate overflows.
    #[inline]
    pub const fn checked_shift(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Whether the square lies on `board`.
    #[inline]
    pub fn on(self, board: &Board) -> bool {
        board.contains(self)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Square {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Square {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Square {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Error returned when parsing a [`Square`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    /// The input was not of the form `x,y`.
    Format(String),
    /// A coordinate was not a valid integer.
    Coordinate(String),
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(s) => write!(f, "expected a square as \u{201c}x,y\u{201d}, got \u{201c}{s}\u{201d}"),
            Self::Coordinate(s) => write!(f, "invalid square coordinate \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parse `"x,y"`, tolerating whitespace around either coordinate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParseSquareError::Format(s.to_string()))?;
        let coord = |c: &str| {
            c.trim()
                .parse::<i32>()
                .map_err(|_| ParseSquareError::Coordinate(c.trim().to_string()))
        };
        Ok(Self::new(coord(x)?, coord(y)?))
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A square N×N board covering `[0, N) × [0, N)`.
///
/// A board with `N <= 0` is empty and contains no squares.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: i32,
}

impl Board {
    /// Standard chessboard dimension.
    pub const STANDARD_SIZE: i32 = 8;

    /// Create a new N×N board.
    #[inline]
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    /// The standard 8×8 chessboard.
    #[inline]
    pub const fn standard() -> Self {
        Self::new(Self::STANDARD_SIZE)
    }

    /// Side length N.
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Total number of squares (N², or 0 for an empty board).
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.size as usize) * (self.size as usize)
    }

    /// Whether the board has no squares.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.size <= 0
    }

    /// Whether `sq` satisfies `0 <= x < N` and `0 <= y < N`.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        sq.x >= 0 && sq.x < self.size && sq.y >= 0 && sq.y < self.size
    }

    /// Row-major iterator over every square on the board.
    #[inline]
    pub fn iter(self) -> BoardIter {
        BoardIter {
            board: self,
            cur: Square::ZERO,
        }
    }
}

impl IntoIterator for Board {
    type Item = Square;
    type IntoIter = BoardIter;
    #[inline]
    fn into_iter(self) -> BoardIter {
        self.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}

// ---------------------------------------------------------------------------
// BoardIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the squares of a [`Board`].
#[derive(Clone, Debug)]
pub struct BoardIter {
    board: Board,
    cur: Square,
}

impl Iterator for BoardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.board.is_empty() || self.cur.y >= self.board.size {
            return None;
        }
        let sq = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.board.size {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.board.is_empty() || self.cur.y >= self.board.size {
            return (0, Some(0));
        }
        let n = self.board.size as usize;
        let remaining_in_row = (self.board.size - self.cur.x) as usize;
        let remaining_rows = (self.board.size - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * n;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoardIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn square_round_trip() {
        let sq = Square::new(3, 7);
        let json = serde_json::to_string(&sq).unwrap();
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(sq, back);
    }

    #[test]
    fn board_json_shape() {
        let json = serde_json::to_string(&Board::new(8)).unwrap();
        assert_eq!(json, r#"{"size":8}"#);
    }
}
