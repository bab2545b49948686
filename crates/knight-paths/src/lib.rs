//! Breadth-first knight shortest paths on square boards.
//!
//! [`KnightPathFinder`] answers "how many knight moves from here to there"
//! on an N×N board by expanding squares in strict FIFO order:
//!
//! - **Shortest distance** between two squares ([`KnightPathFinder::find`],
//!   [`find_shortest_path`])
//! - **Reachability map** with per-square distances
//!   ([`KnightPathFinder::reachable`])
//!
//! Failures are reported as [`SearchError`]: a square off the board, or a
//! destination in a different component of the knight graph (possible only
//! on boards smaller than 5×5).

mod bfs;
mod distance;
mod error;
mod finder;
mod moves;
mod queue;
mod traits;

pub use distance::{chebyshev, knight_lower_bound, manhattan};
pub use error::SearchError;
pub use finder::{KnightPathFinder, SearchNode, find_shortest_path};
pub use moves::{KNIGHT_MOVES, KnightPather, knight_moves};
pub use queue::Queue;
pub use traits::Pather;
