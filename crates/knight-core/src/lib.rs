//! **knight-core** — board geometry shared by the knight-path crates.
//!
//! This crate provides the value types the search operates on: a [`Square`]
//! identified by its `(x, y)` coordinates and a square N×N [`Board`] that
//! bounds every search.

pub mod geom;

pub use geom::{Board, BoardIter, ParseSquareError, Square};
