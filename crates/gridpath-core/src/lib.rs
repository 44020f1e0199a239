//! **gridpath-core**: the grid model used by the gridpath search engine.
//!
//! This crate provides geometry primitives, the walkable [`Cell`], the
//! fixed-size [`Grid`] that owns them, and the fixed-order neighbor
//! enumeration that searches build on.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod neighbors;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use neighbors::{CARDINALS, DIAGONALS, directions};
