//! A* shortest-path search over [`gridpath_core::Grid`].
//!
//! The entry point is [`find_path`], which returns the ordered list of
//! positions from start to end (both inclusive) or an empty list when no path
//! exists. For repeated queries keep a [`PathFinder`] around: it owns the
//! search's working memory and reuses it across calls.
//!
//! Search bookkeeping (costs, predecessors, open/closed state) lives in the
//! finder, never on the grid's cells, and is logically fresh for every query.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | remaining-cost estimate |
//!
//! [`GridPather`] implements all three for a grid.

mod astar;
mod distance;
mod finder;
mod options;
mod pather;
mod traits;

pub use astar::find_path;
pub use distance::{CARDINAL_COST, DIAGONAL_COST, manhattan, path_cost, step_cost};
pub use finder::PathFinder;
pub use options::SearchOptions;
pub use pather::GridPather;
pub use traits::{AstarPather, Pather, WeightedPather};
