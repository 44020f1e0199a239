//! Direction tables for neighbor enumeration.
//!
//! Enumeration order is fixed: N, E, S, W, then NW, NE, SE, SW. Searches rely
//! on it for reproducible tie-breaking.

use crate::geom::Point;

pub const NORTH: Point = Point::new(0, -1);
pub const EAST: Point = Point::new(1, 0);
pub const SOUTH: Point = Point::new(0, 1);
pub const WEST: Point = Point::new(-1, 0);
pub const NORTH_WEST: Point = Point::new(-1, -1);
pub const NORTH_EAST: Point = Point::new(1, -1);
pub const SOUTH_EAST: Point = Point::new(1, 1);
pub const SOUTH_WEST: Point = Point::new(-1, 1);

/// Axis-aligned steps in enumeration order.
pub const CARDINALS: [Point; 4] = [NORTH, EAST, SOUTH, WEST];

/// Diagonal steps in enumeration order.
pub const DIAGONALS: [Point; 4] = [NORTH_WEST, NORTH_EAST, SOUTH_EAST, SOUTH_WEST];

const ALL: [Point; 8] = [
    NORTH, EAST, SOUTH, WEST, NORTH_WEST, NORTH_EAST, SOUTH_EAST, SOUTH_WEST,
];

/// The step set for 4-way (`false`) or 8-way (`true`) movement.
#[inline]
pub fn directions(allow_diagonal: bool) -> &'static [Point] {
    if allow_diagonal { &ALL } else { &CARDINALS }
}
