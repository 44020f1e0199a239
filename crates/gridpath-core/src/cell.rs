//! The [`Cell`] type: one addressable grid position.

use crate::geom::Point;

/// A grid position and its walkability.
///
/// Cells carry no search bookkeeping: cost and predecessor data belong to the
/// search that produces them and are discarded with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    walkable: bool,
}

impl Cell {
    /// A walkable cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            walkable: true,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn is_walkable(&self) -> bool {
        self.walkable
    }

    #[inline]
    pub fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_walkable() {
        let c = Cell::new(Point::new(2, 5));
        assert!(c.is_walkable());
        assert_eq!(c.pos(), Point::new(2, 5));
        assert_eq!((c.x(), c.y()), (2, 5));
    }

    #[test]
    fn toggle_walkable() {
        let mut c = Cell::new(Point::ZERO);
        c.set_walkable(false);
        assert!(!c.is_walkable());
        c.set_walkable(true);
        assert!(c.is_walkable());
    }
}
