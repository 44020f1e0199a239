//! The [`Grid`] type: a fixed-size 2D array of [`Cell`]s.
//!
//! A `Grid` exclusively owns its cells. Lookups hand out borrows, never
//! copies, so toggling walkability through [`Grid::cell_mut`] is visible to
//! every later query. Because searches borrow the grid immutably, the borrow
//! checker keeps "edit the map" and "search the map" from overlapping.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::neighbors::directions;

const WALKABLE: char = '.';
const BLOCKED: char = '#';
const PATH: char = '*';

/// A dense, row-major grid of [`Cell`]s with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a `width`×`height` grid with every cell walkable.
    ///
    /// Both dimensions must be strictly positive and the cell count must fit
    /// in an `i32`. Cells are allocated up front, so a grid near that limit
    /// still needs tens of gigabytes.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if width.checked_mul(height).is_none() {
            return Err(GridError::TooLarge { width, height });
        }
        let cells = Range::new(0, 0, width, height).iter().map(Cell::new).collect();
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Create a grid and mark every coordinate in `blocked` as unwalkable.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn with_blocked<I, P>(width: i32, height: i32, blocked: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut grid = Self::new(width, height)?;
        let mut ignored = 0usize;
        for p in blocked {
            let p = p.into();
            match grid.cell_mut(p) {
                Some(c) => c.set_walkable(false),
                None => ignored += 1,
            }
        }
        if ignored > 0 {
            log::trace!("grid {width}x{height}: ignored {ignored} out-of-bounds blocked coordinates");
        }
        Ok(grid)
    }

    /// Build a grid from an ASCII layout: `.` is walkable, `#` is blocked,
    /// one row per line. Surrounding whitespace and blank lines are ignored.
    ///
    /// ```
    /// use gridpath_core::{Grid, Point};
    ///
    /// let grid = Grid::parse("..#\n...").unwrap();
    /// assert_eq!(grid.size(), Point::new(3, 2));
    /// assert!(!grid.is_walkable(Point::new(2, 0)));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        if rows.iter().any(|r| r.chars().count() as i32 != width) {
            return Err(GridError::InconsistentSize(rows.join("\n")));
        }

        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let walkable = match ch {
                    WALKABLE => true,
                    BLOCKED => false,
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                };
                grid.set_walkable(pos, walkable);
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bounding range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` addresses a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_walkable)
    }

    /// Set the walkable flag of the cell at `p`. No-op if out of bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(c) = self.cell_mut(p) {
            c.set_walkable(walkable);
        }
    }

    /// Make every cell walkable again.
    pub fn clear_obstacles(&mut self) {
        for c in &mut self.cells {
            c.set_walkable(true);
        }
    }

    /// In-bounds cells adjacent to `p`, in N, E, S, W (then NW, NE, SE, SW
    /// when `allow_diagonal`) order. Walkability is not filtered. Empty when
    /// `p` itself is out of bounds.
    pub fn neighbors(&self, p: Point, allow_diagonal: bool) -> impl Iterator<Item = &Cell> + '_ {
        let dirs: &[Point] = if self.in_bounds(p) {
            directions(allow_diagonal)
        } else {
            &[]
        };
        dirs.iter().filter_map(move |&d| self.cell(p + d))
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walkable()).count()
    }

    /// Positions of all unwalkable cells, row-major.
    pub fn blocked(&self) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|c| !c.is_walkable())
            .map(Cell::pos)
            .collect()
    }

    /// ASCII rendering with the cells of `path` drawn as `*`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.glyph(Point::new(x, y)))
                    .collect()
            })
            .collect();
        for &p in path {
            if self.in_bounds(p) {
                rows[p.y as usize][p.x as usize] = PATH;
            }
        }
        let mut out = String::with_capacity(self.cells.len() + rows.len());
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    fn glyph(&self, p: Point) -> char {
        if self.is_walkable(p) { WALKABLE } else { BLOCKED }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.glyph(Point::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Grids travel as their dimensions plus blocked list and are re-validated on
// the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    blocked: Vec<Point>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = GridRepr {
            width: self.width,
            height: self.height,
            blocked: self.blocked(),
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = <GridRepr as serde::Deserialize>::deserialize(deserializer)?;
        Grid::with_blocked(repr.width, repr.height, repr.blocked).map_err(serde::de::Error::custom)
    }
}
