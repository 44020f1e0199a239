use gridpath_core::{Cell, Grid, Point};

use crate::distance::{manhattan, step_cost};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts a [`Grid`] to the pather traits.
///
/// Neighbors come from [`Grid::neighbors`] with unwalkable cells removed.
/// Steps cost `1.0` (cardinal) or [`DIAGONAL_COST`](crate::DIAGONAL_COST)
/// (diagonal); the estimate is the Manhattan distance. With diagonals enabled
/// Manhattan can overestimate, so paths are then short but not always
/// optimal.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    allow_diagonal: bool,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, allow_diagonal: bool) -> Self {
        Self {
            grid,
            allow_diagonal,
        }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.grid
                .neighbors(p, self.allow_diagonal)
                .filter(|c| c.is_walkable())
                .map(Cell::pos),
        );
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> f64 {
        step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        manhattan(from, to) as f64
    }
}
