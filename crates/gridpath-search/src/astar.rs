use std::collections::BinaryHeap;

use gridpath_core::{Grid, Point};

use crate::finder::{NO_PARENT, NodeRef, PathFinder};
use crate::options::SearchOptions;
use crate::pather::GridPather;
use crate::traits::AstarPather;

impl PathFinder {
    /// Find a path on `grid` from `start` to `end`.
    ///
    /// Returns every position from `start` to `end` inclusive, or an empty
    /// vector when either endpoint is out of bounds or unwalkable, or when
    /// `end` cannot be reached. `start == end` yields `[start]`.
    ///
    /// The finder adopts the grid's bounds if they differ from its own.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Point,
        end: Point,
        opts: &SearchOptions,
    ) -> Vec<Point> {
        self.expanded = 0;
        if !grid.in_bounds(start) || !grid.in_bounds(end) {
            log::trace!("find_path {start} -> {end}: endpoint outside {}", grid.bounds());
            return Vec::new();
        }
        if !grid.is_walkable(start) || !grid.is_walkable(end) {
            log::trace!("find_path {start} -> {end}: endpoint not walkable");
            return Vec::new();
        }
        if self.rng != grid.bounds() {
            self.set_range(grid.bounds());
        }

        let pather = GridPather::new(grid, opts.allow_diagonal);
        self.astar_path(&pather, start, end).unwrap_or_default()
    }

    /// Compute a path from `from` to `to` using A*.
    ///
    /// Candidates are expanded by lowest `f = g + h`, ties going to the lower
    /// `h` and then to whichever was discovered first. Passability is up to
    /// `pather`; the endpoints themselves are only checked against the range.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.expanded = 0;
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            log::trace!("astar {from} -> {to}: start is goal");
            self.expanded = 1;
            return Some(vec![from]);
        }

        let cur_gen = self.next_generation();

        let start_h = pather.estimate(from, to);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.h = start_h;
            node.parent = NO_PARENT;
            node.order = 0;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: start_h,
            h: start_h,
            order: 0,
        });
        let mut next_order: u32 = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper route.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            self.nodes[ci].open = false;
            self.expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Closed, or already open with an equal or better route.
                    if !n.open || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.h = pather.estimate(np, to);
                    n.order = next_order;
                    n.open = true;
                    next_order += 1;
                }

                n.g = tentative_g;
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: n.g + n.h,
                    h: n.h,
                    order: n.order,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!(
                "astar {from} -> {to}: no path after expanding {} cells",
                self.expanded
            );
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        log::debug!(
            "astar {from} -> {to}: {} steps, g = {:.3}, expanded {} cells",
            path.len() - 1,
            self.nodes[goal_idx].g,
            self.expanded
        );
        Some(path)
    }
}

/// Find a path on `grid` from `start` to `end` with fresh working memory.
///
/// Convenience wrapper around [`PathFinder::find_path`]; see there for the
/// empty-path cases. Use a long-lived [`PathFinder`] to avoid reallocating
/// scratch memory on every query.
///
/// ```
/// use gridpath_core::{Grid, Point};
/// use gridpath_search::find_path;
///
/// let grid = Grid::with_blocked(3, 3, [(1, 0), (1, 1)]).unwrap();
/// let path = find_path(&grid, (0, 0), (2, 0), false);
/// assert_eq!(path.first(), Some(&Point::new(0, 0)));
/// assert_eq!(path.last(), Some(&Point::new(2, 0)));
/// assert_eq!(path.len(), 7);
/// ```
pub fn find_path(
    grid: &Grid,
    start: impl Into<Point>,
    end: impl Into<Point>,
    allow_diagonal: bool,
) -> Vec<Point> {
    let opts = SearchOptions::default().with_diagonal(allow_diagonal);
    PathFinder::for_grid(grid).find_path(grid, start.into(), end.into(), &opts)
}
