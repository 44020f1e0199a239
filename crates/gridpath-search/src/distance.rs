use gridpath_core::Point;

/// Cost of one diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Cost of one axis-aligned step.
pub const CARDINAL_COST: f64 = 1.0;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Cost of a single step between adjacent points.
#[inline]
pub fn step_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

/// Total movement cost along `path`. Zero for paths shorter than two points.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}
