use std::fmt;

use crate::geom::Point;

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not strictly positive.
    InvalidDimensions { width: i32, height: i32 },
    /// `width * height` does not fit in an `i32`.
    TooLarge { width: i32, height: i32 },
    /// Rows of an ASCII layout have different lengths.
    InconsistentSize(String),
    /// An ASCII layout contains a character other than `.` or `#`.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}, both must be positive")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid: dimensions {width}x{height} exceed the maximum cell count")
            }
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent row widths:\n{s}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
