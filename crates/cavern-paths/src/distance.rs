use cavern_core::Point;

use crate::Cost;
use crate::traits::Heuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Manhattan distance scaled by a per-step cost.
///
/// Admissible on 4-way tile graphs whose cheapest step costs at least `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manhattan {
    pub step: Cost,
}

impl Manhattan {
    pub const fn new(step: Cost) -> Self {
        Self { step }
    }
}

impl Default for Manhattan {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Heuristic<Point> for Manhattan {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> Cost {
        self.step * manhattan(*from, *goal) as Cost
    }
}

/// Chebyshev distance scaled by a per-step cost.
///
/// Admissible on 8-way tile graphs whose cheapest step costs at least `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chebyshev {
    pub step: Cost,
}

impl Chebyshev {
    pub const fn new(step: Cost) -> Self {
        Self { step }
    }
}

impl Default for Chebyshev {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Heuristic<Point> for Chebyshev {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> Cost {
        self.step * chebyshev(*from, *goal) as Cost
    }
}
