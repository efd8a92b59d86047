use std::fmt::Debug;
use std::hash::Hash;

use crate::Cost;

/// Anything that can name a node of a [`Graph`](crate::Graph).
///
/// Blanket-implemented for every `Clone + Eq + Hash + Ord + Debug` type, so
/// `&str`, `String`, integers and [`Point`](cavern_core::Point) all work.
/// The `Ord` bound fixes the tie-break order of the A* frontier.
pub trait Location: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Location for T {}

/// Estimated remaining cost from a location to the goal.
pub trait Heuristic<L> {
    /// Estimate of the cost from `from` to `goal`.
    ///
    /// Must never overestimate the true cost (admissible) for A* to return
    /// optimal paths. [`UNREACHABLE`](crate::UNREACHABLE) is allowed and
    /// pushes the location behind every finitely estimated one.
    fn estimate(&self, from: &L, goal: &L) -> Cost;
}

impl<L, F> Heuristic<L> for F
where
    F: Fn(&L, &L) -> Cost,
{
    #[inline]
    fn estimate(&self, from: &L, goal: &L) -> Cost {
        self(from, goal)
    }
}
