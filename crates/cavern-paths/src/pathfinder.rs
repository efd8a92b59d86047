use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::traits::Location;

/// Path cost. Edge weights, heuristic estimates and accumulated costs all
/// use this type.
pub type Cost = f64;

/// Sentinel cost meaning "unreachable" (positive infinity).
pub const UNREACHABLE: Cost = Cost::INFINITY;

/// A location with an associated cost, returned from cost-map queries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<L> {
    pub location: L,
    pub cost: Cost,
}

/// Outcome of an A* search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<L> {
    /// Locations from start to goal, both included. When the goal is
    /// unreachable this is the degenerate `[goal]`.
    pub path: Vec<L>,
    /// Sum of the edge weights along `path`, or [`UNREACHABLE`].
    pub cost: Cost,
    /// Number of locations finalized by the search.
    pub expanded: usize,
}

impl<L> PathResult<L> {
    /// Whether the goal was actually reached. Callers must check this (or
    /// `cost`) before trusting the shape of `path`.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    /// Split into the `(path, total_cost)` pair.
    pub fn into_parts(self) -> (Vec<L>, Cost) {
        (self.path, self.cost)
    }
}

/// Best known costs from a set of sources, as produced by
/// [`PathFinder::dijkstra_map`] and [`PathFinder::bfs_map`].
#[derive(Debug, Clone)]
pub struct CostMap<L> {
    pub(crate) costs: HashMap<L, Cost>,
    pub(crate) nodes: Vec<PathNode<L>>,
}

impl<L: Location> CostMap<L> {
    pub(crate) fn new() -> Self {
        Self {
            costs: HashMap::new(),
            nodes: Vec::new(),
        }
    }

    /// Cost of `location`, or [`UNREACHABLE`] if it was not reached.
    pub fn cost_at(&self, location: &L) -> Cost {
        self.costs.get(location).copied().unwrap_or(UNREACHABLE)
    }

    /// Reached locations in the order they were settled (non-decreasing
    /// cost).
    pub fn nodes(&self) -> &[PathNode<L>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Per-search bookkeeping
// ---------------------------------------------------------------------------

/// Search record of one location: best known cost, predecessor, and
/// whether it still awaits expansion.
#[derive(Debug, Clone)]
pub(crate) struct Node<L> {
    pub(crate) g: Cost,
    pub(crate) parent: Option<L>,
    pub(crate) open: bool,
}

impl<L> Node<L> {
    pub(crate) fn root() -> Self {
        Self {
            g: 0.0,
            parent: None,
            open: true,
        }
    }
}

/// Frontier entry, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first. Equal `f` values pop by smallest `g`, then in
/// location order, then in insertion order, so the returned path is
/// deterministic under ties. Entries with an infinite `f` thus still pop
/// cheapest first.
#[derive(Debug, Clone)]
pub(crate) struct NodeRef<L> {
    pub(crate) f: Cost,
    pub(crate) g: Cost,
    pub(crate) location: L,
    pub(crate) seq: u64,
}

impl<L: Ord> PartialEq for NodeRef<L> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<L: Ord> Eq for NodeRef<L> {}

impl<L: Ord> Ord for NodeRef<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.location.cmp(&self.location))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<L: Ord> PartialOrd for NodeRef<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Entry point for searches over a [`Graph`](crate::Graph).
///
/// A `PathFinder` only carries its [`SearchConfig`]; every search builds
/// its own state, so one finder (and one graph) can serve any number of
/// concurrent searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFinder {
    pub(crate) config: SearchConfig,
}

impl PathFinder {
    /// Create a finder with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
