//! Table-driven and trivial heuristics.

use std::collections::BTreeMap;

use crate::traits::{Heuristic, Location};
use crate::{Cost, UNREACHABLE};

/// The zero heuristic. A* with it behaves as uniform-cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<L> Heuristic<L> for Zero {
    #[inline]
    fn estimate(&self, _from: &L, _goal: &L) -> Cost {
        0.0
    }
}

/// A fixed table of estimates towards one goal.
///
/// Locations missing from the table estimate to [`UNREACHABLE`], which only
/// delays them in the frontier. The goal argument is ignored: the table is
/// assumed to have been computed for the goal being searched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "L: serde::Serialize",
        deserialize = "L: serde::Deserialize<'de> + Ord"
    ))
)]
pub struct HeuristicTable<L> {
    estimates: BTreeMap<L, Cost>,
}

impl<L> Default for HeuristicTable<L> {
    fn default() -> Self {
        Self {
            estimates: BTreeMap::new(),
        }
    }
}

impl<L: Location> HeuristicTable<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the estimate for `location`, replacing any previous one.
    pub fn insert(&mut self, location: L, estimate: Cost) -> &mut Self {
        self.estimates.insert(location, estimate);
        self
    }

    /// The stored estimate, if any.
    pub fn get(&self, location: &L) -> Option<Cost> {
        self.estimates.get(location).copied()
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

impl<L: Location> Heuristic<L> for HeuristicTable<L> {
    #[inline]
    fn estimate(&self, from: &L, _goal: &L) -> Cost {
        self.get(from).unwrap_or(UNREACHABLE)
    }
}

impl<L: Location> FromIterator<(L, Cost)> for HeuristicTable<L> {
    fn from_iter<I: IntoIterator<Item = (L, Cost)>>(iter: I) -> Self {
        Self {
            estimates: iter.into_iter().collect(),
        }
    }
}
