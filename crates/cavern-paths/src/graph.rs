//! Weighted directed location graphs.

use std::collections::BTreeMap;

use crate::Cost;
use crate::error::PathError;
use crate::traits::Location;

/// A weighted directed graph: location -> (neighbour -> edge weight).
///
/// Only locations with outgoing edges, or added through
/// [`add_location`](Self::add_location), are keys. A neighbour that is not
/// a key is still a valid target: it is a leaf with no outgoing edges.
///
/// Weights must be non-negative for searches to be correct. This is not
/// checked on insertion; call [`validate`](Self::validate) to detect
/// violations.
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
pub struct Graph<L> {
    edges: BTreeMap<L, BTreeMap<L, Cost>>,
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }
}

impl<L: Location> Graph<L> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `location` as a key, without outgoing edges if it has none.
    pub fn add_location(&mut self, location: L) -> &mut Self {
        self.edges.entry(location).or_default();
        self
    }

    /// Add (or re-weight) the directed edge `from -> to`.
    ///
    /// `from` becomes a key; `to` does not.
    pub fn add_edge(&mut self, from: L, to: L, weight: Cost) -> &mut Self {
        self.edges.entry(from).or_default().insert(to, weight);
        self
    }

    /// Remove the edge `from -> to`, returning its weight.
    pub fn remove_edge(&mut self, from: &L, to: &L) -> Option<Cost> {
        self.edges.get_mut(from)?.remove(to)
    }

    /// Whether `location` is a key of the graph.
    #[inline]
    pub fn contains(&self, location: &L) -> bool {
        self.edges.contains_key(location)
    }

    /// Outgoing edges of `location` as `(neighbour, weight)`, in neighbour
    /// order. Empty for non-keys.
    pub fn neighbors<'a>(&'a self, location: &L) -> impl Iterator<Item = (&'a L, Cost)> + use<'a, L> {
        self.edges
            .get(location)
            .into_iter()
            .flat_map(|out| out.iter().map(|(to, w)| (to, *w)))
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &L, to: &L) -> Option<Cost> {
        self.edges.get(from)?.get(to).copied()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Keys, in ascending order.
    pub fn locations(&self) -> impl Iterator<Item = &L> {
        self.edges.keys()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    /// Sum of the edge weights along `path`, or `None` if some consecutive
    /// pair is not connected by an edge.
    pub fn path_cost(&self, path: &[L]) -> Option<Cost> {
        path.windows(2)
            .try_fold(0.0, |acc, pair| Some(acc + self.weight(&pair[0], &pair[1])?))
    }

    /// Check that every weight is a non-negative number.
    ///
    /// Searches never call this themselves: on a graph that fails it they
    /// may silently return non-optimal paths.
    pub fn validate(&self) -> Result<(), PathError> {
        for (from, out) in &self.edges {
            for (to, &weight) in out {
                if weight.is_nan() || weight < 0.0 {
                    log::warn!("malformed edge {from:?} -> {to:?}: weight {weight}");
                    return Err(PathError::MalformedGraph {
                        from: format!("{from:?}"),
                        to: format!("{to:?}"),
                        weight,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<L: Location> FromIterator<(L, L, Cost)> for Graph<L> {
    fn from_iter<I: IntoIterator<Item = (L, L, Cost)>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<L: Location> Extend<(L, L, Cost)> for Graph<L> {
    fn extend<I: IntoIterator<Item = (L, L, Cost)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_reads_nested_json_objects() {
        let json = r#"{
            "Mount Moon": {"Room1": 2, "Room2": 4},
            "Room1": {"Room3": 1},
            "Exit": {}
        }"#;
        let g: Graph<String> = serde_json::from_str(json).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.weight(&"Mount Moon".to_string(), &"Room2".to_string()), Some(4.0));
        assert!(g.contains(&"Exit".to_string()));

        let back: Graph<String> = serde_json::from_str(&serde_json::to_string(&g).unwrap()).unwrap();
        assert_eq!(g, back);
    }
}
