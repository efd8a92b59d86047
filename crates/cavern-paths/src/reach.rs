//! Reachability flood fill.

use std::collections::HashSet;

use crate::graph::Graph;
use crate::pathfinder::PathFinder;
use crate::traits::Location;

impl PathFinder {
    /// Every location reachable from `start` by following edges, `start`
    /// included, in ascending order.
    ///
    /// A goal missing from this set is exactly one for which
    /// [`find_path`](Self::find_path) reports an infinite cost.
    pub fn reachable<L: Location>(&self, graph: &Graph<L>, start: &L) -> Vec<L> {
        let mut seen: HashSet<L> = HashSet::new();
        let mut stack = vec![start.clone()];
        seen.insert(start.clone());

        while let Some(current) = stack.pop() {
            for (next, _) in graph.neighbors(&current) {
                if seen.insert(next.clone()) {
                    stack.push(next.clone());
                }
            }
        }

        let mut result: Vec<L> = seen.into_iter().collect();
        result.sort();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_direction_and_cycles() {
        let g: Graph<char> = [('a', 'b', 1.0), ('b', 'c', 1.0), ('c', 'a', 1.0), ('d', 'a', 1.0)]
            .into_iter()
            .collect();
        let pf = PathFinder::default();
        assert_eq!(pf.reachable(&g, &'a'), vec!['a', 'b', 'c']);
        assert_eq!(pf.reachable(&g, &'d'), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn unknown_start_reaches_itself() {
        let g: Graph<char> = Graph::new();
        assert_eq!(PathFinder::default().reachable(&g, &'x'), vec!['x']);
    }
}
