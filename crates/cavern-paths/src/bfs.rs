use std::collections::{HashMap, VecDeque};

use crate::Cost;
use crate::graph::Graph;
use crate::pathfinder::{CostMap, PathFinder, PathNode};
use crate::traits::Location;

impl PathFinder {
    /// Compute a multi-source breadth-first hop map.
    ///
    /// Every edge counts as one hop regardless of its weight. Expansion
    /// stops when the hop count would exceed `max_hops`.
    pub fn bfs_map<L: Location>(&self, graph: &Graph<L>, sources: &[L], max_hops: usize) -> CostMap<L> {
        let mut map = CostMap::new();
        let mut hops: HashMap<L, usize> = HashMap::new();
        let mut queue: VecDeque<L> = VecDeque::new();

        for src in sources {
            if hops.contains_key(src) {
                continue;
            }
            hops.insert(src.clone(), 0);
            queue.push_back(src.clone());
        }

        while let Some(current) = queue.pop_front() {
            let dist = hops.get(&current).copied().unwrap_or(0);
            map.costs.insert(current.clone(), dist as Cost);
            map.nodes.push(PathNode {
                location: current.clone(),
                cost: dist as Cost,
            });

            if dist >= max_hops {
                continue;
            }
            for (next, _) in graph.neighbors(&current) {
                if hops.contains_key(next) {
                    continue;
                }
                hops.insert(next.clone(), dist + 1);
                queue.push_back(next.clone());
            }
        }

        map
    }
}
