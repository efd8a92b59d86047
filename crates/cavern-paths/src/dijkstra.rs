use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::Cost;
use crate::graph::Graph;
use crate::pathfinder::{CostMap, Node, NodeRef, PathFinder, PathNode};
use crate::traits::Location;

impl PathFinder {
    /// Compute a multi-source Dijkstra cost map.
    ///
    /// Every source starts at cost 0, whether or not it is a key of
    /// `graph`. Locations whose cost would exceed `max_cost` are not
    /// reached. The expansion cap of the finder's configuration does not
    /// apply here.
    pub fn dijkstra_map<L: Location>(
        &self,
        graph: &Graph<L>,
        sources: &[L],
        max_cost: Cost,
    ) -> CostMap<L> {
        let mut map = CostMap::new();
        let mut nodes: HashMap<L, Node<L>> = HashMap::new();
        let mut open: BinaryHeap<NodeRef<L>> = BinaryHeap::new();
        let mut seq = 0u64;

        // Seed sources.
        for src in sources {
            if nodes.contains_key(src) {
                continue;
            }
            nodes.insert(src.clone(), Node::root());
            open.push(NodeRef {
                f: 0.0,
                g: 0.0,
                location: src.clone(),
                seq,
            });
            seq += 1;
        }

        while let Some(current) = open.pop() {
            let Some(cn) = nodes.get_mut(&current.location) else {
                continue;
            };
            if !cn.open || current.g > cn.g {
                continue;
            }
            cn.open = false;
            let current_g = cn.g;

            map.costs.insert(current.location.clone(), current_g);
            map.nodes.push(PathNode {
                location: current.location.clone(),
                cost: current_g,
            });

            for (next, weight) in graph.neighbors(&current.location) {
                let tentative = current_g + weight;
                if tentative > max_cost {
                    continue;
                }

                match nodes.entry(next.clone()) {
                    Entry::Occupied(mut e) => {
                        let n = e.get_mut();
                        if tentative >= n.g {
                            continue;
                        }
                        n.g = tentative;
                        n.open = true;
                    }
                    Entry::Vacant(e) => {
                        // Cost maps keep no predecessors.
                        e.insert(Node {
                            g: tentative,
                            parent: None,
                            open: true,
                        });
                    }
                }

                open.push(NodeRef {
                    f: tentative,
                    g: tentative,
                    location: next.clone(),
                    seq,
                });
                seq += 1;
            }
        }

        log::debug!("dijkstra: {} sources reached {} locations", sources.len(), map.len());
        map
    }
}
