use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::error::PathError;
use crate::graph::Graph;
use crate::pathfinder::{Node, NodeRef, PathFinder, PathResult, UNREACHABLE};
use crate::traits::{Heuristic, Location};

/// Compute the cheapest path from `start` to `goal` with a default
/// [`PathFinder`]. See [`PathFinder::find_path`].
pub fn find_path<L, H>(
    graph: &Graph<L>,
    start: &L,
    goal: &L,
    heuristic: &H,
) -> Result<PathResult<L>, PathError>
where
    L: Location,
    H: Heuristic<L> + ?Sized,
{
    PathFinder::default().find_path(graph, start, goal, heuristic)
}

impl PathFinder {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// `start` must be a key of `graph`, otherwise
    /// [`PathError::UndefinedStart`] is returned before any search work.
    /// An unreachable goal is not an error: the result then has an infinite
    /// cost and the degenerate path `[goal]`.
    ///
    /// The result is optimal when all weights are non-negative and
    /// `heuristic` never overestimates. Locations the heuristic estimates
    /// as [`UNREACHABLE`] are still explored, after all the others.
    pub fn find_path<L, H>(
        &self,
        graph: &Graph<L>,
        start: &L,
        goal: &L,
        heuristic: &H,
    ) -> Result<PathResult<L>, PathError>
    where
        L: Location,
        H: Heuristic<L> + ?Sized,
    {
        if !graph.contains(start) {
            return Err(PathError::UndefinedStart(format!("{start:?}")));
        }
        if start == goal {
            return Ok(PathResult {
                path: vec![start.clone()],
                cost: 0.0,
                expanded: 0,
            });
        }

        let mut nodes: HashMap<L, Node<L>> = HashMap::new();
        nodes.insert(start.clone(), Node::root());

        let mut seq = 0u64;
        let mut open: BinaryHeap<NodeRef<L>> = BinaryHeap::new();
        open.push(NodeRef {
            f: 0.0,
            g: 0.0,
            location: start.clone(),
            seq,
        });

        let mut expanded = 0usize;

        while let Some(current) = open.pop() {
            // Skip stale entries.
            let Some(node) = nodes.get_mut(&current.location) else {
                continue;
            };
            if !node.open || current.g > node.g {
                continue;
            }

            if current.location == *goal {
                break;
            }

            if self.config.exhausted(expanded) {
                log::debug!("astar: {start:?} -> {goal:?} stopped after {expanded} expansions");
                return Err(PathError::ExpansionLimit { expanded });
            }

            node.open = false;
            expanded += 1;
            let current_g = node.g;
            log::trace!("astar: expand {:?} g={current_g}", current.location);

            for (next, weight) in graph.neighbors(&current.location) {
                let tentative_g = current_g + weight;

                match nodes.entry(next.clone()) {
                    Entry::Occupied(mut e) => {
                        let n = e.get_mut();
                        if tentative_g >= n.g {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = Some(current.location.clone());
                        n.open = true;
                    }
                    Entry::Vacant(e) => {
                        if tentative_g >= UNREACHABLE {
                            continue;
                        }
                        e.insert(Node {
                            g: tentative_g,
                            parent: Some(current.location.clone()),
                            open: true,
                        });
                    }
                }

                seq += 1;
                open.push(NodeRef {
                    f: tentative_g + heuristic.estimate(next, goal),
                    g: tentative_g,
                    location: next.clone(),
                    seq,
                });
            }
        }

        let cost = nodes.get(goal).map_or(UNREACHABLE, |n| n.g);

        // Reconstruct path.
        let mut path = vec![goal.clone()];
        let mut parent = nodes.get(goal).and_then(|n| n.parent.as_ref());
        while let Some(p) = parent {
            path.push(p.clone());
            parent = nodes.get(p).and_then(|n| n.parent.as_ref());
        }
        path.reverse();

        log::debug!("astar: {start:?} -> {goal:?} cost {cost} after {expanded} expansions");

        Ok(PathResult {
            path,
            cost,
            expanded,
        })
    }
}
