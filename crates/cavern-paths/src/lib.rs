//! Shortest paths over weighted directed location graphs.
//!
//! The centre of this crate is [`find_path`] / [`PathFinder::find_path`], an
//! A* search that returns the cheapest path between two locations of a
//! [`Graph`] together with its cost:
//!
//! ```
//! use cavern_paths::{Graph, Zero, find_path};
//!
//! let graph: Graph<&str> = [("Cave", "Tunnel", 2.0), ("Tunnel", "Exit", 3.0)]
//!     .into_iter()
//!     .collect();
//! let (path, cost) = find_path(&graph, &"Cave", &"Exit", &Zero)?.into_parts();
//! assert_eq!(path, ["Cave", "Tunnel", "Exit"]);
//! assert_eq!(cost, 5.0);
//! # Ok::<(), cavern_paths::PathError>(())
//! ```
//!
//! An unreachable goal is reported through an infinite cost
//! ([`UNREACHABLE`]), never as an error. Only an undefined start (and an
//! exhausted [`SearchConfig::max_expansions`] budget) fail.
//!
//! Besides A*, a [`PathFinder`] computes:
//!
//! - **Dijkstra** multi-source cost maps ([`PathFinder::dijkstra_map`])
//! - **BFS** hop-count maps ([`PathFinder::bfs_map`])
//! - **Reachability** sets ([`PathFinder::reachable`])
//!
//! # Heuristics
//!
//! | Heuristic | Use |
//! |---|---|
//! | [`Zero`] | uniform-cost search |
//! | [`HeuristicTable`] | hand-authored estimates; misses count as unreachable |
//! | [`Manhattan`], [`Chebyshev`] | tile graphs keyed by [`Point`](cavern_core::Point) |
//! | `Fn(&L, &L) -> Cost` | anything else |

mod astar;
mod bfs;
mod config;
mod dijkstra;
mod distance;
mod error;
mod graph;
mod heuristic;
mod pathfinder;
mod reach;
mod traits;

pub use astar::find_path;
pub use config::SearchConfig;
pub use distance::{Chebyshev, Manhattan, chebyshev, manhattan};
pub use error::PathError;
pub use graph::Graph;
pub use heuristic::{HeuristicTable, Zero};
pub use pathfinder::{Cost, CostMap, PathFinder, PathNode, PathResult, UNREACHABLE};
pub use traits::{Heuristic, Location};
