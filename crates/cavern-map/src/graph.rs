//! Deriving path graphs from tile maps.

use cavern_core::Point;
use cavern_paths::{Cost, Graph};

use crate::map::TileMap;
use crate::tile::Tile;

/// How [`TileMap::to_graph`] connects passable tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGraphConfig {
    /// Connect diagonal neighbours too (8-way instead of 4-way).
    pub diagonals: bool,
    /// Cost of stepping onto an empty tile.
    pub step_cost: Cost,
    /// Cost of stepping onto a ladder tile.
    pub ladder_cost: Cost,
}

impl Default for TileGraphConfig {
    fn default() -> Self {
        Self {
            diagonals: false,
            step_cost: 1.0,
            ladder_cost: 1.0,
        }
    }
}

impl TileGraphConfig {
    /// Builder: allow diagonal moves.
    #[must_use]
    pub fn diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// Builder: set the cost of entering an empty tile.
    #[must_use]
    pub fn step_cost(mut self, cost: Cost) -> Self {
        self.step_cost = cost;
        self
    }

    /// Builder: set the cost of entering a ladder tile.
    #[must_use]
    pub fn ladder_cost(mut self, cost: Cost) -> Self {
        self.ladder_cost = cost;
        self
    }

    /// The cheapest single step, suitable as the scale of a
    /// [`Manhattan`](cavern_paths::Manhattan) or
    /// [`Chebyshev`](cavern_paths::Chebyshev) heuristic.
    pub fn min_step(&self) -> Cost {
        self.step_cost.min(self.ladder_cost)
    }

    fn cost_into(&self, tile: Tile) -> Cost {
        match tile {
            Tile::Ladder => self.ladder_cost,
            _ => self.step_cost,
        }
    }
}

impl TileMap {
    /// Build the movement graph of this map.
    ///
    /// Every passable tile becomes a key (isolated ones included), with an
    /// edge to each passable neighbour weighted by the cost of entering
    /// that neighbour.
    pub fn to_graph(&self, config: &TileGraphConfig) -> Graph<Point> {
        let mut graph = Graph::new();

        for (p, tile) in self.iter() {
            if !tile.is_passable() {
                continue;
            }
            graph.add_location(p);

            let mut link = |n: Point| {
                if let Some(t) = self.at(n).filter(|t| t.is_passable()) {
                    graph.add_edge(p, n, config.cost_into(t));
                }
            };
            if config.diagonals {
                p.neighbors_8().into_iter().for_each(&mut link);
            } else {
                p.neighbors_4().into_iter().for_each(&mut link);
            }
        }

        log::debug!(
            "tile graph: {} locations, {} edges from {}x{} map",
            graph.len(),
            graph.edge_count(),
            self.width(),
            self.height()
        );
        graph
    }
}
