//! Tile-label maps for cavern path finding.
//!
//! A [`TileMap`] holds one [`Tile`] label per grid position, as produced by
//! an external image classifier (`0` empty, `1` wall, `2` ladder).
//! [`TileMap::to_graph`] turns the passable tiles into a
//! [`Graph<Point>`](cavern_paths::Graph) ready for
//! [`find_path`](cavern_paths::find_path).

pub mod graph;
pub mod map;
pub mod tile;

pub use graph::TileGraphConfig;
pub use map::{MapError, TileMap};
pub use tile::Tile;
