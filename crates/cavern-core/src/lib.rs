//! **cavern-core** — shared geometry for the cavern crates.
//!
//! Tile-derived graphs name their locations with [`Point`]s, and tile maps
//! describe their extent with a [`Range`].

pub mod geom;

pub use geom::{Point, Range, RangeIter};
