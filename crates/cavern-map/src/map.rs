//! A rectangular grid of [`Tile`] labels.

use std::fmt;

use cavern_core::{Point, Range};

use crate::tile::Tile;

/// A rectangular grid of tile labels, indexed by [`Point`] from `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl TileMap {
    /// Create a map of the given size with every tile [`Tile::Empty`].
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            tiles: vec![Tile::Empty; bounds.len()],
            bounds,
        }
    }

    /// Build a map from rows of classifier labels (`0`, `1`, `2`).
    ///
    /// All rows must have the same length.
    pub fn from_labels<I, R>(rows: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i32]>,
    {
        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                Some(w) if w != row.len() => {
                    return Err(MapError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: row.len(),
                    });
                }
                _ => width = Some(row.len()),
            }
            for (x, &label) in row.iter().enumerate() {
                let tile = Tile::from_label(label).ok_or(MapError::InvalidLabel {
                    label,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
            }
            height += 1;
        }

        let width = width.unwrap_or(0) as i32;
        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width, if width > 0 { height } else { 0 }),
        })
    }

    /// Parse a text map: `.` empty, `#` wall, `H` ladder, one line per row.
    ///
    /// Surrounding whitespace of the whole text is ignored; every line must
    /// have the same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }

        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                let tile = Tile::from_rune(ch).ok_or(MapError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
                x += 1;
            }
            match width {
                Some(w) if w != x => {
                    return Err(MapError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                _ => width = Some(x),
            }
            height += 1;
        }

        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width.unwrap_or(0) as i32, height),
        })
    }

    /// The map rectangle, `(0, 0)` to `(width, height)`.
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
    }

    /// Whether `p` is inside the map and passable.
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Number of tiles equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let t = self.tiles[self.index(Point::new(x, y))];
                write!(f, "{}", t.rune())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when reading a tile map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A row's width differs from the first row's.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A label other than `0`, `1` or `2`.
    InvalidLabel { label: i32, pos: Point },
    /// A text map character other than `.`, `#` or `H`.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "tile map: line {line} has {found} tiles, expected {expected}"
            ),
            Self::InvalidLabel { label, pos } => {
                write!(f, "tile map: invalid label {label} at {pos}")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "tile map: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}
