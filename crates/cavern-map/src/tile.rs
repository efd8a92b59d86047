/// Label of one map tile.
///
/// The integer labels match the classifier output the maps are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty = 0,
    Wall = 1,
    Ladder = 2,
}

impl Tile {
    /// Decode a classifier label.
    pub const fn from_label(label: i32) -> Option<Self> {
        match label {
            0 => Some(Self::Empty),
            1 => Some(Self::Wall),
            2 => Some(Self::Ladder),
            _ => None,
        }
    }

    pub const fn label(self) -> i32 {
        self as i32
    }

    /// Decode a text map character: `.` empty, `#` wall, `H` ladder.
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'H' => Some(Self::Ladder),
            _ => None,
        }
    }

    pub const fn rune(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Ladder => 'H',
        }
    }

    /// Whether a walker may stand on this tile.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        for t in [Tile::Empty, Tile::Wall, Tile::Ladder] {
            assert_eq!(Tile::from_label(t.label()), Some(t));
            assert_eq!(Tile::from_rune(t.rune()), Some(t));
        }
        assert_eq!(Tile::from_label(3), None);
        assert_eq!(Tile::from_rune('x'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(Tile::Empty.is_passable());
        assert!(Tile::Ladder.is_passable());
        assert!(!Tile::Wall.is_passable());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        for t in [Tile::Empty, Tile::Wall, Tile::Ladder] {
            let json = serde_json::to_string(&t).unwrap();
            let back: Tile = serde_json::from_str(&json).unwrap();
            assert_eq!(t, back);
        }
        assert_eq!(serde_json::to_string(&Tile::Ladder).unwrap(), "\"Ladder\"");
    }
}
