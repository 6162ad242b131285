//! The things a tile on a floor can be.

use serde::{Deserialize, Serialize};

/// A single tile of a [`Floor`](crate::Floor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonTile {
    /// Open floor.
    #[default]
    Empty,
    /// Solid rock.
    Wall,
    /// One end of a secret passage.
    SecretDoor {
        /// Whether a key is needed to open the door.
        requires_key: bool,
    },
    /// The body of a secret passage between two caves.
    SecretPassage,
    /// A treasure chest.
    TreasureChest,
    /// Where an explorer arrives on the floor.
    Entrance,
    /// The way down to the next floor.
    Exit,
}

impl DungeonTile {
    /// GIF palette, three bytes per colour, indexed by [`as_u8`](Self::as_u8).
    pub const COLOR_MAP: [u8; 21] = [
        0xFF, 0xFF, 0xFF, // empty: white
        0x00, 0x00, 0x00, // wall: black
        0xFF, 0x00, 0x00, // secret door: red
        0x00, 0xFF, 0x00, // secret passage: green
        0x00, 0x00, 0xFF, // treasure chest: blue
        0xFF, 0x00, 0xFF, // entrance: purple
        0xAA, 0x40, 0x00, // exit: brown
    ];

    /// Index of this tile's colour in [`COLOR_MAP`](Self::COLOR_MAP).
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Wall => 1,
            Self::SecretDoor { .. } => 2,
            Self::SecretPassage => 3,
            Self::TreasureChest => 4,
            Self::Entrance => 5,
            Self::Exit => 6,
        }
    }

    /// `true` only for [`DungeonTile::Wall`].
    pub const fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Anything that is not a wall. Cave detection treats every such tile
    /// as open space.
    pub const fn is_empty(&self) -> bool {
        !self.is_wall()
    }

    /// Whether an explorer can stand on this tile. Secret doors and passages
    /// are walkable once found, so this is everything but walls.
    pub const fn is_walkable(&self) -> bool {
        self.is_empty()
    }

    /// Parses a glyph produced by [`ToAsciiCharacter::to_ascii_char`].
    pub const fn from_ascii_char(c: char) -> Option<Self> {
        Some(match c {
            '.' => Self::Empty,
            '#' => Self::Wall,
            'D' => Self::SecretDoor { requires_key: true },
            'd' => Self::SecretDoor { requires_key: false },
            '~' => Self::SecretPassage,
            '$' => Self::TreasureChest,
            '<' => Self::Entrance,
            '>' => Self::Exit,
            _ => return None,
        })
    }
}

/// Renders a value as a single ASCII glyph, for debugging output and the
/// CLI's text format.
pub trait ToAsciiCharacter {
    /// The glyph for this value.
    fn to_ascii_char(&self) -> char;
}

impl ToAsciiCharacter for DungeonTile {
    fn to_ascii_char(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::SecretDoor { requires_key: true } => 'D',
            Self::SecretDoor { requires_key: false } => 'd',
            Self::SecretPassage => '~',
            Self::TreasureChest => '$',
            Self::Entrance => '<',
            Self::Exit => '>',
        }
    }
}

impl ToAsciiCharacter for bool {
    fn to_ascii_char(&self) -> char {
        if *self {
            '#'
        } else {
            '.'
        }
    }
}

/// Renders a flat row-major grid, one line per row.
pub(crate) fn render_grid<T: ToAsciiCharacter>(cells: &[T], width: usize) -> String {
    cells
        .chunks(width.max(1))
        .map(|row| row.iter().map(ToAsciiCharacter::to_ascii_char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DungeonTile; 8] = [
        DungeonTile::Empty,
        DungeonTile::Wall,
        DungeonTile::SecretDoor { requires_key: true },
        DungeonTile::SecretDoor { requires_key: false },
        DungeonTile::SecretPassage,
        DungeonTile::TreasureChest,
        DungeonTile::Entrance,
        DungeonTile::Exit,
    ];

    #[test]
    fn palette_covers_every_tile() {
        for tile in ALL {
            let i = usize::from(tile.as_u8()) * 3;
            assert!(i + 2 < DungeonTile::COLOR_MAP.len());
        }
    }

    #[test]
    fn glyphs_parse_back() {
        for tile in ALL {
            assert_eq!(DungeonTile::from_ascii_char(tile.to_ascii_char()), Some(tile));
        }
        assert_eq!(DungeonTile::from_ascii_char('x'), None);
    }

    #[test]
    fn only_walls_block() {
        for tile in ALL {
            assert_eq!(tile.is_walkable(), tile != DungeonTile::Wall);
            assert_eq!(tile.is_empty(), !tile.is_wall());
        }
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(DungeonTile::default(), DungeonTile::Empty);
    }

    #[test]
    fn render_grid_splits_rows() {
        let cells = [true, false, false, true];
        assert_eq!(render_grid(&cells, 2), "#.\n.#");
    }
}
