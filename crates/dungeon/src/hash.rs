//! Fingerprints of floors and dungeons.
//!
//! A [`Fingerprinter`] folds values into a 64-bit FNV-1a state. Fingerprints
//! are for telling generation runs apart, not for security.

use crate::dungeon_tile::DungeonTile;

/// Running FNV-1a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fingerprinter(u64);

impl Fingerprinter {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    pub(crate) const fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    #[must_use]
    pub(crate) const fn byte(self, byte: u8) -> Self {
        Self((self.0 ^ byte as u64).wrapping_mul(Self::PRIME))
    }

    #[must_use]
    pub(crate) fn bytes(self, bytes: &[u8]) -> Self {
        bytes.iter().fold(self, |state, &b| state.byte(b))
    }

    /// Little-endian, so results match across platforms.
    #[must_use]
    pub(crate) fn u32(self, value: u32) -> Self {
        self.bytes(&value.to_le_bytes())
    }

    #[must_use]
    pub(crate) fn u64(self, value: u64) -> Self {
        self.bytes(&value.to_le_bytes())
    }

    /// Locked and unlocked secret doors share a palette entry but not a
    /// fingerprint.
    #[must_use]
    pub(crate) const fn tile(self, tile: &DungeonTile) -> Self {
        match tile {
            DungeonTile::SecretDoor { requires_key: false } => self.byte(0x80 | tile.as_u8()),
            _ => self.byte(tile.as_u8()),
        }
    }

    pub(crate) const fn finish(self) -> u64 {
        self.0
    }
}
