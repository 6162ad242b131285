//! Animated GIF output.
//!
//! Every frame is an indexed image over [`DungeonTile::COLOR_MAP`], one pixel
//! per tile.

use gif::{Encoder, EncodingError, Frame, Repeat};
use std::borrow::Cow;

use crate::dungeon_tile::DungeonTile;
use crate::floor::Floor;

/// Encodes `frames` as a looping GIF with a `width` x `height` screen.
pub(crate) fn encode_gif<'a>(
    width: u16,
    height: u16,
    frames: impl IntoIterator<Item = Frame<'a>>,
) -> Result<Vec<u8>, EncodingError> {
    let mut buffer = Vec::new();
    {
        let mut encoder = Encoder::new(&mut buffer, width, height, &DungeonTile::COLOR_MAP)?;
        encoder.set_repeat(Repeat::Infinite)?;
        for frame in frames {
            encoder.write_frame(&frame)?;
        }
    }
    Ok(buffer)
}

/// A single still frame of `floor`.
pub(crate) fn floor_frame(floor: &Floor, delay: u16) -> Frame<'static> {
    Frame {
        width: floor.width.as_unbounded() as u16,
        height: floor.height.as_unbounded() as u16,
        buffer: Cow::Owned(floor.data.iter().map(DungeonTile::as_u8).collect()),
        delay,
        ..Frame::default()
    }
}
