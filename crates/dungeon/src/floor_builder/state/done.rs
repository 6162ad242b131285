use crate::error::DungeonError;
use crate::floor::Floor;
use crate::floor_builder::{BuiltFloor, FloorBuilder};
use crate::recording::encode_gif;

use super::FloorBuilderState;

/// The map is final.
#[derive(Debug)]
pub(crate) struct Done;

impl FloorBuilderState for Done {
    const TYPE_NAME: &'static str = "Done";
}

impl FloorBuilder<Done> {
    /// Hands out the floor, encoding the recorded frames if there are any.
    pub(crate) fn finish(mut self) -> Result<BuiltFloor, DungeonError> {
        tracing::trace!(map = %self.pretty(), "finished floor");

        let recording = match self.frames.take() {
            Some(frames) => Some(encode_gif(
                self.width.as_unbounded() as u16,
                self.height.as_unbounded() as u16,
                frames,
            )?),
            None => None,
        };

        Ok(BuiltFloor {
            floor: Floor {
                width: self.width,
                height: self.height,
                data: self.map,
            },
            recording,
        })
    }
}
