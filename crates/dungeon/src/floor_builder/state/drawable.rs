use crate::connection_path::ConnectionPath;
use crate::dungeon_tile::DungeonTile;
use crate::floor_builder::{FloorBuilder, STAGE_DELAY, STEP_DELAY};
use crate::point::Point;

use super::{FloorBuilderState, Filled};

/// Paths are traced and waiting to be painted onto the map.
#[derive(Debug)]
pub(crate) struct Drawable {
    pub(crate) to_draw: Vec<ConnectionPath>,
}

impl FloorBuilderState for Drawable {
    const TYPE_NAME: &'static str = "Drawable";
}

impl FloorBuilder<Drawable> {
    /// Paints every traced path. `draw_with(is_first, is_last, point)` picks
    /// the tile for each point; the entrance and exit are never painted over.
    pub(crate) fn draw(
        mut self,
        draw_with: fn(bool, bool, Point) -> DungeonTile,
    ) -> FloorBuilder<Filled> {
        let to_draw = std::mem::take(&mut self.extra.to_draw);

        for path in &to_draw {
            let last = path.length() - 1;
            for (i, point) in path.iter().enumerate() {
                if matches!(self.tile(point), DungeonTile::Entrance | DungeonTile::Exit) {
                    continue;
                }
                self.set_tile(point, draw_with(i == 0, i == last, point));
            }
            tracing::trace!(
                start = %path.start_border_id,
                end = %path.end_border_id,
                tiles = path.length(),
                "drew path"
            );
            self.frame_from_current_state(STEP_DELAY);
        }

        self.frame_from_current_state(STAGE_DELAY);
        self.into_state(Filled)
    }
}
