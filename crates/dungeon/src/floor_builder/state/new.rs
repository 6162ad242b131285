use crate::config::GenerationConfig;
use crate::dungeon_tile::DungeonTile;
use crate::error::DungeonError;
use crate::floor::FloorId;
use crate::floor_builder::{blank, BuiltFloor, FloorBuilder};
use crate::point::FloorDimension;

use super::FloorBuilderState;

/// Entry point of the pipeline.
#[derive(Debug)]
pub struct New;

impl FloorBuilderState for New {
    const TYPE_NAME: &'static str = "New";
}

impl FloorBuilder<New> {
    /// Runs the whole pipeline for one floor.
    ///
    /// The floor's RNG is seeded from the config seed mixed with `id`, so a
    /// fixed seed always yields the same floor for the same id.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate, or if recording is enabled and
    /// the animation cannot be encoded.
    pub fn create(
        id: FloorId,
        width: FloorDimension,
        height: FloorDimension,
        config: &GenerationConfig,
    ) -> Result<BuiltFloor, DungeonError> {
        config.validate()?;
        let seed = config.resolved_seed();

        let span = tracing::debug_span!("floor", %id);
        let _enter = span.enter();

        blank(id, width, height, config, seed)
            .random_fill()
            .trace_original_path()
            .smoothen(config.initial_smoothing_passes, config.new_wall_passes)
            .get_cave_borders()
            .build_connections(config.connection_iterations)
            .trace_connection_paths(config.wide_paths, config.noise_weighted_paths)
            .draw(|_, _, _| DungeonTile::Empty)
            .smoothen(config.final_smoothing_passes, 0)
            .check_for_secret_passages()
            .place_treasure_chests()
            .finish()
    }
}
