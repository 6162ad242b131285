//! Floor generation as a type-state pipeline.
//!
//! A [`FloorBuilder<S>`] owns the tile map, the path-cost noise map and the
//! floor's RNG. Each state `S` exposes only the transitions valid from it, so
//! the pipeline order is checked by the compiler. [`FloorBuilder::create`]
//! runs the whole pipeline:
//!
//! ```txt
//! Blank -random_fill-> RandomFilled -trace_original_path-> Filled
//!   -smoothen-> Smoothed -get_cave_borders-> HasBorders
//!   -build_connections-> HasConnections -trace_connection_paths-> Drawable
//!   -draw-> Filled -smoothen-> Smoothed -check_for_secret_passages->
//!   HasSecretPassages -place_treasure_chests-> Done -finish-> BuiltFloor
//! ```
//!
//! See <http://roguebasin.com/index.php/Cellular_Automata_Method_for_Generating_Random_Cave-Like_Levels>.

use gif::Frame;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::borrow::Cow;
use std::fmt;

use crate::config::GenerationConfig;
use crate::dungeon_tile::{render_grid, DungeonTile};
use crate::floor::{Floor, FloorId};
use crate::grid_helpers;
use crate::point::{FloorDimension, Point};
use crate::point_index::PointIndex;

mod noise;
mod state;

pub use state::{FloorBuilderState, New};

/// Frame delay, in hundredths of a second, after a whole-map stage.
const STAGE_DELAY: u16 = 100;
/// Frame delay while paths are carved tile by tile.
const STEP_DELAY: u16 = 1;

/// Mixes the dungeon seed with a floor id so every floor gets its own
/// independent stream.
pub(crate) fn floor_seed(seed: u64, id: FloorId) -> u64 {
    seed ^ u64::from(id.get()).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Builder for a [`Floor`]. See the module docs for the pipeline.
pub struct FloorBuilder<S: FloorBuilderState> {
    pub(crate) width: FloorDimension,
    pub(crate) height: FloorDimension,
    pub(crate) map: Vec<DungeonTile>,
    /// Path cost of every tile; see `noise::noise_value`.
    pub(crate) noise_map: Vec<u16>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) config: GenerationConfig,
    frames: Option<Vec<Frame<'static>>>,
    id: FloorId,
    extra: S,
}

impl<S: FloorBuilderState> fmt::Debug for FloorBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloorBuilder")
            .field("state", &S::TYPE_NAME)
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("frames", &self.frames.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}

/// A finished floor and, if recording was enabled, its build animation as
/// an encoded GIF.
#[derive(Debug, Clone)]
pub struct BuiltFloor {
    /// The generated floor.
    pub floor: Floor,
    /// GIF bytes of the build process.
    pub recording: Option<Vec<u8>>,
}

impl<S: FloorBuilderState> FloorBuilder<S> {
    /// Moves everything into a new state.
    fn into_state<T: FloorBuilderState>(self, extra: T) -> FloorBuilder<T> {
        FloorBuilder {
            width: self.width,
            height: self.height,
            map: self.map,
            noise_map: self.noise_map,
            rng: self.rng,
            config: self.config,
            frames: self.frames,
            id: self.id,
            extra,
        }
    }

    /// Snapshots the map as an animation frame. No-op unless recording.
    fn frame_from_current_state(&mut self, delay: u16) {
        if let Some(frames) = &mut self.frames {
            frames.push(Frame {
                width: self.width.as_unbounded() as u16,
                height: self.height.as_unbounded() as u16,
                buffer: Cow::Owned(self.map.iter().map(DungeonTile::as_u8).collect()),
                delay,
                ..Frame::default()
            });
        }
    }

    pub(crate) fn is_out_of_bounds(&self, point: Point) -> bool {
        grid_helpers::is_ring(point, self.width, self.height)
    }

    /// Walls within `distance_x` columns and `distance_y` rows of `point`.
    pub(crate) fn get_adjacent_walls(&self, point: Point, distance_x: i32, distance_y: i32) -> usize {
        grid_helpers::count_adjacent_walls(
            &self.map,
            point,
            distance_x,
            distance_y,
            self.width,
            self.height,
        )
    }

    pub(crate) fn tile(&self, point: Point) -> DungeonTile {
        *self.map.at(point, self.width)
    }

    pub(crate) fn set_tile(&mut self, point: Point, tile: DungeonTile) {
        *self.map.at_mut(point, self.width) = tile;
    }

    /// The map as ASCII, one line per row.
    pub(crate) fn pretty(&self) -> String {
        render_grid(&self.map, self.width.as_unbounded() as usize)
    }

    /// Cellular automaton rule for one tile, read from `map`.
    ///
    /// Only `Wall` and `Empty` tiles change; everything else is kept. The
    /// outer ring is always wall.
    fn place_wall_logic(&self, point: Point, create_new_walls: bool) -> DungeonTile {
        use DungeonTile::{Empty, Wall};

        let current = self.tile(point);
        if !matches!(current, Empty | Wall) {
            return current;
        }
        if self.is_out_of_bounds(point) {
            return Wall;
        }

        let walls_1_away = self.get_adjacent_walls(point, 1, 1);
        let threshold = if current.is_wall() { 4 } else { 5 };

        if walls_1_away >= threshold {
            return Wall;
        }
        if create_new_walls && self.get_adjacent_walls(point, 2, 2) < 2 {
            return Wall;
        }
        Empty
    }
}

impl<S: state::Smoothable> FloorBuilder<S> {
    /// Runs `passes` rounds of the cellular automaton. The first
    /// `new_wall_passes` rounds may also raise walls in wide open areas.
    ///
    /// Each pass reads the previous pass's map and writes a fresh one.
    pub(crate) fn smoothen(
        mut self,
        passes: usize,
        new_wall_passes: usize,
    ) -> FloorBuilder<state::Smoothed> {
        let points: Vec<Point> =
            crate::point_index::iter_points(self.width, self.height).collect();
        let mut next = self.map.clone();

        for pass in 0..passes {
            let create_new_walls = pass < new_wall_passes;
            for &point in &points {
                *next.at_mut(point, self.width) = self.place_wall_logic(point, create_new_walls);
            }
            std::mem::swap(&mut self.map, &mut next);
            tracing::trace!(
                pass,
                create_new_walls,
                walls = self.map.iter().filter(|t| t.is_wall()).count(),
                "smoothing pass"
            );
            self.frame_from_current_state(STAGE_DELAY);
        }
        self.into_state(state::Smoothed)
    }
}

/// Creates the blank builder every pipeline starts from.
fn blank(
    id: FloorId,
    width: FloorDimension,
    height: FloorDimension,
    config: &GenerationConfig,
    seed: u64,
) -> FloorBuilder<state::Blank> {
    let cells = (width.as_unbounded() * height.as_unbounded()) as usize;
    FloorBuilder {
        width,
        height,
        map: vec![DungeonTile::default(); cells],
        noise_map: vec![0; cells],
        rng: ChaCha8Rng::seed_from_u64(floor_seed(seed, id)),
        config: config.clone(),
        frames: config.record_frames.then(Vec::new),
        id,
        extra: state::Blank,
    }
}
