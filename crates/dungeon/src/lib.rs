//! Cave dungeon generation.
//!
//! A [`Dungeon`] is a stack of [`Floor`]s. Each floor is carved out of
//! random noise by a cellular automaton, its caves are joined by paths and
//! secret passages, and it gets an entrance, an exit, and some treasure.
//! Floors are generated in parallel and deterministically: the same seed and
//! [`GenerationConfig`] always give the same dungeon.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroU16;
//! use dungeon::point::FloorDimension;
//! use dungeon::{Dungeon, DungeonType, GenerationConfig};
//!
//! let config = GenerationConfig { seed: Some(1), ..GenerationConfig::default() };
//! let size = FloorDimension::new(40).unwrap();
//! let dungeon = Dungeon::generate(
//!     size,
//!     size,
//!     NonZeroU16::new(3).unwrap(),
//!     DungeonType::Cave,
//!     &config,
//! )
//! .unwrap();
//!
//! for floor in &dungeon.floors {
//!     assert_eq!(floor.walkable_region_count(), 1);
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod border;
pub mod config;
pub mod dungeon_tile;
pub mod error;
pub mod navigation;
pub mod point;
pub mod point_index;

mod connection_path;
mod dungeon;
mod floor;
mod floor_builder;
mod grid_helpers;
mod hash;
mod recording;

pub use crate::config::{BuildConnectionIterations, ConfigError, GenerationConfig, TreasureChests};
pub use crate::connection_path::Connection;
pub use crate::dungeon::{Dungeon, DungeonType, FloorRecording};
pub use crate::dungeon_tile::{DungeonTile, ToAsciiCharacter};
pub use crate::error::DungeonError;
pub use crate::floor::{Floor, FloorId};
pub use crate::floor_builder::{BuiltFloor, FloorBuilder, FloorBuilderState, New};
pub use crate::navigation::{Direction, Explorer, MoveOutcome};
pub use crate::point::{Column, Point, Row};
pub use crate::point_index::PointIndex;
