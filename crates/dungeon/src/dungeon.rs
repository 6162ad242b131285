//! A stack of floors, generated in parallel.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::thread;

use crate::config::GenerationConfig;
use crate::error::DungeonError;
use crate::floor::{Floor, FloorId};
use crate::floor_builder::{BuiltFloor, FloorBuilder, New};
use crate::hash::Fingerprinter;
use crate::point::{FloorDimension, MIN_FLOOR_SIZE};
use crate::recording::{encode_gif, floor_frame};

/// Delay between floors in [`Dungeon::to_gif`], in hundredths of a second.
const FLOOR_DELAY: u16 = 300;

/// The flavour of a dungeon. Only affects presentation; every type is
/// generated the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DungeonType {
    /// Rocky and gloomy.
    #[default]
    Cave,
    /// Lush, overgrown, and very green.
    Forest,
}

impl DungeonType {
    const fn tag(self) -> u8 {
        match self {
            Self::Cave => 0,
            Self::Forest => 1,
        }
    }
}

/// The build animation of one floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorRecording {
    /// The floor the animation belongs to.
    pub id: FloorId,
    /// GIF bytes.
    pub gif: Vec<u8>,
}

/// A dungeon: floors stacked top to bottom, floor 0 first.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU16;
/// use dungeon::point::FloorDimension;
/// use dungeon::{Dungeon, DungeonType, GenerationConfig};
///
/// let config = GenerationConfig { seed: Some(7), ..GenerationConfig::default() };
/// let size = FloorDimension::new(30).unwrap();
/// let dungeon = Dungeon::generate(
///     size,
///     size,
///     NonZeroU16::new(2).unwrap(),
///     DungeonType::Cave,
///     &config,
/// )
/// .unwrap();
///
/// assert_eq!(dungeon.floors.len(), 2);
/// assert!(dungeon.floors.iter().all(|f| f.entrance().is_some()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    /// Presentation flavour.
    pub dungeon_type: DungeonType,
    /// The floors, ordered by id. Never empty for a generated dungeon.
    pub floors: Vec<Floor>,
}

impl Dungeon {
    /// Generates a dungeon with the default configuration and a random seed.
    ///
    /// # Errors
    ///
    /// Fails only if a generation worker dies.
    pub fn new(
        height: FloorDimension,
        width: FloorDimension,
        floor_count: NonZeroU16,
        dungeon_type: DungeonType,
    ) -> Result<Self, DungeonError> {
        Self::generate(
            height,
            width,
            floor_count,
            dungeon_type,
            &GenerationConfig::default(),
        )
    }

    /// Generates a dungeon. With a fixed `config.seed` the result is the
    /// same whatever the worker count.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate or a worker dies.
    pub fn generate(
        height: FloorDimension,
        width: FloorDimension,
        floor_count: NonZeroU16,
        dungeon_type: DungeonType,
        config: &GenerationConfig,
    ) -> Result<Self, DungeonError> {
        Self::generate_recorded(height, width, floor_count, dungeon_type, config)
            .map(|(dungeon, _)| dungeon)
    }

    /// Like [`generate`](Self::generate), and also returns the build
    /// animation of every floor when `config.record_frames` is set.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate, a worker dies, or an animation
    /// cannot be encoded.
    pub fn generate_recorded(
        height: FloorDimension,
        width: FloorDimension,
        floor_count: NonZeroU16,
        dungeon_type: DungeonType,
        config: &GenerationConfig,
    ) -> Result<(Self, Vec<FloorRecording>), DungeonError> {
        config.validate()?;
        // Resolve once so every floor shares the seed.
        let config = GenerationConfig {
            seed: Some(config.resolved_seed()),
            ..config.clone()
        };

        let built = build_floors(width, height, floor_count.get(), &config)?;

        let mut floors = Vec::with_capacity(built.len());
        let mut recordings = Vec::new();
        for (id, BuiltFloor { floor, recording }) in built {
            floors.push(floor);
            if let Some(gif) = recording {
                recordings.push(FloorRecording { id, gif });
            }
        }

        Ok((
            Self {
                dungeon_type,
                floors,
            },
            recordings,
        ))
    }

    /// Serializes the dungeon as JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures, which do not happen for well-formed
    /// dungeons.
    pub fn to_json(&self) -> Result<String, DungeonError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Loads a dungeon from JSON, checking every floor's dimensions.
    ///
    /// # Errors
    ///
    /// [`DungeonError::Json`] for malformed input or a floor whose data does
    /// not match its size, [`DungeonError::InvalidFloor`] for a dungeon
    /// without floors.
    pub fn from_json(json: &str) -> Result<Self, DungeonError> {
        let dungeon: Self = serde_json::from_str(json)?;
        if dungeon.floors.is_empty() {
            return Err(DungeonError::InvalidFloor {
                reason: "dungeon has no floors".into(),
            });
        }
        Ok(dungeon)
    }

    /// Encodes the dungeon as a looping GIF, one frame per floor.
    ///
    /// # Errors
    ///
    /// [`DungeonError::Encode`] if the encoder fails.
    pub fn to_gif(&self) -> Result<Vec<u8>, DungeonError> {
        let width = self.floors.iter().map(|f| f.width.as_unbounded()).max();
        let height = self.floors.iter().map(|f| f.height.as_unbounded()).max();
        let (width, height) = (
            width.unwrap_or(MIN_FLOOR_SIZE) as u16,
            height.unwrap_or(MIN_FLOOR_SIZE) as u16,
        );
        let frames = self.floors.iter().map(|f| floor_frame(f, FLOOR_DELAY));
        Ok(encode_gif(width, height, frames)?)
    }

    /// FNV-1a hash over the dungeon type and every floor's fingerprint.
    pub fn fingerprint(&self) -> u64 {
        self.floors
            .iter()
            .fold(
                Fingerprinter::new().byte(self.dungeon_type.tag()),
                |state, floor| state.u64(floor.fingerprint()),
            )
            .finish()
    }
}

/// Builds every floor on a pool of scoped workers fed through a channel.
/// Results come back in id order.
fn build_floors(
    width: FloorDimension,
    height: FloorDimension,
    floor_count: u16,
    config: &GenerationConfig,
) -> Result<Vec<(FloorId, BuiltFloor)>, DungeonError> {
    let workers = config.resolved_worker_count(usize::from(floor_count));
    tracing::debug!(floors = floor_count, workers, seed = ?config.seed, "generating dungeon");

    let (task_tx, task_rx) = unbounded();
    for id in 0..floor_count {
        task_tx
            .send(FloorId::new(id))
            .map_err(|_| DungeonError::WorkerFailed {
                reason: "task queue closed".into(),
            })?;
    }
    drop(task_tx);

    let (result_tx, result_rx) = unbounded();
    let results = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || worker_loop(task_rx, result_tx, width, height, config))
            })
            .collect();
        drop(result_tx);

        let results: Vec<_> = result_rx.iter().collect();
        let mut panicked = false;
        for handle in handles {
            panicked |= handle.join().is_err();
        }
        if panicked {
            return Err(DungeonError::WorkerFailed {
                reason: "worker panicked".into(),
            });
        }
        Ok(results)
    })?;

    let mut floors = Vec::with_capacity(results.len());
    for (id, built) in results {
        floors.push((id, built?));
    }
    if floors.len() != usize::from(floor_count) {
        return Err(DungeonError::WorkerFailed {
            reason: format!("expected {floor_count} floors, got {}", floors.len()),
        });
    }
    floors.sort_by_key(|(id, _)| *id);
    Ok(floors)
}

type FloorResult = (FloorId, Result<BuiltFloor, DungeonError>);

/// Runs until the task channel is drained.
fn worker_loop(
    tasks: Receiver<FloorId>,
    results: Sender<FloorResult>,
    width: FloorDimension,
    height: FloorDimension,
    config: &GenerationConfig,
) {
    while let Ok(id) = tasks.recv() {
        let built = FloorBuilder::<New>::create(id, width, height, config);
        if results.send((id, built)).is_err() {
            break;
        }
    }
}
