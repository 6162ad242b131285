//! Generation configuration, validation, and error types.
//!
//! [`GenerationConfig`] holds every tunable of the floor pipeline. Its
//! defaults reproduce the classic cave look; [`validate()`](GenerationConfig::validate)
//! rejects combinations the pipeline cannot honour.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

// ── BuildConnectionIterations ──────────────────────────────────────

/// How long connection building runs before it stops.
///
/// Each iteration connects one cave to the closest cave that is not yet
/// reachable from it, so every policy yields a spanning forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildConnectionIterations {
    /// Until every cave is reachable from every other.
    FullyConnect,
    /// At most this many iterations, stopping early once fully connected.
    Finite(u8),
    /// Until at most this many disconnected groups of caves remain.
    Until(u8),
}

// ── TreasureChests ─────────────────────────────────────────────────

/// Inclusive range for the number of treasure chests per floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureChests {
    /// Fewest chests to try to place.
    pub min: u16,
    /// Most chests to place.
    pub max: u16,
}

impl Default for TreasureChests {
    fn default() -> Self {
        Self { min: 5, max: 10 }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// A [`GenerationConfig`] that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `wall_chance_percent` is above 100.
    WallChanceOutOfRange {
        /// The configured value.
        value: u8,
    },
    /// `treasure_chests.min` is greater than `treasure_chests.max`.
    InvertedTreasureRange {
        /// Configured minimum.
        min: u16,
        /// Configured maximum.
        max: u16,
    },
    /// `workers` is `Some(0)`.
    ZeroWorkers,
    /// `BuildConnectionIterations::Until(0)` can never be satisfied.
    UnreachableConnectionTarget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WallChanceOutOfRange { value } => {
                write!(f, "wall_chance_percent {value} is above 100")
            }
            Self::InvertedTreasureRange { min, max } => {
                write!(f, "treasure_chests.min {min} is greater than max {max}")
            }
            Self::ZeroWorkers => write!(f, "workers must be at least 1"),
            Self::UnreachableConnectionTarget => {
                write!(f, "connection_iterations Until(0) can never be reached")
            }
        }
    }
}

impl Error for ConfigError {}

// ── GenerationConfig ───────────────────────────────────────────────

/// Every tunable of floor generation.
///
/// Deserializes from JSON with every field optional; missing fields take
/// their defaults.
///
/// ```
/// use dungeon::config::GenerationConfig;
///
/// let config: GenerationConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.wall_chance_percent, 52);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Master seed. `None` draws one from the thread RNG. Default: `None`.
    pub seed: Option<u64>,
    /// Chance, in percent, of an interior tile starting as a wall. Default: 52.
    pub wall_chance_percent: u8,
    /// Smoothing passes right after the entrance path is carved. Default: 3.
    pub initial_smoothing_passes: usize,
    /// How many of the initial passes may create new walls in wide open
    /// areas. Default: 4.
    pub new_wall_passes: usize,
    /// Smoothing passes after the connections are drawn. Default: 7.
    pub final_smoothing_passes: usize,
    /// Connection building policy. Default: `Finite(20)`.
    pub connection_iterations: BuildConnectionIterations,
    /// Widen connection paths by their 4-neighbours. Default: `true`.
    pub wide_paths: bool,
    /// Route paths through low-noise tiles instead of the shortest route.
    /// Default: `true`.
    pub noise_weighted_paths: bool,
    /// Treasure chests per floor. Default: 5 to 10.
    pub treasure_chests: TreasureChests,
    /// Capture an animation of each floor being built. Default: `false`.
    pub record_frames: bool,
    /// Worker threads. `None` = one per available core, capped at the
    /// number of floors. Default: `None`.
    pub workers: Option<usize>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            wall_chance_percent: 52,
            initial_smoothing_passes: 3,
            new_wall_passes: 4,
            final_smoothing_passes: 7,
            connection_iterations: BuildConnectionIterations::Finite(20),
            wide_paths: true,
            noise_weighted_paths: true,
            treasure_chests: TreasureChests::default(),
            record_frames: false,
            workers: None,
        }
    }
}

impl GenerationConfig {
    /// Check that the pipeline can honour this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wall_chance_percent > 100 {
            return Err(ConfigError::WallChanceOutOfRange {
                value: self.wall_chance_percent,
            });
        }
        if self.treasure_chests.min > self.treasure_chests.max {
            return Err(ConfigError::InvertedTreasureRange {
                min: self.treasure_chests.min,
                max: self.treasure_chests.max,
            });
        }
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.connection_iterations == BuildConnectionIterations::Until(0) {
            return Err(ConfigError::UnreachableConnectionTarget);
        }
        Ok(())
    }

    /// The configured seed, or a fresh random one.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Worker threads to use for `floor_count` floors.
    pub fn resolved_worker_count(&self, floor_count: usize) -> usize {
        let wanted = self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });
        wanted.min(floor_count).max(1)
    }
}
