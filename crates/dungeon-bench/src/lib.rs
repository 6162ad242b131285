//! Benchmark profiles for dungeon generation.
//!
//! - [`reference_profile`]: 100x100 floors with the default pipeline
//! - [`stress_profile`]: 200x200 floors (the largest allowed), fully connected
//! - [`profile_dimensions`]: the floor size each profile uses

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dungeon::point::FloorDimension;
use dungeon::{BuildConnectionIterations, GenerationConfig};

/// Side length of reference profile floors.
pub const REFERENCE_SIZE: i32 = 100;

/// Side length of stress profile floors.
pub const STRESS_SIZE: i32 = dungeon::point::MAX_FLOOR_SIZE;

/// Default pipeline, fixed seed, single worker.
pub fn reference_profile(seed: u64) -> GenerationConfig {
    GenerationConfig {
        seed: Some(seed),
        workers: Some(1),
        ..GenerationConfig::default()
    }
}

/// Largest floors, every cave joined by a path, narrow unweighted paths.
pub fn stress_profile(seed: u64) -> GenerationConfig {
    GenerationConfig {
        seed: Some(seed),
        connection_iterations: BuildConnectionIterations::FullyConnect,
        wide_paths: false,
        noise_weighted_paths: false,
        ..GenerationConfig::default()
    }
}

/// Width and height of floors for a profile side length.
///
/// Falls back to the smallest floor for sizes outside the allowed range.
pub fn profile_dimensions(size: i32) -> (FloorDimension, FloorDimension) {
    let side = FloorDimension::new_clamped(size);
    (side, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert!(reference_profile(1).validate().is_ok());
        assert!(stress_profile(1).validate().is_ok());
    }

    #[test]
    fn dimensions_clamp() {
        let (w, h) = profile_dimensions(STRESS_SIZE);
        assert_eq!(w.as_unbounded(), 200);
        assert_eq!(h, w);
        assert_eq!(profile_dimensions(1).0.as_unbounded(), 10);
    }
}
