//! The path-weight noise map.
//!
//! A single octave of billow noise, remapped into path costs where
//! low-noise valleys are cheap and ridges are effectively impassable.

use noise::{Billow, MultiFractal, NoiseFn, Perlin};
use rand::Rng;

use crate::point::{Coordinate, FloorDimension};

/// Billow noise seeded from `rng`, tuned so a floor holds a handful of
/// broad valleys.
pub(crate) fn create_billow(rng: &mut impl Rng) -> Billow<Perlin> {
    Billow::<Perlin>::new(rng.random())
        .set_octaves(1)
        .set_frequency(5.0)
        .set_lacunarity(0.001)
        .set_persistence(0.001)
}

/// Path cost of the tile at `(column, row)`.
///
/// Samples the billow at the tile's floor-relative position, then stretches
/// the sample from `[-1, 1]` to `[8, 24]`, raises it to the fourth power and
/// saturates into a `u16`. Anything above `u16::MAX / 2.5` becomes
/// `u16::MAX`; the rest is halved.
pub(crate) fn noise_value(
    noise: &Billow<Perlin>,
    column: Coordinate,
    row: Coordinate,
    width: FloorDimension,
    height: FloorDimension,
) -> u16 {
    let n = noise.get([
        f64::from(column.as_unbounded()) / f64::from(width.as_unbounded()),
        f64::from(row.as_unbounded()) / f64::from(height.as_unbounded()),
    ]);
    remap(n)
}

fn remap(n: f64) -> u16 {
    const HALF_U4: f64 = 8.0;
    const U4: f64 = 16.0;
    const CUTOFF: u16 = (u16::MAX as f64 / 2.5) as u16;

    // Float-to-int `as` saturates.
    let n = (n * HALF_U4 + U4).powi(4).ceil() as u16;

    if n <= CUTOFF {
        n / 2
    } else {
        u16::MAX
    }
}
