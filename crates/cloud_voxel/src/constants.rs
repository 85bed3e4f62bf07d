//! Tuning constants and cube topology for the cloud pipeline.
//!
//! # Field Layout
//!
//! ```text
//! index = x + y * size + z * size²
//!
//! Address:  0      1      2    ...  size-1     size    ...
//! Content: [0,0,0][1,0,0][2,0,0]...[size-1,0,0][0,1,0]...
//!          └──────────── X ────────────────┘
//!
//! Optimal access: Sequential X, then Y, then Z
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y   (cloud grows upward from the base layer at y = 0)
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Cell corner indices (marching cubes ordering):
//!       7──────6
//!      /│     /│       0 = (0,0,0)    4 = (0,0,1)
//!     3─┼────2 │       1 = (1,0,0)    5 = (1,0,1)
//!     │ 4────┼─5       2 = (1,1,0)    6 = (1,1,1)
//!     │/     │/        3 = (0,1,0)    7 = (0,1,1)
//!     0──────1
//! ```

/// Density threshold separating cloud interior from air.
pub const ISO_LEVEL: f32 = 0.01;

/// Threshold below which edge interpolation falls back to an endpoint.
pub const INTERPOLATION_EPSILON: f32 = 0.00001;

/// Minimum radius scale each inflated point grows by.
pub const BASE_INFLATION_SIZE: f32 = 4.0;

/// Probability threshold a candidate cell must exceed to be inflated.
pub const INFLATION_CHANCE: f32 = 0.5;

/// Default number of inflation passes per request.
pub const DEFAULT_INFLATION_PASSES: u32 = 2;

/// Height of the base layer. Larger values let clouds expand downward.
pub const BASE_ELEVATION: usize = 0;

/// Space left around the base disc for the cloud to grow into.
pub const PADDING: f32 = BASE_INFLATION_SIZE * 2.0;

/// Noise sample extent, independent of the grid resolution.
///
/// Changing the resolution changes the detail of the shape, not the shape.
pub const NOISE_SIZE: f32 = 4.0;

/// Suppresses the presence of the initial noise base.
pub const NOISE_DAMPENING: f32 = 0.0;

/// Largest accepted grid side length (512³ f32 = 512 MiB).
pub const MAX_RESOLUTION: u32 = 512;

/// Shadow alpha for thin density.
pub const LOW_ALPHA: u8 = 20;

/// Shadow alpha for dense regions.
pub const HIGH_ALPHA: u8 = 40;

/// Upper bound for any shadow alpha after blurring.
pub const ALPHA_CAP: u8 = 50;

/// Density at which the shadow switches from low to high alpha.
pub const HIGH_DENSITY: f32 = 0.5;

/// Alpha below which consumers should discard shadow texels.
///
/// Keeps fully transparent corners of one shadow from cutting into an
/// overlapping neighbour.
pub const MIN_BLEND_ALPHA: u8 = 15;

/// Grid offsets of the 8 cube corners relative to the cell origin.
pub const CORNER_OFFSETS: [[i32; 3]; 8] = [
  [0, 0, 0], // 0
  [1, 0, 0], // 1
  [1, 1, 0], // 2
  [0, 1, 0], // 3
  [0, 0, 1], // 4
  [1, 0, 1], // 5
  [1, 1, 1], // 6
  [0, 1, 1], // 7
];

/// Edge endpoint corner indices, ordered to match `EDGE_TABLE` bits.
pub const EDGE_CORNERS: [[usize; 2]; 12] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [1, 2], // Edge 1:  Y axis at X=1, Z=0
  [2, 3], // Edge 2:  X axis at Y=1, Z=0
  [3, 0], // Edge 3:  Y axis at X=0, Z=0
  [4, 5], // Edge 4:  X axis at Y=0, Z=1
  [5, 6], // Edge 5:  Y axis at X=1, Z=1
  [6, 7], // Edge 6:  X axis at Y=1, Z=1
  [7, 4], // Edge 7:  Y axis at X=0, Z=1
  [0, 4], // Edge 8:  Z axis at X=0, Y=0
  [1, 5], // Edge 9:  Z axis at X=1, Y=0
  [2, 6], // Edge 10: Z axis at X=1, Y=1
  [3, 7], // Edge 11: Z axis at X=0, Y=1
];

/// Convert 3D coordinates to a linear field index.
#[inline(always)]
pub const fn coord_to_index(size: usize, x: usize, y: usize, z: usize) -> usize {
  x + y * size + z * size * size
}

/// Convert a linear field index back to 3D coordinates.
#[inline(always)]
pub const fn index_to_coord(size: usize, idx: usize) -> (usize, usize, usize) {
  let x = idx % size;
  let y = (idx / size) % size;
  let z = idx / (size * size);
  (x, y, z)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
