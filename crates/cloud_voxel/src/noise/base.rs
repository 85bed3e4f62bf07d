//! Base layer: thresholded noise masked by a soft-edged disc.
//!
//! ```text
//!   y = base_elevation, top view (X →, Z ↓)
//!
//!   ┌────────────────────┐
//!   │      padding       │
//!   │    ┌──────────┐    │   value = max(0, noise - dampening) · falloff
//!   │    │  noise   │    │   falloff = clamp(overlap_radius - d, 0, 1)
//!   │    │  × disc  │    │   overlap_radius = size/2 - padding
//!   │    └──────────┘    │
//!   │                    │
//!   └────────────────────┘
//! ```
//!
//! The noise is sampled over a fixed extent (`noise_size`), so raising the
//! resolution adds detail without changing the silhouette.

use crate::config::NoiseConfig;
use crate::field::VoxelField;
use crate::generator::Generator;

/// Write the base layer into `field` and return the number of non-zero cells.
///
/// Only the `y = base_elevation` plane is touched. Cells outside the disc are
/// written as `0.0`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "noise::write_base_layer"))]
pub fn write_base_layer(field: &mut VoxelField, generator: &Generator, config: &NoiseConfig) -> usize {
  let size = field.size();
  if size == 0 {
    return 0;
  }

  let half = size as f32 / 2.0;
  let scale = config.noise_size / size as f32;
  let overlap_radius = half - config.padding;
  let y = config.base_elevation as i32;

  let mut filled = 0;
  for x in 0..size {
    for z in 0..size {
      let dx = x as f32 - half;
      let dz = z as f32 - half;
      let falloff = (overlap_radius - (dx * dx + dz * dz).sqrt()).clamp(0.0, 1.0);

      let value = if falloff > 0.0 {
        let sample = generator.noise_2d(x as f32 * scale, z as f32 * scale);
        (sample - config.dampening).max(0.0) * falloff
      } else {
        0.0
      };

      if value > 0.0 {
        filled += 1;
      }
      field.set(x as i32, y, z as i32, value);
    }
  }

  #[cfg(feature = "tracing")]
  tracing::trace!(size, filled, "base layer written");
  filled
}
