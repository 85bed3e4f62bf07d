//! Box blur over the 6-connected neighbourhood.
//!
//! Every cell starts from its snapshot value and folds in each in-range axis
//! neighbour with a running mean:
//!
//! ```text
//!   val = snapshot[p], n = 1
//!   for each neighbour q inside the grid:
//!     n   += 1
//!     val += intensity · (snapshot[q] - val) / n
//! ```
//!
//! Only the snapshot is read, so the result does not depend on visit order.
//! Missing neighbours at the grid boundary are skipped rather than treated
//! as air.

use crate::config::SmoothingConfig;
use crate::field::VoxelField;

const NEIGHBOURS: [[i32; 3]; 6] = [
  [-1, 0, 0],
  [1, 0, 0],
  [0, -1, 0],
  [0, 1, 0],
  [0, 0, -1],
  [0, 0, 1],
];

/// Run `config.passes` blur passes in place.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "smoother::smooth"))]
pub fn smooth(field: &mut VoxelField, config: &SmoothingConfig) {
  for _ in 0..config.passes {
    smooth_pass(field, config.intensity);
  }
}

fn smooth_pass(field: &mut VoxelField, intensity: f32) {
  let size = field.size() as i32;
  let snapshot = field.clone();
  let out = field.as_mut_slice();

  let mut idx = 0;
  for z in 0..size {
    for y in 0..size {
      for x in 0..size {
        let mut val = snapshot.as_slice()[idx];
        let mut n = 1.0;
        for [dx, dy, dz] in NEIGHBOURS {
          if let Some(q) = snapshot.index(x + dx, y + dy, z + dz) {
            n += 1.0;
            val += intensity * (snapshot.as_slice()[q] - val) / n;
          }
        }
        out[idx] = val;
        idx += 1;
      }
    }
  }
}

#[cfg(test)]
#[path = "smoother_test.rs"]
mod smoother_test;
