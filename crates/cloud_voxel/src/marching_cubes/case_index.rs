//! Corner classification.

use crate::constants::CORNER_OFFSETS;
use crate::field::VoxelField;

/// Load the 8 corner samples of the cell whose lower corner is `(x, y, z)`.
///
/// Corners outside the grid read as `0.0`.
#[inline(always)]
pub fn load_corners(field: &VoxelField, x: i32, y: i32, z: i32) -> [f32; 8] {
  let mut values = [0.0; 8];
  for (value, [dx, dy, dz]) in values.iter_mut().zip(CORNER_OFFSETS) {
    *value = field.get(x + dx, y + dy, z + dz);
  }
  values
}

/// 8-bit case index: bit `i` is set when corner `i` lies below `iso_level`.
#[inline(always)]
pub fn compute(values: &[f32; 8], iso_level: f32) -> u8 {
  let mut case = 0u8;
  for (i, &v) in values.iter().enumerate() {
    if v < iso_level {
      case |= 1 << i;
    }
  }
  case
}

/// Homogeneous cells (all outside or all inside) emit nothing.
#[inline(always)]
pub fn is_homogeneous(case: u8) -> bool {
  case == 0 || case == 0xFF
}

#[cfg(test)]
#[path = "case_index_test.rs"]
mod case_index_test;
