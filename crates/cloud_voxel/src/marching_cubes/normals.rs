//! Central-difference normals.
//!
//! The normal at a sample points from dense toward empty space:
//!
//! ```text
//!   n = (f[x-1] - f[x+1], f[y-1] - f[y+1], f[z-1] - f[z+1])
//! ```
//!
//! Gradients of in-grid samples are computed once per extraction; apron
//! corners (one step outside the grid) are evaluated on demand.

use glam::Vec3;

use crate::field::VoxelField;

/// Unnormalized gradient at a sample. Neighbours outside the grid read as air.
#[inline(always)]
pub fn gradient(field: &VoxelField, x: i32, y: i32, z: i32) -> Vec3 {
  Vec3::new(
    field.get(x - 1, y, z) - field.get(x + 1, y, z),
    field.get(x, y - 1, z) - field.get(x, y + 1, z),
    field.get(x, y, z - 1) - field.get(x, y, z + 1),
  )
}

/// Gradients for every in-grid sample, filled before the cell walk.
pub struct NormalCache {
  gradients: Vec<Vec3>,
}

impl NormalCache {
  pub fn new(field: &VoxelField) -> Self {
    let size = field.size() as i32;
    let mut gradients = Vec::with_capacity(field.as_slice().len());
    for z in 0..size {
      for y in 0..size {
        for x in 0..size {
          gradients.push(gradient(field, x, y, z));
        }
      }
    }
    Self { gradients }
  }

  /// Gradient at `(x, y, z)`, cached when in range.
  #[inline(always)]
  pub fn get(&self, field: &VoxelField, x: i32, y: i32, z: i32) -> Vec3 {
    match field.index(x, y, z) {
      Some(idx) => self.gradients[idx],
      None => gradient(field, x, y, z),
    }
  }
}

/// Normalize, falling back to +Y for a vanishing gradient.
#[inline(always)]
pub fn finalize(n: Vec3) -> Vec3 {
  n.normalize_or(Vec3::Y)
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
