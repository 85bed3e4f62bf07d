//! Cubic scalar density field.
//!
//! Stores `size³` f32 samples in one contiguous buffer, X fastest
//! (`x + y * size + z * size²`). Coordinates are signed so that callers can
//! address the one-cell apron around the grid that marching cubes walks.
//!
//! Out-of-range policy:
//! - writes are silently dropped
//! - reads return `0.0` (empty air), so the grid is surrounded by air

use crate::constants::coord_to_index;

/// Cubic 3D grid of density samples.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelField {
  size: usize,
  data: Vec<f32>,
}

impl VoxelField {
  /// Create an all-zero field with `size` samples per axis.
  pub fn new(size: usize) -> Self {
    Self {
      size,
      data: vec![0.0; size * size * size],
    }
  }

  /// Samples per axis.
  #[inline]
  pub fn size(&self) -> usize {
    self.size
  }

  /// Linear index of an in-range coordinate.
  #[inline(always)]
  pub fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
    let size = self.size as i32;
    if x < 0 || y < 0 || z < 0 || x >= size || y >= size || z >= size {
      return None;
    }
    Some(coord_to_index(self.size, x as usize, y as usize, z as usize))
  }

  /// Read a sample; anything outside the grid reads as `0.0`.
  #[inline(always)]
  pub fn get(&self, x: i32, y: i32, z: i32) -> f32 {
    match self.index(x, y, z) {
      Some(idx) => self.data[idx],
      None => 0.0,
    }
  }

  /// Write a sample; writes outside the grid are ignored.
  #[inline(always)]
  pub fn set(&mut self, x: i32, y: i32, z: i32, value: f32) {
    if let Some(idx) = self.index(x, y, z) {
      self.data[idx] = value;
    }
  }

  /// Raw samples in storage order.
  pub fn as_slice(&self) -> &[f32] {
    &self.data
  }

  /// Mutable raw samples in storage order.
  pub fn as_mut_slice(&mut self) -> &mut [f32] {
    &mut self.data
  }

  /// Largest sample, or `0.0` for an empty grid.
  pub fn max_value(&self) -> f32 {
    self.data.iter().copied().fold(0.0, f32::max)
  }

  /// Number of samples strictly above `threshold`.
  pub fn count_above(&self, threshold: f32) -> usize {
    self.data.iter().filter(|&&v| v > threshold).count()
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
