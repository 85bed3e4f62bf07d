//! Soft-edged sphere added to the field around an inflated cell.

use crate::field::VoxelField;

/// Cube of side `2 * radius` holding `clamp(radius - distance, 0, 1)`.
///
/// Distance is measured from local index `radius`. The far face
/// (local index `2 * radius`) lies outside the cube and is dropped, so the
/// stamp is slightly lopsided toward the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereStamp {
  radius: usize,
  values: VoxelField,
}

impl SphereStamp {
  pub fn new(radius: usize) -> Self {
    let mut values = VoxelField::new(radius * 2);
    if radius == 0 {
      return Self { radius, values };
    }

    let r = radius as i32;
    for x in -r..r {
      for y in -r..r {
        for z in -r..r {
          values.set(x + r, y + r, z + r, Self::falloff(radius, x as i64, y as i64, z as i64));
        }
      }
    }

    Self { radius, values }
  }

  /// Stamp value at offset `(dx, dy, dz)` from the centre of a stamp of
  /// `radius`. Usable for radii too large to build as a table.
  #[inline]
  pub fn falloff(radius: usize, dx: i64, dy: i64, dz: i64) -> f32 {
    let (x, y, z) = (dx as f32, dy as f32, dz as f32);
    let distance = (x * x + y * y + z * z).sqrt();
    (radius as f32 - distance).clamp(0.0, 1.0)
  }

  #[inline]
  pub fn radius(&self) -> usize {
    self.radius
  }

  /// Side length of the stamp cube.
  #[inline]
  pub fn diameter(&self) -> usize {
    self.radius * 2
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.radius == 0
  }

  /// Stamp value at local coordinates.
  #[inline(always)]
  pub fn get(&self, x: i32, y: i32, z: i32) -> f32 {
    self.values.get(x, y, z)
  }
}

#[cfg(test)]
#[path = "sphere_test.rs"]
mod sphere_test;
