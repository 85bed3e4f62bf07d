use proptest::prelude::*;

use super::*;
use crate::constants::{ALPHA_CAP, HIGH_ALPHA, LOW_ALPHA};

fn no_blur() -> ShadowConfig {
  ShadowConfig::default().with_blur(false)
}

#[test]
fn test_empty_field_has_no_shadow() {
  let texture = project(&VoxelField::new(8), &ShadowConfig::default());
  assert_eq!(texture.data.len(), 8 * 8 * 4);
  assert!(texture.data.iter().all(|&b| b == 0));
}

#[test]
fn test_alpha_steps() {
  let config = ShadowConfig::default();
  assert_eq!(density_alpha(0.0, &config), 0);
  assert_eq!(density_alpha(-1.0, &config), 0);
  assert_eq!(density_alpha(0.2, &config), LOW_ALPHA);
  assert_eq!(density_alpha(0.5, &config), HIGH_ALPHA);
  assert_eq!(density_alpha(3.0, &config), HIGH_ALPHA);
}

#[test]
fn test_z_is_flipped() {
  let mut field = VoxelField::new(4);
  field.set(1, 0, 0, 1.0);
  field.set(2, 0, 3, 0.1);
  let texture = project(&field, &no_blur());

  // z = 0 lands on the bottom row, z = size-1 on row 0
  assert_eq!(texture.alpha(1, 3), HIGH_ALPHA);
  assert_eq!(texture.alpha(2, 0), LOW_ALPHA);
  assert_eq!(texture.alphas().filter(|&a| a > 0).count(), 2);
}

#[test]
fn test_only_configured_layer_is_sliced() {
  let mut field = VoxelField::new(4);
  field.set(1, 2, 1, 1.0);
  assert!(project(&field, &no_blur()).alphas().all(|a| a == 0));

  let texture = project(&field, &no_blur().with_layer(2));
  assert_eq!(texture.alpha(1, 2), HIGH_ALPHA);
}

#[test]
fn test_rgb_stays_zero() {
  let mut field = VoxelField::new(6);
  for x in 0..6 {
    for z in 0..6 {
      field.set(x, 0, z, 1.0);
    }
  }
  let texture = project(&field, &ShadowConfig::default());
  for px in texture.data.chunks_exact(4) {
    assert_eq!(&px[..3], &[0, 0, 0]);
  }
}

#[test]
fn test_blur_feeds_diagonals() {
  let mut field = VoxelField::new(5);
  field.set(2, 0, 2, 1.0);
  let texture = project(&field, &ShadowConfig::default());

  assert_eq!(texture.alpha(2, 2), HIGH_ALPHA);
  for (x, row) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
    assert_eq!(texture.alpha(x, row), HIGH_ALPHA / 2);
  }
  // axis neighbours are not touched
  assert_eq!(texture.alpha(2, 1), 0);
  assert_eq!(texture.alpha(1, 2), 0);
}

#[test]
fn test_blur_saturates_at_cap() {
  let mut field = VoxelField::new(8);
  for x in 0..8 {
    for z in 0..8 {
      field.set(x, 0, z, 1.0);
    }
  }
  let texture = project(&field, &ShadowConfig::default());
  assert_eq!(texture.alpha(4, 4), ALPHA_CAP);
  assert!(texture.alphas().all(|a| a <= ALPHA_CAP));
}

#[test]
fn test_slice_layout() {
  let mut field = VoxelField::new(3);
  field.set(0, 0, 0, 0.25);
  let map = slice(&field, 0);
  assert_eq!(map.len(), 9);
  assert_eq!(map[2 * 3], 0.25);
}

proptest! {
  #[test]
  fn prop_alpha_never_exceeds_cap(values in prop::collection::vec(0.0f32..2.0, 36)) {
    let mut field = VoxelField::new(6);
    for (i, v) in values.iter().enumerate() {
      field.set((i % 6) as i32, 0, (i / 6) as i32, *v);
    }
    let texture = project(&field, &ShadowConfig::default());
    prop_assert!(texture.alphas().all(|a| a <= ALPHA_CAP));
  }
}
