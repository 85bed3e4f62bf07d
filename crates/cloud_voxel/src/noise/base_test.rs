use super::*;
use crate::config::NoiseConfig;
use crate::field::VoxelField;
use crate::generator::Generator;
use crate::types::Seed;

fn generator(phrase: &str) -> Generator {
  Generator::new(Seed::from_phrase(phrase), 1.0)
}

#[test]
fn test_only_base_plane_is_written() {
  let mut field = VoxelField::new(16);
  let config = NoiseConfig::default().with_padding(0.0);
  write_base_layer(&mut field, &generator("plane"), &config);

  for z in 0..16 {
    for y in 1..16 {
      for x in 0..16 {
        assert_eq!(field.get(x, y, z), 0.0);
      }
    }
  }
}

#[test]
fn test_base_layer_is_non_negative() {
  let mut field = VoxelField::new(32);
  write_base_layer(&mut field, &generator("non-negative"), &NoiseConfig::default());
  assert!(field.as_slice().iter().all(|&v| v >= 0.0));
}

#[test]
fn test_outside_disc_is_empty() {
  // overlap radius = 16 - 8 = 8, so corners are far outside
  let mut field = VoxelField::new(32);
  write_base_layer(&mut field, &generator("disc"), &NoiseConfig::default());
  assert_eq!(field.get(0, 0, 0), 0.0);
  assert_eq!(field.get(31, 0, 31), 0.0);
  assert_eq!(field.get(16, 0, 2), 0.0);
}

#[test]
fn test_default_padding_empties_small_grid() {
  // size 8 with padding 8 leaves a negative overlap radius
  let mut field = VoxelField::new(8);
  let filled = write_base_layer(&mut field, &generator("small"), &NoiseConfig::default());
  assert_eq!(filled, 0);
  assert_eq!(field.max_value(), 0.0);
}

#[test]
fn test_center_matches_raw_noise_sample() {
  let generator = generator("test");
  let config = NoiseConfig::default().with_padding(0.0);
  let mut field = VoxelField::new(8);
  write_base_layer(&mut field, &generator, &config);

  // scale = 4 / 8, centre (4, 4) samples noise at (2, 2) with full falloff
  let expected = (generator.noise_2d(2.0, 2.0) - config.dampening).max(0.0);
  assert_eq!(field.get(4, 0, 4), expected);
}

#[test]
fn test_dampening_suppresses_base() {
  let mut field = VoxelField::new(16);
  let config = NoiseConfig::default().with_padding(0.0).with_dampening(2.0);
  let filled = write_base_layer(&mut field, &generator("damp"), &config);
  assert_eq!(filled, 0);
}

#[test]
fn test_base_elevation_moves_layer() {
  let mut field = VoxelField::new(16);
  let config = NoiseConfig::default().with_padding(0.0).with_base_elevation(3);
  let filled = write_base_layer(&mut field, &generator("raised"), &config);

  let on_layer = (0..16)
    .flat_map(|x| (0..16).map(move |z| (x, z)))
    .filter(|&(x, z)| field.get(x, 3, z) > 0.0)
    .count();
  assert_eq!(on_layer, filled);
  assert!((0..16).all(|x| field.get(x, 0, 8) == 0.0));
}

#[test]
fn test_same_seed_same_layer() {
  let config = NoiseConfig::default().with_padding(2.0);
  let mut a = VoxelField::new(24);
  let mut b = VoxelField::new(24);
  write_base_layer(&mut a, &generator("repeat"), &config);
  write_base_layer(&mut b, &generator("repeat"), &config);
  assert_eq!(a, b);
}
