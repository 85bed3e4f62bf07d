//! End-to-end properties of generated clouds.

use cloud_voxel::{
  generate, CloudConfig, CloudError, CloudRequest, ExtractConfig, NoiseConfig, Seed, ShadowConfig, ISO_LEVEL,
  MAX_RESOLUTION,
};
use cloud_voxel::constants::ALPHA_CAP;
use cloud_voxel::pipeline::build_field;

#[test]
fn default_cloud_has_mesh_and_shadow() {
  let response = generate(&CloudRequest::new(64).with_seed("cumulus"), &CloudConfig::default()).unwrap();

  let mesh = &response.mesh;
  assert!(mesh.count > 0);
  assert_eq!(mesh.count % 3, 0);
  assert_eq!(mesh.positions().len(), mesh.count * 3);
  assert_eq!(mesh.normals().len(), mesh.count * 3);
  assert!(mesh.bounds.is_valid());

  assert_eq!(response.shadow.data.len(), 64 * 64 * 4);
  assert!(response.shadow.alphas().any(|a| a > 0));
  assert!(response.shadow.alphas().all(|a| a <= ALPHA_CAP));
}

#[test]
fn cloud_sits_on_its_base() {
  let config = CloudConfig::default();
  let field = build_field(48, Seed::from_phrase("base"), 2, &config);
  let response = generate(&CloudRequest::new(48).with_seed("base"), &config).unwrap();

  // mesh space maps y = 0 to -1; a dense base layer closes against the apron below it
  let base_is_dense = (0..48).any(|x| (0..48).any(|z| field.get(x, 0, z) >= ISO_LEVEL));
  assert!(base_is_dense);
  assert!(response.mesh.bounds.min[1] < -0.9);
}

#[test]
fn zero_passes_keeps_surface_near_the_base() {
  let config = CloudConfig::default().with_noise(NoiseConfig::default().with_padding(0.0));
  let response = generate(
    &CloudRequest::new(16).with_seed("flat").with_inflation_passes(0),
    &config,
  )
  .unwrap();

  // one smoothing pass spreads the base to y = 1 only
  let top = (2.0 - 8.0) / 8.0;
  assert!(response.mesh.positions().chunks_exact(3).all(|p| p[1] <= top + 1e-5));
}

#[test]
fn resolution_limits() {
  let config = CloudConfig::default();
  for resolution in [0, MAX_RESOLUTION + 1] {
    let err = generate(&CloudRequest::new(resolution), &config).unwrap_err();
    assert_eq!(
      err,
      CloudError::InvalidResolution {
        resolution,
        max: MAX_RESOLUTION
      }
    );
  }
}

#[test]
fn optional_channels_follow_config() {
  let config = CloudConfig::default().with_extract(ExtractConfig::default().with_colors(true).with_uvs(true));
  let response = generate(&CloudRequest::new(32).with_seed("channels"), &config).unwrap();
  let mesh = &response.mesh;

  assert!(mesh.has_colors && mesh.has_uvs);
  assert_eq!(mesh.colors().map(<[f32]>::len), Some(mesh.count * 3));
  assert_eq!(mesh.uvs().map(<[f32]>::len), Some(mesh.count * 2));
}

#[test]
fn unblurred_shadow_uses_two_levels() {
  let config = CloudConfig::default().with_shadow(ShadowConfig::default().with_blur(false));
  let response = generate(&CloudRequest::new(32).with_seed("levels"), &config).unwrap();
  assert!(response
    .shadow
    .alphas()
    .all(|a| a == 0 || a == config.shadow.low_alpha || a == config.shadow.high_alpha));
}
