//! One request, end to end.
//!
//! ```text
//!  CloudRequest ──validate──► Generator(seed)
//!                                  │
//!                                  ▼
//!               ┌──────────── VoxelField ────────────┐
//!               │ noise::write_base_layer            │
//!               │ inflator::inflate   (passes)       │
//!               │ smoother::smooth                   │
//!               └───────────────┬────────────────────┘
//!                       ┌───────┴────────┐
//!                       ▼                ▼
//!          marching_cubes::extract   shadow::project
//!                       └───────┬────────┘
//!                               ▼
//!                         CloudResponse
//! ```
//!
//! Everything here is sequential and owns its state, so requests can run on
//! any number of threads at once without affecting each other's output.

use crate::config::CloudConfig;
use crate::error::CloudError;
use crate::field::VoxelField;
use crate::generator::Generator;
use crate::types::{CloudRequest, CloudResponse, Seed};
use crate::{inflator, marching_cubes, noise, shadow, smoother};

/// Build the finished density field for `seed`.
///
/// `resolution` is not validated here; [`generate`] rejects bad values first.
pub fn build_field(resolution: usize, seed: Seed, inflation_passes: u32, config: &CloudConfig) -> VoxelField {
  let mut generator = Generator::new(seed, config.noise.frequency);
  let mut field = VoxelField::new(resolution);

  noise::write_base_layer(&mut field, &generator, &config.noise);
  inflator::inflate(&mut field, &mut generator, &config.inflation, inflation_passes);
  smoother::smooth(&mut field, &config.smoothing);

  #[cfg(feature = "tracing")]
  tracing::debug!(resolution, seed = seed.raw(), "field built");
  field
}

/// Generate mesh and shadow for one request.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::generate"))]
pub fn generate(request: &CloudRequest, config: &CloudConfig) -> Result<CloudResponse, CloudError> {
  request.validate()?;

  let seed = request.seed.unwrap_or_else(Seed::from_entropy);
  let resolution = request.resolution as usize;

  let field = build_field(resolution, seed, request.inflation_passes, config);
  let mesh = marching_cubes::extract(&field, &config.extract);
  let shadow = shadow::project(&field, &config.shadow);

  #[cfg(feature = "tracing")]
  tracing::debug!(id = request.id.raw(), resolution, vertices = mesh.count, "cloud generated");

  Ok(CloudResponse {
    id: request.id,
    seed,
    resolution: request.resolution,
    mesh,
    shadow,
  })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
