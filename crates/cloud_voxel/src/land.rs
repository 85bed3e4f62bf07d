//! Two-tone ground texture from thresholded noise.
//!
//! ```text
//!   value = noise(x · s, y · s) - dampening        s = noise_size / resolution
//!   texel = value > tipping_point ? color2 : color1
//! ```
//!
//! Output is tightly packed RGB8, row-major, `resolution²` texels. The
//! texture tiles, so consumers usually wrap it.

use crate::constants::MAX_RESOLUTION;
use crate::error::CloudError;
use crate::generator::Generator;
use crate::types::Seed;

/// Ground texture parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LandConfig {
  pub resolution: u32,
  pub noise_size: f32,
  pub dampening: f32,
  pub tipping_point: f32,
  /// Base color, `#rrggbb`.
  pub color1: String,
  /// Patch color, `#rrggbb`.
  pub color2: String,
}

impl Default for LandConfig {
  fn default() -> Self {
    Self {
      resolution: 128,
      noise_size: 32.0,
      dampening: 0.3,
      tipping_point: 0.01,
      color1: "#6a994e".to_string(),
      color2: "#a7c957".to_string(),
    }
  }
}

impl LandConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_resolution(mut self, resolution: u32) -> Self {
    self.resolution = resolution;
    self
  }

  pub fn with_noise_size(mut self, noise_size: f32) -> Self {
    self.noise_size = noise_size;
    self
  }

  pub fn with_colors(mut self, color1: impl Into<String>, color2: impl Into<String>) -> Self {
    self.color1 = color1.into();
    self.color2 = color2.into();
    self
  }
}

/// RGB8 ground texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundTexture {
  pub resolution: usize,
  pub data: Vec<u8>,
}

impl GroundTexture {
  /// Color of the texel at `(x, y)`.
  pub fn texel(&self, x: usize, y: usize) -> [u8; 3] {
    let i = (x + y * self.resolution) * 3;
    [self.data[i], self.data[i + 1], self.data[i + 2]]
  }
}

/// Parse `#rrggbb` into RGB bytes.
pub fn parse_color(color: &str) -> Result<[u8; 3], CloudError> {
  let invalid = || CloudError::InvalidColor(color.to_string());

  let hex = color.strip_prefix('#').ok_or_else(invalid)?;
  if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(invalid());
  }

  let mut rgb = [0u8; 3];
  for (i, channel) in rgb.iter_mut().enumerate() {
    *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
  }
  Ok(rgb)
}

/// Generate the ground texture for `seed`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "land::generate"))]
pub fn generate(seed: Seed, config: &LandConfig) -> Result<GroundTexture, CloudError> {
  if config.resolution == 0 || config.resolution > MAX_RESOLUTION {
    return Err(CloudError::InvalidResolution {
      resolution: config.resolution,
      max: MAX_RESOLUTION,
    });
  }
  let color1 = parse_color(&config.color1)?;
  let color2 = parse_color(&config.color2)?;

  let resolution = config.resolution as usize;
  let scale = config.noise_size / resolution as f32;
  let generator = Generator::new(seed, 1.0);

  let mut data = vec![0u8; resolution * resolution * 3];
  for y in 0..resolution {
    for x in 0..resolution {
      let value = generator.noise_2d(x as f32 * scale, y as f32 * scale) - config.dampening;
      let color = if value > config.tipping_point { color2 } else { color1 };
      let i = (x + y * resolution) * 3;
      data[i..i + 3].copy_from_slice(&color);
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(resolution, "ground texture generated");
  Ok(GroundTexture { resolution, data })
}

#[cfg(test)]
#[path = "land_test.rs"]
mod land_test;
