//! Per-stage tuning, grouped in [`CloudConfig`].
//!
//! Every struct defaults to the values in [`crate::constants`] and exposes
//! `with_*` builders, so callers only spell out what they change.

use crate::constants::{
  ALPHA_CAP, BASE_ELEVATION, BASE_INFLATION_SIZE, HIGH_ALPHA, HIGH_DENSITY, INFLATION_CHANCE,
  ISO_LEVEL, LOW_ALPHA, NOISE_DAMPENING, NOISE_SIZE, PADDING,
};

// =============================================================================
// NoiseConfig
// =============================================================================

/// Base-layer noise parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseConfig {
  /// Noise extent sampled across the whole grid.
  pub noise_size: f32,
  /// Distance kept clear between the base disc and the grid edge.
  pub padding: f32,
  /// Subtracted from every noise sample before clamping at zero.
  pub dampening: f32,
  /// Layer the base is written to.
  pub base_elevation: usize,
  /// Frequency handed to the noise generator.
  pub frequency: f32,
}

impl Default for NoiseConfig {
  fn default() -> Self {
    Self {
      noise_size: NOISE_SIZE,
      padding: PADDING,
      dampening: NOISE_DAMPENING,
      base_elevation: BASE_ELEVATION,
      frequency: 1.0,
    }
  }
}

impl NoiseConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_noise_size(mut self, noise_size: f32) -> Self {
    self.noise_size = noise_size;
    self
  }

  pub fn with_padding(mut self, padding: f32) -> Self {
    self.padding = padding;
    self
  }

  pub fn with_dampening(mut self, dampening: f32) -> Self {
    self.dampening = dampening;
    self
  }

  pub fn with_base_elevation(mut self, base_elevation: usize) -> Self {
    self.base_elevation = base_elevation;
    self
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }
}

// =============================================================================
// InflationConfig
// =============================================================================

/// Stochastic growth parameters. Pass count travels with the request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InflationConfig {
  /// Radius scale of each stamp.
  pub base_inflation_size: f32,
  /// A cell is stamped when its draw exceeds this.
  pub inflation_chance: f32,
}

impl Default for InflationConfig {
  fn default() -> Self {
    Self {
      base_inflation_size: BASE_INFLATION_SIZE,
      inflation_chance: INFLATION_CHANCE,
    }
  }
}

impl InflationConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_base_inflation_size(mut self, size: f32) -> Self {
    self.base_inflation_size = size;
    self
  }

  pub fn with_inflation_chance(mut self, chance: f32) -> Self {
    self.inflation_chance = chance;
    self
  }
}

// =============================================================================
// SmoothingConfig
// =============================================================================

/// Box-blur parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingConfig {
  /// Blend weight toward each neighbour (1.0 = plain running mean).
  pub intensity: f32,
  /// Number of blur passes; 0 disables smoothing.
  pub passes: u32,
}

impl Default for SmoothingConfig {
  fn default() -> Self {
    Self {
      intensity: 1.0,
      passes: 1,
    }
  }
}

impl SmoothingConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_intensity(mut self, intensity: f32) -> Self {
    self.intensity = intensity;
    self
  }

  pub fn with_passes(mut self, passes: u32) -> Self {
    self.passes = passes;
    self
  }
}

// =============================================================================
// ExtractConfig
// =============================================================================

/// Isosurface extraction parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtractConfig {
  pub iso_level: f32,
  /// Emit per-vertex colors derived from position.
  pub with_colors: bool,
  /// Emit per-vertex planar uvs.
  pub with_uvs: bool,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      iso_level: ISO_LEVEL,
      with_colors: false,
      with_uvs: false,
    }
  }
}

impl ExtractConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_iso_level(mut self, iso_level: f32) -> Self {
    self.iso_level = iso_level;
    self
  }

  pub fn with_colors(mut self, enabled: bool) -> Self {
    self.with_colors = enabled;
    self
  }

  pub fn with_uvs(mut self, enabled: bool) -> Self {
    self.with_uvs = enabled;
    self
  }
}

// =============================================================================
// ShadowConfig
// =============================================================================

/// Ground-shadow projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowConfig {
  /// Horizontal layer sliced into the shadow map.
  pub layer: usize,
  pub high_density: f32,
  pub low_alpha: u8,
  pub high_alpha: u8,
  pub alpha_cap: u8,
  /// Run the diagonal alpha blur.
  pub blur: bool,
}

impl Default for ShadowConfig {
  fn default() -> Self {
    Self {
      layer: BASE_ELEVATION,
      high_density: HIGH_DENSITY,
      low_alpha: LOW_ALPHA,
      high_alpha: HIGH_ALPHA,
      alpha_cap: ALPHA_CAP,
      blur: true,
    }
  }
}

impl ShadowConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_layer(mut self, layer: usize) -> Self {
    self.layer = layer;
    self
  }

  pub fn with_high_density(mut self, high_density: f32) -> Self {
    self.high_density = high_density;
    self
  }

  pub fn with_alphas(mut self, low: u8, high: u8, cap: u8) -> Self {
    self.low_alpha = low;
    self.high_alpha = high;
    self.alpha_cap = cap;
    self
  }

  pub fn with_blur(mut self, blur: bool) -> Self {
    self.blur = blur;
    self
  }
}

// =============================================================================
// CloudConfig
// =============================================================================

/// Complete pipeline configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CloudConfig {
  pub noise: NoiseConfig,
  pub inflation: InflationConfig,
  pub smoothing: SmoothingConfig,
  pub extract: ExtractConfig,
  pub shadow: ShadowConfig,
}

impl CloudConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_noise(mut self, noise: NoiseConfig) -> Self {
    self.noise = noise;
    self
  }

  pub fn with_inflation(mut self, inflation: InflationConfig) -> Self {
    self.inflation = inflation;
    self
  }

  pub fn with_smoothing(mut self, smoothing: SmoothingConfig) -> Self {
    self.smoothing = smoothing;
    self
  }

  pub fn with_extract(mut self, extract: ExtractConfig) -> Self {
    self.extract = extract;
    self
  }

  pub fn with_shadow(mut self, shadow: ShadowConfig) -> Self {
    self.shadow = shadow;
    self
  }
}
