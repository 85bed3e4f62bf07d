//! Ground shadow projected from one horizontal slice of the field.
//!
//! ```text
//!   field layer y = config.layer           shadow texture (top-left origin)
//!
//!   z ▲  ┌───────────┐                      row 0 ┌───────────┐  z = size-1
//!     │  │  density  │        flip Z              │   alpha   │
//!     │  │           │      ─────────►            │           │
//!     │  └───────────┘                    row N-1 └───────────┘  z = 0
//!     └────────────► x
//! ```
//!
//! Density maps to a two-step alpha (`0`, low, high), then each lit texel
//! bleeds half its alpha into its 4 diagonal neighbours, capped at
//! `alpha_cap`. RGB stays zero. Consumers alpha-test at
//! [`crate::constants::MIN_BLEND_ALPHA`] so faint fringes never cut into an
//! overlapping shadow.

use crate::config::ShadowConfig;
use crate::field::VoxelField;
use crate::types::ShadowTexture;

const DIAGONALS: [[i32; 2]; 4] = [[-1, -1], [1, -1], [-1, 1], [1, 1]];

/// Slice `field` at `config.layer` into a `size²` density map.
///
/// Entry `x + (size - 1 - z) * size` holds `field[x, layer, z]`.
pub fn slice(field: &VoxelField, layer: usize) -> Vec<f32> {
  let size = field.size();
  let mut map = vec![0.0; size * size];
  for z in 0..size {
    let row = size - 1 - z;
    for x in 0..size {
      map[x + row * size] = field.get(x as i32, layer as i32, z as i32);
    }
  }
  map
}

/// Alpha for one density sample.
#[inline]
pub fn density_alpha(density: f32, config: &ShadowConfig) -> u8 {
  let alpha = if density <= 0.0 {
    0
  } else if density < config.high_density {
    config.low_alpha
  } else {
    config.high_alpha
  };
  alpha.min(config.alpha_cap)
}

/// Project the shadow texture for a finished field.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "shadow::project"))]
pub fn project(field: &VoxelField, config: &ShadowConfig) -> ShadowTexture {
  let size = field.size();
  let map = slice(field, config.layer);

  let mut texture = ShadowTexture::new(size);
  for (px, &density) in texture.data.chunks_exact_mut(4).zip(&map) {
    px[3] = density_alpha(density, config);
  }

  if config.blur {
    blur(&mut texture, config.alpha_cap);
  }

  texture
}

/// Diagonal bleed over a snapshot of the alpha channel.
fn blur(texture: &mut ShadowTexture, cap: u8) {
  let size = texture.size as i32;
  let snapshot: Vec<u8> = texture.alphas().collect();

  for row in 0..size {
    for x in 0..size {
      let alpha = snapshot[(x + row * size) as usize];
      if alpha == 0 {
        continue;
      }
      let half = alpha / 2;
      for [dx, dr] in DIAGONALS {
        let (nx, nr) = (x + dx, row + dr);
        if nx < 0 || nr < 0 || nx >= size || nr >= size {
          continue;
        }
        let a = &mut texture.data[((nx + nr * size) as usize) * 4 + 3];
        *a = a.saturating_add(half).min(cap);
      }
    }
  }
}

#[cfg(test)]
#[path = "shadow_test.rs"]
mod shadow_test;
