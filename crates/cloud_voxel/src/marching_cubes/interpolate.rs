//! Edge crossing interpolation.

use crate::constants::INTERPOLATION_EPSILON;

/// Parameter along an edge where the field crosses `iso_level`.
///
/// Returns `0.0` or `1.0` (an endpoint) when the crossing is degenerate:
/// - `iso_level` within epsilon of `v1` → `v1`
/// - `iso_level` within epsilon of `v2` → `v2`
/// - `v1` within epsilon of `v2` → `v1`
#[inline(always)]
pub fn edge_mu(iso_level: f32, v1: f32, v2: f32) -> f32 {
  if (iso_level - v1).abs() < INTERPOLATION_EPSILON {
    return 0.0;
  }
  if (iso_level - v2).abs() < INTERPOLATION_EPSILON {
    return 1.0;
  }
  if (v1 - v2).abs() < INTERPOLATION_EPSILON {
    return 0.0;
  }
  (iso_level - v1) / (v2 - v1)
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
