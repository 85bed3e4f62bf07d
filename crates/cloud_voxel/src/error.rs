//! Error types for cloud generation requests.

use thiserror::Error;

/// Errors a caller can observe from the cloud pipeline.
///
/// Numeric evaluation never fails: degenerate interpolation and empty fields
/// are valid results, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
  /// Grid side length is zero or too large to allocate.
  #[error("invalid resolution {resolution}: expected 1..={max}")]
  InvalidResolution { resolution: u32, max: u32 },

  /// Color string is not of the form `#rrggbb`.
  #[error("invalid color {0:?}: expected #rrggbb")]
  InvalidColor(String),

  /// Packed message could not be decoded.
  #[error("malformed packed message: {0}")]
  Wire(#[from] WireError),
}

/// Errors while unpacking a packed response message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
  #[error("message too short: need {needed} bytes, have {available}")]
  Truncated { needed: usize, available: usize },

  #[error("bad magic {0:#010x}")]
  BadMagic(u32),

  #[error("unsupported version {0}")]
  UnsupportedVersion(u16),

  /// Vertices are present but a required channel flag is cleared.
  #[error("{count} vertices without a {channel} channel")]
  MissingChannel { channel: &'static str, count: usize },

  /// Shadow byte length does not match `4 · resolution²`.
  #[error("shadow is {actual} bytes, expected {expected} for the resolution")]
  ShadowSizeMismatch { expected: usize, actual: usize },

  #[error("{extra} trailing bytes after message")]
  TrailingBytes { extra: usize },
}
