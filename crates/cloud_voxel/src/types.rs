//! Request, response and buffer types shared across the pipeline.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::{DEFAULT_INFLATION_PASSES, MAX_RESOLUTION};
use crate::error::CloudError;

// =============================================================================
// Seed
// =============================================================================

/// Deterministic seed for noise and random draws.
///
/// The same seed with the same request parameters always yields the same
/// mesh and shadow buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Derive a seed from text using 64-bit FNV-1a.
  pub fn from_phrase(phrase: &str) -> Self {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let hash = phrase
      .bytes()
      .fold(OFFSET, |acc, b| (acc ^ b as u64).wrapping_mul(PRIME));
    Self(hash)
  }

  /// Fresh seed from the thread-local entropy source.
  ///
  /// Results generated from it are only reproducible if the caller keeps it.
  pub fn from_entropy() -> Self {
    Self(rand::random())
  }

  /// Get the raw seed value.
  pub fn raw(&self) -> u64 {
    self.0
  }

  /// Fold the seed into the 32-bit seed the noise generator takes.
  pub fn noise_seed(&self) -> i32 {
    (self.0 ^ (self.0 >> 32)) as u32 as i32
  }
}

impl From<u64> for Seed {
  fn from(value: u64) -> Self {
    Self(value)
  }
}

impl From<&str> for Seed {
  fn from(phrase: &str) -> Self {
    Self::from_phrase(phrase)
  }
}

// =============================================================================
// RequestId
// =============================================================================

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier matching a response to its request.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RequestId(u64);

impl RequestId {
  /// Generate a new process-unique id.
  pub fn next() -> Self {
    Self(REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  /// Wrap an id chosen by the caller (e.g. received over a wire).
  pub const fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  pub fn raw(&self) -> u64 {
    self.0
  }
}

impl Default for RequestId {
  fn default() -> Self {
    Self::next()
  }
}

// =============================================================================
// Request / Response
// =============================================================================

/// One cloud generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudRequest {
  pub id: RequestId,
  /// Grid side length (power of two recommended for LOD halving).
  pub resolution: u32,
  /// `None` draws a seed from entropy; the response reports the seed used.
  pub seed: Option<Seed>,
  pub inflation_passes: u32,
}

impl CloudRequest {
  pub fn new(resolution: u32) -> Self {
    Self {
      id: RequestId::next(),
      resolution,
      seed: None,
      inflation_passes: DEFAULT_INFLATION_PASSES,
    }
  }

  pub fn with_id(mut self, id: RequestId) -> Self {
    self.id = id;
    self
  }

  pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
    self.seed = Some(seed.into());
    self
  }

  pub fn with_inflation_passes(mut self, passes: u32) -> Self {
    self.inflation_passes = passes;
    self
  }

  /// Reject resolutions that cannot be allocated, before any allocation.
  pub fn validate(&self) -> Result<(), CloudError> {
    if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
      return Err(CloudError::InvalidResolution {
        resolution: self.resolution,
        max: MAX_RESOLUTION,
      });
    }
    Ok(())
  }
}

/// Mesh and shadow produced for one request.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudResponse {
  pub id: RequestId,
  /// Seed actually used, so entropy-seeded results can be reproduced.
  pub seed: Seed,
  pub resolution: u32,
  pub mesh: MeshBuffers,
  pub shadow: ShadowTexture,
}

// =============================================================================
// Bounds
// =============================================================================

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }

  /// Check whether a point lies inside, allowing `tolerance` slack.
  pub fn contains(&self, point: [f32; 3], tolerance: f32) -> bool {
    (0..3).all(|i| point[i] >= self.min[i] - tolerance && point[i] <= self.max[i] + tolerance)
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

// =============================================================================
// MeshBuffers
// =============================================================================

/// Non-indexed triangle soup in four parallel flat buffers.
///
/// Buffers are allocated ahead of `count` and grow by doubling; call
/// [`MeshBuffers::shrink_to_count`] once emission is done so every buffer
/// holds exactly `count` vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffers {
  pub position: Vec<f32>,
  pub normal: Vec<f32>,
  pub color: Vec<f32>,
  pub uv: Vec<f32>,
  pub has_positions: bool,
  pub has_normals: bool,
  pub has_colors: bool,
  pub has_uvs: bool,
  /// Number of emitted vertices (3 per triangle).
  pub count: usize,
  /// Bounding box of all emitted positions.
  pub bounds: MinMaxAABB,
}

impl MeshBuffers {
  /// Allocate room for `capacity` vertices.
  pub fn with_capacity(capacity: usize, has_colors: bool, has_uvs: bool) -> Self {
    let capacity = capacity.max(1);
    Self {
      position: vec![0.0; capacity * 3],
      normal: vec![0.0; capacity * 3],
      color: if has_colors { vec![0.0; capacity * 3] } else { Vec::new() },
      uv: if has_uvs { vec![0.0; capacity * 2] } else { Vec::new() },
      has_positions: true,
      has_normals: true,
      has_colors,
      has_uvs,
      count: 0,
      bounds: MinMaxAABB::empty(),
    }
  }

  /// Vertex slots currently allocated.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.position.len() / 3
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.count / 3
  }

  /// Append one vertex. `color` and `uv` are dropped when disabled.
  #[inline]
  pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], color: [f32; 3], uv: [f32; 2]) {
    if self.count == self.capacity() {
      self.grow();
    }

    let c3 = self.count * 3;
    self.position[c3..c3 + 3].copy_from_slice(&position);
    self.normal[c3..c3 + 3].copy_from_slice(&normal);
    if self.has_colors {
      self.color[c3..c3 + 3].copy_from_slice(&color);
    }
    if self.has_uvs {
      let c2 = self.count * 2;
      self.uv[c2..c2 + 2].copy_from_slice(&uv);
    }

    self.bounds.encapsulate(position);
    self.count += 1;
  }

  /// Double every enabled buffer.
  fn grow(&mut self) {
    let capacity = self.capacity() * 2;
    self.position.resize(capacity * 3, 0.0);
    self.normal.resize(capacity * 3, 0.0);
    if self.has_colors {
      self.color.resize(capacity * 3, 0.0);
    }
    if self.has_uvs {
      self.uv.resize(capacity * 2, 0.0);
    }
  }

  /// Trim every buffer to exactly `count` vertices.
  pub fn shrink_to_count(&mut self) {
    self.position.truncate(self.count * 3);
    self.normal.truncate(self.count * 3);
    self.color.truncate(if self.has_colors { self.count * 3 } else { 0 });
    self.uv.truncate(if self.has_uvs { self.count * 2 } else { 0 });
    self.position.shrink_to_fit();
    self.normal.shrink_to_fit();
    self.color.shrink_to_fit();
    self.uv.shrink_to_fit();
  }

  /// Emitted positions, `3 * count` floats.
  pub fn positions(&self) -> &[f32] {
    &self.position[..self.count * 3]
  }

  /// Emitted normals, `3 * count` floats.
  pub fn normals(&self) -> &[f32] {
    &self.normal[..self.count * 3]
  }

  /// Emitted colors, if enabled.
  pub fn colors(&self) -> Option<&[f32]> {
    self.has_colors.then(|| &self.color[..self.count * 3])
  }

  /// Emitted uvs, if enabled.
  pub fn uvs(&self) -> Option<&[f32]> {
    self.has_uvs.then(|| &self.uv[..self.count * 2])
  }

  /// Position of vertex `i`.
  pub fn vertex_position(&self, i: usize) -> [f32; 3] {
    [self.position[i * 3], self.position[i * 3 + 1], self.position[i * 3 + 2]]
  }
}

impl Default for MeshBuffers {
  fn default() -> Self {
    Self::with_capacity(1, false, false)
  }
}

// =============================================================================
// ShadowTexture
// =============================================================================

/// RGBA8 ground-shadow texture, row-major with a top-left origin.
///
/// Row 0 holds the far edge of the cloud (`z = size - 1`). RGB is always zero;
/// the consumer tints the shadow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowTexture {
  pub size: usize,
  pub data: Vec<u8>,
}

impl ShadowTexture {
  pub fn new(size: usize) -> Self {
    Self {
      size,
      data: vec![0; size * size * 4],
    }
  }

  /// Alpha of the texel at column `x`, row `row`.
  #[inline]
  pub fn alpha(&self, x: usize, row: usize) -> u8 {
    self.data[(x + row * self.size) * 4 + 3]
  }

  /// Iterate over all alpha values in storage order.
  pub fn alphas(&self) -> impl Iterator<Item = u8> + '_ {
    self.data.chunks_exact(4).map(|px| px[3])
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
