//! Flat little-endian packing of a [`CloudResponse`].
//!
//! Lets a response cross a process or worker boundary as one byte buffer,
//! with every float buffer trimmed to `count`.
//!
//! ```text
//! offset  size          field
//! ──────  ────────────  ─────────────────────────────────────
//!      0  4             magic "CLDV"
//!      4  2             version
//!      6  2             presence flags (1 pos, 2 normal, 4 color, 8 uv)
//!      8  8             request id
//!     16  8             seed
//!     24  4             resolution
//!     28  4             vertex count n
//!     32  4·3n          positions          (if flag 1)
//!      …  4·3n          normals            (if flag 2)
//!      …  4·3n          colors             (if flag 4)
//!      …  4·2n          uvs                (if flag 8)
//!      …  4             shadow byte length (4·resolution²)
//!      …  len           shadow RGBA bytes
//! ```

use crate::error::WireError;
use crate::types::{CloudResponse, MeshBuffers, MinMaxAABB, RequestId, Seed, ShadowTexture};

pub const MAGIC: u32 = u32::from_le_bytes(*b"CLDV");
pub const VERSION: u16 = 1;

const FLAG_POSITIONS: u16 = 1;
const FLAG_NORMALS: u16 = 1 << 1;
const FLAG_COLORS: u16 = 1 << 2;
const FLAG_UVS: u16 = 1 << 3;

const HEADER_LEN: usize = 32;

/// Serialize `response` into one message.
pub fn pack(response: &CloudResponse) -> Vec<u8> {
  let mesh = &response.mesh;
  let n = mesh.count;

  let mut flags = 0;
  let mut floats = 0;
  if mesh.has_positions {
    flags |= FLAG_POSITIONS;
    floats += 3 * n;
  }
  if mesh.has_normals {
    flags |= FLAG_NORMALS;
    floats += 3 * n;
  }
  if mesh.has_colors {
    flags |= FLAG_COLORS;
    floats += 3 * n;
  }
  if mesh.has_uvs {
    flags |= FLAG_UVS;
    floats += 2 * n;
  }

  let mut out = Vec::with_capacity(HEADER_LEN + floats * 4 + 4 + response.shadow.data.len());
  out.extend_from_slice(&MAGIC.to_le_bytes());
  out.extend_from_slice(&VERSION.to_le_bytes());
  out.extend_from_slice(&flags.to_le_bytes());
  out.extend_from_slice(&response.id.raw().to_le_bytes());
  out.extend_from_slice(&response.seed.raw().to_le_bytes());
  out.extend_from_slice(&response.resolution.to_le_bytes());
  out.extend_from_slice(&(n as u32).to_le_bytes());

  if mesh.has_positions {
    write_floats(&mut out, mesh.positions());
  }
  if mesh.has_normals {
    write_floats(&mut out, mesh.normals());
  }
  if let Some(colors) = mesh.colors() {
    write_floats(&mut out, colors);
  }
  if let Some(uvs) = mesh.uvs() {
    write_floats(&mut out, uvs);
  }

  out.extend_from_slice(&(response.shadow.data.len() as u32).to_le_bytes());
  out.extend_from_slice(&response.shadow.data);
  out
}

/// Parse a message produced by [`pack`].
///
/// Rejects messages whose contents would break [`MeshBuffers`] or
/// [`ShadowTexture`] accessors: vertices without positions or normals, and
/// shadows that are not `4 · resolution²` bytes.
pub fn unpack(bytes: &[u8]) -> Result<CloudResponse, WireError> {
  let mut reader = Reader { bytes, offset: 0 };

  let magic = reader.u32()?;
  if magic != MAGIC {
    return Err(WireError::BadMagic(magic));
  }
  let version = reader.u16()?;
  if version != VERSION {
    return Err(WireError::UnsupportedVersion(version));
  }
  let flags = reader.u16()?;
  let id = RequestId::from_raw(reader.u64()?);
  let seed = Seed::new(reader.u64()?);
  let resolution = reader.u32()?;
  let count = reader.u32()? as usize;

  if count > 0 {
    for (flag, channel) in [(FLAG_POSITIONS, "position"), (FLAG_NORMALS, "normal")] {
      if flags & flag == 0 {
        return Err(WireError::MissingChannel { channel, count });
      }
    }
  }

  let read_channel = |reader: &mut Reader, flag: u16, width: usize| -> Result<Vec<f32>, WireError> {
    if flags & flag == 0 {
      return Ok(Vec::new());
    }
    reader.floats(count * width)
  };
  let position = read_channel(&mut reader, FLAG_POSITIONS, 3)?;
  let normal = read_channel(&mut reader, FLAG_NORMALS, 3)?;
  let color = read_channel(&mut reader, FLAG_COLORS, 3)?;
  let uv = read_channel(&mut reader, FLAG_UVS, 2)?;

  let shadow_len = reader.u32()? as usize;
  let side = resolution as usize;
  let expected = side.saturating_mul(side).saturating_mul(4);
  if shadow_len != expected {
    return Err(WireError::ShadowSizeMismatch {
      expected,
      actual: shadow_len,
    });
  }
  let shadow = reader.take(shadow_len)?.to_vec();

  if reader.remaining() > 0 {
    return Err(WireError::TrailingBytes {
      extra: reader.remaining(),
    });
  }

  let mut bounds = MinMaxAABB::empty();
  for p in position.chunks_exact(3) {
    bounds.encapsulate([p[0], p[1], p[2]]);
  }

  Ok(CloudResponse {
    id,
    seed,
    resolution,
    mesh: MeshBuffers {
      position,
      normal,
      color,
      uv,
      has_positions: flags & FLAG_POSITIONS != 0,
      has_normals: flags & FLAG_NORMALS != 0,
      has_colors: flags & FLAG_COLORS != 0,
      has_uvs: flags & FLAG_UVS != 0,
      count,
      bounds,
    },
    shadow: ShadowTexture {
      size: resolution as usize,
      data: shadow,
    },
  })
}

fn write_floats(out: &mut Vec<u8>, values: &[f32]) {
  for v in values {
    out.extend_from_slice(&v.to_le_bytes());
  }
}

struct Reader<'a> {
  bytes: &'a [u8],
  offset: usize,
}

impl<'a> Reader<'a> {
  fn remaining(&self) -> usize {
    self.bytes.len() - self.offset
  }

  fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
    if self.remaining() < len {
      return Err(WireError::Truncated {
        needed: self.offset.saturating_add(len),
        available: self.bytes.len(),
      });
    }
    let bytes = self.bytes;
    let slice = &bytes[self.offset..self.offset + len];
    self.offset += len;
    Ok(slice)
  }

  fn array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
    let mut out = [0; N];
    out.copy_from_slice(self.take(N)?);
    Ok(out)
  }

  fn u16(&mut self) -> Result<u16, WireError> {
    Ok(u16::from_le_bytes(self.array()?))
  }

  fn u32(&mut self) -> Result<u32, WireError> {
    Ok(u32::from_le_bytes(self.array()?))
  }

  fn u64(&mut self) -> Result<u64, WireError> {
    Ok(u64::from_le_bytes(self.array()?))
  }

  fn floats(&mut self, n: usize) -> Result<Vec<f32>, WireError> {
    let len = n.checked_mul(4).unwrap_or(usize::MAX);
    let raw = self.take(len)?;
    Ok(
      raw
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect(),
    )
  }
}

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;
