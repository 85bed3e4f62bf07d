use super::*;
use crate::config::{CloudConfig, ExtractConfig};
use crate::error::WireError;
use crate::pipeline::generate;
use crate::types::CloudRequest;

fn sample_response(colors: bool) -> CloudResponse {
  let config = CloudConfig::default().with_extract(ExtractConfig::default().with_colors(colors).with_uvs(colors));
  generate(&CloudRequest::new(24).with_seed("wire"), &config).unwrap()
}

#[test]
fn test_pack_unpack_preserves_response() {
  for colors in [false, true] {
    let response = sample_response(colors);
    let bytes = pack(&response);
    assert_eq!(unpack(&bytes).unwrap(), response);
  }
}

#[test]
fn test_message_length() {
  let response = sample_response(false);
  let n = response.mesh.count;
  let bytes = pack(&response);
  assert_eq!(bytes.len(), 32 + n * 6 * 4 + 4 + 24 * 24 * 4);
  assert_eq!(&bytes[..4], b"CLDV");
}

#[test]
fn test_truncated_message() {
  let bytes = pack(&sample_response(false));
  let err = unpack(&bytes[..bytes.len() - 1]).unwrap_err();
  assert!(matches!(err, WireError::Truncated { .. }));
  assert!(matches!(unpack(&[]), Err(WireError::Truncated { needed: 4, available: 0 })));
}

#[test]
fn test_bad_magic() {
  let mut bytes = pack(&sample_response(false));
  bytes[0] ^= 0xFF;
  assert!(matches!(unpack(&bytes), Err(WireError::BadMagic(_))));
}

#[test]
fn test_unsupported_version() {
  let mut bytes = pack(&sample_response(false));
  bytes[4] = 9;
  assert_eq!(unpack(&bytes).unwrap_err(), WireError::UnsupportedVersion(9));
}

#[test]
fn test_trailing_bytes() {
  let mut bytes = pack(&sample_response(false));
  bytes.extend_from_slice(&[1, 2, 3]);
  assert_eq!(unpack(&bytes).unwrap_err(), WireError::TrailingBytes { extra: 3 });
}

#[test]
fn test_wire_error_converts_to_cloud_error() {
  let err: crate::error::CloudError = WireError::BadMagic(0).into();
  assert!(matches!(err, crate::error::CloudError::Wire(WireError::BadMagic(0))));
}

#[test]
fn test_shadow_size_must_match_resolution() {
  let response = sample_response(false);
  let bytes = pack(&response);
  let shadow_at = bytes.len() - response.shadow.data.len() - 4;

  let mut short = bytes[..shadow_at].to_vec();
  short.extend_from_slice(&4u32.to_le_bytes());
  short.extend_from_slice(&[0, 0, 0, 40]);
  assert_eq!(
    unpack(&short).unwrap_err(),
    WireError::ShadowSizeMismatch {
      expected: 24 * 24 * 4,
      actual: 4
    }
  );
}

#[test]
fn test_vertices_require_positions_and_normals() {
  let response = sample_response(false);
  let n = response.mesh.count;
  assert!(n > 0);
  let bytes = pack(&response);

  // drop the position block and its flag
  let mut no_positions = bytes[..32].to_vec();
  no_positions[6] &= !(FLAG_POSITIONS as u8);
  no_positions.extend_from_slice(&bytes[32 + n * 12..]);
  assert_eq!(
    unpack(&no_positions).unwrap_err(),
    WireError::MissingChannel {
      channel: "position",
      count: n
    }
  );

  // drop the normal block and its flag
  let mut no_normals = bytes[..32 + n * 12].to_vec();
  no_normals[6] &= !(FLAG_NORMALS as u8);
  no_normals.extend_from_slice(&bytes[32 + n * 24..]);
  assert_eq!(
    unpack(&no_normals).unwrap_err(),
    WireError::MissingChannel {
      channel: "normal",
      count: n
    }
  );
}

#[test]
fn test_empty_mesh_without_channels_unpacks() {
  let mut response = sample_response(false);
  response.mesh = MeshBuffers::with_capacity(0, false, false);
  response.mesh.shrink_to_count();
  response.mesh.has_positions = false;
  response.mesh.has_normals = false;

  let decoded = unpack(&pack(&response)).unwrap();
  assert_eq!(decoded.mesh.count, 0);
  assert!(decoded.mesh.positions().is_empty());
  assert_eq!(decoded.shadow.alpha(23, 23), response.shadow.alpha(23, 23));
}
