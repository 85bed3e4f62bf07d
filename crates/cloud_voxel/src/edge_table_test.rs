use super::*;

#[test]
fn test_edge_table_homogeneous() {
  // All corners same side = no crossings
  assert_eq!(EDGE_TABLE[0], 0, "All air should have no edges");
  assert_eq!(EDGE_TABLE[255], 0, "All inside should have no edges");
  assert_eq!(triangle_count(0), 0);
  assert_eq!(triangle_count(255), 0);
}

#[test]
fn test_edge_table_matches_corner_classification() {
  for case in 0..=255u8 {
    assert_eq!(
      EDGE_TABLE[case as usize],
      derive_edge_mask(case),
      "Edge mask mismatch for case {:#010b}",
      case
    );
  }
}

#[test]
fn test_edge_table_single_corner() {
  // Single corner below the iso level activates exactly 3 edges
  for corner in 0..8 {
    let mask = 1u8 << corner;
    assert_eq!(EDGE_TABLE[mask as usize].count_ones(), 3);
    assert_eq!(triangle_count(mask), 1);
  }
}

#[test]
fn test_edge_table_symmetry() {
  // Complementary cases cross the same edges
  for i in 0..128 {
    assert_eq!(EDGE_TABLE[i], EDGE_TABLE[255 - i]);
  }
}

#[test]
fn test_tri_table_rows_are_well_formed() {
  for (case, row) in TRI_TABLE.iter().enumerate() {
    let len = row.iter().position(|&e| e == TRI_END).unwrap_or(row.len());
    assert_eq!(len % 3, 0, "Case {} has a partial triangle", case);
    assert!(len <= 15, "Case {} exceeds 5 triangles", case);
    assert!(
      row[len..].iter().all(|&e| e == TRI_END),
      "Case {} has data after the sentinel",
      case
    );
  }
}

#[test]
fn test_tri_table_only_uses_crossed_edges() {
  for case in 0..256usize {
    let edges = EDGE_TABLE[case];
    for &edge in TRI_TABLE[case].iter().take_while(|&&e| e != TRI_END) {
      assert!(
        edges & (1 << edge) != 0,
        "Case {} references uncrossed edge {}",
        case,
        edge
      );
    }
  }
}

#[test]
fn test_nonempty_edge_mask_has_triangles() {
  for case in 0..=255u8 {
    let has_edges = EDGE_TABLE[case as usize] != 0;
    assert_eq!(has_edges, triangle_count(case) > 0, "Case {}", case);
  }
}
