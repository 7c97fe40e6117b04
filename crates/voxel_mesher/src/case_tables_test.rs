use super::*;

#[test]
fn test_empty_and_full_cases_have_no_edges() {
  assert_eq!(EDGE_TABLE[0], 0);
  assert_eq!(EDGE_TABLE[255], 0);
}

#[test]
fn test_edge_table_is_complement_symmetric() {
  // Inverting which corners are inside crosses the same edges.
  for case in 0..256 {
    assert_eq!(EDGE_TABLE[case], EDGE_TABLE[255 - case], "case {case}");
  }
}

#[test]
fn test_tri_table_only_references_crossed_edges() {
  for case in 0..256 {
    let mask = EDGE_TABLE[case];
    for &edge in TRI_TABLE[case].iter().take_while(|&&e| e != -1) {
      assert!((0..12).contains(&edge), "case {case} edge {edge}");
      assert_ne!(mask & (1 << edge), 0, "case {case} uses uncrossed edge {edge}");
    }
  }
}

#[test]
fn test_tri_table_rows_are_triples() {
  for case in 0..256 {
    let len = TRI_TABLE[case].iter().take_while(|&&e| e != -1).count();
    assert_eq!(len % 3, 0, "case {case}");
    assert!(len <= 15, "case {case}");
  }
}

#[test]
fn test_edge_corners_match_edge_table_bit_semantics() {
  // Rebuild the edge mask for every case from the corner pairs.
  for case in 0..256usize {
    let mut mask = 0u16;
    for (edge, [a, b]) in CELL_EDGE_CORNERS.iter().enumerate() {
      let in_a = (case >> a) & 1;
      let in_b = (case >> b) & 1;
      if in_a != in_b {
        mask |= 1 << edge;
      }
    }
    assert_eq!(mask, EDGE_TABLE[case], "case {case}");
  }
}
