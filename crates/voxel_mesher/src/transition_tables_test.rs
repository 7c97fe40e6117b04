use super::*;

#[test]
fn test_trivial_cases_are_class_zero() {
  assert_eq!(TRANSITION_CELL_CLASS[0], 0);
  assert!(TRANSITION_VERTEX_DATA[0].is_empty());
}

#[test]
fn test_class_indices_are_in_bounds() {
  for case in 0..512 {
    let class = (TRANSITION_CELL_CLASS[case] & 0x7F) as usize;
    assert!(class < TRANSITION_CELL_DATA.len(), "case {case} class {class}");
  }
}

#[test]
fn test_vertex_data_length_matches_class_vertex_count() {
  for case in 0..512 {
    let class = (TRANSITION_CELL_CLASS[case] & 0x7F) as usize;
    assert_eq!(
      TRANSITION_VERTEX_DATA[case].len(),
      TRANSITION_CELL_DATA[class].vertex_count(),
      "case {case}"
    );
  }
}

#[test]
fn test_triangulation_lists_are_triples_within_vertex_count() {
  for (class, data) in TRANSITION_CELL_DATA.iter().enumerate() {
    let mut triangles = 0;
    for tri in data.triangles() {
      for slot in tri {
        assert!(slot < data.vertex_count(), "class {class} slot {slot}");
      }
      triangles += 1;
    }
    assert_eq!(triangles, data.triangle_count(), "class {class}");
  }
}

#[test]
fn test_vertex_codes_reference_valid_samples() {
  for case in 0..512 {
    for &raw in TRANSITION_VERTEX_DATA[case] {
      let code = TransitionVertexCode(raw);
      assert!(code.first_sample() <= 12, "case {case}");
      assert!(code.second_sample() <= 12, "case {case}");
    }
  }
}

#[test]
fn test_corner_codes_cover_all_thirteen_samples() {
  assert_eq!(TRANSITION_CORNER_DATA.len(), 13);
  for code in TRANSITION_CORNER_DATA {
    // Direction nibble is a mask over at most 4 axes of travel.
    assert!(code.reuse_direction() <= 0xF);
    assert!(code.reuse_index() <= 0xF);
  }
}
