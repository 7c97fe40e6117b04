use super::*;

#[test]
fn test_grid_index_is_row_major_z_innermost() {
  assert_eq!(grid_index(0, 0, 0), 0);
  assert_eq!(grid_index(0, 0, 1), 1);
  assert_eq!(grid_index(0, 1, 0), CHUNK_GRID_SIZE);
  assert_eq!(grid_index(1, 0, 0), CHUNK_GRID_SIZE * CHUNK_GRID_SIZE);
}

#[test]
fn test_grid_index_covers_volume_without_gaps() {
  let last = grid_index(
    CHUNK_GRID_SIZE - 1,
    CHUNK_GRID_SIZE - 1,
    CHUNK_GRID_SIZE - 1,
  );
  assert_eq!(last, CHUNK_GRID_CB - 1);
}

#[test]
fn test_face_index_covers_face_without_gaps() {
  assert_eq!(face_index(0, 0), 0);
  assert_eq!(face_index(0, 1), 1);
  assert_eq!(face_index(1, 0), FACE_GRID_SIZE);
  assert_eq!(face_index(FACE_GRID_SIZE - 1, FACE_GRID_SIZE - 1), FACE_GRID_SQ - 1);
}

#[test]
fn test_face_grid_doubles_chunk_resolution() {
  // A coarse cell at u spans high-res samples 2u and 2u+2.
  assert_eq!(FACE_GRID_SIZE, 2 * (CHUNK_GRID_SIZE - 1) + 1);
}

#[test]
fn test_transition_width_is_a_proper_fraction() {
  assert!(TRANSITION_CELL_WIDTH > 0.0 && TRANSITION_CELL_WIDTH < 1.0);
}
