use super::*;
use crate::constants::CHUNK_GRID_CB;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, 5.0, 0.0]);

  assert!(aabb.is_valid());
  assert_eq!(aabb.min, [-1.0, 2.0, 0.0]);
  assert_eq!(aabb.max, [1.0, 5.0, 3.0]);
}

#[test]
fn test_face_dir_opposites_pair_up() {
  for dir in FaceDir::ALL {
    assert_ne!(dir, dir.opposite());
    assert_eq!(dir, dir.opposite().opposite());
  }
}

#[test]
fn test_face_dir_indices_are_distinct() {
  let mut seen = [false; 6];
  for dir in FaceDir::ALL {
    assert!(!seen[dir.index()]);
    seen[dir.index()] = true;
  }
}

#[test]
fn test_uniform_volume_detection() {
  let solid = ChunkVolume::new(vec![1.0; CHUNK_GRID_CB], vec![0; CHUNK_GRID_CB]);
  assert!(solid.is_uniform());

  let air = ChunkVolume::new(vec![-1.0; CHUNK_GRID_CB], vec![0; CHUNK_GRID_CB]);
  assert!(air.is_uniform());

  let mut mixed = ChunkVolume::new(vec![-1.0; CHUNK_GRID_CB], vec![0; CHUNK_GRID_CB]);
  mixed.density[0] = 1.0;
  assert!(!mixed.is_uniform());
}

#[test]
fn test_transition_cell_sample_indexing() {
  let mut cell = TransitionCell::empty();
  cell.full_values[8] = 8.0;
  cell.half_values[0] = 9.0;
  cell.half_values[3] = 12.0;

  assert_eq!(cell.value(8), 8.0);
  assert_eq!(cell.value(9), 9.0);
  assert_eq!(cell.value(12), 12.0);
}

#[test]
fn test_mesh_output_counts() {
  let output = MeshOutput::new();
  assert!(output.is_empty());
  assert_eq!(output.triangle_count(), 0);
}
