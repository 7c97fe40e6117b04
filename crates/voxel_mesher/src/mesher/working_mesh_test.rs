use glam::Vec3A;

use super::*;

#[test]
fn test_identical_positions_deduplicate() {
  let mut mesh = WorkingMesh::new();
  let a = mesh.get_or_insert(Vec3A::new(1.0, 2.0, 3.0));
  let b = mesh.get_or_insert(Vec3A::new(1.0, 2.0, 3.0));
  assert_eq!(a, b);
  assert_eq!(mesh.vertex_count(), 1);
}

#[test]
fn test_distinct_positions_get_distinct_indices() {
  let mut mesh = WorkingMesh::new();
  let a = mesh.get_or_insert(Vec3A::ZERO);
  let b = mesh.get_or_insert(Vec3A::new(0.5, 0.0, 0.0));
  assert_ne!(a, b);
  assert_eq!(mesh.vertex_count(), 2);
}

#[test]
fn test_parallel_buffers_stay_in_step() {
  let mut mesh = WorkingMesh::new();
  for i in 0..10 {
    mesh.get_or_insert(Vec3A::new(i as f32, 0.0, 0.0));
  }
  assert_eq!(mesh.vertices.len(), mesh.normals.len());
  assert_eq!(mesh.vertices.len(), mesh.triangles_sharing.len());
}

#[test]
fn test_normal_running_average() {
  let mut mesh = WorkingMesh::new();
  let index = mesh.get_or_insert(Vec3A::ZERO);

  mesh.accumulate_normal(index, Vec3A::X);
  assert_eq!(mesh.normals[0], Vec3A::X);
  assert_eq!(mesh.triangles_sharing[0], 1);

  mesh.accumulate_normal(index, Vec3A::Y);
  let expected = Vec3A::X * 0.5 + Vec3A::Y * 0.5;
  assert!((mesh.normals[0] - expected).length() < 1e-6);
  assert_eq!(mesh.triangles_sharing[0], 2);

  mesh.accumulate_normal(index, Vec3A::Y);
  let expected = expected * (2.0 / 3.0) + Vec3A::Y * (1.0 / 3.0);
  assert!((mesh.normals[0] - expected).length() < 1e-6);
}
