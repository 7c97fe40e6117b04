use glam::Vec3A;

use super::*;
use crate::error::MeshError;

/// Transition cell against the +X boundary plane: full-res samples on
/// x = 1, half-res samples pulled in to x = 0.5. Half samples mirror the
/// four full-res corners the way face sampling produces them.
fn boundary_cell(full_values: [f32; 9], full_materials: [MaterialId; 9]) -> TransitionCell {
  let mut cell = TransitionCell::empty();
  for i in 0..3 {
    for j in 0..3 {
      cell.full_points[i * 3 + j] = Vec3A::new(1.0, j as f32 * 0.5, i as f32 * 0.5);
    }
  }
  cell.full_values = full_values;
  cell.full_materials = full_materials;

  cell.half_points = [
    Vec3A::new(0.5, 0.0, 0.0),
    Vec3A::new(0.5, 1.0, 0.0),
    Vec3A::new(0.5, 0.0, 1.0),
    Vec3A::new(0.5, 1.0, 1.0),
  ];
  cell.half_values = [full_values[0], full_values[2], full_values[6], full_values[8]];
  cell.half_materials = [
    full_materials[0],
    full_materials[2],
    full_materials[6],
    full_materials[8],
  ];
  cell
}

#[test]
fn test_flat_faces_emit_nothing() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = TransitionScratch::new();

  let solid = boundary_cell([1.0; 9], [1; 9]);
  assert_eq!(polygonize_transition(&solid, &mut mesh, &mut scratch, false).unwrap(), 0);

  let air = boundary_cell([-1.0; 9], [1; 9]);
  assert_eq!(polygonize_transition(&air, &mut mesh, &mut scratch, false).unwrap(), 0);

  assert_eq!(mesh.triangle_count(), 0);
  assert_eq!(mesh.vertex_count(), 0);
}

#[test]
fn test_single_air_corner_emits_quad() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = TransitionScratch::new();

  let mut values = [1.0; 9];
  values[0] = -1.0;
  let cell = boundary_cell(values, [7; 9]);

  let emitted = polygonize_transition(&cell, &mut mesh, &mut scratch, false).unwrap();
  assert_eq!(emitted, 2);
  assert_eq!(mesh.vertex_count(), 4);

  // Every crossing stays inside the cell span.
  for v in &mesh.vertices {
    assert!((0.5..=1.0).contains(&v.x), "{v:?}");
    assert!((0.0..=1.0).contains(&v.y), "{v:?}");
    assert!((0.0..=1.0).contains(&v.z), "{v:?}");
  }
}

#[test]
fn test_material_comes_from_solid_side() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = TransitionScratch::new();

  let mut values = [1.0; 9];
  values[0] = -1.0;
  let mut materials = [7; 9];
  materials[0] = 2;
  let cell = boundary_cell(values, materials);

  polygonize_transition(&cell, &mut mesh, &mut scratch, false).unwrap();
  assert!(!mesh.material_triplets.is_empty());
  for triplet in &mesh.material_triplets {
    assert_eq!(*triplet, [7, 7, 7]);
  }
}

#[test]
fn test_mirrored_frame_flips_vertex_normals() {
  let mut values = [1.0; 9];
  values[0] = -1.0;
  let cell = boundary_cell(values, [1; 9]);

  let mut forward = WorkingMesh::new();
  let mut backward = WorkingMesh::new();
  let mut scratch = TransitionScratch::new();
  polygonize_transition(&cell, &mut forward, &mut scratch, false).unwrap();
  polygonize_transition(&cell, &mut backward, &mut scratch, true).unwrap();

  assert_eq!(forward.vertex_count(), backward.vertex_count());
  for (i, v) in forward.vertices.iter().enumerate() {
    let j = backward
      .vertices
      .iter()
      .position(|w| (*w - *v).length() < 1e-6)
      .unwrap();
    assert!(forward.normals[i].dot(backward.normals[j]) < 0.0);
  }
}

#[test]
fn test_triangle_with_unfilled_slot_is_dropped() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = TransitionScratch::new();

  // Air at the first corner, but the half-res samples it interpolates
  // against sit exactly on the surface or below it, so one vertex slot
  // never fills and the triangle referencing it is skipped.
  let mut values = [1.0; 9];
  values[0] = -1.0;
  let mut cell = boundary_cell(values, [1; 9]);
  cell.half_values = [0.0, 1.0, 0.0, 1.0];

  let emitted = polygonize_transition(&cell, &mut mesh, &mut scratch, false).unwrap();
  assert_eq!(emitted, 1);
}

#[test]
fn test_inconsistent_samples_report_invariant_error() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = TransitionScratch::new();

  // The case table pairs the first half-res sample with its neighbors;
  // making it solid while the matching full-res corner is air leaves a
  // pair entirely on the solid side.
  let mut values = [1.0; 9];
  values[0] = -1.0;
  let mut cell = boundary_cell(values, [1; 9]);
  cell.half_values = [1.0; 4];

  let result = polygonize_transition(&cell, &mut mesh, &mut scratch, false);
  assert!(matches!(
    result,
    Err(MeshError::TransitionCellInvariant { case_index: 1, .. })
  ));
}
