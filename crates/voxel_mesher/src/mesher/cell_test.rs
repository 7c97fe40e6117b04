use glam::Vec3A;

use super::*;

/// Unit cell at the origin with the fixed corner ordering.
fn unit_cell(values: [f32; 8]) -> GridCell {
  GridCell {
    points: [
      Vec3A::new(0.0, 0.0, 0.0),
      Vec3A::new(0.0, 0.0, 1.0),
      Vec3A::new(1.0, 0.0, 1.0),
      Vec3A::new(1.0, 0.0, 0.0),
      Vec3A::new(0.0, 1.0, 0.0),
      Vec3A::new(0.0, 1.0, 1.0),
      Vec3A::new(1.0, 1.0, 1.0),
      Vec3A::new(1.0, 1.0, 0.0),
    ],
    values,
    materials: [3, 0, 0, 0, 0, 0, 0, 0],
  }
}

#[test]
fn test_uniform_cells_emit_nothing() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();

  let solid = unit_cell([1.0; 8]);
  assert_eq!(polygonize_cell(&solid, &mut mesh, &mut scratch, false).unwrap(), 0);

  let air = unit_cell([-1.0; 8]);
  assert_eq!(polygonize_cell(&air, &mut mesh, &mut scratch, false).unwrap(), 0);

  assert_eq!(mesh.triangle_count(), 0);
  assert_eq!(mesh.vertex_count(), 0);
}

#[test]
fn test_single_solid_corner_emits_one_triangle() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  let cell = unit_cell([1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]);

  let emitted = polygonize_cell(&cell, &mut mesh, &mut scratch, false).unwrap();
  assert_eq!(emitted, 1);
  assert_eq!(mesh.vertex_count(), 3);

  // Equal magnitudes put every crossing at the edge midpoint.
  let expected = [
    Vec3A::new(0.0, 0.0, 0.5),
    Vec3A::new(0.5, 0.0, 0.0),
    Vec3A::new(0.0, 0.5, 0.0),
  ];
  for v in &mesh.vertices {
    assert!(expected.iter().any(|e| (*v - *e).length() < 1e-6), "{v:?}");
  }
}

#[test]
fn test_normal_points_from_solid_into_air() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  let cell = unit_cell([1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]);
  polygonize_cell(&cell, &mut mesh, &mut scratch, false).unwrap();

  // Solid corner is the origin; the surface faces away from it.
  let away = Vec3A::ONE.normalize();
  for n in &mesh.normals {
    assert!(n.dot(away) > 0.0, "{n:?}");
    assert!((n.length() - 1.0).abs() < 1e-5);
  }
}

#[test]
fn test_reverse_winding_flips_triangle_orientation() {
  let cell = unit_cell([1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]);

  let mut upright = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  polygonize_cell(&cell, &mut upright, &mut scratch, false).unwrap();

  let mut mirrored = WorkingMesh::new();
  polygonize_cell(&cell, &mut mirrored, &mut scratch, true).unwrap();

  // The emitted corner sequence runs backwards, so the face normal flips
  // with it.
  let up: Vec<Vec3A> = upright.triangles[0]
    .iter()
    .map(|&i| upright.vertices[i as usize])
    .collect();
  let rev: Vec<Vec3A> = mirrored.triangles[0]
    .iter()
    .map(|&i| mirrored.vertices[i as usize])
    .collect();
  assert_eq!(rev, vec![up[2], up[1], up[0]]);

  for (a, b) in upright.normals.iter().zip(&mirrored.normals) {
    assert!((*a + *b).length() < 1e-6);
  }
}

#[test]
fn test_collapsed_crossings_are_fatal_with_diagnostics() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  // A barely-negative corner places all three crossings within quantization
  // distance of the corner itself, collapsing the triangle to one vertex.
  let cell = unit_cell([-1e-6, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);

  let result = polygonize_cell(&cell, &mut mesh, &mut scratch, false);
  let Err(MeshError::DegenerateTriangle {
    case_index,
    tri_edges,
    cell_points,
    cell_values,
    ..
  }) = result
  else {
    panic!("expected a degenerate triangle");
  };
  assert_eq!(case_index, 1);
  assert_eq!(tri_edges, [0, 8, 3]);
  assert_eq!(cell_points[6], [1.0, 1.0, 1.0]);
  assert_eq!(cell_values[0], -1e-6);
}

#[test]
fn test_material_comes_from_solid_endpoint() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  let cell = unit_cell([1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]);
  polygonize_cell(&cell, &mut mesh, &mut scratch, false).unwrap();

  // Every crossed edge touches the solid corner, which carries material 3.
  assert_eq!(mesh.material_triplets, vec![[3, 3, 3]]);
}

#[test]
fn test_zero_negative_edges_are_skipped() {
  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  // Corner 0 sits exactly on the isolevel, everything else is air: the
  // crossed edges all lie fully on the non-solid side.
  let cell = unit_cell([0.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]);

  let emitted = polygonize_cell(&cell, &mut mesh, &mut scratch, false).unwrap();
  assert_eq!(emitted, 0);
  assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_shared_vertices_average_normals() {
  // Two solid corners along the bottom Z edge produce two triangles (a
  // quad) sharing vertices.
  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  let cell = unit_cell([1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]);

  let emitted = polygonize_cell(&cell, &mut mesh, &mut scratch, false).unwrap();
  assert_eq!(emitted, 2);
  assert!(mesh.vertex_count() < 6, "quad should share vertices");
  assert_eq!(mesh.vertices.len(), mesh.normals.len());
  assert!(mesh.triangles_sharing.iter().any(|&n| n == 2));
}
