use glam::Vec3A;

use super::*;

fn one_triangle_mesh() -> WorkingMesh {
  let mut mesh = WorkingMesh::new();
  let a = mesh.get_or_insert(Vec3A::new(0.0, 0.0, 0.0));
  let b = mesh.get_or_insert(Vec3A::new(1.0, 0.0, 0.0));
  let c = mesh.get_or_insert(Vec3A::new(0.0, 0.0, 1.0));
  for &i in &[a, b, c] {
    mesh.accumulate_normal(i, Vec3A::Y);
  }
  mesh.add_triangle([a, b, c], [1, 2, 3]);
  mesh
}

#[test]
fn test_corners_are_fully_expanded() {
  let output = flatten(&one_triangle_mesh(), 0).unwrap();
  assert_eq!(output.triangle_count(), 1);
  assert_eq!(output.positions.len(), 9);
  assert_eq!(output.normals.len(), 9);
  assert_eq!(output.uvs.len(), 6);
  assert_eq!(output.indices, vec![0, 1, 2]);
}

#[test]
fn test_level_of_detail_scales_positions_but_not_uvs() {
  let base = flatten(&one_triangle_mesh(), 0).unwrap();
  let coarse = flatten(&one_triangle_mesh(), 2).unwrap();

  for (a, b) in base.positions.iter().zip(&coarse.positions) {
    assert!((a * 4.0 - b).abs() < 1e-6);
  }
  assert_eq!(base.uvs, coarse.uvs);
}

#[test]
fn test_blend_ratios_are_one_hot_per_corner() {
  let output = flatten(&one_triangle_mesh(), 0).unwrap();
  for corner in 0..3 {
    let ratio = &output.blend_ratios[corner * 3..corner * 3 + 3];
    assert_eq!(ratio.iter().sum::<f32>(), 1.0);
    assert_eq!(ratio.iter().filter(|&&r| r == 1.0).count(), 1);
    assert_eq!(ratio[corner], 1.0);
  }
}

#[test]
fn test_material_samples_repeat_the_triple() {
  let output = flatten(&one_triangle_mesh(), 0).unwrap();
  for corner in 0..3 {
    assert_eq!(
      &output.material_samples[corner * 3..corner * 3 + 3],
      &[1.0, 2.0, 3.0]
    );
  }
}

#[test]
fn test_uv_is_planar_for_an_upward_face() {
  // Normal +Y: u = x, v = z.
  let output = flatten(&one_triangle_mesh(), 0).unwrap();
  assert_eq!(&output.uvs[0..2], &[0.0, 0.0]);
  assert_eq!(&output.uvs[2..4], &[1.0, 0.0]);
  assert_eq!(&output.uvs[4..6], &[0.0, 1.0]);
}

#[test]
fn test_extreme_detail_levels_do_not_overflow() {
  // Scale saturates in float instead of panicking on the shift width.
  let output = flatten(&one_triangle_mesh(), 32).unwrap();
  assert!(output.positions.iter().all(|p| p.is_finite()));
  assert_eq!(output.positions[3], 2f32.powi(32));

  let huge = flatten(&one_triangle_mesh(), 4096).unwrap();
  assert_eq!(huge.triangle_count(), 1);
}

#[test]
fn test_bounds_cover_scaled_positions() {
  let output = flatten(&one_triangle_mesh(), 1).unwrap();
  assert!(output.bounds.is_valid());
  assert_eq!(output.bounds.min, [0.0, 0.0, 0.0]);
  assert_eq!(output.bounds.max, [2.0, 0.0, 2.0]);
}
