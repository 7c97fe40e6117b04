use super::*;

fn output_with_triangles(count: usize) -> MeshOutput {
  let mut output = MeshOutput::new();
  for i in 0..count * 3 {
    output.positions.extend_from_slice(&[i as f32, 0.0, 0.0]);
    output.normals.extend_from_slice(&[0.0, 1.0, 0.0]);
    output.uvs.extend_from_slice(&[0.0, 0.0]);
    output.indices.push(i as u32);
    output.material_samples.extend_from_slice(&[1.0, 1.0, 1.0]);
    output.blend_ratios.extend_from_slice(&[1.0, 0.0, 0.0]);
    output.bounds.encapsulate([i as f32, 0.0, 0.0]);
  }
  output
}

#[test]
fn test_soup_is_subset_of_output() {
  let output = output_with_triangles(2);
  let soup = output.triangle_soup();

  assert_eq!(soup.positions, output.positions);
  assert_eq!(soup.indices, output.indices);
  assert_eq!(soup.triangle_count(), 2);
}

#[test]
fn test_single_wraps_one_chunk() {
  let output = output_with_triangles(3);
  let physics = output.physics_mesh();

  assert_eq!(physics.triangle_count(), 3);
  assert!(matches!(physics, PhysicsMeshData::Single(_)));
}

#[test]
fn test_composite_skips_empty_chunks() {
  let meshed = output_with_triangles(2);
  let empty = MeshOutput::new();
  let also_meshed = output_with_triangles(1);

  let physics = PhysicsMeshData::from_outputs([&meshed, &empty, &also_meshed]);
  assert_eq!(physics.triangle_count(), 3);
  let PhysicsMeshData::Composite(soups) = physics else {
    panic!("expected composite");
  };
  assert_eq!(soups.len(), 2);
}

#[test]
fn test_empty_output_yields_empty_soup() {
  let output = MeshOutput::new();
  assert!(output.triangle_soup().is_empty());
  assert_eq!(output.physics_mesh().triangle_count(), 0);
}
