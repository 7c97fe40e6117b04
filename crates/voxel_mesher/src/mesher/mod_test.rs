use std::collections::HashMap;

use glam::Vec3A;

use super::*;
use crate::constants::{CHUNK_GRID_CB, FACE_GRID_SIZE, FACE_GRID_SQ};
use crate::types::FaceSamples;

/// Signed-distance sphere sampled onto the chunk grid. Positive inside.
fn sphere_volume(center: Vec3A, radius: f32) -> ChunkVolume {
  let mut density = vec![0.0; CHUNK_GRID_CB];
  let material = vec![1u8; CHUNK_GRID_CB];
  for x in 0..CHUNK_GRID_SIZE {
    for y in 0..CHUNK_GRID_SIZE {
      for z in 0..CHUNK_GRID_SIZE {
        let point = Vec3A::new(x as f32, y as f32, z as f32);
        density[grid_index(x, y, z)] = radius - point.distance(center);
      }
    }
  }
  ChunkVolume::new(density, material)
}

/// Double-resolution samples of the same sphere on one boundary plane, as
/// the higher-detail neighbor behind that face would supply them.
fn sphere_face(dir: FaceDir, center: Vec3A, radius: f32) -> FaceSamples {
  let mut density = vec![0.0; FACE_GRID_SQ];
  let material = vec![1u8; FACE_GRID_SQ];
  for u in 0..FACE_GRID_SIZE {
    for v in 0..FACE_GRID_SIZE {
      let (uf, vf) = (u as f32 * 0.5, v as f32 * 0.5);
      let point = match dir {
        FaceDir::XPos => Vec3A::new(16.0, uf, vf),
        FaceDir::XNeg => Vec3A::new(0.0, uf, vf),
        FaceDir::YPos => Vec3A::new(uf, 16.0, vf),
        FaceDir::YNeg => Vec3A::new(uf, 0.0, vf),
        FaceDir::ZPos => Vec3A::new(uf, vf, 16.0),
        FaceDir::ZNeg => Vec3A::new(uf, vf, 0.0),
      };
      density[face_index(u, v)] = radius - point.distance(center);
    }
  }
  FaceSamples::new(density, material)
}

#[test]
fn test_uniform_volumes_produce_no_mesh() {
  let air = ChunkVolume::new(vec![-1.0; CHUNK_GRID_CB], vec![0; CHUNK_GRID_CB]);
  assert!(generate(&air).unwrap().is_empty());

  let solid = ChunkVolume::new(vec![1.0; CHUNK_GRID_CB], vec![1; CHUNK_GRID_CB]);
  assert!(generate(&solid).unwrap().is_empty());
}

#[test]
fn test_sphere_produces_consistent_buffers() {
  let volume = sphere_volume(Vec3A::splat(8.5), 5.3);
  let output = generate(&volume).unwrap();

  assert!(!output.is_empty());
  let corner_count = output.positions.len() / 3;
  assert_eq!(output.positions.len() % 3, 0);
  assert_eq!(output.normals.len(), output.positions.len());
  assert_eq!(output.uvs.len(), corner_count * 2);
  assert_eq!(output.indices.len(), corner_count);
  assert_eq!(output.material_samples.len(), corner_count * 3);
  assert_eq!(output.blend_ratios.len(), corner_count * 3);
  assert_eq!(corner_count % 3, 0);
  assert_eq!(output.triangle_count(), corner_count / 3);

  // Buffers are fully expanded, so indices are the identity sequence.
  for (i, &index) in output.indices.iter().enumerate() {
    assert_eq!(index as usize, i);
  }

  // Exported normals are unit length.
  for normal in output.normals.chunks_exact(3) {
    let length = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
    assert!((length - 1.0).abs() < 1e-4, "{length}");
  }
}

#[test]
fn test_sphere_mesh_is_manifold() {
  let volume = sphere_volume(Vec3A::splat(8.5), 5.3);
  let output = generate(&volume).unwrap();
  assert!(!output.is_empty());

  // Corners that came from the same shared vertex carry bit-identical
  // positions, so collapsing by bit pattern recovers the triangulation.
  let mut ids: HashMap<[u32; 3], u32> = HashMap::new();
  let mut collapsed = Vec::new();
  for corner in output.positions.chunks_exact(3) {
    let key = [corner[0].to_bits(), corner[1].to_bits(), corner[2].to_bits()];
    let id = match ids.get(&key) {
      Some(&id) => id,
      None => {
        let id = ids.len() as u32;
        ids.insert(key, id);
        id
      }
    };
    collapsed.push(id);
  }

  // A closed surface has every undirected edge in exactly two triangles.
  let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
  for tri in collapsed.chunks_exact(3) {
    for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
      *edge_counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
    }
  }
  for (edge, count) in &edge_counts {
    assert_eq!(*count, 2, "edge {edge:?}");
  }
}

#[test]
fn test_sphere_triangles_wind_outward() {
  let center = Vec3A::splat(8.5);
  let volume = sphere_volume(center, 5.3);
  let output = generate(&volume).unwrap();

  for corners in output.positions.chunks_exact(9) {
    let a = Vec3A::new(corners[0], corners[1], corners[2]);
    let b = Vec3A::new(corners[3], corners[4], corners[5]);
    let c = Vec3A::new(corners[6], corners[7], corners[8]);
    let face_normal = (b - a).cross(c - b);
    let centroid = (a + b + c) / 3.0;
    assert!(face_normal.dot(centroid - center) > 0.0, "{centroid:?}");
  }

  // The exported per-corner normals point outward too.
  for (corners, normal) in output
    .positions
    .chunks_exact(3)
    .zip(output.normals.chunks_exact(3))
  {
    let p = Vec3A::new(corners[0], corners[1], corners[2]);
    let n = Vec3A::new(normal[0], normal[1], normal[2]);
    assert!(n.dot(p - center) > 0.0, "{p:?}");
  }
}

#[test]
fn test_winding_outward_for_each_stitched_face() {
  let radius = 5.3;
  for dir in FaceDir::ALL {
    // Push the sphere through the face under test so transition and
    // companion cells both carry surface there.
    let toward = match dir {
      FaceDir::XPos => Vec3A::X,
      FaceDir::XNeg => -Vec3A::X,
      FaceDir::YPos => Vec3A::Y,
      FaceDir::YNeg => -Vec3A::Y,
      FaceDir::ZPos => Vec3A::Z,
      FaceDir::ZNeg => -Vec3A::Z,
    };
    let center = Vec3A::splat(8.5) + toward * 4.0;
    let volume = sphere_volume(center, radius).with_face(dir, sphere_face(dir, center, radius));
    let output = generate(&volume).unwrap();
    assert!(!output.is_empty(), "{dir:?}");

    for corners in output.positions.chunks_exact(9) {
      let a = Vec3A::new(corners[0], corners[1], corners[2]);
      let b = Vec3A::new(corners[3], corners[4], corners[5]);
      let c = Vec3A::new(corners[6], corners[7], corners[8]);
      let face_normal = (b - a).cross(c - b);
      let centroid = (a + b + c) / 3.0;
      assert!(
        face_normal.dot(centroid - center) > 0.0,
        "{dir:?} {centroid:?}"
      );
    }

    // Exported normals must agree with the index winding; a face whose
    // winding happens to be correct can still ship flipped normals.
    for (corners, normal) in output
      .positions
      .chunks_exact(3)
      .zip(output.normals.chunks_exact(3))
    {
      let p = Vec3A::new(corners[0], corners[1], corners[2]);
      let n = Vec3A::new(normal[0], normal[1], normal[2]);
      assert!(n.dot(p - center) > 0.0, "{dir:?} {p:?}");
    }
  }
}

#[test]
fn test_blend_ratios_are_one_hot() {
  let volume = sphere_volume(Vec3A::splat(8.5), 5.3);
  let output = generate(&volume).unwrap();

  for (corner, ratios) in output.blend_ratios.chunks_exact(3).enumerate() {
    let sum: f32 = ratios.iter().sum();
    assert!((sum - 1.0).abs() < f32::EPSILON, "corner {corner}");
    assert_eq!(ratios.iter().filter(|&&r| r == 1.0).count(), 1);
    assert_eq!(ratios[corner % 3], 1.0);
  }
}

#[test]
fn test_level_of_detail_scales_positions_only() {
  let fine = sphere_volume(Vec3A::splat(8.5), 5.3);
  let coarse = sphere_volume(Vec3A::splat(8.5), 5.3).with_level_of_detail(2);

  let fine_output = generate(&fine).unwrap();
  let coarse_output = generate(&coarse).unwrap();

  assert_eq!(fine_output.positions.len(), coarse_output.positions.len());
  for (a, b) in fine_output.positions.iter().zip(&coarse_output.positions) {
    assert!((a * 4.0 - b).abs() < 1e-4);
  }
  assert_eq!(fine_output.uvs, coarse_output.uvs);
}

#[test]
fn test_stitched_face_lands_on_the_shared_plane() {
  let center = Vec3A::new(12.5, 8.5, 8.5);
  let radius = 5.3;
  let volume =
    sphere_volume(center, radius).with_face(FaceDir::XPos, sphere_face(FaceDir::XPos, center, radius));

  let output = generate(&volume).unwrap();
  assert!(!output.is_empty());

  // Transition vertices interpolated between boundary-plane samples sit
  // exactly on the plane; nothing escapes the chunk span.
  let mut on_plane = 0;
  for corners in output.positions.chunks_exact(3) {
    assert!((0.0..=16.0).contains(&corners[0]), "{corners:?}");
    if corners[0] == 16.0 {
      on_plane += 1;
    }
  }
  assert!(on_plane > 0);
}

#[test]
fn test_stitched_face_changes_boundary_triangulation() {
  let center = Vec3A::new(12.5, 8.5, 8.5);
  let radius = 5.3;

  let plain = generate(&sphere_volume(center, radius)).unwrap();
  let stitched = generate(
    &sphere_volume(center, radius)
      .with_face(FaceDir::XPos, sphere_face(FaceDir::XPos, center, radius)),
  )
  .unwrap();

  assert!(!plain.is_empty());
  assert!(!stitched.is_empty());
  assert_ne!(plain.positions.len(), stitched.positions.len());
}

#[test]
fn test_bounds_cover_all_positions() {
  let volume = sphere_volume(Vec3A::splat(8.5), 5.3);
  let output = generate(&volume).unwrap();

  assert!(output.bounds.is_valid());
  for corners in output.positions.chunks_exact(3) {
    for axis in 0..3 {
      assert!(corners[axis] >= output.bounds.min[axis] - 1e-6);
      assert!(corners[axis] <= output.bounds.max[axis] + 1e-6);
    }
  }
}
