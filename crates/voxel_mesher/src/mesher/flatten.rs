//! Expanded-buffer export.
//!
//! The working mesh shares vertices between triangles so normals can be
//! averaged; the render path must not share them, otherwise the per-corner
//! blend attributes would interpolate across neighboring triangles. Export
//! therefore emits three fresh corners per triangle with identity indices.

use crate::error::MeshError;
use crate::types::{MeshOutput, MinMaxAABB};

use super::working_mesh::WorkingMesh;

pub(super) fn flatten(mesh: &WorkingMesh, level_of_detail: u32) -> Result<MeshOutput, MeshError> {
  if mesh.vertices.len() != mesh.normals.len() {
    return Err(MeshError::CountMismatch {
      vertices: mesh.vertices.len(),
      normals: mesh.normals.len(),
    });
  }

  let corner_count = mesh.triangle_count() * 3;
  let mut output = MeshOutput {
    positions: Vec::with_capacity(corner_count * 3),
    normals: Vec::with_capacity(corner_count * 3),
    uvs: Vec::with_capacity(corner_count * 2),
    indices: Vec::with_capacity(corner_count),
    material_samples: Vec::with_capacity(corner_count * 3),
    blend_ratios: Vec::with_capacity(corner_count * 3),
    bounds: MinMaxAABB::empty(),
  };

  // Coarser detail levels cover twice the world span per voxel. Computed in
  // float so an out-of-range level saturates instead of overflowing.
  let scale = 2f32.powi(level_of_detail.min(i32::MAX as u32) as i32);

  for (triangle, materials) in mesh.triangles.iter().zip(&mesh.material_triplets) {
    for (corner, &vertex_index) in triangle.iter().enumerate() {
      let vert = mesh.vertices[vertex_index as usize];
      let normal = mesh.normals[vertex_index as usize].normalize_or_zero();

      let scaled = [vert.x * scale, vert.y * scale, vert.z * scale];
      output.positions.extend_from_slice(&scaled);
      output.bounds.encapsulate(scaled);

      output
        .normals
        .extend_from_slice(&[normal.x, normal.y, normal.z]);

      // Planar projection along the dominant normal axis, in voxel units so
      // texture density is independent of detail level.
      let (nx, ny, nz) = (normal.x.abs(), normal.y.abs(), normal.z.abs());
      output.uvs.extend_from_slice(&[
        vert.z * nx + vert.x * ny + vert.x * nz,
        vert.y * nx + vert.z * ny + vert.y * nz,
      ]);

      // Every corner carries the whole triple; the one-hot ratio picks this
      // corner's entry without interpolation artifacts mid-triangle.
      output
        .material_samples
        .extend_from_slice(&[materials[0] as f32, materials[1] as f32, materials[2] as f32]);
      let mut ratio = [0.0f32; 3];
      ratio[corner] = 1.0;
      output.blend_ratios.extend_from_slice(&ratio);
    }
  }

  output.indices.extend(0..corner_count as u32);

  Ok(output)
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod flatten_test;
