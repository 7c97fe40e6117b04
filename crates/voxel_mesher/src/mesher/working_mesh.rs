//! Deduplicated intermediate mesh shared by both polygonizers.

use glam::Vec3A;
use hashbrown::HashMap;

use crate::types::MaterialId;

/// Positions are quantized to 1/4096 of a voxel for the dedup key, well
/// below any distance two distinct crossing points can be apart.
const KEY_SCALE: f32 = 4096.0;

/// Shared-vertex mesh under construction.
///
/// `vertices`, `normals`, and `triangles_sharing` stay the same length after
/// every insertion; normals are running averages of the face normals of the
/// triangles sharing each vertex.
pub struct WorkingMesh {
  pub vertices: Vec<Vec3A>,
  pub normals: Vec<Vec3A>,
  pub triangles_sharing: Vec<u32>,
  pub triangles: Vec<[u32; 3]>,
  /// Per triangle, the material id at each of its three corners.
  pub material_triplets: Vec<[MaterialId; 3]>,
  key_index: HashMap<[i32; 3], u32>,
}

impl WorkingMesh {
  pub fn new() -> Self {
    Self {
      vertices: Vec::new(),
      normals: Vec::new(),
      triangles_sharing: Vec::new(),
      triangles: Vec::new(),
      material_triplets: Vec::new(),
      key_index: HashMap::new(),
    }
  }

  /// Index of the vertex at `position`, inserting it with a zero normal if
  /// no previous triangle produced one there.
  pub fn get_or_insert(&mut self, position: Vec3A) -> u32 {
    let key = quantize(position);
    if let Some(&index) = self.key_index.get(&key) {
      return index;
    }
    let index = self.vertices.len() as u32;
    self.vertices.push(position);
    self.normals.push(Vec3A::ZERO);
    self.triangles_sharing.push(0);
    self.key_index.insert(key, index);
    index
  }

  /// Fold a new face normal into the running average at `index`.
  ///
  /// With n triangles already sharing the vertex the stored normal keeps
  /// weight n/(n+1) and the new face normal gets 1/(n+1).
  pub fn accumulate_normal(&mut self, index: u32, face_normal: Vec3A) {
    let i = index as usize;
    let shared = self.triangles_sharing[i];
    let old_proportion = shared as f32 / (shared + 1) as f32;
    let new_proportion = 1.0 / (shared + 1) as f32;
    self.normals[i] = self.normals[i] * old_proportion + face_normal * new_proportion;
    self.triangles_sharing[i] = shared + 1;
  }

  pub fn add_triangle(&mut self, indices: [u32; 3], materials: [MaterialId; 3]) {
    self.triangles.push(indices);
    self.material_triplets.push(materials);
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }
}

impl Default for WorkingMesh {
  fn default() -> Self {
    Self::new()
  }
}

#[inline]
fn quantize(position: Vec3A) -> [i32; 3] {
  [
    (position.x * KEY_SCALE).round() as i32,
    (position.y * KEY_SCALE).round() as i32,
    (position.z * KEY_SCALE).round() as i32,
  ]
}

#[cfg(test)]
#[path = "working_mesh_test.rs"]
mod working_mesh_test;
