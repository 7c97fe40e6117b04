//! Simplified geometry view for triangle-mesh collider construction.
//!
//! Physics consumes only positions and indices; normals, UVs, and material
//! attributes stay with the render path. This is a subset view of
//! [`MeshOutput`], not a separate extraction algorithm.

use crate::types::MeshOutput;

/// Flat triangle geometry for one collider shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSoup {
  /// Corner positions, xyz interleaved.
  pub positions: Vec<f32>,
  /// Triangle indices, 3 per triangle.
  pub indices: Vec<u32>,
}

impl TriangleSoup {
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }
}

/// Collider geometry for one chunk or a group of chunks.
///
/// The shape set is closed: a chunk mesh yields one soup, a merged region
/// yields one soup per member.
#[derive(Clone, Debug, PartialEq)]
pub enum PhysicsMeshData {
  Single(TriangleSoup),
  Composite(Vec<TriangleSoup>),
}

impl PhysicsMeshData {
  /// Combine several chunk meshes into one composite collider. Empty
  /// meshes contribute no shape.
  pub fn from_outputs<'a>(outputs: impl IntoIterator<Item = &'a MeshOutput>) -> Self {
    let soups = outputs
      .into_iter()
      .filter(|output| !output.is_empty())
      .map(MeshOutput::triangle_soup)
      .collect();
    Self::Composite(soups)
  }

  pub fn triangle_count(&self) -> usize {
    match self {
      Self::Single(soup) => soup.triangle_count(),
      Self::Composite(soups) => soups.iter().map(TriangleSoup::triangle_count).sum(),
    }
  }
}

impl MeshOutput {
  /// Positions and indices only, copied out for the collision layer.
  pub fn triangle_soup(&self) -> TriangleSoup {
    TriangleSoup {
      positions: self.positions.clone(),
      indices: self.indices.clone(),
    }
  }

  /// Single-shape collider geometry for this chunk.
  pub fn physics_mesh(&self) -> PhysicsMeshData {
    PhysicsMeshData::Single(self.triangle_soup())
  }
}

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;
