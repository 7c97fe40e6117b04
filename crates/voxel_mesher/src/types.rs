//! Core data types for transvoxel chunk meshing.

use glam::Vec3A;

use crate::constants::{CHUNK_GRID_CB, FACE_GRID_SQ, ISO_LEVEL};

/// Material identifier stored per density sample.
pub type MaterialId = u8;

/// Double-resolution density and material samples for one neighbor face.
///
/// Flat 33×33 arrays indexed with
/// [`face_index`](crate::constants::face_index). Sample (0,0) coincides with
/// the face's origin corner of the owning chunk.
#[derive(Clone)]
pub struct FaceSamples {
  pub density: Vec<f32>,
  pub material: Vec<MaterialId>,
}

impl FaceSamples {
  pub fn new(density: Vec<f32>, material: Vec<MaterialId>) -> Self {
    debug_assert_eq!(density.len(), FACE_GRID_SQ);
    debug_assert_eq!(material.len(), FACE_GRID_SQ);
    Self { density, material }
  }
}

/// Chunk face direction, used to attach high-resolution neighbor samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceDir {
  XPos,
  XNeg,
  YPos,
  YNeg,
  ZPos,
  ZNeg,
}

impl FaceDir {
  pub const ALL: [FaceDir; 6] = [
    FaceDir::XPos,
    FaceDir::XNeg,
    FaceDir::YPos,
    FaceDir::YNeg,
    FaceDir::ZPos,
    FaceDir::ZNeg,
  ];

  /// Stable index for face-keyed storage.
  #[inline]
  pub fn index(self) -> usize {
    match self {
      FaceDir::XPos => 0,
      FaceDir::XNeg => 1,
      FaceDir::YPos => 2,
      FaceDir::YNeg => 3,
      FaceDir::ZPos => 4,
      FaceDir::ZNeg => 5,
    }
  }

  pub fn opposite(self) -> FaceDir {
    match self {
      FaceDir::XPos => FaceDir::XNeg,
      FaceDir::XNeg => FaceDir::XPos,
      FaceDir::YPos => FaceDir::YNeg,
      FaceDir::YNeg => FaceDir::YPos,
      FaceDir::ZPos => FaceDir::ZNeg,
      FaceDir::ZNeg => FaceDir::ZPos,
    }
  }
}

/// Input volume for one chunk: 17³ density and material samples, plus
/// optional double-resolution faces from higher-detail neighbors.
///
/// Positive density is solid. The caller owns sampling; this type only
/// carries the data in the layout the mesher walks.
#[derive(Clone)]
pub struct ChunkVolume {
  pub density: Vec<f32>,
  pub material: Vec<MaterialId>,
  pub faces: [Option<FaceSamples>; 6],
  /// Detail level of this chunk; output positions scale by 2^level.
  pub level_of_detail: u32,
}

impl ChunkVolume {
  pub fn new(density: Vec<f32>, material: Vec<MaterialId>) -> Self {
    debug_assert_eq!(density.len(), CHUNK_GRID_CB);
    debug_assert_eq!(material.len(), CHUNK_GRID_CB);
    Self {
      density,
      material,
      faces: [None, None, None, None, None, None],
      level_of_detail: 0,
    }
  }

  /// Attach double-resolution samples from the higher-detail neighbor on
  /// `dir`. The mesher stitches that face with transition cells.
  pub fn with_face(mut self, dir: FaceDir, samples: FaceSamples) -> Self {
    self.faces[dir.index()] = Some(samples);
    self
  }

  pub fn with_level_of_detail(mut self, level: u32) -> Self {
    self.level_of_detail = level;
    self
  }

  #[inline]
  pub fn face(&self, dir: FaceDir) -> Option<&FaceSamples> {
    self.faces[dir.index()].as_ref()
  }

  /// Whether any sample crosses the isolevel. A uniform volume can skip the
  /// cell walk entirely.
  pub fn is_uniform(&self) -> bool {
    let all_solid = self.density.iter().all(|&d| d > ISO_LEVEL);
    let all_air = self.density.iter().all(|&d| d <= ISO_LEVEL);
    all_solid || all_air
  }
}

/// One full-resolution cell: 8 corners in the fixed marching order.
///
/// ```text
///       4──────7
///      /│     /│     0=(x,y,z)      4=(x,y+1,z)
///     5─┼────6 │     1=(x,y,z+1)    5=(x,y+1,z+1)
///     │ 0────┼─3     2=(x+1,y,z+1)  6=(x+1,y+1,z+1)
///     │/     │/      3=(x+1,y,z)    7=(x+1,y+1,z)
///     1──────2
/// ```
#[derive(Clone, Copy)]
pub struct GridCell {
  pub points: [Vec3A; 8],
  pub values: [f32; 8],
  pub materials: [MaterialId; 8],
}

impl GridCell {
  pub fn empty() -> Self {
    Self {
      points: [Vec3A::ZERO; 8],
      values: [0.0; 8],
      materials: [0; 8],
    }
  }
}

/// One transition cell: a 3×3 full-resolution grid on the stitched face and
/// a 2×2 half-resolution grid pulled into the chunk by the transition width.
///
/// Samples are numbered 0-12 to match the transition tables: 0-8 walk the
/// full-res grid (face-row major), 9-12 walk the half-res grid.
#[derive(Clone, Copy)]
pub struct TransitionCell {
  pub full_points: [Vec3A; 9],
  pub full_values: [f32; 9],
  pub full_materials: [MaterialId; 9],
  pub half_points: [Vec3A; 4],
  pub half_values: [f32; 4],
  pub half_materials: [MaterialId; 4],
}

impl TransitionCell {
  pub fn empty() -> Self {
    Self {
      full_points: [Vec3A::ZERO; 9],
      full_values: [0.0; 9],
      full_materials: [0; 9],
      half_points: [Vec3A::ZERO; 4],
      half_values: [0.0; 4],
      half_materials: [0; 4],
    }
  }

  /// Sample position by table index (0-12).
  #[inline]
  pub fn point(&self, sample: usize) -> Vec3A {
    if sample < 9 {
      self.full_points[sample]
    } else {
      self.half_points[sample - 9]
    }
  }

  /// Sample density by table index (0-12).
  #[inline]
  pub fn value(&self, sample: usize) -> f32 {
    if sample < 9 {
      self.full_values[sample]
    } else {
      self.half_values[sample - 9]
    }
  }

  /// Sample material by table index (0-12).
  #[inline]
  pub fn material(&self, sample: usize) -> MaterialId {
    if sample < 9 {
      self.full_materials[sample]
    } else {
      self.half_materials[sample - 9]
    }
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Mesh generation result, fully expanded: every triangle owns three fresh
/// corners so per-corner blend attributes never bleed across triangles.
///
/// All buffers are parallel over corners; `indices` is the identity sequence
/// `0..corner_count`.
#[derive(Default)]
pub struct MeshOutput {
  /// Corner positions, xyz interleaved, scaled by 2^level_of_detail.
  pub positions: Vec<f32>,

  /// Corner normals, xyz interleaved, unit length.
  pub normals: Vec<f32>,

  /// Corner texture coordinates, uv interleaved (dominant-axis planar
  /// projection).
  pub uvs: Vec<f32>,

  /// Triangle indices (identity, 3 per triangle).
  pub indices: Vec<u32>,

  /// Per corner, the owning triangle's three material ids.
  pub material_samples: Vec<f32>,

  /// Per corner, one-hot weights selecting this corner's entry of
  /// `material_samples` (each triple sums to 1.0).
  pub blend_ratios: Vec<f32>,

  /// Bounding box encompassing all corner positions.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
