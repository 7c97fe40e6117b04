//! Fatal meshing errors.
//!
//! Every variant is an invariant violation in the input volume or the
//! table-driven triangulation, never a recoverable condition. Variants carry
//! the full local sample state so a failure can be reproduced from the log
//! alone.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
  /// A table triple deduplicated to a triangle with repeated indices.
  #[error(
    "degenerate triangle in cell case {case_index:#04x} (edge mask {edge_mask:#05x}, \
     edges {tri_edges:?}): indices {indices:?}, vertices {vertices:?}, \
     corner points {cell_points:?}, corner values {cell_values:?}"
  )]
  DegenerateTriangle {
    case_index: usize,
    edge_mask: u16,
    /// The tri-table triple that produced the collapse.
    tri_edges: [usize; 3],
    indices: [u32; 3],
    vertices: [[f32; 3]; 3],
    cell_points: [[f32; 3]; 8],
    cell_values: [f32; 8],
  },

  /// Both edge endpoints are on the same side of the isosurface.
  #[error(
    "edge interpolation outside the surface: values {v1} and {v2} at {p1:?} / {p2:?} \
     do not straddle the isolevel"
  )]
  InterpolationOutsideSurface {
    p1: [f32; 3],
    p2: [f32; 3],
    v1: f32,
    v2: f32,
  },

  /// A transition-cell vertex referenced a sample pair with no crossing.
  #[error(
    "transition cell case {case_index:#05x}: samples {first_sample} ({first_value}) and \
     {second_sample} ({second_value}) lie on the same side of the isolevel; \
     full-res values {full_values:?}, half-res values {half_values:?}"
  )]
  TransitionCellInvariant {
    case_index: usize,
    first_sample: usize,
    second_sample: usize,
    first_value: f32,
    second_value: f32,
    full_values: [f32; 9],
    half_values: [f32; 4],
  },

  /// A face normal failed to normalize (zero-area or non-finite triangle).
  #[error("non-finite face normal for triangle {triangle:?}")]
  NonFiniteNormal { triangle: [[f32; 3]; 3] },

  /// Vertex and normal buffers diverged before export.
  #[error("vertex/normal count mismatch at export: {vertices} vertices, {normals} normals")]
  CountMismatch { vertices: usize, normals: usize },
}
