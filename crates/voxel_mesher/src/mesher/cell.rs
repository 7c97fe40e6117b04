//! Full-resolution cell polygonizer (marching cubes).

use glam::Vec3A;
use tracing::trace;

use crate::case_tables::{CELL_EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use crate::constants::ISO_LEVEL;
use crate::error::MeshError;
use crate::types::{GridCell, MaterialId};

use super::interp::interpolate;
use super::working_mesh::WorkingMesh;

/// Per-cell edge state, reused across cells within one generation call.
pub struct CellScratch {
  /// Crossing point per crossed edge.
  vert_list: [Vec3A; 12],
  /// Edges whose endpoints are both non-solid; their crossing points exist
  /// but never enter a triangle.
  skip: [bool; 12],
  /// Material id of the solid endpoint per crossed edge.
  materials: [MaterialId; 12],
}

impl CellScratch {
  pub fn new() -> Self {
    Self {
      vert_list: [Vec3A::ZERO; 12],
      skip: [false; 12],
      materials: [0; 12],
    }
  }
}

impl Default for CellScratch {
  fn default() -> Self {
    Self::new()
  }
}

/// Triangulate one cell into `mesh`. Returns the number of triangles
/// emitted.
pub fn polygonize_cell(
  cell: &GridCell,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
  reverse_winding: bool,
) -> Result<u32, MeshError> {
  let mut case_index = 0usize;
  for corner in 0..8 {
    if cell.values[corner] < ISO_LEVEL {
      case_index |= 1 << corner;
    }
  }

  let edge_mask = EDGE_TABLE[case_index];
  if edge_mask == 0 {
    return Ok(0);
  }

  for edge in 0..12 {
    if edge_mask & (1 << edge) == 0 {
      continue;
    }
    let [a, b] = CELL_EDGE_CORNERS[edge];
    scratch.vert_list[edge] = interpolate(
      cell.points[a],
      cell.points[b],
      cell.values[a],
      cell.values[b],
    )?;
    scratch.skip[edge] = cell.values[a] <= ISO_LEVEL && cell.values[b] <= ISO_LEVEL;
    scratch.materials[edge] = if cell.values[a] > ISO_LEVEL {
      cell.materials[a]
    } else {
      cell.materials[b]
    };
  }

  let mut emitted = 0u32;
  let row = &TRI_TABLE[case_index];
  let mut i = 0;
  while i < row.len() && row[i] != -1 {
    let edges = [row[i] as usize, row[i + 1] as usize, row[i + 2] as usize];
    i += 3;

    // Edges fully on the air side carry no surface.
    if edges.iter().any(|&e| scratch.skip[e]) {
      continue;
    }

    let mut corners = [
      scratch.vert_list[edges[0]],
      scratch.vert_list[edges[1]],
      scratch.vert_list[edges[2]],
    ];
    let mut materials = [
      scratch.materials[edges[0]],
      scratch.materials[edges[1]],
      scratch.materials[edges[2]],
    ];
    // Mirror-handed cell constructions hand in reverse_winding so emitted
    // triangles stay counter-clockwise seen from outside the surface.
    if reverse_winding {
      corners.swap(0, 2);
      materials.swap(0, 2);
    }

    let indices = [
      mesh.get_or_insert(corners[0]),
      mesh.get_or_insert(corners[1]),
      mesh.get_or_insert(corners[2]),
    ];
    if indices[0] == indices[1] || indices[1] == indices[2] || indices[0] == indices[2] {
      return Err(MeshError::DegenerateTriangle {
        case_index,
        edge_mask,
        tri_edges: edges,
        indices,
        vertices: [corners[0].into(), corners[1].into(), corners[2].into()],
        cell_points: cell.points.map(Into::into),
        cell_values: cell.values,
      });
    }

    let face_normal = triangle_normal(corners[0], corners[1], corners[2])?;
    for &index in &indices {
      mesh.accumulate_normal(index, face_normal);
    }

    mesh.add_triangle(indices, materials);
    emitted += 1;
  }

  trace!(case_index, emitted, "cell polygonized");
  Ok(emitted)
}

/// Face normal of the triangle (v0, v1, v2) in its emitted winding order,
/// unit length.
pub(super) fn triangle_normal(v0: Vec3A, v1: Vec3A, v2: Vec3A) -> Result<Vec3A, MeshError> {
  let normal = (v1 - v0).cross(v2 - v1);
  match normal.try_normalize() {
    Some(n) if n.is_finite() => Ok(n),
    _ => Err(MeshError::NonFiniteNormal {
      triangle: [v0.into(), v1.into(), v2.into()],
    }),
  }
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;
