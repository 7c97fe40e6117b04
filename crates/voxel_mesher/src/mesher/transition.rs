//! Transition cell polygonizer for half-resolution face stitching.
//!
//! A transition cell bridges one coarse face cell to the 2×2 high-res cells
//! of the neighbor behind it. Its 9-bit case is built from the nine full-res
//! samples alone; the four half-res samples only feed interpolation.

use glam::Vec3A;
use tracing::trace;

use crate::constants::ISO_LEVEL;
use crate::error::MeshError;
use crate::transition_tables::{
  TRANSITION_CELL_CLASS, TRANSITION_CELL_DATA, TRANSITION_CORNER_DATA, TRANSITION_VERTEX_DATA,
  TransitionVertexCode,
};
use crate::types::{MaterialId, TransitionCell};

use super::cell::triangle_normal;
use super::interp::interpolate;
use super::working_mesh::WorkingMesh;

/// Full-res sample index contributing each of the nine case bits, in bit
/// order. The walk rings the face perimeter before ending on the center.
const CASE_BIT_SAMPLES: [usize; 9] = [0, 1, 2, 5, 8, 7, 6, 3, 4];

/// Per-cell vertex slots, reused across cells within one generation call.
///
/// Slots stay unfilled when their sample pair never crosses the surface;
/// triangles referencing an unfilled slot are dropped.
pub struct TransitionScratch {
  vert_list: [Option<Vec3A>; 13],
  materials: [MaterialId; 13],
}

impl TransitionScratch {
  pub fn new() -> Self {
    Self {
      vert_list: [None; 13],
      materials: [0; 13],
    }
  }

  fn reset(&mut self) {
    self.vert_list = [None; 13];
    self.materials = [0; 13];
  }
}

impl Default for TransitionScratch {
  fn default() -> Self {
    Self::new()
  }
}

/// Triangulate one transition cell into `mesh`. Returns the number of
/// triangles emitted.
pub fn polygonize_transition(
  cell: &TransitionCell,
  mesh: &mut WorkingMesh,
  scratch: &mut TransitionScratch,
  reverse_winding: bool,
) -> Result<u32, MeshError> {
  let mut case_index = 0usize;
  for (bit, &sample) in CASE_BIT_SAMPLES.iter().enumerate() {
    if cell.full_values[sample] < ISO_LEVEL {
      case_index |= 1 << bit;
    }
  }

  // Face entirely in or out of the surface.
  if case_index == 0 || case_index == 511 {
    return Ok(0);
  }

  let cell_class = TRANSITION_CELL_CLASS[case_index];
  // The class table's winding bit assumes an upright cell frame; a
  // mirror-handed cell construction flips it.
  let reverse = (cell_class & 0x80 != 0) != reverse_winding;
  let data = &TRANSITION_CELL_DATA[(cell_class & 0x7F) as usize];

  scratch.reset();
  for (slot, &raw) in TRANSITION_VERTEX_DATA[case_index].iter().enumerate() {
    let code = TransitionVertexCode(raw);
    let first = code.first_sample();
    let second = code.second_sample();
    let first_value = cell.value(first);
    let second_value = cell.value(second);

    // Zero against zero-or-negative: the edge lies on the air side and
    // produces no surface vertex.
    if first_value <= ISO_LEVEL && second_value <= ISO_LEVEL {
      continue;
    }

    if code.is_new_interior_vertex() {
      trace!(slot, "new interior transition vertex");
    }

    let point = interpolate(
      cell.point(first),
      cell.point(second),
      first_value,
      second_value,
    )
    .map_err(|_| MeshError::TransitionCellInvariant {
      case_index,
      first_sample: first,
      second_sample: second,
      first_value,
      second_value,
      full_values: cell.full_values,
      half_values: cell.half_values,
    })?;

    scratch.vert_list[slot] = Some(point);
    scratch.materials[slot] = if first_value > ISO_LEVEL {
      cell.material(first)
    } else {
      cell.material(second)
    };
  }

  let mut emitted = 0u32;
  for tri in data.triangles() {
    let (Some(v0), Some(v1), Some(v2)) = (
      scratch.vert_list[tri[0]],
      scratch.vert_list[tri[1]],
      scratch.vert_list[tri[2]],
    ) else {
      continue;
    };

    trace!(
      reuse0 = TRANSITION_CORNER_DATA[tri[0]].reuse_index(),
      reuse1 = TRANSITION_CORNER_DATA[tri[1]].reuse_index(),
      reuse2 = TRANSITION_CORNER_DATA[tri[2]].reuse_index(),
      "transition triangle slots"
    );

    let mut indices = [
      mesh.get_or_insert(v0),
      mesh.get_or_insert(v1),
      mesh.get_or_insert(v2),
    ];
    let mut materials = [
      scratch.materials[tri[0]],
      scratch.materials[tri[1]],
      scratch.materials[tri[2]],
    ];
    if reverse {
      indices.swap(0, 2);
      materials.swap(0, 2);
    }

    let face_normal = triangle_normal(
      mesh.vertices[indices[0] as usize],
      mesh.vertices[indices[1] as usize],
      mesh.vertices[indices[2] as usize],
    )?;
    for &index in &indices {
      mesh.accumulate_normal(index, face_normal);
    }

    mesh.add_triangle(indices, materials);
    emitted += 1;
  }

  trace!(case_index, emitted, "transition cell polygonized");
  Ok(emitted)
}

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;
