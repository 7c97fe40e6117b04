//! Chunk mesh assembly.
//!
//! A chunk is meshed in one pass over three regions:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        CHUNK MESHING PASSES                      │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │   ┌───┬──────────────────────────────┬───┐                       │
//! │   │ F │                              │ F │   F = face layer      │
//! │   ├───┤                              ├───┤       (cells 0 / 15)  │
//! │   │   │                              │   │                       │
//! │   │ F │     interior cells 1-14      │ F │   Face layers mesh    │
//! │   │   │                              │   │   full-width cells,   │
//! │   ├───┤                              ├───┤   or transition +     │
//! │   │ F │                              │ F │   half-width cells    │
//! │   └───┴──────────────────────────────┴───┘   when the neighbor   │
//! │                                              is higher detail    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On a stitched face each coarse face cell becomes two pieces: a
//! transition cell spanning the outer `TRANSITION_CELL_WIDTH` of the cell
//! against the neighbor's double-resolution samples, and a half-width
//! regular cell bridging the remaining interior span. Face layers shrink by
//! one cell along any tangential side that is itself stitched, so corner
//! strips are meshed exactly once.
//!
//! Everything funnels into one [`WorkingMesh`] whose quantized vertex map
//! welds coincident vertices across all passes, then exports through
//! [`flatten`] as fully-expanded buffers.

mod cell;
mod flatten;
mod interp;
mod transition;
mod working_mesh;

pub use cell::{CellScratch, polygonize_cell};
pub use interp::interpolate;
pub use transition::{TransitionScratch, polygonize_transition};
pub use working_mesh::WorkingMesh;

use std::ops::Range;

use glam::Vec3A;
use tracing::debug;

use crate::constants::{CHUNK_GRID_SIZE, TRANSITION_CELL_WIDTH, face_index, grid_index};
use crate::error::MeshError;
use crate::types::{ChunkVolume, FaceDir, FaceSamples, GridCell, MeshOutput, TransitionCell};

/// Mesh one chunk volume.
///
/// Runs the interior pass and all six face passes, then exports. All
/// scratch state lives in this call frame, so distinct chunks can be meshed
/// concurrently.
pub fn generate(volume: &ChunkVolume) -> Result<MeshOutput, MeshError> {
  let _span = tracing::info_span!("generate_chunk_mesh").entered();

  let any_face = volume.faces.iter().any(|f| f.is_some());
  if !any_face && volume.is_uniform() {
    return Ok(MeshOutput::new());
  }

  let mut mesh = WorkingMesh::new();
  let mut scratch = CellScratch::new();
  let mut transition_scratch = TransitionScratch::new();

  // Interior cells; the outermost shell belongs to the face passes.
  mesh_slab(
    volume,
    1..CHUNK_GRID_SIZE - 2,
    1..CHUNK_GRID_SIZE - 2,
    1..CHUNK_GRID_SIZE - 2,
    &mut mesh,
    &mut scratch,
  )?;
  debug!(triangles = mesh.triangle_count(), "interior pass complete");

  let x_range = layer_range(volume, FaceDir::XNeg, FaceDir::XPos);
  let y_range = layer_range(volume, FaceDir::YNeg, FaceDir::YPos);
  let z_range = layer_range(volume, FaceDir::ZNeg, FaceDir::ZPos);
  let last = CHUNK_GRID_SIZE - 2;

  if let Some(face) = volume.face(FaceDir::XPos) {
    stitch_x_positive(
      volume,
      face,
      y_range.clone(),
      z_range.clone(),
      &mut mesh,
      &mut scratch,
      &mut transition_scratch,
    )?;
  } else {
    mesh_slab(
      volume,
      last..last + 1,
      y_range.clone(),
      z_range.clone(),
      &mut mesh,
      &mut scratch,
    )?;
  }

  if let Some(face) = volume.face(FaceDir::XNeg) {
    stitch_x_negative(
      volume,
      face,
      y_range.clone(),
      z_range.clone(),
      &mut mesh,
      &mut scratch,
      &mut transition_scratch,
    )?;
  } else {
    mesh_slab(
      volume,
      0..1,
      y_range.clone(),
      z_range.clone(),
      &mut mesh,
      &mut scratch,
    )?;
  }

  if let Some(face) = volume.face(FaceDir::YPos) {
    stitch_y_positive(
      volume,
      face,
      x_range.clone(),
      z_range.clone(),
      &mut mesh,
      &mut scratch,
      &mut transition_scratch,
    )?;
  } else {
    mesh_slab(
      volume,
      x_range.clone(),
      last..last + 1,
      z_range.clone(),
      &mut mesh,
      &mut scratch,
    )?;
  }

  if let Some(face) = volume.face(FaceDir::YNeg) {
    stitch_y_negative(
      volume,
      face,
      x_range.clone(),
      z_range.clone(),
      &mut mesh,
      &mut scratch,
      &mut transition_scratch,
    )?;
  } else {
    mesh_slab(
      volume,
      x_range.clone(),
      0..1,
      z_range.clone(),
      &mut mesh,
      &mut scratch,
    )?;
  }

  if let Some(face) = volume.face(FaceDir::ZPos) {
    stitch_z_positive(
      volume,
      face,
      x_range.clone(),
      y_range.clone(),
      &mut mesh,
      &mut scratch,
      &mut transition_scratch,
    )?;
  } else {
    mesh_slab(
      volume,
      x_range.clone(),
      y_range.clone(),
      last..last + 1,
      &mut mesh,
      &mut scratch,
    )?;
  }

  if let Some(face) = volume.face(FaceDir::ZNeg) {
    stitch_z_negative(
      volume,
      face,
      x_range.clone(),
      y_range.clone(),
      &mut mesh,
      &mut scratch,
      &mut transition_scratch,
    )?;
  } else {
    mesh_slab(volume, x_range, y_range, 0..1, &mut mesh, &mut scratch)?;
  }

  debug!(
    triangles = mesh.triangle_count(),
    vertices = mesh.vertex_count(),
    "chunk mesh assembled"
  );

  flatten::flatten(&mesh, volume.level_of_detail)
}

/// Cell range for one axis of a face layer: the layer pulls in by one cell
/// on a side whose own neighbor face is stitched.
fn layer_range(volume: &ChunkVolume, negative: FaceDir, positive: FaceDir) -> Range<usize> {
  let start = if volume.face(negative).is_some() { 1 } else { 0 };
  let end = if volume.face(positive).is_some() {
    CHUNK_GRID_SIZE - 2
  } else {
    CHUNK_GRID_SIZE - 1
  };
  start..end
}

/// Full-width cell at grid position (x, y, z), corners in the fixed
/// marching order.
fn fill_grid_cell(volume: &ChunkVolume, x: usize, y: usize, z: usize) -> GridCell {
  let corners = [
    (x, y, z),
    (x, y, z + 1),
    (x + 1, y, z + 1),
    (x + 1, y, z),
    (x, y + 1, z),
    (x, y + 1, z + 1),
    (x + 1, y + 1, z + 1),
    (x + 1, y + 1, z),
  ];
  let mut cell = GridCell::empty();
  for (i, (cx, cy, cz)) in corners.into_iter().enumerate() {
    let index = grid_index(cx, cy, cz);
    cell.points[i] = Vec3A::new(cx as f32, cy as f32, cz as f32);
    cell.values[i] = volume.density[index];
    cell.materials[i] = volume.material[index];
  }
  cell
}

/// Mesh a rectangular block of full-width cells.
fn mesh_slab(
  volume: &ChunkVolume,
  xs: Range<usize>,
  ys: Range<usize>,
  zs: Range<usize>,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
) -> Result<(), MeshError> {
  for x in xs {
    for y in ys.clone() {
      for z in zs.clone() {
        let cell = fill_grid_cell(volume, x, y, z);
        polygonize_cell(&cell, mesh, scratch, false)?;
      }
    }
  }
  Ok(())
}

/// Sample offsets within one coarse cell: corner, transition midline,
/// far corner.
const SUB_OFFSETS: [f32; 3] = [0.0, TRANSITION_CELL_WIDTH, 1.0];

fn stitch_x_positive(
  volume: &ChunkVolume,
  face: &FaceSamples,
  ys: Range<usize>,
  zs: Range<usize>,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
  transition_scratch: &mut TransitionScratch,
) -> Result<(), MeshError> {
  let x = CHUNK_GRID_SIZE - 2;
  let xf = x as f32;
  let t = TRANSITION_CELL_WIDTH;
  let mut tcell = TransitionCell::empty();
  let mut half_cell = GridCell::empty();

  for y in ys {
    for z in zs.clone() {
      let (yf, zf) = (y as f32, z as f32);

      // Transition cell: full-res grid on the boundary plane, half-res
      // grid pulled in by the transition width.
      for i in 0..3 {
        for j in 0..3 {
          let s = i * 3 + j;
          let fi = face_index(2 * y + j, 2 * z + i);
          tcell.full_points[s] = Vec3A::new(xf + 1.0, yf + SUB_OFFSETS[j], zf + SUB_OFFSETS[i]);
          tcell.full_values[s] = face.density[fi];
          tcell.full_materials[s] = face.material[fi];
        }
      }
      let half = [
        (yf, zf, face_index(2 * y, 2 * z)),
        (yf + 1.0, zf, face_index(2 * y + 2, 2 * z)),
        (yf, zf + 1.0, face_index(2 * y, 2 * z + 2)),
        (yf + 1.0, zf + 1.0, face_index(2 * y + 2, 2 * z + 2)),
      ];
      for (s, (hy, hz, fi)) in half.into_iter().enumerate() {
        tcell.half_points[s] = Vec3A::new(xf + t, hy, hz);
        tcell.half_values[s] = face.density[fi];
        tcell.half_materials[s] = face.material[fi];
      }
      polygonize_transition(&tcell, mesh, transition_scratch, false)?;

      // Companion half-width cell from the interior sample plane to the
      // transition layer.
      let gv = |cx, cy, cz| volume.density[grid_index(cx, cy, cz)];
      let gm = |cx, cy, cz| volume.material[grid_index(cx, cy, cz)];
      let fv = |u, v| face.density[face_index(u, v)];
      let fm = |u, v| face.material[face_index(u, v)];
      half_cell.points = [
        Vec3A::new(xf, yf, zf),
        Vec3A::new(xf, yf, zf + 1.0),
        Vec3A::new(xf + t, yf, zf + 1.0),
        Vec3A::new(xf + t, yf, zf),
        Vec3A::new(xf, yf + 1.0, zf),
        Vec3A::new(xf, yf + 1.0, zf + 1.0),
        Vec3A::new(xf + t, yf + 1.0, zf + 1.0),
        Vec3A::new(xf + t, yf + 1.0, zf),
      ];
      half_cell.values = [
        gv(x, y, z),
        gv(x, y, z + 1),
        fv(2 * y, 2 * z + 2),
        fv(2 * y, 2 * z),
        gv(x, y + 1, z),
        gv(x, y + 1, z + 1),
        fv(2 * y + 2, 2 * z + 2),
        fv(2 * y + 2, 2 * z),
      ];
      half_cell.materials = [
        gm(x, y, z),
        gm(x, y, z + 1),
        fm(2 * y, 2 * z + 2),
        fm(2 * y, 2 * z),
        gm(x, y + 1, z),
        gm(x, y + 1, z + 1),
        fm(2 * y + 2, 2 * z + 2),
        fm(2 * y + 2, 2 * z),
      ];
      polygonize_cell(&half_cell, mesh, scratch, false)?;
    }
  }
  Ok(())
}

fn stitch_x_negative(
  volume: &ChunkVolume,
  face: &FaceSamples,
  ys: Range<usize>,
  zs: Range<usize>,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
  transition_scratch: &mut TransitionScratch,
) -> Result<(), MeshError> {
  let x = 0;
  let xf = 0.0;
  let t = TRANSITION_CELL_WIDTH;
  let mut tcell = TransitionCell::empty();
  let mut half_cell = GridCell::empty();

  for y in ys {
    for z in zs.clone() {
      let (yf, zf) = (y as f32, z as f32);

      for i in 0..3 {
        for j in 0..3 {
          let s = i * 3 + j;
          let fi = face_index(2 * y + j, 2 * z + i);
          tcell.full_points[s] = Vec3A::new(xf, yf + SUB_OFFSETS[j], zf + SUB_OFFSETS[i]);
          tcell.full_values[s] = face.density[fi];
          tcell.full_materials[s] = face.material[fi];
        }
      }
      let half = [
        (yf, zf, face_index(2 * y, 2 * z)),
        (yf + 1.0, zf, face_index(2 * y + 2, 2 * z)),
        (yf, zf + 1.0, face_index(2 * y, 2 * z + 2)),
        (yf + 1.0, zf + 1.0, face_index(2 * y + 2, 2 * z + 2)),
      ];
      for (s, (hy, hz, fi)) in half.into_iter().enumerate() {
        tcell.half_points[s] = Vec3A::new(xf + t, hy, hz);
        tcell.half_values[s] = face.density[fi];
        tcell.half_materials[s] = face.material[fi];
      }
      // The cell frame is mirror-handed on this side of the chunk.
      polygonize_transition(&tcell, mesh, transition_scratch, true)?;

      let gv = |cx, cy, cz| volume.density[grid_index(cx, cy, cz)];
      let gm = |cx, cy, cz| volume.material[grid_index(cx, cy, cz)];
      let fv = |u, v| face.density[face_index(u, v)];
      let fm = |u, v| face.material[face_index(u, v)];
      half_cell.points = [
        Vec3A::new(xf + t, yf, zf),
        Vec3A::new(xf + t, yf, zf + 1.0),
        Vec3A::new(xf + 1.0, yf, zf + 1.0),
        Vec3A::new(xf + 1.0, yf, zf),
        Vec3A::new(xf + t, yf + 1.0, zf),
        Vec3A::new(xf + t, yf + 1.0, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + 1.0, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + 1.0, zf),
      ];
      half_cell.values = [
        fv(2 * y, 2 * z),
        fv(2 * y, 2 * z + 2),
        gv(x + 1, y, z + 1),
        gv(x + 1, y, z),
        fv(2 * y + 2, 2 * z),
        fv(2 * y + 2, 2 * z + 2),
        gv(x + 1, y + 1, z + 1),
        gv(x + 1, y + 1, z),
      ];
      half_cell.materials = [
        fm(2 * y, 2 * z),
        fm(2 * y, 2 * z + 2),
        gm(x + 1, y, z + 1),
        gm(x + 1, y, z),
        fm(2 * y + 2, 2 * z),
        fm(2 * y + 2, 2 * z + 2),
        gm(x + 1, y + 1, z + 1),
        gm(x + 1, y + 1, z),
      ];
      polygonize_cell(&half_cell, mesh, scratch, false)?;
    }
  }
  Ok(())
}

fn stitch_y_positive(
  volume: &ChunkVolume,
  face: &FaceSamples,
  xs: Range<usize>,
  zs: Range<usize>,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
  transition_scratch: &mut TransitionScratch,
) -> Result<(), MeshError> {
  let y = CHUNK_GRID_SIZE - 2;
  let yf = y as f32;
  let t = TRANSITION_CELL_WIDTH;
  let mut tcell = TransitionCell::empty();
  let mut half_cell = GridCell::empty();

  for x in xs {
    for z in zs.clone() {
      let (xf, zf) = (x as f32, z as f32);

      for i in 0..3 {
        for j in 0..3 {
          let s = i * 3 + j;
          let fi = face_index(2 * x + j, 2 * z + i);
          tcell.full_points[s] = Vec3A::new(xf + SUB_OFFSETS[j], yf + 1.0, zf + SUB_OFFSETS[i]);
          tcell.full_values[s] = face.density[fi];
          tcell.full_materials[s] = face.material[fi];
        }
      }
      let half = [
        (xf, zf, face_index(2 * x, 2 * z)),
        (xf + 1.0, zf, face_index(2 * x + 2, 2 * z)),
        (xf, zf + 1.0, face_index(2 * x, 2 * z + 2)),
        (xf + 1.0, zf + 1.0, face_index(2 * x + 2, 2 * z + 2)),
      ];
      for (s, (hx, hz, fi)) in half.into_iter().enumerate() {
        tcell.half_points[s] = Vec3A::new(hx, yf + t, hz);
        tcell.half_values[s] = face.density[fi];
        tcell.half_materials[s] = face.material[fi];
      }
      // The cell frame is mirror-handed on this side of the chunk.
      polygonize_transition(&tcell, mesh, transition_scratch, true)?;

      let gv = |cx, cy, cz| volume.density[grid_index(cx, cy, cz)];
      let gm = |cx, cy, cz| volume.material[grid_index(cx, cy, cz)];
      let fv = |u, v| face.density[face_index(u, v)];
      let fm = |u, v| face.material[face_index(u, v)];
      half_cell.points = [
        Vec3A::new(xf, yf, zf),
        Vec3A::new(xf, yf, zf + 1.0),
        Vec3A::new(xf + 1.0, yf, zf + 1.0),
        Vec3A::new(xf + 1.0, yf, zf),
        Vec3A::new(xf, yf + t, zf),
        Vec3A::new(xf, yf + t, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + t, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + t, zf),
      ];
      half_cell.values = [
        gv(x, y, z),
        gv(x, y, z + 1),
        gv(x + 1, y, z + 1),
        gv(x + 1, y, z),
        fv(2 * x, 2 * z),
        fv(2 * x, 2 * z + 2),
        fv(2 * x + 2, 2 * z + 2),
        fv(2 * x + 2, 2 * z),
      ];
      half_cell.materials = [
        gm(x, y, z),
        gm(x, y, z + 1),
        gm(x + 1, y, z + 1),
        gm(x + 1, y, z),
        fm(2 * x, 2 * z),
        fm(2 * x, 2 * z + 2),
        fm(2 * x + 2, 2 * z + 2),
        fm(2 * x + 2, 2 * z),
      ];
      polygonize_cell(&half_cell, mesh, scratch, false)?;
    }
  }
  Ok(())
}

fn stitch_y_negative(
  volume: &ChunkVolume,
  face: &FaceSamples,
  xs: Range<usize>,
  zs: Range<usize>,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
  transition_scratch: &mut TransitionScratch,
) -> Result<(), MeshError> {
  let y = 0;
  let yf = 0.0;
  let t = TRANSITION_CELL_WIDTH;
  let mut tcell = TransitionCell::empty();
  let mut half_cell = GridCell::empty();

  for x in xs {
    for z in zs.clone() {
      let (xf, zf) = (x as f32, z as f32);

      for i in 0..3 {
        for j in 0..3 {
          let s = i * 3 + j;
          let fi = face_index(2 * x + j, 2 * z + i);
          tcell.full_points[s] = Vec3A::new(xf + SUB_OFFSETS[j], yf, zf + SUB_OFFSETS[i]);
          tcell.full_values[s] = face.density[fi];
          tcell.full_materials[s] = face.material[fi];
        }
      }
      let half = [
        (xf, zf, face_index(2 * x, 2 * z)),
        (xf + 1.0, zf, face_index(2 * x + 2, 2 * z)),
        (xf, zf + 1.0, face_index(2 * x, 2 * z + 2)),
        (xf + 1.0, zf + 1.0, face_index(2 * x + 2, 2 * z + 2)),
      ];
      for (s, (hx, hz, fi)) in half.into_iter().enumerate() {
        tcell.half_points[s] = Vec3A::new(hx, yf + t, hz);
        tcell.half_values[s] = face.density[fi];
        tcell.half_materials[s] = face.material[fi];
      }
      polygonize_transition(&tcell, mesh, transition_scratch, false)?;

      let gv = |cx, cy, cz| volume.density[grid_index(cx, cy, cz)];
      let gm = |cx, cy, cz| volume.material[grid_index(cx, cy, cz)];
      let fv = |u, v| face.density[face_index(u, v)];
      let fm = |u, v| face.material[face_index(u, v)];
      half_cell.points = [
        Vec3A::new(xf, yf + 1.0, zf),
        Vec3A::new(xf, yf + 1.0, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + 1.0, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + 1.0, zf),
        Vec3A::new(xf, yf + t, zf),
        Vec3A::new(xf, yf + t, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + t, zf + 1.0),
        Vec3A::new(xf + 1.0, yf + t, zf),
      ];
      half_cell.values = [
        gv(x, y + 1, z),
        gv(x, y + 1, z + 1),
        gv(x + 1, y + 1, z + 1),
        gv(x + 1, y + 1, z),
        fv(2 * x, 2 * z),
        fv(2 * x, 2 * z + 2),
        fv(2 * x + 2, 2 * z + 2),
        fv(2 * x + 2, 2 * z),
      ];
      half_cell.materials = [
        gm(x, y + 1, z),
        gm(x, y + 1, z + 1),
        gm(x + 1, y + 1, z + 1),
        gm(x + 1, y + 1, z),
        fm(2 * x, 2 * z),
        fm(2 * x, 2 * z + 2),
        fm(2 * x + 2, 2 * z + 2),
        fm(2 * x + 2, 2 * z),
      ];
      // Corner rings are stacked top-down here, mirroring the cell frame.
      polygonize_cell(&half_cell, mesh, scratch, true)?;
    }
  }
  Ok(())
}

fn stitch_z_positive(
  volume: &ChunkVolume,
  face: &FaceSamples,
  xs: Range<usize>,
  ys: Range<usize>,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
  transition_scratch: &mut TransitionScratch,
) -> Result<(), MeshError> {
  let z = CHUNK_GRID_SIZE - 2;
  let zf = z as f32;
  let t = TRANSITION_CELL_WIDTH;
  let mut tcell = TransitionCell::empty();
  let mut half_cell = GridCell::empty();

  for x in xs {
    for y in ys.clone() {
      let (xf, yf) = (x as f32, y as f32);

      for i in 0..3 {
        for j in 0..3 {
          let s = i * 3 + j;
          let fi = face_index(2 * x + i, 2 * y + j);
          tcell.full_points[s] = Vec3A::new(xf + SUB_OFFSETS[i], yf + SUB_OFFSETS[j], zf + 1.0);
          tcell.full_values[s] = face.density[fi];
          tcell.full_materials[s] = face.material[fi];
        }
      }
      let half = [
        (xf, yf, face_index(2 * x, 2 * y)),
        (xf, yf + 1.0, face_index(2 * x, 2 * y + 2)),
        (xf + 1.0, yf, face_index(2 * x + 2, 2 * y)),
        (xf + 1.0, yf + 1.0, face_index(2 * x + 2, 2 * y + 2)),
      ];
      for (s, (hx, hy, fi)) in half.into_iter().enumerate() {
        tcell.half_points[s] = Vec3A::new(hx, hy, zf + t);
        tcell.half_values[s] = face.density[fi];
        tcell.half_materials[s] = face.material[fi];
      }
      // The cell frame is mirror-handed on this side of the chunk.
      polygonize_transition(&tcell, mesh, transition_scratch, true)?;

      let gv = |cx, cy, cz| volume.density[grid_index(cx, cy, cz)];
      let gm = |cx, cy, cz| volume.material[grid_index(cx, cy, cz)];
      let fv = |u, v| face.density[face_index(u, v)];
      let fm = |u, v| face.material[face_index(u, v)];
      half_cell.points = [
        Vec3A::new(xf, yf, zf),
        Vec3A::new(xf, yf, zf + t),
        Vec3A::new(xf + 1.0, yf, zf + t),
        Vec3A::new(xf + 1.0, yf, zf),
        Vec3A::new(xf, yf + 1.0, zf),
        Vec3A::new(xf, yf + 1.0, zf + t),
        Vec3A::new(xf + 1.0, yf + 1.0, zf + t),
        Vec3A::new(xf + 1.0, yf + 1.0, zf),
      ];
      half_cell.values = [
        gv(x, y, z),
        fv(2 * x, 2 * y),
        fv(2 * x + 2, 2 * y),
        gv(x + 1, y, z),
        gv(x, y + 1, z),
        fv(2 * x, 2 * y + 2),
        fv(2 * x + 2, 2 * y + 2),
        gv(x + 1, y + 1, z),
      ];
      half_cell.materials = [
        gm(x, y, z),
        fm(2 * x, 2 * y),
        fm(2 * x + 2, 2 * y),
        gm(x + 1, y, z),
        gm(x, y + 1, z),
        fm(2 * x, 2 * y + 2),
        fm(2 * x + 2, 2 * y + 2),
        gm(x + 1, y + 1, z),
      ];
      polygonize_cell(&half_cell, mesh, scratch, false)?;
    }
  }
  Ok(())
}

fn stitch_z_negative(
  volume: &ChunkVolume,
  face: &FaceSamples,
  xs: Range<usize>,
  ys: Range<usize>,
  mesh: &mut WorkingMesh,
  scratch: &mut CellScratch,
  transition_scratch: &mut TransitionScratch,
) -> Result<(), MeshError> {
  let z = 0;
  let zf = 0.0;
  let t = TRANSITION_CELL_WIDTH;
  let mut tcell = TransitionCell::empty();
  let mut half_cell = GridCell::empty();

  for x in xs {
    for y in ys.clone() {
      let (xf, yf) = (x as f32, y as f32);

      for i in 0..3 {
        for j in 0..3 {
          let s = i * 3 + j;
          let fi = face_index(2 * x + i, 2 * y + j);
          tcell.full_points[s] = Vec3A::new(xf + SUB_OFFSETS[i], yf + SUB_OFFSETS[j], zf);
          tcell.full_values[s] = face.density[fi];
          tcell.full_materials[s] = face.material[fi];
        }
      }
      let half = [
        (xf, yf, face_index(2 * x, 2 * y)),
        (xf, yf + 1.0, face_index(2 * x, 2 * y + 2)),
        (xf + 1.0, yf, face_index(2 * x + 2, 2 * y)),
        (xf + 1.0, yf + 1.0, face_index(2 * x + 2, 2 * y + 2)),
      ];
      for (s, (hx, hy, fi)) in half.into_iter().enumerate() {
        tcell.half_points[s] = Vec3A::new(hx, hy, zf + t);
        tcell.half_values[s] = face.density[fi];
        tcell.half_materials[s] = face.material[fi];
      }
      polygonize_transition(&tcell, mesh, transition_scratch, false)?;

      let gv = |cx, cy, cz| volume.density[grid_index(cx, cy, cz)];
      let gm = |cx, cy, cz| volume.material[grid_index(cx, cy, cz)];
      let fv = |u, v| face.density[face_index(u, v)];
      let fm = |u, v| face.material[face_index(u, v)];
      half_cell.points = [
        Vec3A::new(xf, yf, zf + 1.0),
        Vec3A::new(xf, yf, zf + t),
        Vec3A::new(xf + 1.0, yf, zf + t),
        Vec3A::new(xf + 1.0, yf, zf + 1.0),
        Vec3A::new(xf, yf + 1.0, zf + 1.0),
        Vec3A::new(xf, yf + 1.0, zf + t),
        Vec3A::new(xf + 1.0, yf + 1.0, zf + t),
        Vec3A::new(xf + 1.0, yf + 1.0, zf + 1.0),
      ];
      half_cell.values = [
        gv(x, y, z + 1),
        fv(2 * x, 2 * y),
        fv(2 * x + 2, 2 * y),
        gv(x + 1, y, z + 1),
        gv(x, y + 1, z + 1),
        fv(2 * x, 2 * y + 2),
        fv(2 * x + 2, 2 * y + 2),
        gv(x + 1, y + 1, z + 1),
      ];
      half_cell.materials = [
        gm(x, y, z + 1),
        fm(2 * x, 2 * y),
        fm(2 * x + 2, 2 * y),
        gm(x + 1, y, z + 1),
        gm(x, y + 1, z + 1),
        fm(2 * x, 2 * y + 2),
        fm(2 * x + 2, 2 * y + 2),
        gm(x + 1, y + 1, z + 1),
      ];
      // The near/far corner rings swap places here, mirroring the cell frame.
      polygonize_cell(&half_cell, mesh, scratch, true)?;
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
