//! Volume layout constants for 16³ voxel chunks.
//!
//! A chunk owns 16 cells per axis and stores 17 density samples per axis:
//! the +1 sample on each positive face is shared with the neighboring chunk
//! so cell 15 has its far corners without a fetch across chunks.
//!
//! # Density Volume Layout
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                       DENSITY VOLUME LAYOUT                        │
//! ├────────────────────────────────────────────────────────────────────┤
//! │                                                                    │
//! │  Sample index:  0     1     2    ...    14    15    16             │
//! │                 │     │                       │     │              │
//! │                 │     └──── 14 interior ──────┘     │              │
//! │                 │          cells (1-14)             │              │
//! │                 │                                   │              │
//! │                 └─ boundary layer                   └─ shared +1   │
//! │                    (face passes)                       sample      │
//! │                                                                    │
//! ├────────────────────────────────────────────────────────────────────┤
//! │  Region Breakdown:                                                 │
//! │                                                                    │
//! │  [0]       Negative boundary layer - meshed by the face passes     │
//! │  [1-14]    Interior cell origins (meshed by the interior pass)     │
//! │  [15]      Positive boundary layer - meshed by the face passes     │
//! │  [16]      Shared sample from the positive neighbor (+1 corner)    │
//! │                                                                    │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Boundary layers are meshed per face so a half-resolution neighbor can be
//! stitched with transition cells instead of full-width cells.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//! ```
//!
//! Positive density is solid, negative is air; the surface sits at
//! [`ISO_LEVEL`].

/// Voxel cells per chunk axis.
pub const CHUNK_DIM: usize = 16;

/// Density samples per chunk axis (cells + shared positive-face sample).
pub const CHUNK_GRID_SIZE: usize = CHUNK_DIM + 1;

/// Total samples in a chunk volume (17³).
pub const CHUNK_GRID_CB: usize = CHUNK_GRID_SIZE * CHUNK_GRID_SIZE * CHUNK_GRID_SIZE;

/// Samples per axis of a double-resolution neighbor face (2·16 + 1).
pub const FACE_GRID_SIZE: usize = 2 * CHUNK_DIM + 1;

/// Total samples in one neighbor face (33²).
pub const FACE_GRID_SQ: usize = FACE_GRID_SIZE * FACE_GRID_SIZE;

/// Density threshold the surface is extracted at.
pub const ISO_LEVEL: f32 = 0.0;

/// Below this sample difference the crossing point falls back to the edge
/// midpoint instead of dividing by a near-zero denominator.
pub const MIN_SAMPLE_DELTA: f32 = 1e-5;

/// Fraction of a cell occupied by the transition layer on a stitched face.
/// Must stay inside (0, 1); larger values show more of the high-res neighbor.
pub const TRANSITION_CELL_WIDTH: f32 = 0.5;

/// Convert 3D sample coordinates to a linear volume index.
///
/// Layout: X is the major axis (stride 17²), Y is middle (stride 17), Z is
/// minor (stride 1).
#[inline(always)]
pub const fn grid_index(x: usize, y: usize, z: usize) -> usize {
  (x * CHUNK_GRID_SIZE + y) * CHUNK_GRID_SIZE + z
}

/// Convert 2D face coordinates to a linear face index.
#[inline(always)]
pub const fn face_index(u: usize, v: usize) -> usize {
  u * FACE_GRID_SIZE + v
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
