//! Transition-cell case tables for half-resolution face stitching.
//!
//! Published table data, reproduced byte for byte. A transition cell samples
//! 13 points: a 3×3 grid on the full-resolution face (samples 0–8) and a 2×2
//! grid on the half-resolution side (samples 9–12).
//!
//! ```text
//!   Full-res face (0-8):        Half-res face (9-12):
//!
//!     6───7───8                    11──────12
//!     │   │   │                    │       │
//!     3───4───5                    │       │
//!     │   │   │                    │       │
//!     0───1───2                    9──────10
//! ```
//!
//! The 9-bit case index is built from the nine full-res samples. It maps
//! through [`TRANSITION_CELL_CLASS`] to one of 56 equivalence classes (high
//! bit set → reverse triangle winding), and the class indexes
//! [`TRANSITION_CELL_DATA`] for the triangulation. [`TRANSITION_VERTEX_DATA`]
//! lists, per case, which sample pair each generated vertex interpolates
//! between.

/// Triangulation data for one transition-cell equivalence class.
pub struct TransitionCellData {
  /// High nibble is the vertex count, low nibble is the triangle count.
  geometry_counts: u8,
  /// Vertex-slot indices, three per triangle.
  vertex_index: &'static [u8],
}

impl TransitionCellData {
  const fn new(geometry_counts: u8, vertex_index: &'static [u8]) -> Self {
    Self {
      geometry_counts,
      vertex_index,
    }
  }

  #[inline]
  pub fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  #[inline]
  pub fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0x0F) as usize
  }

  /// Vertex-slot triples, in winding order for an upright cell.
  #[inline]
  pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
    self
      .vertex_index
      .chunks_exact(3)
      .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
  }
}

/// One packed entry of [`TRANSITION_VERTEX_DATA`].
///
/// Low byte holds the two 4-bit sample indices the vertex interpolates
/// between; high byte holds reuse flags for neighboring cells.
#[derive(Clone, Copy)]
pub struct TransitionVertexCode(pub u16);

impl TransitionVertexCode {
  /// Sample index (0-12) of the first interpolation endpoint.
  #[inline]
  pub fn first_sample(self) -> usize {
    ((self.0 >> 4) & 0xF) as usize
  }

  /// Sample index (0-12) of the second interpolation endpoint.
  #[inline]
  pub fn second_sample(self) -> usize {
    (self.0 & 0xF) as usize
  }

  /// Whether the vertex is newly created on the cell interior rather than
  /// reusable from a preceding cell.
  #[inline]
  pub fn is_new_interior_vertex(self) -> bool {
    (self.0 >> 8) & 0x04 != 0
  }
}

/// Corner reuse code for each of the 13 sample positions.
#[derive(Clone, Copy)]
pub struct TransitionCornerCode(pub u8);

impl TransitionCornerCode {
  /// Direction mask toward the cell that owns the reusable corner vertex.
  #[inline]
  pub fn reuse_direction(self) -> u8 {
    self.0 >> 4
  }

  /// Slot index within the owning cell's reuse storage.
  #[inline]
  pub fn reuse_index(self) -> u8 {
    self.0 & 0xF
  }
}

/// 9-bit case index → equivalence class. Bit 7 set means the class
/// triangulation is used with reversed winding.
pub const TRANSITION_CELL_CLASS: [u8; 512] = [
  0x00, 0x01, 0x02, 0x84, 0x01, 0x05, 0x04, 0x04, 0x02, 0x87, 0x09, 0x8C, 0x84, 0x0B, 0x05, 0x05,
  0x01, 0x08, 0x07, 0x8D, 0x05, 0x0F, 0x8B, 0x0B, 0x04, 0x0D, 0x0C, 0x1C, 0x04, 0x8B, 0x85, 0x85,
  0x02, 0x07, 0x09, 0x8C, 0x87, 0x10, 0x0C, 0x0C, 0x09, 0x12, 0x15, 0x9A, 0x8C, 0x19, 0x90, 0x10,
  0x84, 0x8D, 0x8C, 0x9C, 0x0B, 0x9D, 0x0F, 0x0F, 0x05, 0x1B, 0x10, 0xAC, 0x05, 0x0F, 0x8B, 0x0B,
  0x01, 0x05, 0x87, 0x0B, 0x08, 0x0F, 0x0D, 0x8B, 0x07, 0x10, 0x12, 0x19, 0x8D, 0x9D, 0x1B, 0x0F,
  0x05, 0x0F, 0x10, 0x9D, 0x0F, 0x1E, 0x1D, 0xA1, 0x8B, 0x1D, 0x99, 0x32, 0x0B, 0xA1, 0x8F, 0x94,
  0x04, 0x8B, 0x0C, 0x0F, 0x0D, 0x1D, 0x1C, 0x8F, 0x0C, 0x99, 0x1A, 0x31, 0x1C, 0x32, 0x2C, 0xA7,
  0x04, 0x0B, 0x0C, 0x0F, 0x8B, 0xA1, 0x8F, 0x96, 0x85, 0x8F, 0x90, 0x27, 0x85, 0x94, 0x8B, 0x8A,
  0x02, 0x04, 0x09, 0x05, 0x07, 0x8B, 0x0C, 0x85, 0x09, 0x0C, 0x15, 0x90, 0x8C, 0x0F, 0x10, 0x8B,
  0x87, 0x0D, 0x12, 0x1B, 0x10, 0x1D, 0x99, 0x8F, 0x0C, 0x1C, 0x1A, 0x2C, 0x0C, 0x8F, 0x90, 0x8B,
  0x09, 0x0C, 0x15, 0x10, 0x12, 0x99, 0x1A, 0x90, 0x15, 0x1A, 0x23, 0x30, 0x9A, 0x31, 0x30, 0x19,
  0x8C, 0x1C, 0x9A, 0xAC, 0x19, 0x32, 0x31, 0x27, 0x90, 0x2C, 0x30, 0x29, 0x10, 0xA7, 0x19, 0x24,
  0x84, 0x04, 0x8C, 0x05, 0x8D, 0x0B, 0x1C, 0x85, 0x8C, 0x0C, 0x9A, 0x10, 0x9C, 0x0F, 0xAC, 0x0B,
  0x0B, 0x8B, 0x19, 0x0F, 0x9D, 0xA1, 0x32, 0x94, 0x0F, 0x8F, 0x31, 0xA7, 0x0F, 0x96, 0x27, 0x8A,
  0x05, 0x85, 0x90, 0x8B, 0x1B, 0x8F, 0x2C, 0x8B, 0x10, 0x90, 0x30, 0x19, 0xAC, 0x27, 0x29, 0x24,
  0x05, 0x85, 0x10, 0x0B, 0x0F, 0x94, 0xA7, 0x8A, 0x8B, 0x8B, 0x19, 0x24, 0x0B, 0x8A, 0x24, 0x83,
  0x03, 0x06, 0x0A, 0x8B, 0x06, 0x0E, 0x0B, 0x0B, 0x0A, 0x91, 0x14, 0x8F, 0x8B, 0x17, 0x05, 0x85,
  0x06, 0x13, 0x11, 0x98, 0x0E, 0x1F, 0x97, 0x2B, 0x0B, 0x18, 0x0F, 0x36, 0x0B, 0xAB, 0x05, 0x85,
  0x0A, 0x11, 0x16, 0x8F, 0x91, 0x20, 0x0F, 0x8F, 0x14, 0x22, 0x21, 0x1D, 0x8F, 0x2D, 0x0B, 0x8B,
  0x8B, 0x98, 0x8F, 0xB7, 0x17, 0xAE, 0x8C, 0x0C, 0x05, 0x2F, 0x8B, 0xB5, 0x85, 0xA6, 0x84, 0x04,
  0x06, 0x0E, 0x91, 0x17, 0x13, 0x1F, 0x18, 0xAB, 0x11, 0x20, 0x22, 0x2D, 0x98, 0xAE, 0x2F, 0xA6,
  0x0E, 0x1F, 0x20, 0xAE, 0x1F, 0x33, 0x2E, 0x2A, 0x97, 0x2E, 0xAD, 0x28, 0x2B, 0x2A, 0x26, 0x25,
  0x0B, 0x97, 0x0F, 0x8C, 0x18, 0x2E, 0x37, 0x8C, 0x0F, 0xAD, 0x9D, 0x90, 0x36, 0x28, 0x35, 0x07,
  0x0B, 0x2B, 0x8F, 0x0C, 0xAB, 0x2A, 0x8C, 0x89, 0x05, 0x26, 0x0B, 0x87, 0x85, 0x25, 0x84, 0x82,
  0x0A, 0x0B, 0x14, 0x05, 0x11, 0x97, 0x0F, 0x05, 0x16, 0x0F, 0x21, 0x0B, 0x8F, 0x8C, 0x8B, 0x84,
  0x91, 0x18, 0x22, 0x2F, 0x20, 0x2E, 0xAD, 0x26, 0x0F, 0x37, 0x9D, 0x35, 0x8F, 0x8C, 0x0B, 0x84,
  0x14, 0x0F, 0x21, 0x8B, 0x22, 0xAD, 0x9D, 0x0B, 0x21, 0x9D, 0x9E, 0x8F, 0x1D, 0x90, 0x8F, 0x85,
  0x8F, 0x36, 0x1D, 0xB5, 0x2D, 0x28, 0x90, 0x87, 0x0B, 0x35, 0x8F, 0x34, 0x8B, 0x07, 0x85, 0x81,
  0x8B, 0x0B, 0x8F, 0x85, 0x98, 0x2B, 0x36, 0x85, 0x8F, 0x8F, 0x1D, 0x8B, 0xB7, 0x0C, 0xB5, 0x04,
  0x17, 0xAB, 0x2D, 0xA6, 0xAE, 0x2A, 0x28, 0x25, 0x8C, 0x8C, 0x90, 0x07, 0x0C, 0x89, 0x87, 0x82,
  0x05, 0x05, 0x0B, 0x84, 0x2F, 0x26, 0x35, 0x84, 0x8B, 0x0B, 0x8F, 0x85, 0xB5, 0x87, 0x34, 0x81,
  0x85, 0x85, 0x8B, 0x04, 0xA6, 0x25, 0x07, 0x82, 0x84, 0x84, 0x85, 0x81, 0x04, 0x82, 0x81, 0x80,
];

/// Equivalence class (low 7 bits of the class code) → triangulation.
pub const TRANSITION_CELL_DATA: [TransitionCellData; 56] = [
  TransitionCellData::new(0x00, &[]),
  TransitionCellData::new(0x42, &[0, 1, 3, 1, 2, 3]),
  TransitionCellData::new(0x31, &[0, 1, 2]),
  TransitionCellData::new(0x42, &[0, 1, 2, 0, 2, 3]),
  TransitionCellData::new(0x53, &[0, 1, 4, 1, 3, 4, 1, 2, 3]),
  TransitionCellData::new(0x64, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4]),
  TransitionCellData::new(0x84, &[0, 1, 3, 1, 2, 3, 4, 5, 6, 4, 6, 7]),
  TransitionCellData::new(0x73, &[0, 1, 3, 1, 2, 3, 4, 5, 6]),
  TransitionCellData::new(0x84, &[0, 1, 3, 1, 2, 3, 4, 5, 7, 5, 6, 7]),
  TransitionCellData::new(0x62, &[0, 1, 2, 3, 4, 5]),
  TransitionCellData::new(0x53, &[0, 1, 3, 0, 3, 4, 1, 2, 3]),
  TransitionCellData::new(0x75, &[0, 1, 6, 1, 2, 6, 2, 5, 6, 2, 3, 5, 3, 4, 5]),
  TransitionCellData::new(0x84, &[0, 1, 4, 1, 3, 4, 1, 2, 3, 5, 6, 7]),
  TransitionCellData::new(0x95, &[0, 1, 4, 1, 3, 4, 1, 2, 3, 5, 6, 8, 6, 7, 8]),
  TransitionCellData::new(0xA6, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4, 6, 7, 8, 6, 8, 9]),
  TransitionCellData::new(0x86, &[0, 1, 7, 1, 2, 7, 2, 3, 7, 3, 6, 7, 3, 4, 6, 4, 5, 6]),
  TransitionCellData::new(0x95, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4, 6, 7, 8]),
  TransitionCellData::new(0x95, &[0, 1, 3, 1, 2, 3, 4, 5, 7, 4, 7, 8, 5, 6, 7]),
  TransitionCellData::new(0xA4, &[0, 1, 3, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
  TransitionCellData::new(0xC6, &[0, 1, 3, 1, 2, 3, 4, 5, 7, 5, 6, 7, 8, 9, 10, 8, 10, 11]),
  TransitionCellData::new(0x64, &[0, 1, 3, 1, 2, 3, 0, 3, 4, 0, 4, 5]),
  TransitionCellData::new(0x93, &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
  TransitionCellData::new(0x64, &[0, 1, 4, 0, 4, 5, 1, 3, 4, 1, 2, 3]),
  TransitionCellData::new(0x97, &[0, 1, 8, 1, 7, 8, 1, 2, 7, 2, 3, 7, 3, 4, 7, 4, 5, 7, 5, 6, 7]),
  TransitionCellData::new(0xB7, &[0, 1, 6, 1, 2, 6, 2, 5, 6, 2, 3, 5, 3, 4, 5, 7, 8, 10, 8, 9, 10]),
  TransitionCellData::new(0xA6, &[0, 1, 6, 1, 2, 6, 2, 5, 6, 2, 3, 5, 3, 4, 5, 7, 8, 9]),
  TransitionCellData::new(0xB5, &[0, 1, 4, 1, 3, 4, 1, 2, 3, 5, 6, 7, 8, 9, 10]),
  TransitionCellData::new(0xA6, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4, 6, 7, 9, 7, 8, 9]),
  TransitionCellData::new(0xA6, &[0, 1, 4, 1, 3, 4, 1, 2, 3, 5, 6, 9, 6, 8, 9, 6, 7, 8]),
  TransitionCellData::new(0x97, &[0, 1, 8, 1, 2, 8, 2, 3, 8, 3, 7, 8, 3, 4, 7, 4, 5, 7, 5, 6, 7]),
  TransitionCellData::new(0x86, &[0, 1, 7, 1, 6, 7, 1, 2, 6, 2, 5, 6, 2, 4, 5, 2, 3, 4]),
  TransitionCellData::new(0xC8, &[0, 1, 7, 1, 2, 7, 2, 3, 7, 3, 6, 7, 3, 4, 6, 4, 5, 6, 8, 9, 10, 8, 10, 11]),
  TransitionCellData::new(0xB7, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4, 6, 9, 10, 6, 7, 9, 7, 8, 9]),
  TransitionCellData::new(0x75, &[0, 1, 6, 1, 3, 6, 1, 2, 3, 3, 4, 6, 4, 5, 6]),
  TransitionCellData::new(0xA6, &[0, 1, 3, 1, 2, 3, 4, 5, 9, 5, 8, 9, 5, 6, 8, 6, 7, 8]),
  TransitionCellData::new(0xC4, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
  TransitionCellData::new(0x86, &[1, 2, 4, 2, 3, 4, 0, 1, 7, 1, 4, 7, 4, 6, 7, 4, 5, 6]),
  TransitionCellData::new(0x64, &[0, 4, 5, 0, 1, 4, 1, 3, 4, 1, 2, 3]),
  TransitionCellData::new(0x86, &[0, 1, 4, 1, 3, 4, 1, 2, 3, 0, 4, 7, 4, 6, 7, 4, 5, 6]),
  TransitionCellData::new(0x97, &[1, 2, 3, 1, 3, 4, 1, 4, 5, 0, 1, 8, 1, 5, 8, 5, 7, 8, 5, 6, 7]),
  TransitionCellData::new(0xA6, &[0, 1, 3, 1, 2, 3, 4, 5, 9, 5, 8, 9, 5, 6, 8, 6, 7, 8]),
  TransitionCellData::new(0xC8, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4, 6, 7, 11, 7, 10, 11, 7, 8, 10, 8, 9, 10]),
  TransitionCellData::new(0x97, &[0, 1, 8, 1, 2, 8, 2, 7, 8, 2, 3, 7, 3, 6, 7, 3, 4, 6, 4, 5, 6]),
  TransitionCellData::new(0x97, &[0, 1, 4, 1, 3, 4, 1, 2, 3, 0, 4, 8, 4, 7, 8, 4, 5, 7, 5, 6, 7]),
  TransitionCellData::new(0xB7, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4, 6, 7, 10, 7, 9, 10, 7, 8, 9]),
  TransitionCellData::new(0xA8, &[0, 1, 9, 1, 2, 9, 2, 8, 9, 2, 3, 8, 3, 7, 8, 3, 4, 7, 4, 6, 7, 4, 5, 6]),
  TransitionCellData::new(0xB9, &[0, 1, 7, 1, 6, 7, 1, 2, 6, 2, 5, 6, 2, 3, 5, 3, 4, 5, 0, 7, 10, 7, 9, 10, 7, 8, 9]),
  TransitionCellData::new(0xA6, &[0, 1, 5, 1, 4, 5, 1, 2, 4, 2, 3, 4, 6, 7, 9, 7, 8, 9]),
  TransitionCellData::new(0xC6, &[0, 1, 5, 1, 2, 5, 2, 4, 5, 2, 3, 4, 6, 7, 8, 9, 10, 11]),
  TransitionCellData::new(0xB7, &[0, 1, 7, 1, 2, 7, 2, 3, 7, 3, 6, 7, 3, 4, 6, 4, 5, 6, 8, 9, 10]),
  TransitionCellData::new(0xA8, &[1, 2, 3, 1, 3, 4, 1, 4, 6, 4, 5, 6, 0, 1, 9, 1, 6, 9, 6, 8, 9, 6, 7, 8]),
  TransitionCellData::new(0xCC, &[0, 1, 9, 1, 8, 9, 1, 2, 8, 2, 11, 8, 2, 3, 11, 3, 4, 11, 4, 5, 11, 5, 10, 11, 5, 6, 10, 6, 9, 10, 6, 7, 9, 7, 0, 9]),
  TransitionCellData::new(0x86, &[0, 1, 2, 0, 2, 3, 0, 6, 7, 0, 3, 6, 1, 4, 5, 1, 5, 2]),
  TransitionCellData::new(0x97, &[0, 1, 4, 1, 3, 4, 1, 2, 3, 2, 5, 6, 2, 6, 3, 0, 7, 8, 0, 4, 7]),
  TransitionCellData::new(0xA8, &[0, 1, 5, 1, 4, 5, 1, 2, 4, 2, 3, 4, 3, 6, 7, 3, 7, 4, 0, 8, 9, 0, 5, 8]),
  TransitionCellData::new(0xA8, &[0, 1, 5, 1, 4, 5, 1, 2, 4, 2, 3, 4, 2, 6, 3, 3, 6, 7, 0, 8, 9, 0, 5, 8]),
];

/// Sample position (0-12) → corner reuse code.
pub const TRANSITION_CORNER_DATA: [TransitionCornerCode; 13] = [
  TransitionCornerCode(0x30),
  TransitionCornerCode(0x21),
  TransitionCornerCode(0x20),
  TransitionCornerCode(0x12),
  TransitionCornerCode(0x40),
  TransitionCornerCode(0x82),
  TransitionCornerCode(0x10),
  TransitionCornerCode(0x81),
  TransitionCornerCode(0x80),
  TransitionCornerCode(0x37),
  TransitionCornerCode(0x27),
  TransitionCornerCode(0x17),
  TransitionCornerCode(0x87),
];

/// 9-bit case index → packed interpolation codes for up to 13 vertices.
pub const TRANSITION_VERTEX_DATA: [&[u16]; 512] = [
  &[],
  &[0x2301, 0x1503, 0x199B, 0x289A],
  &[0x2301, 0x2412, 0x4514],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B],
  &[0x8525, 0x2412, 0x289A, 0x89AC],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC],
  &[0x8525, 0x4514, 0x1503, 0x199B, 0x89AC],
  &[0x8525, 0x8658, 0x4445],
  &[0x1503, 0x2301, 0x289A, 0x199B, 0x8658, 0x8525, 0x4445],
  &[0x8525, 0x8658, 0x4445, 0x2301, 0x2412, 0x4514],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B, 0x8658, 0x8525, 0x4445],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC],
  &[0x8658, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC],
  &[0x8658, 0x4445, 0x4514, 0x1503, 0x199B, 0x89AC],
  &[0x8478, 0x8658, 0x89AC, 0x88BC],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x8478, 0x8658, 0x89AC, 0x88BC],
  &[0x8478, 0x8658, 0x89AC, 0x88BC, 0x2301, 0x2412, 0x4514],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B, 0x8658, 0x8478, 0x88BC, 0x89AC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x88BC],
  &[0x2301, 0x4514, 0x8525, 0x8658, 0x8478, 0x88BC, 0x289A],
  &[0x8478, 0x8658, 0x8525, 0x4514, 0x1503, 0x199B, 0x88BC],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x1503, 0x199B, 0x289A],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x2412, 0x4514],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2412, 0x4514, 0x1503, 0x199B, 0x289A],
  &[0x8478, 0x4445, 0x2412, 0x289A, 0x88BC],
  &[0x1503, 0x2301, 0x2412, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x2301, 0x4514, 0x4445, 0x8478, 0x88BC, 0x289A],
  &[0x1503, 0x4514, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x8367, 0x4647],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x8478, 0x8367, 0x4647],
  &[0x2301, 0x2412, 0x4514, 0x8478, 0x8367, 0x4647],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B, 0x8367, 0x8478, 0x4647],
  &[0x2412, 0x8525, 0x89AC, 0x289A, 0x8367, 0x8478, 0x4647],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8525, 0x4514, 0x1503, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8478, 0x8367, 0x4647, 0x8525, 0x8658, 0x4445],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x8478, 0x8367, 0x4647, 0x8525, 0x8658, 0x4445],
  &[0x8478, 0x8367, 0x4647, 0x8525, 0x8658, 0x4445, 0x2301, 0x2412, 0x4514],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B, 0x8658, 0x8525, 0x4445, 0x8367, 0x8478, 0x4647],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A, 0x8367, 0x8478, 0x4647],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x2301, 0x4514, 0x4445, 0x8658, 0x89AC, 0x289A, 0x8367, 0x8478, 0x4647],
  &[0x8658, 0x4445, 0x4514, 0x1503, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC],
  &[0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC, 0x1503, 0x2301, 0x289A, 0x199B],
  &[0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC, 0x2412, 0x2301, 0x4514],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B, 0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC],
  &[0x1503, 0x2301, 0x2412, 0x8525, 0x8658, 0x4647, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x4514, 0x2301, 0x289A, 0x88BC],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x4514, 0x1503, 0x199B, 0x88BC],
  &[0x8367, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC],
  &[0x8367, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x1503, 0x199B, 0x289A],
  &[0x8367, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x2412, 0x4514],
  &[0x8525, 0x4445, 0x4647, 0x8367, 0x88BC, 0x89AC, 0x1503, 0x4514, 0x2412, 0x289A, 0x199B],
  &[0x8367, 0x4647, 0x4445, 0x2412, 0x289A, 0x88BC],
  &[0x8367, 0x4647, 0x4445, 0x2412, 0x2301, 0x1503, 0x199B, 0x88BC],
  &[0x2301, 0x4514, 0x4445, 0x4647, 0x8367, 0x88BC, 0x289A],
  &[0x8367, 0x4647, 0x4445, 0x4514, 0x1503, 0x199B, 0x88BC],
  &[0x1636, 0x8367, 0x88BC, 0x199B],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A],
  &[0x8367, 0x1636, 0x199B, 0x88BC, 0x2412, 0x2301, 0x4514],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x1636, 0x8367, 0x88BC, 0x199B],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x89AC],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x1636, 0x1503, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x1636, 0x8367, 0x88BC, 0x199B, 0x8525, 0x8658, 0x4445],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x1636, 0x8367, 0x88BC, 0x199B, 0x8525, 0x8658, 0x4445, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A, 0x8367, 0x1636, 0x199B, 0x88BC],
  &[0x8367, 0x1636, 0x1503, 0x2301, 0x2412, 0x4445, 0x8658, 0x89AC, 0x88BC],
  &[0x8658, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x8367, 0x88BC, 0x199B],
  &[0x8658, 0x4445, 0x4514, 0x1503, 0x1636, 0x8367, 0x88BC, 0x89AC],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x289A],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x8658, 0x8478, 0x8367, 0x1636, 0x1503, 0x4514, 0x2412, 0x289A, 0x89AC],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x199B],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x1503],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x4514, 0x2301, 0x289A, 0x199B],
  &[0x1503, 0x4514, 0x8525, 0x8658, 0x8478, 0x8367, 0x1636],
  &[0x8525, 0x4445, 0x8478, 0x8367, 0x1636, 0x199B, 0x89AC],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x4445, 0x8525, 0x89AC, 0x289A],
  &[0x8525, 0x4445, 0x8478, 0x8367, 0x1636, 0x199B, 0x89AC, 0x2412, 0x2301, 0x4514],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x8367, 0x8478, 0x4445, 0x8525, 0x89AC, 0x289A],
  &[0x1636, 0x8367, 0x8478, 0x4445, 0x2412, 0x289A, 0x199B],
  &[0x2412, 0x4445, 0x8478, 0x8367, 0x1636, 0x1503, 0x2301],
  &[0x2301, 0x4514, 0x4445, 0x8478, 0x8367, 0x1636, 0x199B, 0x289A],
  &[0x8367, 0x1636, 0x1503, 0x4514, 0x4445, 0x8478],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4647, 0x1636, 0x1503, 0x2301, 0x289A, 0x88BC],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x4647, 0x8478, 0x88BC, 0x289A],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8525, 0x2412, 0x289A, 0x89AC],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x1636, 0x4647, 0x8478, 0x88BC, 0x89AC],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4647, 0x1636, 0x1503, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8525, 0x8658, 0x4445],
  &[0x8478, 0x4647, 0x1636, 0x1503, 0x2301, 0x289A, 0x88BC, 0x8658, 0x8525, 0x4445],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8525, 0x8658, 0x4445, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x4647, 0x8478, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8658, 0x4445, 0x2412, 0x289A, 0x89AC],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x1503, 0x1636, 0x4647, 0x8478, 0x88BC, 0x89AC],
  &[0x8658, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4647, 0x1636, 0x1503, 0x4514, 0x4445, 0x8658, 0x89AC, 0x88BC],
  &[0x1636, 0x4647, 0x8658, 0x89AC, 0x199B],
  &[0x2301, 0x1503, 0x1636, 0x4647, 0x8658, 0x89AC, 0x289A],
  &[0x1636, 0x4647, 0x8658, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x4647, 0x8658, 0x89AC, 0x289A],
  &[0x2412, 0x8525, 0x8658, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x8658, 0x4647, 0x1636, 0x1503, 0x2301, 0x2412, 0x8525],
  &[0x2301, 0x4514, 0x8525, 0x8658, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x1503, 0x4514, 0x8525, 0x8658, 0x4647, 0x1636],
  &[0x8525, 0x4445, 0x4647, 0x1636, 0x199B, 0x89AC],
  &[0x8525, 0x4445, 0x4647, 0x1636, 0x1503, 0x2301, 0x289A, 0x89AC],
  &[0x8525, 0x4445, 0x4647, 0x1636, 0x199B, 0x89AC, 0x2412, 0x2301, 0x4514],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x4647, 0x4445, 0x8525, 0x89AC, 0x289A],
  &[0x2412, 0x4445, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x1503, 0x2301, 0x2412, 0x4445, 0x4647, 0x1636],
  &[0x2301, 0x4514, 0x4445, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x1503, 0x4514, 0x4445, 0x4647, 0x1636],
  &[0x1636, 0x1503, 0x4334],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A],
  &[0x2301, 0x2412, 0x4514, 0x1636, 0x1503, 0x4334],
  &[0x2412, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x2301, 0x2412, 0x8525, 0x89AC, 0x199B],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x8525, 0x89AC, 0x199B],
  &[0x1636, 0x1503, 0x4334, 0x8525, 0x8658, 0x4445],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x8525, 0x8658, 0x4445, 0x2301, 0x2412, 0x4514, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x2412, 0x289A, 0x199B, 0x8658, 0x8525, 0x4445],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A, 0x1503, 0x1636, 0x4334],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x4334, 0x1636, 0x199B, 0x89AC],
  &[0x8658, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x4445, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x8478, 0x88BC, 0x89AC, 0x1503, 0x1636, 0x4334],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x8658, 0x89AC, 0x88BC],
  &[0x8478, 0x8658, 0x89AC, 0x88BC, 0x2301, 0x2412, 0x4514, 0x1636, 0x1503, 0x4334],
  &[0x2412, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x8658, 0x89AC, 0x88BC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x4334, 0x1636, 0x199B, 0x88BC],
  &[0x2301, 0x4514, 0x8525, 0x8658, 0x8478, 0x88BC, 0x289A, 0x1503, 0x1636, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x8525, 0x8658, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x2412, 0x4514, 0x1636, 0x1503, 0x4334],
  &[0x2412, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC],
  &[0x8478, 0x4445, 0x2412, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x2301, 0x2412, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x2301, 0x4514, 0x4445, 0x8478, 0x88BC, 0x289A, 0x1503, 0x1636, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x1636, 0x1503, 0x4334, 0x8478, 0x8367, 0x4647],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x8367, 0x4647],
  &[0x2301, 0x2412, 0x4514, 0x1636, 0x1503, 0x4334, 0x8478, 0x8367, 0x4647],
  &[0x2412, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x8367, 0x4647],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x1636, 0x1503, 0x4334, 0x8478, 0x8367, 0x4647],
  &[0x1636, 0x4334, 0x2301, 0x2412, 0x8525, 0x89AC, 0x199B, 0x8367, 0x8478, 0x4647],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x1503, 0x4334, 0x8478, 0x8367, 0x4647],
  &[0x1636, 0x4334, 0x4514, 0x8525, 0x89AC, 0x199B, 0x8367, 0x8478, 0x4647],
  &[0x1636, 0x1503, 0x4334, 0x8478, 0x8367, 0x4647, 0x8525, 0x8658, 0x4445],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x8367, 0x4647, 0x8525, 0x8658, 0x4445],
  &[0x2301, 0x2412, 0x4514, 0x1636, 0x1503, 0x4334, 0x8478, 0x8367, 0x4647, 0x8525, 0x8658, 0x4445],
  &[0x2412, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A, 0x8478, 0x8367, 0x4647, 0x8525, 0x8658, 0x4445],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A, 0x8367, 0x8478, 0x4647, 0x1503, 0x1636, 0x4334],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x4334, 0x1636, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8658, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1636, 0x1503, 0x4334, 0x8478, 0x8367, 0x4647],
  &[0x8658, 0x4445, 0x4514, 0x4334, 0x1636, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC, 0x1503, 0x1636, 0x4334],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A, 0x8367, 0x4647, 0x8658, 0x89AC, 0x88BC],
  &[0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC, 0x1503, 0x1636, 0x4334, 0x2412, 0x2301, 0x4514],
  &[0x1636, 0x4334, 0x4514, 0x2412, 0x289A, 0x199B, 0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x2412, 0x2301, 0x4334, 0x1636, 0x199B, 0x88BC],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x4514, 0x2301, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x4514, 0x4334, 0x1636, 0x199B, 0x88BC],
  &[0x8525, 0x4445, 0x4647, 0x8367, 0x88BC, 0x89AC, 0x1503, 0x1636, 0x4334],
  &[0x8367, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x4334, 0x1636, 0x199B, 0x289A],
  &[0x8367, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x2412, 0x4514, 0x1636, 0x1503, 0x4334],
  &[0x8367, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x2412, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A],
  &[0x8367, 0x4647, 0x4445, 0x2412, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x2301, 0x2412, 0x4445, 0x4647, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x4647, 0x4445, 0x4514, 0x2301, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x8367, 0x4647, 0x4445, 0x4514, 0x4334, 0x1636, 0x199B, 0x88BC],
  &[0x8367, 0x4334, 0x1503, 0x199B, 0x88BC],
  &[0x2301, 0x4334, 0x8367, 0x88BC, 0x289A],
  &[0x8367, 0x4334, 0x1503, 0x199B, 0x88BC, 0x2412, 0x2301, 0x4514],
  &[0x2412, 0x4514, 0x4334, 0x8367, 0x88BC, 0x289A],
  &[0x8367, 0x4334, 0x1503, 0x199B, 0x88BC, 0x2412, 0x8525, 0x89AC, 0x289A],
  &[0x8525, 0x2412, 0x2301, 0x4334, 0x8367, 0x88BC, 0x89AC],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1503, 0x4334, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x4334, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x8367, 0x4334, 0x1503, 0x199B, 0x88BC, 0x8658, 0x8525, 0x4445],
  &[0x2301, 0x4334, 0x8367, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x8367, 0x4334, 0x1503, 0x199B, 0x88BC, 0x2412, 0x2301, 0x4514, 0x8658, 0x8525, 0x4445],
  &[0x2412, 0x4514, 0x4334, 0x8367, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A, 0x8367, 0x4334, 0x1503, 0x199B, 0x88BC],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x4334, 0x8367, 0x88BC, 0x89AC],
  &[0x2301, 0x4514, 0x4445, 0x8658, 0x89AC, 0x289A, 0x8367, 0x4334, 0x1503, 0x199B, 0x88BC],
  &[0x8658, 0x4445, 0x4514, 0x4334, 0x8367, 0x88BC, 0x89AC],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x8478, 0x8367, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x4334, 0x8367, 0x8478, 0x8658, 0x89AC, 0x289A],
  &[0x2412, 0x8525, 0x8658, 0x8478, 0x8367, 0x4334, 0x1503, 0x199B, 0x289A],
  &[0x8367, 0x4334, 0x2301, 0x2412, 0x8525, 0x8658, 0x8478],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x8658, 0x8525, 0x4514, 0x2301, 0x289A, 0x199B],
  &[0x8658, 0x8478, 0x8367, 0x4334, 0x4514, 0x8525],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x4445, 0x8525, 0x89AC, 0x199B],
  &[0x8525, 0x4445, 0x8478, 0x8367, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x4445, 0x8525, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x8525, 0x4445, 0x8478, 0x8367, 0x4334, 0x4514, 0x2412, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x4445, 0x2412, 0x289A, 0x199B],
  &[0x8367, 0x4334, 0x2301, 0x2412, 0x4445, 0x8478],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x4445, 0x4514, 0x2301, 0x289A, 0x199B],
  &[0x8367, 0x4334, 0x4514, 0x4445, 0x8478],
  &[0x1503, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4647, 0x4334, 0x2301, 0x289A, 0x88BC],
  &[0x8478, 0x4647, 0x4334, 0x1503, 0x199B, 0x88BC, 0x2412, 0x2301, 0x4514],
  &[0x8478, 0x4647, 0x4334, 0x4514, 0x2412, 0x289A, 0x88BC],
  &[0x1503, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8525, 0x2412, 0x289A, 0x89AC],
  &[0x8478, 0x4647, 0x4334, 0x2301, 0x2412, 0x8525, 0x89AC, 0x88BC],
  &[0x1503, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8525, 0x4514, 0x2301, 0x289A, 0x89AC],
  &[0x8478, 0x4647, 0x4334, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x1503, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8525, 0x8658, 0x4445],
  &[0x8478, 0x4647, 0x4334, 0x2301, 0x289A, 0x88BC, 0x8658, 0x8525, 0x4445],
  &[0x1503, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B, 0x8525, 0x8658, 0x4445, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x4334, 0x4647, 0x8478, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x8478, 0x4647, 0x4334, 0x1503, 0x199B, 0x88BC, 0x2412, 0x4445, 0x8658, 0x89AC, 0x289A],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x4334, 0x4647, 0x8478, 0x88BC, 0x89AC],
  &[0x8658, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC, 0x1503, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8658, 0x4445, 0x4514, 0x4334, 0x4647, 0x8478, 0x88BC, 0x89AC],
  &[0x1503, 0x4334, 0x4647, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x4647, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x4647, 0x8658, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x4334, 0x4647, 0x8658, 0x89AC, 0x289A],
  &[0x1503, 0x4334, 0x4647, 0x8658, 0x8525, 0x2412, 0x289A, 0x199B],
  &[0x2412, 0x8525, 0x8658, 0x4647, 0x4334, 0x2301],
  &[0x2301, 0x4514, 0x8525, 0x8658, 0x4647, 0x4334, 0x1503, 0x199B, 0x289A],
  &[0x8658, 0x4647, 0x4334, 0x4514, 0x8525],
  &[0x8525, 0x4445, 0x4647, 0x4334, 0x1503, 0x199B, 0x89AC],
  &[0x8525, 0x4445, 0x4647, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x4647, 0x4445, 0x8525, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x2412, 0x4514, 0x4334, 0x4647, 0x4445, 0x8525, 0x89AC, 0x289A],
  &[0x1503, 0x4334, 0x4647, 0x4445, 0x2412, 0x289A, 0x199B],
  &[0x2412, 0x4445, 0x4647, 0x4334, 0x2301],
  &[0x1503, 0x4334, 0x4647, 0x4445, 0x4514, 0x2301, 0x289A, 0x199B],
  &[0x4514, 0x4445, 0x4647, 0x4334],
  &[0x4514, 0x4445, 0x4647, 0x4334],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x4334, 0x4514, 0x4445, 0x4647],
  &[0x2412, 0x4445, 0x4647, 0x4334, 0x2301],
  &[0x1503, 0x4334, 0x4647, 0x4445, 0x2412, 0x289A, 0x199B],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x4514, 0x4445, 0x4647, 0x4334],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC, 0x4514, 0x4445, 0x4647, 0x4334],
  &[0x8525, 0x4445, 0x4647, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x8525, 0x4445, 0x4647, 0x4334, 0x1503, 0x199B, 0x89AC],
  &[0x8658, 0x4647, 0x4334, 0x4514, 0x8525],
  &[0x1503, 0x2301, 0x289A, 0x199B, 0x8525, 0x4514, 0x4334, 0x4647, 0x8658],
  &[0x2412, 0x8525, 0x8658, 0x4647, 0x4334, 0x2301],
  &[0x1503, 0x4334, 0x4647, 0x8658, 0x8525, 0x2412, 0x289A, 0x199B],
  &[0x2412, 0x4514, 0x4334, 0x4647, 0x8658, 0x89AC, 0x289A],
  &[0x8658, 0x4647, 0x4334, 0x4514, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC],
  &[0x8658, 0x4647, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x4647, 0x8658, 0x89AC, 0x199B],
  &[0x8478, 0x8658, 0x89AC, 0x88BC, 0x4445, 0x4647, 0x4334, 0x4514],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x8478, 0x8658, 0x89AC, 0x88BC, 0x4334, 0x4514, 0x4445, 0x4647],
  &[0x8478, 0x8658, 0x89AC, 0x88BC, 0x2412, 0x4445, 0x4647, 0x4334, 0x2301],
  &[0x1503, 0x4334, 0x4647, 0x4445, 0x2412, 0x289A, 0x199B, 0x8658, 0x8478, 0x88BC, 0x89AC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC, 0x4445, 0x4647, 0x4334, 0x4514],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x88BC, 0x4514, 0x4445, 0x4647, 0x4334],
  &[0x2301, 0x4334, 0x4647, 0x4445, 0x8525, 0x8658, 0x8478, 0x88BC, 0x289A],
  &[0x8478, 0x8658, 0x8525, 0x4445, 0x4647, 0x4334, 0x1503, 0x199B, 0x88BC],
  &[0x8478, 0x4647, 0x4334, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x8478, 0x4647, 0x4334, 0x4514, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x1503, 0x199B, 0x289A],
  &[0x8478, 0x4647, 0x4334, 0x2301, 0x2412, 0x8525, 0x89AC, 0x88BC],
  &[0x8478, 0x4647, 0x4334, 0x1503, 0x2412, 0x8525, 0x199B, 0x289A, 0x89AC, 0x88BC],
  &[0x8478, 0x4647, 0x4334, 0x4514, 0x2412, 0x289A, 0x88BC],
  &[0x1503, 0x2301, 0x2412, 0x4514, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4647, 0x4334, 0x2301, 0x289A, 0x88BC],
  &[0x1503, 0x4334, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8367, 0x4334, 0x4514, 0x4445, 0x8478],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x8367, 0x4334, 0x4514, 0x4445, 0x8478],
  &[0x8367, 0x4334, 0x2301, 0x2412, 0x4445, 0x8478],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x4445, 0x2412, 0x289A, 0x199B],
  &[0x2412, 0x8525, 0x89AC, 0x289A, 0x8478, 0x4445, 0x4514, 0x4334, 0x8367],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC, 0x8367, 0x4334, 0x4514, 0x4445, 0x8478],
  &[0x8525, 0x4445, 0x8478, 0x8367, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x4445, 0x8525, 0x89AC, 0x199B],
  &[0x8658, 0x8478, 0x8367, 0x4334, 0x4514, 0x8525],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x8367, 0x4334, 0x4514, 0x8525, 0x8658, 0x8478],
  &[0x8367, 0x4334, 0x2301, 0x2412, 0x8525, 0x8658, 0x8478],
  &[0x2412, 0x8525, 0x8658, 0x8478, 0x8367, 0x4334, 0x1503, 0x199B, 0x289A],
  &[0x2412, 0x4514, 0x4334, 0x8367, 0x8478, 0x8658, 0x89AC, 0x289A],
  &[0x8658, 0x8478, 0x8367, 0x4334, 0x4514, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC],
  &[0x8658, 0x8478, 0x8367, 0x4334, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x4334, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x4445, 0x4514, 0x4334, 0x8367, 0x88BC, 0x89AC],
  &[0x8658, 0x4445, 0x4514, 0x4334, 0x8367, 0x88BC, 0x89AC, 0x1503, 0x2301, 0x289A, 0x199B],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x4334, 0x8367, 0x88BC, 0x89AC],
  &[0x8658, 0x4445, 0x2412, 0x1503, 0x4334, 0x8367, 0x289A, 0x199B, 0x88BC, 0x89AC],
  &[0x8367, 0x4334, 0x4514, 0x4445, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC],
  &[0x1503, 0x2301, 0x2412, 0x8525, 0x8658, 0x4445, 0x4514, 0x4334, 0x8367, 0x88BC, 0x199B],
  &[0x2301, 0x4334, 0x8367, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x8367, 0x4334, 0x1503, 0x199B, 0x88BC, 0x8658, 0x8525, 0x4445],
  &[0x8367, 0x4334, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x8367, 0x4334, 0x4514, 0x8525, 0x89AC, 0x88BC, 0x2301, 0x1503, 0x199B, 0x289A],
  &[0x8525, 0x2412, 0x2301, 0x4334, 0x8367, 0x88BC, 0x89AC],
  &[0x1503, 0x4334, 0x8367, 0x8525, 0x2412, 0x88BC, 0x89AC, 0x289A, 0x199B],
  &[0x2412, 0x4514, 0x4334, 0x8367, 0x88BC, 0x289A],
  &[0x1503, 0x2301, 0x2412, 0x4514, 0x4334, 0x8367, 0x88BC, 0x199B],
  &[0x2301, 0x4334, 0x8367, 0x88BC, 0x289A],
  &[0x8367, 0x4334, 0x1503, 0x199B, 0x88BC],
  &[0x1636, 0x8367, 0x88BC, 0x199B, 0x4647, 0x4334, 0x4514, 0x4445],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A, 0x4334, 0x4514, 0x4445, 0x4647],
  &[0x8367, 0x1636, 0x199B, 0x88BC, 0x2301, 0x4334, 0x4647, 0x4445, 0x2412],
  &[0x2412, 0x4445, 0x4647, 0x4334, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x1636, 0x8367, 0x88BC, 0x199B, 0x4514, 0x4445, 0x4647, 0x4334],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x89AC, 0x4334, 0x4514, 0x4445, 0x4647],
  &[0x8525, 0x4445, 0x4647, 0x4334, 0x2301, 0x289A, 0x89AC, 0x1636, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x1636, 0x1503, 0x4334, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC],
  &[0x1636, 0x8367, 0x88BC, 0x199B, 0x8658, 0x4647, 0x4334, 0x4514, 0x8525],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A, 0x8658, 0x4647, 0x4334, 0x4514, 0x8525],
  &[0x1636, 0x8367, 0x88BC, 0x199B, 0x8658, 0x4647, 0x4334, 0x2301, 0x2412, 0x8525],
  &[0x2412, 0x8525, 0x8658, 0x4647, 0x4334, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A],
  &[0x2412, 0x4514, 0x4334, 0x4647, 0x8658, 0x89AC, 0x289A, 0x8367, 0x1636, 0x199B, 0x88BC],
  &[0x8367, 0x1636, 0x1503, 0x2301, 0x2412, 0x4514, 0x4334, 0x4647, 0x8658, 0x89AC, 0x88BC],
  &[0x8658, 0x4647, 0x4334, 0x2301, 0x289A, 0x89AC, 0x1636, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x1636, 0x1503, 0x4334, 0x4647, 0x8658, 0x89AC, 0x88BC],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B, 0x4647, 0x4334, 0x4514, 0x4445],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x289A, 0x4647, 0x4334, 0x4514, 0x4445],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B, 0x2412, 0x4445, 0x4647, 0x4334, 0x2301],
  &[0x8658, 0x8478, 0x8367, 0x1636, 0x1503, 0x4334, 0x4647, 0x4445, 0x2412, 0x289A, 0x89AC],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x199B, 0x4445, 0x4647, 0x4334, 0x4514],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x2412, 0x4334, 0x4514, 0x4445, 0x4647],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x4445, 0x4647, 0x4334, 0x2301, 0x289A, 0x199B],
  &[0x1503, 0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x4445, 0x4647, 0x4334],
  &[0x8525, 0x4514, 0x4334, 0x4647, 0x8478, 0x8367, 0x1636, 0x199B, 0x89AC],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x4647, 0x4334, 0x4514, 0x8525, 0x89AC, 0x289A],
  &[0x8525, 0x2412, 0x2301, 0x4334, 0x4647, 0x8478, 0x8367, 0x1636, 0x199B, 0x89AC],
  &[0x2412, 0x8525, 0x89AC, 0x289A, 0x1503, 0x1636, 0x8367, 0x8478, 0x4647, 0x4334],
  &[0x1636, 0x8367, 0x8478, 0x4647, 0x4334, 0x4514, 0x2412, 0x289A, 0x199B],
  &[0x2412, 0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x4647, 0x4334, 0x4514],
  &[0x1636, 0x8367, 0x8478, 0x4647, 0x4334, 0x2301, 0x289A, 0x199B],
  &[0x1636, 0x8367, 0x8478, 0x4647, 0x4334, 0x1503],
  &[0x1636, 0x4334, 0x4514, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4445, 0x4514, 0x4334, 0x1636, 0x1503, 0x2301, 0x289A, 0x88BC],
  &[0x1636, 0x4334, 0x2301, 0x2412, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4445, 0x2412, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x4445, 0x8478, 0x88BC, 0x199B, 0x8525, 0x2412, 0x289A, 0x89AC],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x1636, 0x4334, 0x4514, 0x4445, 0x8478, 0x88BC, 0x89AC],
  &[0x1636, 0x4334, 0x2301, 0x8525, 0x4445, 0x8478, 0x289A, 0x89AC, 0x88BC, 0x199B],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x8525, 0x8658, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x8658, 0x8525, 0x4514, 0x4334, 0x1636, 0x1503, 0x2301, 0x289A, 0x88BC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x4334, 0x1636, 0x199B, 0x88BC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC, 0x1636, 0x1503, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x2412, 0x8658, 0x8478, 0x289A, 0x89AC, 0x88BC, 0x199B],
  &[0x8658, 0x8478, 0x88BC, 0x89AC, 0x2412, 0x2301, 0x1503, 0x1636, 0x4334, 0x4514],
  &[0x1636, 0x4334, 0x2301, 0x8658, 0x8478, 0x289A, 0x89AC, 0x88BC, 0x199B],
  &[0x8658, 0x8478, 0x88BC, 0x89AC, 0x1503, 0x1636, 0x4334],
  &[0x1636, 0x4334, 0x4514, 0x4445, 0x8658, 0x89AC, 0x199B],
  &[0x2301, 0x1503, 0x1636, 0x4334, 0x4514, 0x4445, 0x8658, 0x89AC, 0x289A],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x4334, 0x1636, 0x199B, 0x89AC],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A, 0x1503, 0x1636, 0x4334],
  &[0x2412, 0x8525, 0x8658, 0x4445, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A],
  &[0x8658, 0x8525, 0x2412, 0x2301, 0x1503, 0x1636, 0x4334, 0x4514, 0x4445],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x1636, 0x1503, 0x4334, 0x8525, 0x8658, 0x4445],
  &[0x1636, 0x4334, 0x4514, 0x8525, 0x89AC, 0x199B],
  &[0x2301, 0x1503, 0x1636, 0x4334, 0x4514, 0x8525, 0x89AC, 0x289A],
  &[0x1636, 0x4334, 0x2301, 0x2412, 0x8525, 0x89AC, 0x199B],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x1636, 0x1503, 0x4334],
  &[0x2412, 0x4514, 0x4334, 0x1636, 0x199B, 0x289A],
  &[0x2301, 0x1503, 0x1636, 0x4334, 0x4514, 0x2412],
  &[0x2301, 0x4334, 0x1636, 0x199B, 0x289A],
  &[0x1636, 0x1503, 0x4334],
  &[0x1503, 0x4514, 0x4445, 0x4647, 0x1636],
  &[0x2301, 0x4514, 0x4445, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x1503, 0x2301, 0x2412, 0x4445, 0x4647, 0x1636],
  &[0x2412, 0x4445, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x1503, 0x4514, 0x4445, 0x4647, 0x1636],
  &[0x1636, 0x4647, 0x4445, 0x4514, 0x2301, 0x2412, 0x8525, 0x89AC, 0x199B],
  &[0x8525, 0x4445, 0x4647, 0x1636, 0x1503, 0x2301, 0x289A, 0x89AC],
  &[0x8525, 0x4445, 0x4647, 0x1636, 0x199B, 0x89AC],
  &[0x1503, 0x4514, 0x8525, 0x8658, 0x4647, 0x1636],
  &[0x2301, 0x4514, 0x8525, 0x8658, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x8658, 0x4647, 0x1636, 0x1503, 0x2301, 0x2412, 0x8525],
  &[0x2412, 0x8525, 0x8658, 0x4647, 0x1636, 0x199B, 0x289A],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x4647, 0x8658, 0x89AC, 0x289A],
  &[0x1636, 0x4647, 0x8658, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x2301, 0x1503, 0x1636, 0x4647, 0x8658, 0x89AC, 0x289A],
  &[0x1636, 0x4647, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x8478, 0x88BC, 0x89AC, 0x1636, 0x4647, 0x4445, 0x4514, 0x1503],
  &[0x2301, 0x4514, 0x4445, 0x4647, 0x1636, 0x199B, 0x289A, 0x8478, 0x8658, 0x89AC, 0x88BC],
  &[0x8478, 0x8658, 0x89AC, 0x88BC, 0x2412, 0x4445, 0x4647, 0x1636, 0x1503, 0x2301],
  &[0x2412, 0x4445, 0x4647, 0x1636, 0x199B, 0x289A, 0x8478, 0x8658, 0x89AC, 0x88BC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC, 0x1503, 0x4514, 0x4445, 0x4647, 0x1636],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x4514, 0x4445, 0x4647, 0x1636, 0x199B, 0x88BC],
  &[0x2301, 0x1503, 0x1636, 0x4647, 0x4445, 0x8525, 0x8658, 0x8478, 0x88BC, 0x289A],
  &[0x8478, 0x8658, 0x8525, 0x4445, 0x4647, 0x1636, 0x199B, 0x88BC],
  &[0x8478, 0x4647, 0x1636, 0x1503, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x2301, 0x4514, 0x8525, 0x8478, 0x4647, 0x1636, 0x89AC, 0x88BC, 0x199B, 0x289A],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x1636, 0x4647, 0x8478, 0x88BC, 0x89AC],
  &[0x8478, 0x4647, 0x1636, 0x2412, 0x8525, 0x199B, 0x289A, 0x89AC, 0x88BC],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x4647, 0x8478, 0x88BC, 0x289A],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x8478, 0x4647, 0x1636, 0x1503, 0x2301, 0x289A, 0x88BC],
  &[0x1636, 0x4647, 0x8478, 0x88BC, 0x199B],
  &[0x8367, 0x1636, 0x1503, 0x4514, 0x4445, 0x8478],
  &[0x2301, 0x4514, 0x4445, 0x8478, 0x8367, 0x1636, 0x199B, 0x289A],
  &[0x2412, 0x4445, 0x8478, 0x8367, 0x1636, 0x1503, 0x2301],
  &[0x1636, 0x8367, 0x8478, 0x4445, 0x2412, 0x289A, 0x199B],
  &[0x8525, 0x2412, 0x289A, 0x89AC, 0x1503, 0x4514, 0x4445, 0x8478, 0x8367, 0x1636],
  &[0x1636, 0x8367, 0x8478, 0x4445, 0x4514, 0x2301, 0x2412, 0x8525, 0x89AC, 0x199B],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x4445, 0x8525, 0x89AC, 0x289A],
  &[0x8525, 0x4445, 0x8478, 0x8367, 0x1636, 0x199B, 0x89AC],
  &[0x1503, 0x4514, 0x8525, 0x8658, 0x8478, 0x8367, 0x1636],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x4514, 0x2301, 0x289A, 0x199B],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x1503],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x199B],
  &[0x8658, 0x8478, 0x8367, 0x1636, 0x1503, 0x4514, 0x2412, 0x289A, 0x89AC],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B, 0x2301, 0x2412, 0x4514],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x289A],
  &[0x1636, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x4445, 0x4514, 0x1503, 0x1636, 0x8367, 0x88BC, 0x89AC],
  &[0x2301, 0x4514, 0x4445, 0x8658, 0x8367, 0x1636, 0x89AC, 0x88BC, 0x199B, 0x289A],
  &[0x8367, 0x1636, 0x1503, 0x2301, 0x2412, 0x4445, 0x8658, 0x89AC, 0x88BC],
  &[0x8658, 0x4445, 0x2412, 0x1636, 0x8367, 0x289A, 0x199B, 0x88BC, 0x89AC],
  &[0x8367, 0x1636, 0x1503, 0x4514, 0x4445, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC],
  &[0x8367, 0x1636, 0x199B, 0x88BC, 0x8658, 0x8525, 0x2412, 0x2301, 0x4514, 0x4445],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A, 0x8525, 0x8658, 0x4445],
  &[0x1636, 0x8367, 0x88BC, 0x199B, 0x8525, 0x8658, 0x4445],
  &[0x8367, 0x1636, 0x1503, 0x4514, 0x8525, 0x89AC, 0x88BC],
  &[0x2301, 0x4514, 0x8525, 0x8367, 0x1636, 0x89AC, 0x88BC, 0x199B, 0x289A],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x89AC],
  &[0x2412, 0x8525, 0x8367, 0x1636, 0x89AC, 0x88BC, 0x199B, 0x289A],
  &[0x2412, 0x4514, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A],
  &[0x8367, 0x1636, 0x199B, 0x88BC, 0x2412, 0x2301, 0x4514],
  &[0x2301, 0x1503, 0x1636, 0x8367, 0x88BC, 0x289A],
  &[0x1636, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x4647, 0x4445, 0x4514, 0x1503, 0x199B, 0x88BC],
  &[0x2301, 0x4514, 0x4445, 0x4647, 0x8367, 0x88BC, 0x289A],
  &[0x8367, 0x4647, 0x4445, 0x2412, 0x2301, 0x1503, 0x199B, 0x88BC],
  &[0x8367, 0x4647, 0x4445, 0x2412, 0x289A, 0x88BC],
  &[0x8367, 0x4647, 0x4445, 0x4514, 0x1503, 0x199B, 0x88BC, 0x2412, 0x8525, 0x89AC, 0x289A],
  &[0x8525, 0x2412, 0x2301, 0x4514, 0x4445, 0x4647, 0x8367, 0x88BC, 0x89AC],
  &[0x8525, 0x4445, 0x4647, 0x8367, 0x1503, 0x2301, 0x88BC, 0x199B, 0x289A, 0x89AC],
  &[0x8367, 0x4647, 0x4445, 0x8525, 0x89AC, 0x88BC],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x4514, 0x1503, 0x199B, 0x88BC],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x4514, 0x2301, 0x289A, 0x88BC],
  &[0x1503, 0x2301, 0x2412, 0x8525, 0x8658, 0x4647, 0x8367, 0x88BC, 0x199B],
  &[0x8367, 0x4647, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC],
  &[0x2412, 0x4514, 0x1503, 0x8367, 0x4647, 0x8658, 0x199B, 0x88BC, 0x89AC, 0x289A],
  &[0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC, 0x2412, 0x2301, 0x4514],
  &[0x8367, 0x4647, 0x8658, 0x2301, 0x1503, 0x89AC, 0x289A, 0x199B, 0x88BC],
  &[0x8658, 0x4647, 0x8367, 0x88BC, 0x89AC],
  &[0x1503, 0x4514, 0x4445, 0x4647, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x8478, 0x8367, 0x4647, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC],
  &[0x1503, 0x2301, 0x2412, 0x4445, 0x4647, 0x8367, 0x8478, 0x8658, 0x89AC, 0x199B],
  &[0x8658, 0x8478, 0x8367, 0x4647, 0x4445, 0x2412, 0x289A, 0x89AC],
  &[0x2412, 0x8525, 0x8658, 0x8478, 0x8367, 0x4647, 0x4445, 0x4514, 0x1503, 0x199B, 0x289A],
  &[0x8367, 0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x4514, 0x4445, 0x4647],
  &[0x1503, 0x2301, 0x289A, 0x199B, 0x8367, 0x8478, 0x8658, 0x8525, 0x4445, 0x4647],
  &[0x8478, 0x8658, 0x8525, 0x4445, 0x4647, 0x8367],
  &[0x8525, 0x4514, 0x1503, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC, 0x8478, 0x8367, 0x4647],
  &[0x2412, 0x8525, 0x89AC, 0x289A, 0x8367, 0x8478, 0x4647],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B, 0x8367, 0x8478, 0x4647],
  &[0x2301, 0x2412, 0x4514, 0x8478, 0x8367, 0x4647],
  &[0x2301, 0x1503, 0x199B, 0x289A, 0x8478, 0x8367, 0x4647],
  &[0x8478, 0x8367, 0x4647],
  &[0x1503, 0x4514, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x2301, 0x4514, 0x4445, 0x8478, 0x88BC, 0x289A],
  &[0x1503, 0x2301, 0x2412, 0x4445, 0x8478, 0x88BC, 0x199B],
  &[0x8478, 0x4445, 0x2412, 0x289A, 0x88BC],
  &[0x1503, 0x4514, 0x4445, 0x8478, 0x88BC, 0x199B, 0x8525, 0x2412, 0x289A, 0x89AC],
  &[0x8525, 0x2412, 0x2301, 0x4514, 0x4445, 0x8478, 0x88BC, 0x89AC],
  &[0x8525, 0x4445, 0x8478, 0x1503, 0x2301, 0x88BC, 0x199B, 0x289A, 0x89AC],
  &[0x8478, 0x4445, 0x8525, 0x89AC, 0x88BC],
  &[0x8478, 0x8658, 0x8525, 0x4514, 0x1503, 0x199B, 0x88BC],
  &[0x2301, 0x4514, 0x8525, 0x8658, 0x8478, 0x88BC, 0x289A],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x88BC],
  &[0x8478, 0x8658, 0x8525, 0x2412, 0x289A, 0x88BC],
  &[0x2412, 0x4514, 0x1503, 0x8478, 0x8658, 0x199B, 0x88BC, 0x89AC, 0x289A],
  &[0x8478, 0x8658, 0x89AC, 0x88BC, 0x2301, 0x2412, 0x4514],
  &[0x1503, 0x2301, 0x8658, 0x8478, 0x289A, 0x89AC, 0x88BC, 0x199B],
  &[0x8478, 0x8658, 0x89AC, 0x88BC],
  &[0x8658, 0x4445, 0x4514, 0x1503, 0x199B, 0x89AC],
  &[0x8658, 0x4445, 0x4514, 0x2301, 0x289A, 0x89AC],
  &[0x8658, 0x4445, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC],
  &[0x2412, 0x4445, 0x8658, 0x89AC, 0x289A],
  &[0x2412, 0x8525, 0x8658, 0x4445, 0x4514, 0x1503, 0x199B, 0x289A],
  &[0x8525, 0x2412, 0x2301, 0x4514, 0x4445, 0x8658],
  &[0x1503, 0x2301, 0x289A, 0x199B, 0x8658, 0x8525, 0x4445],
  &[0x8525, 0x8658, 0x4445],
  &[0x8525, 0x4514, 0x1503, 0x199B, 0x89AC],
  &[0x8525, 0x4514, 0x2301, 0x289A, 0x89AC],
  &[0x8525, 0x2412, 0x2301, 0x1503, 0x199B, 0x89AC],
  &[0x8525, 0x2412, 0x289A, 0x89AC],
  &[0x1503, 0x4514, 0x2412, 0x289A, 0x199B],
  &[0x2301, 0x2412, 0x4514],
  &[0x2301, 0x1503, 0x199B, 0x289A],
  &[],
];

#[cfg(test)]
#[path = "transition_tables_test.rs"]
mod transition_tables_test;
