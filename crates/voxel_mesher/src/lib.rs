//! voxel_mesher - Framework/engine independent Transvoxel chunk meshing
//!
//! This crate extracts smooth isosurfaces from 16³ voxel chunks using
//! marching cubes for the chunk body and Transvoxel transition cells along
//! faces that border a higher-resolution neighbor, producing crack-free
//! seams across LOD boundaries.
//!
//! # Features
//!
//! - **Marching Cubes**: Classic 256-case interior polygonization with
//!   linear edge interpolation
//! - **LOD Seam Stitching**: 9-bit transition cells against double-res
//!   neighbor face samples, 2:1 ratio
//! - **Material Blending**: Per-corner one-hot material weights for
//!   texture splatting without bleeding
//! - **Collider Export**: Positions-and-indices subset view for physics
//!   triangle-mesh colliders
//!
//! # Example
//!
//! ```ignore
//! use voxel_mesher::{generate, ChunkVolume, CHUNK_GRID_CB};
//!
//! // Signed density grid, positive inside the surface
//! let density = vec![1.0f32; CHUNK_GRID_CB];
//! let material = vec![0u8; CHUNK_GRID_CB];
//!
//! let volume = ChunkVolume::new(density, material);
//! let output = generate(&volume)?;
//!
//! println!("Generated {} triangles", output.triangle_count());
//! # Ok::<(), voxel_mesher::MeshError>(())
//! ```

pub mod case_tables;
pub mod constants;
pub mod transition_tables;
pub mod types;

// Re-export commonly used items
pub use constants::{
  face_index, grid_index, CHUNK_DIM, CHUNK_GRID_CB, CHUNK_GRID_SIZE, FACE_GRID_SIZE, FACE_GRID_SQ,
  ISO_LEVEL, TRANSITION_CELL_WIDTH,
};
pub use types::{
  ChunkVolume, FaceDir, FaceSamples, GridCell, MaterialId, MeshOutput, MinMaxAABB, TransitionCell,
};

pub mod error;
pub use error::MeshError;

// Mesh generation pipeline
pub mod mesher;
pub use mesher::{generate, interpolate, WorkingMesh};

// Physics subset view
pub mod collision;
pub use collision::{PhysicsMeshData, TriangleSoup};
