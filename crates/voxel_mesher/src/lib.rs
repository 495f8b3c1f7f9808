//! Binary greedy meshing for padded typed-voxel chunks.
//!
//! This crate turns a chunk of typed voxels into a small set of axis-aligned
//! quads using bitwise operations that process 64 voxels per instruction:
//!
//! 1. [`encode`]: pack the padded chunk into per-type `u64` occupancy columns
//! 2. [`cull`]: derive visible faces with shift-and-mask
//! 3. [`merge`]: greedily merge same-type faces into rectangles
//! 4. [`expand`]: emit positions, normals, colors and indices
//!
//! [`boundary`] decides what the one-cell padding around a chunk holds.
//!
//! # Example
//!
//! ```
//! use voxel_mesher::{mesh_chunk, MesherConfig, NeighborSnapshot, Position3D, VoxelChunk, VoxelType};
//!
//! let config = MesherConfig::default();
//! let mut chunk = VoxelChunk::from_config(&config, Position3D::ZERO).unwrap();
//! chunk.set_local(1, 1, 1, VoxelType::Stone); // Single voxel
//!
//! let mesh = mesh_chunk(&chunk, &NeighborSnapshot::none(), &config);
//! assert_eq!(mesh.triangle_count(), 12); // Cube = 6 faces × 2 triangles
//! ```

pub mod core;
pub mod voxel;
pub mod error;
pub mod config;
pub mod chunk;
pub mod boundary;
pub mod convert;
pub mod encode;
pub mod cull;
pub mod merge;
pub mod expand;
pub mod mesh;

// Re-export primary types
pub use crate::core::{
    Axis,
    Face,
    MeshOutput,
    Position3D,
    Quad,
    Vertex,
    // Constants
    DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE,
    FACE_POS_Y, FACE_NEG_Y, FACE_POS_X, FACE_NEG_X, FACE_POS_Z, FACE_NEG_Z,
    FACE_NORMALS,
};
pub use crate::voxel::{Voxel, VoxelType};
pub use crate::error::MesherError;
pub use crate::config::{MesherConfig, Palette};
pub use crate::chunk::{ChunkCoord, ChunkStore, Lod, VoxelChunk};
pub use crate::boundary::{fill_padding, BoundaryPolicy, NeighborSnapshot};
pub use crate::encode::{encode_occupancy, OccupancyMaps};
pub use crate::cull::{count_visible_faces, cull_faces, FaceMasks};
pub use crate::merge::greedy_merge_faces;
pub use crate::expand::emit_geometry;

// Re-export main entry points
pub use crate::mesh::{mesh_chunk, mesh_chunk_with_stats, mesh_quads, MeshStats};
pub use crate::convert::{
    positions_to_chunk,
    dense_to_chunk,
    dense_to_chunk_zyx,
    dense_codes_to_chunk,
};
