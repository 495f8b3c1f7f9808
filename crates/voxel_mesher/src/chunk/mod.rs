//! Chunk storage for voxel worlds.
//!
//! - [`VoxelChunk`]: padded typed-voxel grid, the meshing input
//! - [`Lod`]: level of detail a chunk was generated at
//! - [`ChunkCoord`]: chunk-space coordinates with neighbor calculation
//! - [`ChunkStore`]: chunks keyed by coordinate, meshed against their neighbors
//!
//! # Usage
//!
//! ```
//! use voxel_mesher::chunk::{ChunkCoord, ChunkStore};
//! use voxel_mesher::{MesherConfig, VoxelType};
//!
//! let mut store = ChunkStore::new(MesherConfig::default()).unwrap();
//!
//! // Voxel indices are world-space; chunks are created on demand
//! store.set_voxel([10, 10, 10], VoxelType::Stone).unwrap();
//! store.set_voxel([11, 10, 10], VoxelType::Stone).unwrap();
//!
//! let mesh = store.mesh(ChunkCoord::ZERO).unwrap();
//! assert_eq!(mesh.quad_count(), 6);
//! ```

pub mod coord;
pub mod chunk;
pub mod lod;
pub mod store;

// Re-export primary types
pub use coord::ChunkCoord;
pub use chunk::VoxelChunk;
pub use lod::Lod;
pub use store::ChunkStore;
