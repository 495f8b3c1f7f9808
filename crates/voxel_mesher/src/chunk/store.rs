//! ChunkStore - generated chunks keyed by coordinate, meshed with neighbors.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::boundary::{fill_padding, NeighborSnapshot};
use crate::config::MesherConfig;
use crate::core::{Face, MeshOutput};
use crate::error::MesherError;
use crate::mesh::mesh_chunk;
use crate::voxel::VoxelType;
use super::chunk::VoxelChunk;
use super::coord::ChunkCoord;

/// Chunks of one world, all meshed with the same configuration.
///
/// The store owns its chunks; meshing borrows the center chunk and up to six
/// neighbors immutably, so no chunk can change during a meshing pass.
#[derive(Debug, Default)]
pub struct ChunkStore {
    config: MesherConfig,
    chunks: HashMap<ChunkCoord, VoxelChunk>,
}

impl ChunkStore {
    /// Create an empty store. The configuration is validated.
    pub fn new(config: MesherConfig) -> Result<Self, MesherError> {
        config.validate()?;
        Ok(Self {
            config,
            chunks: HashMap::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &MesherConfig {
        &self.config
    }

    // ========================================================================
    // Chunk Access
    // ========================================================================

    /// Insert a chunk, returning the one it replaced.
    pub fn insert(&mut self, coord: ChunkCoord, chunk: VoxelChunk) -> Option<VoxelChunk> {
        self.chunks.insert(coord, chunk)
    }

    pub fn remove(&mut self, coord: ChunkCoord) -> Option<VoxelChunk> {
        self.chunks.remove(&coord)
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&VoxelChunk> {
        self.chunks.get(&coord)
    }

    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut VoxelChunk> {
        self.chunks.get_mut(&coord)
    }

    /// Get or create an all-Air chunk at the given coordinate.
    pub fn get_or_create(&mut self, coord: ChunkCoord) -> Result<&mut VoxelChunk, MesherError> {
        let size = self.config.chunk_size;
        match self.chunks.entry(coord) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                Ok(e.insert(VoxelChunk::new(size, coord.origin(size))?))
            }
        }
    }

    /// Set a voxel by world voxel index, creating its chunk if needed.
    pub fn set_voxel(&mut self, voxel: [i32; 3], voxel_type: VoxelType) -> Result<(), MesherError> {
        let size = self.config.chunk_size;
        let coord = ChunkCoord::from_voxel(voxel, size);
        let [x, y, z] = ChunkCoord::voxel_to_local(voxel, size);
        self.get_or_create(coord)?.set_local(x, y, z, voxel_type);
        Ok(())
    }

    /// Block type at a world voxel index. Missing chunks read as Air.
    pub fn get_voxel(&self, voxel: [i32; 3]) -> VoxelType {
        let size = self.config.chunk_size;
        let coord = ChunkCoord::from_voxel(voxel, size);
        let [x, y, z] = ChunkCoord::voxel_to_local(voxel, size);
        self.get(coord).map_or(VoxelType::Air, |c| c.get_local(x, y, z))
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Stored coordinates in ascending order.
    pub fn coords(&self) -> Vec<ChunkCoord> {
        let mut coords: Vec<_> = self.chunks.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    // ========================================================================
    // Meshing
    // ========================================================================

    /// Snapshot of the stored face neighbors of a coordinate.
    pub fn neighbor_snapshot(&self, coord: ChunkCoord) -> NeighborSnapshot<'_> {
        let mut snapshot = NeighborSnapshot::none();
        for face in Face::ALL {
            snapshot.set(face, self.chunks.get(&coord.neighbor(face)));
        }
        snapshot
    }

    /// Mesh one chunk against its stored neighbors.
    pub fn mesh(&self, coord: ChunkCoord) -> Option<MeshOutput> {
        let Some(chunk) = self.chunks.get(&coord) else {
            log::warn!("mesh requested for missing chunk {:?}", coord);
            return None;
        };
        Some(mesh_chunk(chunk, &self.neighbor_snapshot(coord), &self.config))
    }

    /// Copy stored neighbors' boundary layers into a chunk's padding.
    ///
    /// Returns false if the chunk is not stored.
    pub fn fill_padding(&mut self, coord: ChunkCoord) -> bool {
        let Some(mut chunk) = self.chunks.remove(&coord) else {
            log::warn!("padding fill requested for missing chunk {:?}", coord);
            return false;
        };
        fill_padding(&mut chunk, &self.neighbor_snapshot(coord));
        self.chunks.insert(coord, chunk);
        true
    }

    /// Mesh every stored chunk, sorted by coordinate.
    ///
    /// Chunks are meshed on the rayon pool when the `parallel` feature is
    /// enabled.
    pub fn mesh_all(&self) -> Vec<(ChunkCoord, MeshOutput)> {
        let coords = self.coords();

        #[cfg(feature = "parallel")]
        let iter = coords.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = coords.iter();

        let meshes: Vec<_> = iter
            .filter_map(|&coord| self.mesh(coord).map(|mesh| (coord, mesh)))
            .collect();

        log::debug!("meshed {} chunks", meshes.len());
        meshes
    }
}
