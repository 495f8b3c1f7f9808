//! Chunk boundary policy.
//!
//! Decides what occupies a chunk's one-cell padding layer, which is what face
//! culling compares boundary voxels against:
//!
//! - A neighbor that exists, has the same side length and the same LOD
//!   contributes its real boundary layer.
//! - A neighbor at a different LOD (or size) reads as Air. Culling against
//!   data sampled at another granularity can open holes; an extra face cannot.
//! - A missing neighbor reads as whatever the chunk's own padding holds, which
//!   is Air unless an earlier [`fill_padding`] copied neighbor data into it.
//!
//! Edge and corner padding cells always read as Air: no interior face is ever
//! tested against them.

use crate::chunk::VoxelChunk;
use crate::core::Face;
use crate::voxel::VoxelType;

/// Read-only references to the six face neighbors of a chunk.
///
/// Neighbors must stay frozen for the duration of a meshing pass; holding
/// shared borrows here enforces that.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborSnapshot<'a> {
    neighbors: [Option<&'a VoxelChunk>; 6],
}

impl<'a> NeighborSnapshot<'a> {
    /// Snapshot with no neighbors.
    pub const fn none() -> Self {
        Self { neighbors: [None; 6] }
    }

    /// Builder-style neighbor assignment.
    pub fn with(mut self, face: Face, chunk: &'a VoxelChunk) -> Self {
        self.neighbors[face.index()] = Some(chunk);
        self
    }

    pub fn set(&mut self, face: Face, chunk: Option<&'a VoxelChunk>) {
        self.neighbors[face.index()] = chunk;
    }

    /// Neighbor across the given face of the center chunk.
    #[inline]
    pub fn get(&self, face: Face) -> Option<&'a VoxelChunk> {
        self.neighbors[face.index()]
    }

    /// Number of neighbors present.
    pub fn count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }
}

/// Padding face of a padded coordinate, if it lies on exactly one.
///
/// Returns `None` for interior cells and for edge/corner padding cells.
pub fn padding_face(size: usize, x: usize, y: usize, z: usize) -> Option<Face> {
    let edge = size + 1;
    let mut found = None;
    for face in Face::ALL {
        let coord = [x, y, z][face.axis().index()];
        let on_face = if face.is_positive() { coord == edge } else { coord == 0 };
        if on_face {
            if found.is_some() {
                return None;
            }
            found = Some(face);
        }
    }
    found
}

/// Block type a present neighbor contributes to the padding cell `(x, y, z)`
/// on `face` of a chunk with side `size` at `lod`.
fn neighbor_cell(
    size: usize,
    lod: crate::chunk::Lod,
    neighbor: &VoxelChunk,
    face: Face,
    pos: [usize; 3],
) -> VoxelType {
    if neighbor.lod() != lod || neighbor.size() != size {
        return VoxelType::Air;
    }
    // The +X padding layer mirrors the neighbor's first interior layer,
    // the -X padding layer its last.
    let mut src = pos;
    src[face.axis().index()] = if face.is_positive() { 1 } else { size };
    neighbor.get(src[0], src[1], src[2])
}

/// Boundary rules for one meshing pass over one chunk.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryPolicy<'a> {
    chunk: &'a VoxelChunk,
    neighbors: NeighborSnapshot<'a>,
}

impl<'a> BoundaryPolicy<'a> {
    pub fn new(chunk: &'a VoxelChunk, neighbors: NeighborSnapshot<'a>) -> Self {
        Self { chunk, neighbors }
    }

    /// Policy that only trusts the chunk's own padding.
    pub fn isolated(chunk: &'a VoxelChunk) -> Self {
        Self::new(chunk, NeighborSnapshot::none())
    }

    #[inline]
    pub fn chunk(&self) -> &'a VoxelChunk {
        self.chunk
    }

    /// Block type at padded coordinates as seen by the encoder.
    pub fn voxel_at(&self, x: usize, y: usize, z: usize) -> VoxelType {
        let chunk = self.chunk;
        if !chunk.in_bounds(x, y, z) {
            return VoxelType::Air;
        }
        if !chunk.is_padding(x, y, z) {
            return chunk.get(x, y, z);
        }

        let Some(face) = padding_face(chunk.size(), x, y, z) else {
            return VoxelType::Air;
        };
        match self.neighbors.get(face) {
            Some(neighbor) => neighbor_cell(chunk.size(), chunk.lod(), neighbor, face, [x, y, z]),
            None => chunk.get(x, y, z),
        }
    }
}

/// Copy neighbor boundary layers into the chunk's padding.
///
/// Absent neighbors and LOD-mismatched neighbors leave Air. Edge and corner
/// padding cells are reset to Air.
pub fn fill_padding(chunk: &mut VoxelChunk, neighbors: &NeighborSnapshot<'_>) {
    let size = chunk.size();
    let lod = chunk.lod();
    chunk.clear_padding();

    for face in Face::ALL {
        let Some(neighbor) = neighbors.get(face) else {
            continue;
        };
        let layer = if face.is_positive() { size + 1 } else { 0 };
        for u in 1..=size {
            for v in 1..=size {
                let pos = face.to_local(layer, u, v);
                let voxel_type = neighbor_cell(size, lod, neighbor, face, pos);
                chunk.set(pos[0], pos[1], pos[2], voxel_type);
            }
        }
    }
}
