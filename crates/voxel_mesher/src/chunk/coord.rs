//! Chunk coordinate type for chunk-space addressing.

use crate::core::{Face, Position3D};

/// Chunk coordinate in chunk-space (not voxel-space).
///
/// Coordinates can be negative to support unbounded worlds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Origin chunk at (0, 0, 0).
    pub const ZERO: ChunkCoord = ChunkCoord { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Neighbor sharing the given face.
    pub fn neighbor(&self, face: Face) -> ChunkCoord {
        let n = face.normal();
        ChunkCoord {
            x: self.x + n[0] as i32,
            y: self.y + n[1] as i32,
            z: self.z + n[2] as i32,
        }
    }

    /// The 6 face-adjacent neighbors in [`Face::ALL`] order.
    pub fn neighbors(&self) -> [ChunkCoord; 6] {
        Face::ALL.map(|face| self.neighbor(face))
    }

    /// Voxel-space origin (minimum corner): grid index × chunk side length.
    pub fn origin(&self, chunk_size: usize) -> Position3D {
        let cs = chunk_size as i32;
        Position3D::new(self.x * cs, self.y * cs, self.z * cs)
    }

    /// Chunk containing a voxel index.
    ///
    /// Uses Euclidean division for correct negative coordinate handling.
    ///
    /// # Example
    /// ```
    /// use voxel_mesher::chunk::ChunkCoord;
    ///
    /// assert_eq!(ChunkCoord::from_voxel([45, 0, 0], 30), ChunkCoord::new(1, 0, 0));
    /// assert_eq!(ChunkCoord::from_voxel([-1, 0, 0], 30), ChunkCoord::new(-1, 0, 0));
    /// ```
    pub fn from_voxel(voxel: [i32; 3], chunk_size: usize) -> Self {
        let cs = chunk_size as i32;
        ChunkCoord {
            x: voxel[0].div_euclid(cs),
            y: voxel[1].div_euclid(cs),
            z: voxel[2].div_euclid(cs),
        }
    }

    /// Interior coordinates of a voxel index within its chunk.
    pub fn voxel_to_local(voxel: [i32; 3], chunk_size: usize) -> [usize; 3] {
        let cs = chunk_size as i32;
        [
            voxel[0].rem_euclid(cs) as usize,
            voxel[1].rem_euclid(cs) as usize,
            voxel[2].rem_euclid(cs) as usize,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_face_order() {
        let coord = ChunkCoord::new(5, 10, 15);
        let neighbors = coord.neighbors();

        assert_eq!(neighbors[Face::PosY.index()], ChunkCoord::new(5, 11, 15));
        assert_eq!(neighbors[Face::NegY.index()], ChunkCoord::new(5, 9, 15));
        assert_eq!(neighbors[Face::PosX.index()], ChunkCoord::new(6, 10, 15));
        assert_eq!(neighbors[Face::NegX.index()], ChunkCoord::new(4, 10, 15));
        assert_eq!(neighbors[Face::PosZ.index()], ChunkCoord::new(5, 10, 16));
        assert_eq!(neighbors[Face::NegZ.index()], ChunkCoord::new(5, 10, 14));
    }

    #[test]
    fn origin_is_index_times_size() {
        assert_eq!(ChunkCoord::new(2, -1, 0).origin(30), Position3D::new(60, -30, 0));
    }

    #[test]
    fn from_voxel_negative() {
        // Euclidean division: -1 / 30 = -1 (not 0)
        assert_eq!(ChunkCoord::from_voxel([-1, 0, 0], 30), ChunkCoord::new(-1, 0, 0));
        assert_eq!(ChunkCoord::from_voxel([-30, 0, 0], 30), ChunkCoord::new(-1, 0, 0));
        assert_eq!(ChunkCoord::from_voxel([-31, 0, 0], 30), ChunkCoord::new(-2, 0, 0));
    }

    #[test]
    fn voxel_to_local_wraps() {
        assert_eq!(ChunkCoord::voxel_to_local([29, 30, 31], 30), [29, 0, 1]);
        assert_eq!(ChunkCoord::voxel_to_local([-1, 0, 0], 30), [29, 0, 0]);
    }
}
