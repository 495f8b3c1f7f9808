//! Padded voxel chunk.

use crate::config::{validate_chunk_size, MesherConfig};
use crate::core::Position3D;
use crate::error::MesherError;
use crate::voxel::{Voxel, VoxelType};
use super::lod::Lod;

/// A padded 3D grid of typed voxels plus its world-space origin.
///
/// Shape is `(S + 2)³` where `S` is the chunk side length. The one-cell
/// padding on every face holds neighbor boundary data so meshing never reads
/// another chunk; it stays Air unless a neighbor-copy step fills it.
///
/// Coordinates passed to [`get`](VoxelChunk::get) and [`set`](VoxelChunk::set)
/// are padded (`0..S+2`); the `_local` variants take interior coordinates
/// (`0..S`).
///
/// Memory layout: `voxels[(x * P + z) * P + y]`, so a Y column is contiguous.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelChunk {
    size: usize,
    padded: usize,
    origin: Position3D,
    lod: Lod,
    voxels: Vec<Voxel>,
}

impl VoxelChunk {
    /// Create an all-Air chunk with side length `size`.
    pub fn new(size: usize, origin: Position3D) -> Result<Self, MesherError> {
        validate_chunk_size(size)?;
        let padded = size + 2;
        Ok(Self {
            size,
            padded,
            origin,
            lod: Lod::FULL,
            voxels: vec![Voxel::AIR; padded * padded * padded],
        })
    }

    /// Create an all-Air chunk sized by the configuration.
    pub fn from_config(config: &MesherConfig, origin: Position3D) -> Result<Self, MesherError> {
        Self::new(config.chunk_size, origin)
    }

    /// Builder-style LOD assignment.
    pub fn with_lod(mut self, lod: Lod) -> Self {
        self.lod = lod;
        self
    }

    /// Interior side length `S`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Padded side length `S + 2`.
    #[inline]
    pub fn padded_size(&self) -> usize {
        self.padded
    }

    #[inline]
    pub fn origin(&self) -> Position3D {
        self.origin
    }

    #[inline]
    pub fn lod(&self) -> Lod {
        self.lod
    }

    pub fn set_lod(&mut self, lod: Lod) {
        self.lod = lod;
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.padded + z) * self.padded + y
    }

    /// Check padded coordinates are inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.padded && y < self.padded && z < self.padded
    }

    /// Block type at padded coordinates. Out-of-range reads return Air.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> VoxelType {
        if !self.in_bounds(x, y, z) {
            return VoxelType::Air;
        }
        self.voxels[self.index(x, y, z)].voxel_type
    }

    /// Set the block type at padded coordinates. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, voxel_type: VoxelType) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        let idx = self.index(x, y, z);
        self.voxels[idx] = Voxel::new(voxel_type);
    }

    /// Block type at interior coordinates (`0..S`). Out-of-range reads return Air.
    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> VoxelType {
        if x >= self.size || y >= self.size || z >= self.size {
            return VoxelType::Air;
        }
        self.get(x + 1, y + 1, z + 1)
    }

    /// Set the block type at interior coordinates (`0..S`).
    /// Out-of-range writes are ignored.
    #[inline]
    pub fn set_local(&mut self, x: usize, y: usize, z: usize, voxel_type: VoxelType) {
        if x >= self.size || y >= self.size || z >= self.size {
            return;
        }
        self.set(x + 1, y + 1, z + 1, voxel_type);
    }

    /// True if the padded coordinate lies in the padding layer.
    #[inline]
    pub fn is_padding(&self, x: usize, y: usize, z: usize) -> bool {
        let edge = self.padded - 1;
        x == 0 || y == 0 || z == 0 || x == edge || y == edge || z == edge
    }

    /// Fill the whole interior with one block type.
    pub fn fill(&mut self, voxel_type: VoxelType) {
        for x in 0..self.size {
            for y in 0..self.size {
                for z in 0..self.size {
                    self.set_local(x, y, z, voxel_type);
                }
            }
        }
    }

    /// Reset every padding cell to Air.
    pub fn clear_padding(&mut self) {
        let p = self.padded;
        for x in 0..p {
            for z in 0..p {
                for y in 0..p {
                    if self.is_padding(x, y, z) {
                        let idx = self.index(x, y, z);
                        self.voxels[idx] = Voxel::AIR;
                    }
                }
            }
        }
    }

    /// Count solid voxels in the interior.
    pub fn solid_count(&self) -> usize {
        let mut count = 0;
        for x in 1..=self.size {
            for z in 1..=self.size {
                let start = self.index(x, 1, z);
                count += self.voxels[start..start + self.size]
                    .iter()
                    .filter(|v| v.is_solid())
                    .count();
            }
        }
        count
    }

    /// True if the interior holds no solid voxel. Padding is ignored.
    pub fn is_empty(&self) -> bool {
        self.solid_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(size: usize) -> VoxelChunk {
        VoxelChunk::new(size, Position3D::ZERO).unwrap()
    }

    #[test]
    fn new_chunk_is_all_air() {
        let c = chunk(4);
        assert_eq!(c.size(), 4);
        assert_eq!(c.padded_size(), 6);
        assert!(c.is_empty());
        for x in 0..6 {
            for y in 0..6 {
                for z in 0..6 {
                    assert_eq!(c.get(x, y, z), VoxelType::Air);
                }
            }
        }
    }

    #[test]
    fn rejects_invalid_sizes() {
        assert!(VoxelChunk::new(0, Position3D::ZERO).is_err());
        assert!(VoxelChunk::new(63, Position3D::ZERO).is_err());
        assert!(VoxelChunk::new(62, Position3D::ZERO).is_ok());
    }

    #[test]
    fn local_and_padded_coordinates_agree() {
        let mut c = chunk(4);
        c.set_local(0, 1, 2, VoxelType::Stone);
        assert_eq!(c.get(1, 2, 3), VoxelType::Stone);
        assert_eq!(c.get_local(0, 1, 2), VoxelType::Stone);
        assert_eq!(c.solid_count(), 1);
        assert!(!c.is_empty());
    }

    #[test]
    fn out_of_range_reads_are_air_and_writes_ignored() {
        let mut c = chunk(4);
        c.set(6, 0, 0, VoxelType::Stone);
        c.set_local(4, 0, 0, VoxelType::Stone);
        assert_eq!(c.get(100, 0, 0), VoxelType::Air);
        assert_eq!(c.get_local(4, 0, 0), VoxelType::Air);
        assert!(c.is_empty());
    }

    #[test]
    fn padding_detection() {
        let c = chunk(4);
        assert!(c.is_padding(0, 2, 2));
        assert!(c.is_padding(2, 5, 2));
        assert!(!c.is_padding(1, 1, 1));
        assert!(!c.is_padding(4, 4, 4));
    }

    #[test]
    fn padding_is_not_counted_and_can_be_cleared() {
        let mut c = chunk(4);
        c.set(0, 2, 2, VoxelType::Dirt);
        assert!(c.is_empty());
        assert_eq!(c.get(0, 2, 2), VoxelType::Dirt);

        c.clear_padding();
        assert_eq!(c.get(0, 2, 2), VoxelType::Air);
    }

    #[test]
    fn fill_sets_interior_only() {
        let mut c = chunk(3);
        c.fill(VoxelType::Sand);
        assert_eq!(c.solid_count(), 27);
        assert_eq!(c.get(0, 1, 1), VoxelType::Air);
    }

    #[test]
    fn lod_builder() {
        let c = chunk(2).with_lod(Lod::new(2));
        assert_eq!(c.lod().scale(), 4);
    }
}
