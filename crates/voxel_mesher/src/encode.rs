//! Binary occupancy encoding.
//!
//! Packs a padded chunk into `u64` columns, one bit per voxel along the
//! column's axis, separately for each block type. Every voxel lands in three
//! column sets so culling along any axis is a shift within a single word:
//!
//! | Axis | Column index | Bit |
//! |------|--------------|-----|
//! | Y    | `x * P + z`  | `y` |
//! | X    | `y * P + z`  | `x` |
//! | Z    | `y * P + x`  | `z` |
//!
//! `P` is the padded side length. Bit 0 and bit `P - 1` are padding.

use crate::boundary::BoundaryPolicy;
use crate::core::Axis;
use crate::voxel::VoxelType;

/// Column index and bit for padded coordinates `[x, y, z]` along `axis`.
#[inline]
pub const fn column_slot(axis: Axis, pos: [usize; 3], padded: usize) -> (usize, usize) {
    let [x, y, z] = pos;
    match axis {
        Axis::Y => (x * padded + z, y),
        Axis::X => (y * padded + z, x),
        Axis::Z => (y * padded + x, z),
    }
}

/// Coordinates of `bit` in the column addressed by `(a, b)` along `axis`.
///
/// Inverse of [`column_slot`] with the column index split into its two
/// in-plane components. Works on padded or interior coordinates alike.
#[inline]
pub const fn column_voxel(axis: Axis, a: usize, b: usize, bit: usize) -> [usize; 3] {
    match axis {
        Axis::Y => [a, bit, b],
        Axis::X => [bit, a, b],
        Axis::Z => [b, a, bit],
    }
}

/// The three column sets of one block type.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisColumns {
    columns: [Vec<u64>; 3],
}

impl AxisColumns {
    fn new(padded: usize) -> Self {
        let n = padded * padded;
        Self {
            columns: [vec![0; n], vec![0; n], vec![0; n]],
        }
    }

    /// Columns along `axis`, indexed as described in the module docs.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &[u64] {
        &self.columns[axis.index()]
    }

    #[inline]
    fn insert(&mut self, pos: [usize; 3], padded: usize) {
        for axis in Axis::ALL {
            let (idx, bit) = column_slot(axis, pos, padded);
            self.columns[axis.index()][idx] |= 1u64 << bit;
        }
    }
}

/// Occupancy columns for every block type present in a chunk.
///
/// Storage is a fixed array indexed by [`VoxelType::index`]; types that never
/// occur allocate nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyMaps {
    size: usize,
    padded: usize,
    types: [Option<Box<AxisColumns>>; VoxelType::COUNT],
}

impl OccupancyMaps {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            padded: size + 2,
            types: Default::default(),
        }
    }

    /// Interior side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn padded_size(&self) -> usize {
        self.padded
    }

    /// Columns of one block type, if it occurs anywhere in the padded extent.
    #[inline]
    pub fn columns(&self, voxel_type: VoxelType) -> Option<&AxisColumns> {
        self.types[voxel_type.index()].as_deref()
    }

    /// Block types with at least one set bit, in index order.
    pub fn present_types(&self) -> impl Iterator<Item = VoxelType> + '_ {
        VoxelType::SOLID
            .into_iter()
            .filter(|t| self.types[t.index()].is_some())
    }

    /// Mark padded coordinates as occupied by `voxel_type`. Air is ignored.
    pub fn insert(&mut self, pos: [usize; 3], voxel_type: VoxelType) {
        if !voxel_type.is_solid() {
            return;
        }
        let padded = self.padded;
        self.types[voxel_type.index()]
            .get_or_insert_with(|| Box::new(AxisColumns::new(padded)))
            .insert(pos, padded);
    }

    /// True if padded coordinates hold `voxel_type`.
    pub fn contains(&self, pos: [usize; 3], voxel_type: VoxelType) -> bool {
        match self.columns(voxel_type) {
            Some(cols) => {
                let (idx, bit) = column_slot(Axis::Y, pos, self.padded);
                cols.axis(Axis::Y)[idx] & (1u64 << bit) != 0
            }
            None => false,
        }
    }
}

/// Encode a chunk into per-type occupancy columns.
///
/// Interior cells come from the chunk; padding cells are resolved by the
/// boundary policy.
pub fn encode_occupancy(policy: &BoundaryPolicy<'_>) -> OccupancyMaps {
    let chunk = policy.chunk();
    let p = chunk.padded_size();
    let mut maps = OccupancyMaps::new(chunk.size());

    for x in 0..p {
        for z in 0..p {
            for y in 0..p {
                let voxel_type = policy.voxel_at(x, y, z);
                if voxel_type.is_solid() {
                    maps.insert([x, y, z], voxel_type);
                }
            }
        }
    }

    maps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::NeighborSnapshot;
    use crate::chunk::VoxelChunk;
    use crate::core::{Face, Position3D};

    fn chunk(size: usize) -> VoxelChunk {
        VoxelChunk::new(size, Position3D::ZERO).unwrap()
    }

    #[test]
    fn slot_and_voxel_are_inverse() {
        let p = 7;
        for axis in Axis::ALL {
            for x in 0..p {
                for y in 0..p {
                    for z in 0..p {
                        let (idx, bit) = column_slot(axis, [x, y, z], p);
                        assert_eq!(column_voxel(axis, idx / p, idx % p, bit), [x, y, z]);
                    }
                }
            }
        }
    }

    #[test]
    fn voxel_sets_bit_in_all_three_axes() {
        let mut c = chunk(4);
        c.set(1, 2, 3, VoxelType::Stone);
        let maps = encode_occupancy(&BoundaryPolicy::isolated(&c));
        let p = maps.padded_size();

        let cols = maps.columns(VoxelType::Stone).unwrap();
        assert_eq!(cols.axis(Axis::Y)[p + 3], 1 << 2);
        assert_eq!(cols.axis(Axis::X)[2 * p + 3], 1 << 1);
        assert_eq!(cols.axis(Axis::Z)[2 * p + 1], 1 << 3);

        let set_bits: u32 = Axis::ALL
            .iter()
            .map(|&a| cols.axis(a).iter().map(|c| c.count_ones()).sum::<u32>())
            .sum();
        assert_eq!(set_bits, 3);
    }

    #[test]
    fn types_are_encoded_separately() {
        let mut c = chunk(4);
        c.set(1, 1, 1, VoxelType::Stone);
        c.set(2, 1, 1, VoxelType::Grass);
        let maps = encode_occupancy(&BoundaryPolicy::isolated(&c));

        assert!(maps.contains([1, 1, 1], VoxelType::Stone));
        assert!(!maps.contains([2, 1, 1], VoxelType::Stone));
        assert!(maps.contains([2, 1, 1], VoxelType::Grass));
        assert!(maps.columns(VoxelType::Sand).is_none());
        assert_eq!(
            maps.present_types().collect::<Vec<_>>(),
            vec![VoxelType::Stone, VoxelType::Grass]
        );
    }

    #[test]
    fn air_is_never_encoded() {
        let mut maps = OccupancyMaps::new(2);
        maps.insert([1, 1, 1], VoxelType::Air);
        assert!(maps.columns(VoxelType::Air).is_none());
        assert_eq!(maps.present_types().count(), 0);
    }

    #[test]
    fn padding_comes_from_policy() {
        let c = chunk(4);
        let mut east = chunk(4);
        east.fill(VoxelType::Dirt);
        let neighbors = NeighborSnapshot::none().with(Face::PosX, &east);
        let maps = encode_occupancy(&BoundaryPolicy::new(&c, neighbors));

        assert!(maps.contains([5, 2, 2], VoxelType::Dirt));
        assert!(!maps.contains([5, 0, 2], VoxelType::Dirt));
        assert!(!maps.contains([0, 2, 2], VoxelType::Dirt));
    }

    #[test]
    fn max_size_fits_in_column() {
        let mut c = chunk(62);
        c.set_local(61, 61, 61, VoxelType::Snow);
        let maps = encode_occupancy(&BoundaryPolicy::isolated(&c));
        assert!(maps.contains([62, 62, 62], VoxelType::Snow));
    }
}
