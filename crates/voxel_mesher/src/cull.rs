//! Bitwise face culling.
//!
//! A face is visible if the voxel has the block type AND the neighbor in that
//! direction does not. Culling is per block type, so the face between two
//! different solid types is visible from both sides.
//!
//! Each `u64` column is processed in one shift-and-mask, 64 voxels at a time.

use crate::core::{Axis, Face};
use crate::encode::OccupancyMaps;
use crate::voxel::VoxelType;

/// Visible-face bit columns per (face, block type).
///
/// For a face along axis `A`, the mask holds `S × S` columns indexed
/// `a * S + b`, where `(a, b)` are the interior in-plane coordinates in the
/// same order as the occupancy columns of `A`. Bit `c` is the interior
/// coordinate along `A`.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceMasks {
    size: usize,
    masks: [[Option<Vec<u64>>; VoxelType::COUNT]; 6],
}

impl FaceMasks {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            masks: Default::default(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Mask columns for one face and block type, if any face is visible.
    #[inline]
    pub fn mask(&self, face: Face, voxel_type: VoxelType) -> Option<&[u64]> {
        self.masks[face.index()][voxel_type.index()].as_deref()
    }

    /// One column of a mask. Missing masks read as 0.
    #[inline]
    pub fn column(&self, face: Face, voxel_type: VoxelType, a: usize, b: usize) -> u64 {
        self.mask(face, voxel_type)
            .map_or(0, |cols| cols[a * self.size + b])
    }

    #[inline]
    fn set(&mut self, face: Face, voxel_type: VoxelType, a: usize, b: usize, bits: u64) {
        if bits == 0 {
            return;
        }
        let n = self.size * self.size;
        let cols = self.masks[face.index()][voxel_type.index()].get_or_insert_with(|| vec![0; n]);
        cols[a * self.size + b] = bits;
    }

    /// Visible faces of one block type in one direction.
    pub fn type_count(&self, face: Face, voxel_type: VoxelType) -> usize {
        self.mask(face, voxel_type).map_or(0, |cols| {
            cols.iter().map(|c| c.count_ones() as usize).sum()
        })
    }

    /// Visible faces in one direction, all block types.
    pub fn face_count(&self, face: Face) -> usize {
        VoxelType::SOLID
            .iter()
            .map(|&t| self.type_count(face, t))
            .sum()
    }

    /// Count total visible faces across all directions.
    pub fn total_faces(&self) -> usize {
        Face::ALL.iter().map(|&f| self.face_count(f)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.iter().flatten().all(Option::is_none)
    }
}

/// Generate face masks from occupancy columns.
///
/// Along a column, `col >> 1` brings the `c + 1` neighbor down to bit `c`,
/// and `col << 1` brings the `c - 1` neighbor up. Bits outside `1..=S` are
/// padding or shifted in and are masked off before shifting down to interior
/// coordinates.
pub fn cull_faces(maps: &OccupancyMaps) -> FaceMasks {
    let s = maps.size();
    let p = maps.padded_size();
    let interior: u64 = ((1u64 << s) - 1) << 1;
    let mut masks = FaceMasks::new(s);

    for voxel_type in maps.present_types() {
        let Some(columns) = maps.columns(voxel_type) else {
            continue;
        };

        for axis in Axis::ALL {
            let (pos_face, neg_face) = axis_faces(axis);
            let cols = columns.axis(axis);

            for a in 1..=s {
                let row = a * p;
                for b in 1..=s {
                    let col = cols[row + b];
                    if col == 0 {
                        continue;
                    }

                    let pos = col & !(col >> 1);
                    masks.set(pos_face, voxel_type, a - 1, b - 1, (pos & interior) >> 1);

                    let neg = col & !(col << 1);
                    masks.set(neg_face, voxel_type, a - 1, b - 1, (neg & interior) >> 1);
                }
            }
        }
    }

    masks
}

fn axis_faces(axis: Axis) -> (Face, Face) {
    match axis {
        Axis::Y => (Face::PosY, Face::NegY),
        Axis::X => (Face::PosX, Face::NegX),
        Axis::Z => (Face::PosZ, Face::NegZ),
    }
}

/// Count visible faces per direction, in [`Face::ALL`] order.
/// Useful for statistics and debugging.
pub fn count_visible_faces(masks: &FaceMasks) -> [usize; 6] {
    Face::ALL.map(|face| masks.face_count(face))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryPolicy, NeighborSnapshot};
    use crate::chunk::VoxelChunk;
    use crate::core::Position3D;
    use crate::encode::encode_occupancy;

    const S: usize = 30;

    fn chunk() -> VoxelChunk {
        VoxelChunk::new(S, Position3D::ZERO).unwrap()
    }

    fn cull(chunk: &VoxelChunk) -> FaceMasks {
        cull_faces(&encode_occupancy(&BoundaryPolicy::isolated(chunk)))
    }

    #[test]
    fn single_voxel_six_faces() {
        let mut c = chunk();
        c.set_local(15, 15, 15, VoxelType::Stone);

        let masks = cull(&c);
        assert_eq!(masks.total_faces(), 6, "Single voxel should have 6 visible faces");
        assert_eq!(count_visible_faces(&masks), [1; 6]);
    }

    #[test]
    fn two_adjacent_share_face_on_every_axis() {
        for offset in [[0, 1, 0], [1, 0, 0], [0, 0, 1]] {
            let mut c = chunk();
            c.set_local(15, 15, 15, VoxelType::Stone);
            c.set_local(15 + offset[0], 15 + offset[1], 15 + offset[2], VoxelType::Stone);

            // Two voxels: 12 faces - 2 hidden = 10
            assert_eq!(cull(&c).total_faces(), 10, "offset {:?}", offset);
        }
    }

    #[test]
    fn different_types_do_not_cull() {
        let mut c = chunk();
        c.set_local(15, 15, 15, VoxelType::Stone);
        c.set_local(16, 15, 15, VoxelType::Grass);

        let masks = cull(&c);
        assert_eq!(masks.total_faces(), 12);
        assert_eq!(masks.type_count(Face::PosX, VoxelType::Stone), 1);
        assert_eq!(masks.type_count(Face::NegX, VoxelType::Grass), 1);
    }

    #[test]
    fn cube_3x3x3_interior_hidden() {
        let mut c = chunk();
        for x in 14..17 {
            for y in 14..17 {
                for z in 14..17 {
                    c.set_local(x, y, z, VoxelType::Dirt);
                }
            }
        }

        // Surface of 3x3x3 cube has 9 faces per side = 54 total
        let masks = cull(&c);
        assert_eq!(masks.total_faces(), 54, "3x3x3 cube should have 54 visible faces (9 per side)");
    }

    #[test]
    fn empty_chunk_no_faces() {
        let masks = cull(&chunk());
        assert_eq!(masks.total_faces(), 0);
        assert!(masks.is_empty());
    }

    #[test]
    fn boundary_voxel_with_air_padding_is_visible() {
        let mut c = chunk();
        c.set_local(0, 15, 15, VoxelType::Stone);

        let masks = cull(&c);
        assert_eq!(masks.total_faces(), 6);
        // X columns are indexed (y, z)
        assert_eq!(masks.column(Face::NegX, VoxelType::Stone, 15, 15), 1);
    }

    #[test]
    fn boundary_voxel_culled_by_same_lod_neighbor() {
        let mut c = chunk();
        c.set_local(S - 1, 15, 15, VoxelType::Stone);
        let mut east = chunk();
        east.set_local(0, 15, 15, VoxelType::Stone);

        let neighbors = NeighborSnapshot::none().with(Face::PosX, &east);
        let masks = cull_faces(&encode_occupancy(&BoundaryPolicy::new(&c, neighbors)));

        assert_eq!(masks.face_count(Face::PosX), 0);
        assert_eq!(masks.total_faces(), 5);
    }

    #[test]
    fn face_direction_counts() {
        let mut c = chunk();
        // Solid slab on y=15 from x=5..15, z=5..15
        for x in 5..15 {
            for z in 5..15 {
                c.set_local(x, 15, z, VoxelType::Sand);
            }
        }

        let counts = count_visible_faces(&cull(&c));

        assert_eq!(counts[Face::PosY.index()], 100);
        assert_eq!(counts[Face::NegY.index()], 100);
        assert_eq!(counts[Face::PosX.index()], 10);
        assert_eq!(counts[Face::NegX.index()], 10);
        assert_eq!(counts[Face::PosZ.index()], 10);
        assert_eq!(counts[Face::NegZ.index()], 10);
    }

    #[test]
    fn column_at_different_y_levels() {
        let mut c = chunk();
        c.set_local(15, 2, 15, VoxelType::Stone);
        c.set_local(15, 12, 15, VoxelType::Stone);
        c.set_local(15, 25, 15, VoxelType::Stone);

        let masks = cull(&c);
        // 3 separate voxels = 18 faces
        assert_eq!(masks.total_faces(), 18);
        assert_eq!(
            masks.column(Face::PosY, VoxelType::Stone, 15, 15),
            (1 << 2) | (1 << 12) | (1 << 25)
        );
    }

    #[test]
    fn full_max_size_chunk_has_only_outer_faces() {
        let mut c = VoxelChunk::new(62, Position3D::ZERO).unwrap();
        c.fill(VoxelType::Water);
        let masks = cull(&c);
        assert_eq!(masks.total_faces(), 6 * 62 * 62);
    }
}
