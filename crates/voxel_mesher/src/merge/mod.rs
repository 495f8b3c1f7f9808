//! Greedy merge of visible faces into quads.
//!
//! The greedy merge combines adjacent faces of the same block type into
//! larger rectangles, significantly reducing triangle count.
//!
//! Each (face, block type) mask is scattered into per-layer planes laid out
//! along the face's `(U, V)` axes (see [`Face::plane_axes`]):
//! - Y faces: sweep through Y layers, merge in X then Z
//! - X faces: sweep through X layers, merge in Y then Z
//! - Z faces: sweep through Z layers, merge in X then Y
//!
//! The planes live in a [`MergeScratch`] arena reused across every pair, so
//! the masks themselves are never mutated.

mod plane;

pub use plane::greedy_merge_plane;

use crate::core::{Face, Quad};
use crate::cull::FaceMasks;
use crate::encode::column_voxel;
use crate::voxel::VoxelType;

/// Working planes for one meshing call.
///
/// `planes[layer * S + u]` holds bit `v`.
#[derive(Debug)]
pub struct MergeScratch {
    size: usize,
    planes: Vec<u64>,
}

impl MergeScratch {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            planes: vec![0; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scatter one mask into layer planes. Returns a bitset of non-empty layers.
    fn scatter(&mut self, face: Face, mask: &[u64]) -> u64 {
        let s = self.size;
        let axis = face.axis();
        let mut layers = 0u64;

        for a in 0..s {
            for b in 0..s {
                let mut bits = mask[a * s + b];
                while bits != 0 {
                    let c = bits.trailing_zeros() as usize;
                    bits &= bits - 1;

                    let (layer, u, v) = face.from_local(column_voxel(axis, a, b, c));
                    self.planes[layer * s + u] |= 1u64 << v;
                    layers |= 1u64 << layer;
                }
            }
        }

        layers
    }

    /// Merge every layer of one (face, type) mask, appending quads.
    pub fn merge_mask(
        &mut self,
        face: Face,
        voxel_type: VoxelType,
        mask: &[u64],
        output: &mut Vec<Quad>,
    ) {
        let s = self.size;
        let mut layers = self.scatter(face, mask);

        while layers != 0 {
            let layer = layers.trailing_zeros() as usize;
            layers &= layers - 1;

            let plane = &mut self.planes[layer * s..(layer + 1) * s];
            greedy_merge_plane(plane, face, voxel_type, layer, output);
        }

        debug_assert!(self.planes.iter().all(|&c| c == 0), "scratch not drained");
    }
}

/// Merge one face direction, all block types, in type order.
pub fn greedy_merge_face(
    face: Face,
    masks: &FaceMasks,
    scratch: &mut MergeScratch,
    output: &mut Vec<Quad>,
) {
    for voxel_type in VoxelType::SOLID {
        if let Some(mask) = masks.mask(face, voxel_type) {
            scratch.merge_mask(face, voxel_type, mask, output);
        }
    }
}

/// Merge all visible faces.
///
/// Output order is deterministic: face order, then block type, then layer,
/// U and V.
pub fn greedy_merge_faces(masks: &FaceMasks) -> Vec<Quad> {
    let mut scratch = MergeScratch::new(masks.size());
    let mut quads = Vec::new();
    for face in Face::ALL {
        greedy_merge_face(face, masks, &mut scratch, &mut quads);
    }
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryPolicy;
    use crate::chunk::VoxelChunk;
    use crate::core::Position3D;
    use crate::cull::cull_faces;
    use crate::encode::encode_occupancy;

    fn chunk(size: usize) -> VoxelChunk {
        VoxelChunk::new(size, Position3D::ZERO).unwrap()
    }

    fn quads(c: &VoxelChunk) -> Vec<Quad> {
        greedy_merge_faces(&cull_faces(&encode_occupancy(&BoundaryPolicy::isolated(c))))
    }

    #[test]
    fn single_voxel_six_unit_quads() {
        let mut c = chunk(8);
        c.set_local(3, 4, 5, VoxelType::Stone);
        let q = quads(&c);

        assert_eq!(q.len(), 6);
        for (quad, face) in q.iter().zip(Face::ALL) {
            assert_eq!(quad.face, face);
            assert_eq!(quad.area(), 1);
            assert_eq!(quad.anchor(), [3, 4, 5]);
        }
    }

    #[test]
    fn line_along_x() {
        let n = 7;
        let mut c = chunk(16);
        for x in 2..2 + n {
            c.set_local(x, 5, 5, VoxelType::Stone);
        }
        let q = quads(&c);

        assert_eq!(q.len(), 6);
        let long: Vec<_> = q.iter().filter(|q| q.area() == n as u32).collect();
        let unit: Vec<_> = q.iter().filter(|q| q.area() == 1).collect();
        assert_eq!(long.len(), 4);
        assert_eq!(unit.len(), 2);
        assert!(unit.iter().all(|q| q.face.axis() == crate::core::Axis::X));
    }

    #[test]
    fn line_along_y_and_z() {
        for axis in 0..2 {
            let mut c = chunk(16);
            for i in 1..6 {
                if axis == 0 {
                    c.set_local(4, i, 4, VoxelType::Grass);
                } else {
                    c.set_local(4, 4, i, VoxelType::Grass);
                }
            }
            let q = quads(&c);
            assert_eq!(q.len(), 6);
            assert_eq!(q.iter().filter(|q| q.area() == 5).count(), 4);
        }
    }

    #[test]
    fn solid_box_is_six_quads() {
        let mut c = chunk(12);
        for x in 1..5 {
            for y in 2..9 {
                for z in 3..6 {
                    c.set_local(x, y, z, VoxelType::Dirt);
                }
            }
        }
        let q = quads(&c);
        assert_eq!(q.len(), 6);

        let area = |face: Face| q.iter().find(|q| q.face == face).map(Quad::area);
        assert_eq!(area(Face::PosY), Some(4 * 3));
        assert_eq!(area(Face::NegX), Some(7 * 3));
        assert_eq!(area(Face::PosZ), Some(4 * 7));
    }

    #[test]
    fn full_chunk_is_six_quads() {
        let mut c = chunk(30);
        c.fill(VoxelType::Stone);
        let q = quads(&c);
        assert_eq!(q.len(), 6);
        assert!(q.iter().all(|q| q.width == 30 && q.height == 30));
    }

    #[test]
    fn types_never_merge_together() {
        let mut c = chunk(8);
        c.set_local(1, 1, 1, VoxelType::Stone);
        c.set_local(2, 1, 1, VoxelType::Sand);
        let q = quads(&c);

        // Shared face is visible from both sides
        assert_eq!(q.len(), 12);
        let top: Vec<_> = q.iter().filter(|q| q.face == Face::PosY).collect();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].voxel_type, VoxelType::Stone);
        assert_eq!(top[1].voxel_type, VoxelType::Sand);
    }

    #[test]
    fn output_is_deterministic_and_ordered() {
        let mut c = chunk(10);
        for (i, t) in VoxelType::SOLID.iter().enumerate() {
            c.set_local(i, i, 9 - i, *t);
            c.set_local(i, 0, i, *t);
        }
        let first = quads(&c);
        let second = quads(&c);
        assert_eq!(first, second);

        let keys: Vec<_> = first
            .iter()
            .map(|q| (q.face, q.voxel_type, q.layer, q.u, q.v))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn scratch_is_reusable() {
        let mut c = chunk(6);
        c.fill(VoxelType::Snow);
        let masks = cull_faces(&encode_occupancy(&BoundaryPolicy::isolated(&c)));

        let mut scratch = MergeScratch::new(6);
        let mut out = Vec::new();
        greedy_merge_face(Face::PosX, &masks, &mut scratch, &mut out);
        greedy_merge_face(Face::PosX, &masks, &mut scratch, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], out[1]);
    }
}
