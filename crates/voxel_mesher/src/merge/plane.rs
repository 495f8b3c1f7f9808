//! Greedy merge of a single face plane.

use crate::core::{Face, Quad};
use crate::voxel::VoxelType;

/// Greedily merge the set bits of one plane into quads.
///
/// `cols[u]` holds the plane's bits along V. The plane is consumed: every
/// emitted quad clears the bits it covers, so on return all columns are 0.
///
/// Scan order is U ascending, then V ascending within a column. Each quad
/// first grows along U while the next column has the start bit, then along V
/// while every column in the width has the next bit.
pub fn greedy_merge_plane(
    cols: &mut [u64],
    face: Face,
    voxel_type: VoxelType,
    layer: usize,
    output: &mut Vec<Quad>,
) {
    let n = cols.len();

    for u in 0..n {
        while cols[u] != 0 {
            let v = cols[u].trailing_zeros();
            let start_bit = 1u64 << v;

            // Extend width in +U direction
            let mut width = 1;
            while u + width < n && cols[u + width] & start_bit != 0 {
                width += 1;
            }

            // Extend height in +V direction: rows present in every column
            let run = cols[u..u + width]
                .iter()
                .fold(!0u64, |acc, &col| acc & (col >> v));
            let height = run.trailing_ones();

            let covered = low_bits(height) << v;
            for col in &mut cols[u..u + width] {
                debug_assert_eq!(*col & covered, covered, "merged over a hidden face");
                *col &= !covered;
            }

            output.push(Quad {
                face,
                voxel_type,
                layer: layer as u32,
                u: u as u32,
                v,
                width: width as u32,
                height,
            });
        }
    }
}

#[inline]
fn low_bits(n: u32) -> u64 {
    if n >= 64 {
        !0
    } else {
        (1u64 << n) - 1
    }
}
