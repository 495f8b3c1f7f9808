//! Input conversion functions to [`VoxelChunk`].
//!
//! Provides conversion from various input formats:
//! - Position arrays (voxel center coordinates)
//! - Dense voxel arrays (block type per voxel)
//! - Dense wire codes (one `u8` per voxel, as sent by the wasm bindings)

use crate::chunk::VoxelChunk;
use crate::core::Position3D;
use crate::error::MesherError;
use crate::voxel::VoxelType;

/// Epsilon for robust float-to-int conversion.
/// Handles floating point edge cases near integer boundaries.
const COORD_EPSILON: f32 = 1e-5;

/// Robust floor that handles values very close to integers.
///
/// When a value is within COORD_EPSILON of an integer, rounds to that integer
/// instead of flooring. This prevents off-by-one errors from floating point
/// precision issues.
#[inline]
fn robust_floor(value: f32) -> i32 {
    let rounded = value.round();
    if (value - rounded).abs() < COORD_EPSILON {
        rounded as i32
    } else {
        value.floor() as i32
    }
}

/// Convert voxel center positions to a chunk.
///
/// Positions are world-space (x, y, z) triples packed as a flat array. The
/// chunk's world origin is `origin * voxel_size`. Voxels outside the chunk
/// interior and non-finite positions are ignored.
///
/// # Example
/// ```
/// use voxel_mesher::{positions_to_chunk, Position3D, VoxelType};
///
/// let positions = [0.5, 0.5, 0.5, 1.5, 0.5, 0.5]; // Two voxels
/// let chunk = positions_to_chunk(&positions, 1.0, 8, Position3D::ZERO, VoxelType::Stone).unwrap();
///
/// assert_eq!(chunk.get_local(0, 0, 0), VoxelType::Stone);
/// assert_eq!(chunk.get_local(1, 0, 0), VoxelType::Stone);
/// ```
pub fn positions_to_chunk(
    positions: &[f32],
    voxel_size: f32,
    chunk_size: usize,
    origin: Position3D,
    voxel_type: VoxelType,
) -> Result<VoxelChunk, MesherError> {
    if !voxel_size.is_finite() || voxel_size <= 0.0 {
        return Err(MesherError::InvalidVoxelSize(voxel_size));
    }
    let mut chunk = VoxelChunk::new(chunk_size, origin)?;
    let world_origin = origin.to_world(voxel_size);
    let inv_size = 1.0 / voxel_size;
    let size = chunk_size as i32;

    for pos in positions.chunks_exact(3) {
        if !pos.iter().all(|c| c.is_finite()) {
            continue;
        }
        // Convert world position to chunk-local voxel coordinates
        let lx = robust_floor((pos[0] - world_origin[0]) * inv_size);
        let ly = robust_floor((pos[1] - world_origin[1]) * inv_size);
        let lz = robust_floor((pos[2] - world_origin[2]) * inv_size);

        let inside = |c: i32| (0..size).contains(&c);
        if inside(lx) && inside(ly) && inside(lz) {
            chunk.set_local(lx as usize, ly as usize, lz as usize, voxel_type);
        }
    }

    Ok(chunk)
}

/// Convert a dense block type array to a chunk.
///
/// Input is stored in X-major order:
/// `voxels[x + y * width + z * width * height]`
///
/// `dims` may be smaller than the chunk; the grid fills from the chunk's
/// minimum corner.
///
/// # Example
/// ```
/// use voxel_mesher::{dense_to_chunk, Position3D, VoxelType};
///
/// let mut voxels = vec![VoxelType::Air; 4 * 4 * 4];
/// voxels[0] = VoxelType::Grass; // (0, 0, 0)
///
/// let chunk = dense_to_chunk(&voxels, [4, 4, 4], 4, Position3D::ZERO).unwrap();
/// assert_eq!(chunk.get_local(0, 0, 0), VoxelType::Grass);
/// ```
pub fn dense_to_chunk(
    voxels: &[VoxelType],
    dims: [usize; 3],
    chunk_size: usize,
    origin: Position3D,
) -> Result<VoxelChunk, MesherError> {
    let mut chunk = VoxelChunk::new(chunk_size, origin)?;
    check_dense(voxels.len(), dims, chunk_size)?;
    let [dx, dy, _] = dims;
    dense_fill_chunk(&mut chunk, dims, |x, y, z| Ok(voxels[x + y * dx + z * dx * dy]))?;
    Ok(chunk)
}

/// Convert a dense block type array to a chunk.
///
/// Alternative indexing: Z-major order (common in some voxel formats).
/// `voxels[z + y * depth + x * depth * height]`
pub fn dense_to_chunk_zyx(
    voxels: &[VoxelType],
    dims: [usize; 3],
    chunk_size: usize,
    origin: Position3D,
) -> Result<VoxelChunk, MesherError> {
    let mut chunk = VoxelChunk::new(chunk_size, origin)?;
    check_dense(voxels.len(), dims, chunk_size)?;
    let [_, dy, dz] = dims;
    dense_fill_chunk(&mut chunk, dims, |x, y, z| Ok(voxels[z + y * dz + x * dz * dy]))?;
    Ok(chunk)
}

/// Convert dense wire codes (X-major, see [`dense_to_chunk`]) to a chunk.
///
/// Each code is a [`VoxelType`] discriminant; unknown codes are an error.
pub fn dense_codes_to_chunk(
    codes: &[u8],
    dims: [usize; 3],
    chunk_size: usize,
    origin: Position3D,
) -> Result<VoxelChunk, MesherError> {
    let mut chunk = VoxelChunk::new(chunk_size, origin)?;
    check_dense(codes.len(), dims, chunk_size)?;
    let [dx, dy, _] = dims;
    dense_fill_chunk(&mut chunk, dims, |x, y, z| {
        VoxelType::try_from(codes[x + y * dx + z * dx * dy])
    })?;
    Ok(chunk)
}

fn check_dense(len: usize, dims: [usize; 3], chunk_size: usize) -> Result<(), MesherError> {
    if dims.iter().any(|&d| d > chunk_size) {
        return Err(MesherError::DenseTooLarge {
            dims,
            size: chunk_size,
        });
    }
    let expected = dims[0] * dims[1] * dims[2];
    if len != expected {
        return Err(MesherError::DenseSizeMismatch {
            dims,
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Fill a chunk interior from a dense source (shared implementation).
fn dense_fill_chunk<F>(chunk: &mut VoxelChunk, dims: [usize; 3], mut read: F) -> Result<(), MesherError>
where
    F: FnMut(usize, usize, usize) -> Result<VoxelType, MesherError>,
{
    let [dx, dy, dz] = dims;

    for x in 0..dx {
        for z in 0..dz {
            for y in 0..dy {
                let voxel_type = read(x, y, z)?;
                if voxel_type.is_solid() {
                    chunk.set_local(x, y, z, voxel_type);
                }
            }
        }
    }
    Ok(())
}
