//! Quad expansion to vertex arrays.
//!
//! Converts merged quads into standard vertex arrays (positions, normals,
//! colors, indices) suitable for GPU rendering. Every quad becomes 4 vertices
//! and 2 triangles wound counter-clockwise when seen from outside the solid.

use crate::config::Palette;
use crate::core::{Face, MeshOutput, Quad};

/// Expand quads into vertex arrays.
///
/// # Arguments
/// * `quads` - Merged quads in chunk-interior coordinates
/// * `origin` - World position of the chunk's minimum corner
/// * `voxel_size` - Size of one chunk cell in world units
/// * `palette` - Flat color per block type
pub fn emit_geometry(
    quads: &[Quad],
    origin: [f32; 3],
    voxel_size: f32,
    palette: &Palette,
) -> MeshOutput {
    let mut output = MeshOutput::with_capacity(quads.len());
    for quad in quads {
        emit_quad(quad, origin, voxel_size, palette, &mut output);
    }
    output
}

/// Emit a single quad as 4 vertices and 6 indices.
fn emit_quad(
    quad: &Quad,
    origin: [f32; 3],
    voxel_size: f32,
    palette: &Palette,
    output: &mut MeshOutput,
) {
    let base_vertex = output.vertex_count() as u32;
    let normal = quad.normal();
    let color = palette.color(quad.voxel_type);

    for corner in &quad_corners(quad, origin, voxel_size) {
        output.positions.extend_from_slice(corner);
        output.normals.extend_from_slice(&normal);
        output.colors.extend_from_slice(&color);
    }

    // Two triangles, CCW winding
    output.indices.extend_from_slice(&[
        base_vertex,
        base_vertex + 1,
        base_vertex + 2,
        base_vertex,
        base_vertex + 2,
        base_vertex + 3,
    ]);
}

/// Compute the 4 world-space corners of a quad in winding order.
///
/// Positive faces sit one cell further along the normal than the voxel's
/// minimum corner.
pub fn quad_corners(quad: &Quad, origin: [f32; 3], voxel_size: f32) -> [[f32; 3]; 4] {
    let [x, y, z] = quad.anchor();
    let bx = origin[0] + x as f32 * voxel_size;
    let by = origin[1] + y as f32 * voxel_size;
    let bz = origin[2] + z as f32 * voxel_size;

    // Width (along U) and height (along V) in world units
    let w = quad.width as f32 * voxel_size;
    let h = quad.height as f32 * voxel_size;
    let vs = voxel_size;

    match quad.face {
        // Y faces: width extends along X, height along Z
        Face::PosY => [
            [bx, by + vs, bz],
            [bx, by + vs, bz + h],
            [bx + w, by + vs, bz + h],
            [bx + w, by + vs, bz],
        ],
        Face::NegY => [
            [bx, by, bz],
            [bx + w, by, bz],
            [bx + w, by, bz + h],
            [bx, by, bz + h],
        ],
        // X faces: width extends along Y, height along Z
        Face::PosX => [
            [bx + vs, by, bz],
            [bx + vs, by + w, bz],
            [bx + vs, by + w, bz + h],
            [bx + vs, by, bz + h],
        ],
        Face::NegX => [
            [bx, by, bz],
            [bx, by, bz + h],
            [bx, by + w, bz + h],
            [bx, by + w, bz],
        ],
        // Z faces: width extends along X, height along Y
        Face::PosZ => [
            [bx, by, bz + vs],
            [bx + w, by, bz + vs],
            [bx + w, by + h, bz + vs],
            [bx, by + h, bz + vs],
        ],
        Face::NegZ => [
            [bx, by, bz],
            [bx, by + h, bz],
            [bx + w, by + h, bz],
            [bx + w, by, bz],
        ],
    }
}
