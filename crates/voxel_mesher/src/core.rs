//! Core type definitions for the mesher.

use bytemuck::{Pod, Zeroable};

use crate::voxel::VoxelType;

/// Largest supported chunk side length.
/// A padded column (side + 2 bits) must fit in one `u64`.
pub const MAX_CHUNK_SIZE: usize = 62;
/// Default chunk side length (padded size 32).
pub const DEFAULT_CHUNK_SIZE: usize = 30;

/// Face direction indices.
pub const FACE_POS_Y: usize = 0;
pub const FACE_NEG_Y: usize = 1;
pub const FACE_POS_X: usize = 2;
pub const FACE_NEG_X: usize = 3;
pub const FACE_POS_Z: usize = 4;
pub const FACE_NEG_Z: usize = 5;

/// Normal vectors for each face direction.
pub const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 1.0, 0.0],   // +Y
    [0.0, -1.0, 0.0],  // -Y
    [1.0, 0.0, 0.0],   // +X
    [-1.0, 0.0, 0.0],  // -X
    [0.0, 0.0, 1.0],   // +Z
    [0.0, 0.0, -1.0],  // -Z
];

/// Integer triple used for chunk-local coordinates and world-space chunk origins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position3D {
    pub const ZERO: Position3D = Position3D { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// World position as floats, scaled by the voxel size.
    pub fn to_world(self, voxel_size: f32) -> [f32; 3] {
        [
            self.x as f32 * voxel_size,
            self.y as f32 * voxel_size,
            self.z as f32 * voxel_size,
        ]
    }
}

/// One of the three grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Face direction of a voxel face.
///
/// Discriminants match the `FACE_*` index constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    /// All faces in index order.
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Axis the face normal points along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Face::PosY | Face::NegY => Axis::Y,
            Face::PosX | Face::NegX => Axis::X,
            Face::PosZ | Face::NegZ => Axis::Z,
        }
    }

    /// True if the normal points along the positive axis.
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Face::PosY | Face::PosX | Face::PosZ)
    }

    /// Unit normal vector.
    #[inline]
    pub const fn normal(self) -> [f32; 3] {
        FACE_NORMALS[self as usize]
    }

    /// In-plane axes `(U, V)` for greedy merging.
    ///
    /// Quad width runs along U, height along V:
    /// - Y faces: U = X, V = Z
    /// - X faces: U = Y, V = Z
    /// - Z faces: U = X, V = Y
    pub const fn plane_axes(self) -> (Axis, Axis) {
        match self.axis() {
            Axis::Y => (Axis::X, Axis::Z),
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Map face-plane coordinates to chunk-local `[x, y, z]`.
    ///
    /// `layer` is the coordinate along the normal axis. This is the only place
    /// plane coordinates are turned back into voxel coordinates.
    #[inline]
    pub const fn to_local(self, layer: usize, u: usize, v: usize) -> [usize; 3] {
        match self.axis() {
            Axis::Y => [u, layer, v],
            Axis::X => [layer, u, v],
            Axis::Z => [u, v, layer],
        }
    }

    /// Inverse of [`Face::to_local`]: returns `(layer, u, v)`.
    #[inline]
    pub const fn from_local(self, pos: [usize; 3]) -> (usize, usize, usize) {
        let [x, y, z] = pos;
        match self.axis() {
            Axis::Y => (y, x, z),
            Axis::X => (x, y, z),
            Axis::Z => (z, x, y),
        }
    }
}

/// A merged rectangle of visible faces.
///
/// Coordinates are chunk-interior voxel coordinates (padding excluded).
/// `width` runs along the face's U axis and `height` along V.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    pub face: Face,
    pub voxel_type: VoxelType,
    /// Coordinate along the face normal axis.
    pub layer: u32,
    pub u: u32,
    pub v: u32,
    pub width: u32,
    pub height: u32,
}

impl Quad {
    /// Interior voxel coordinate of the quad's minimum corner voxel.
    pub fn anchor(&self) -> [u32; 3] {
        let [x, y, z] = self
            .face
            .to_local(self.layer as usize, self.u as usize, self.v as usize);
        [x as u32, y as u32, z as u32]
    }

    /// Number of voxel faces covered.
    #[inline]
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    #[inline]
    pub fn normal(&self) -> [f32; 3] {
        self.face.normal()
    }

    /// World-space corners in winding order.
    pub fn corners(&self, origin: [f32; 3], voxel_size: f32) -> [[f32; 3]; 4] {
        crate::expand::quad_corners(self, origin, voxel_size)
    }
}

/// Interleaved vertex for direct GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Output mesh data ready for GPU buffers.
///
/// Four parallel buffers: positions, normals and colors carry 3 floats per
/// vertex; indices carry 3 entries per triangle.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshOutput {
    /// Vertex positions (3 floats per vertex).
    pub positions: Vec<f32>,
    /// Vertex normals (3 floats per vertex).
    pub normals: Vec<f32>,
    /// Flat material colors in [0, 1] (3 floats per vertex).
    pub colors: Vec<f32>,
    /// Triangle indices (3 indices per triangle).
    pub indices: Vec<u32>,
}

impl MeshOutput {
    /// Pre-allocate capacity for estimated quad count.
    pub fn with_capacity(estimated_quads: usize) -> Self {
        let verts = estimated_quads * 4;
        Self {
            positions: Vec::with_capacity(verts * 3),
            normals: Vec::with_capacity(verts * 3),
            colors: Vec::with_capacity(verts * 3),
            indices: Vec::with_capacity(estimated_quads * 6),
        }
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads in the mesh.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Clear all mesh data.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.colors.clear();
        self.indices.clear();
    }

    /// Interleave the parallel buffers into one vertex array.
    pub fn interleaved(&self) -> Vec<Vertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.normals.chunks_exact(3))
            .zip(self.colors.chunks_exact(3))
            .map(|((p, n), c)| Vertex {
                position: [p[0], p[1], p[2]],
                normal: [n[0], n[1], n[2]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
