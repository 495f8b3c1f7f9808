//! Main meshing pipeline.
//!
//! Orchestrates the complete meshing process:
//! 1. Occupancy encoding (padded chunk to per-type bit columns)
//! 2. Face culling (determine visible faces)
//! 3. Greedy merge (combine adjacent faces into quads)
//! 4. Geometry emission (convert quads to vertex arrays)

use std::time::Duration;

use web_time::Instant;

use crate::boundary::{BoundaryPolicy, NeighborSnapshot};
use crate::chunk::VoxelChunk;
use crate::config::MesherConfig;
use crate::core::{Face, MeshOutput, Quad};
use crate::cull::{count_visible_faces, cull_faces, FaceMasks};
use crate::encode::encode_occupancy;
use crate::expand::emit_geometry;
use crate::merge::{greedy_merge_face, MergeScratch};

/// Mesh a chunk into geometry (positions, normals, colors, indices).
///
/// This is the main entry point for meshing. Boundary faces are culled
/// against `neighbors` where the boundary rules allow it. Vertices are scaled
/// by `config.voxel_size` times the chunk's LOD scale; the chunk origin is
/// scaled by `config.voxel_size`.
///
/// # Example
/// ```
/// use voxel_mesher::{mesh_chunk, MesherConfig, NeighborSnapshot, Position3D, VoxelChunk, VoxelType};
///
/// let config = MesherConfig::default();
/// let mut chunk = VoxelChunk::from_config(&config, Position3D::ZERO).unwrap();
/// chunk.set_local(15, 15, 15, VoxelType::Stone);
///
/// let mesh = mesh_chunk(&chunk, &NeighborSnapshot::none(), &config);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn mesh_chunk(
    chunk: &VoxelChunk,
    neighbors: &NeighborSnapshot<'_>,
    config: &MesherConfig,
) -> MeshOutput {
    mesh_chunk_with_stats(chunk, neighbors, config).0
}

/// Statistics about a mesh result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshStats {
    /// Total number of quads generated
    pub quad_count: usize,
    /// Quads per face direction, in [`Face::ALL`] order
    pub quads_per_face: [usize; 6],
    /// Visible voxel faces before merging
    pub visible_faces: usize,
    /// Total vertices
    pub vertex_count: usize,
    /// Total triangles
    pub triangle_count: usize,
    /// Merge efficiency (1.0 = perfect merging, 0.0 = no merging)
    pub merge_efficiency: f32,
    /// Wall-clock time spent meshing
    pub generation_time: Duration,
}

/// Mesh a chunk and return statistics along with the mesh.
pub fn mesh_chunk_with_stats(
    chunk: &VoxelChunk,
    neighbors: &NeighborSnapshot<'_>,
    config: &MesherConfig,
) -> (MeshOutput, MeshStats) {
    let start = Instant::now();

    // Early exit for empty chunks
    if chunk.is_empty() {
        let stats = MeshStats {
            generation_time: start.elapsed(),
            ..MeshStats::default()
        };
        return (MeshOutput::default(), stats);
    }

    let masks = cull_chunk(chunk, neighbors);
    let visible_faces = masks.total_faces();
    let (quads, quads_per_face) = merge_masks(&masks);

    let origin = chunk.origin().to_world(config.voxel_size);
    let voxel_size = config.voxel_size * chunk.lod().scale() as f32;
    let mesh = emit_geometry(&quads, origin, voxel_size, &config.palette);

    let merge_efficiency = if visible_faces > 0 {
        1.0 - (quads.len() as f32 / visible_faces as f32)
    } else {
        0.0
    };

    let stats = MeshStats {
        quad_count: quads.len(),
        quads_per_face,
        visible_faces,
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        merge_efficiency,
        generation_time: start.elapsed(),
    };

    log::debug!(
        "meshed chunk at {:?}: {} faces -> {} quads, {} triangles in {:?}",
        chunk.origin(),
        stats.visible_faces,
        stats.quad_count,
        stats.triangle_count,
        stats.generation_time
    );

    (mesh, stats)
}

/// Merged quads of a chunk in chunk-interior coordinates.
///
/// Same culling and merging as [`mesh_chunk`], without emitting geometry.
pub fn mesh_quads(chunk: &VoxelChunk, neighbors: &NeighborSnapshot<'_>) -> Vec<Quad> {
    if chunk.is_empty() {
        return Vec::new();
    }
    merge_masks(&cull_chunk(chunk, neighbors)).0
}

fn cull_chunk(chunk: &VoxelChunk, neighbors: &NeighborSnapshot<'_>) -> FaceMasks {
    let policy = BoundaryPolicy::new(chunk, *neighbors);
    let maps = encode_occupancy(&policy);
    let masks = cull_faces(&maps);

    if log::log_enabled!(log::Level::Trace) {
        let counts = count_visible_faces(&masks);
        for face in Face::ALL {
            log::trace!("{:?}: {} visible faces", face, counts[face.index()]);
        }
    }

    masks
}

fn merge_masks(masks: &FaceMasks) -> (Vec<Quad>, [usize; 6]) {
    let mut scratch = MergeScratch::new(masks.size());
    let mut quads = Vec::new();
    let mut quads_per_face = [0; 6];

    for face in Face::ALL {
        let before = quads.len();
        greedy_merge_face(face, masks, &mut scratch, &mut quads);
        quads_per_face[face.index()] = quads.len() - before;
    }

    (quads, quads_per_face)
}
