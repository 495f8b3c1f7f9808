//! WASM bindings for the voxel mesher.
//!
//! Provides JavaScript-accessible functions for voxel meshing. Block types
//! cross the boundary as `u8` codes (0 = Air, 1 = Stone, 2 = Grass, 3 = Dirt,
//! 4 = Sand, 5 = Water, 6 = Snow).

use wasm_bindgen::prelude::*;
use voxel_mesher::{
    dense_codes_to_chunk, mesh_chunk, mesh_chunk_with_stats, positions_to_chunk, MeshOutput,
    MesherConfig, MesherError, NeighborSnapshot, Position3D, Vertex, VoxelType,
};

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
}

/// Mesh result returned to JavaScript.
///
/// Contains vertex data ready for use with Three.js BufferGeometry.
#[wasm_bindgen]
pub struct MeshResult {
    mesh: MeshOutput,
}

#[wasm_bindgen]
impl MeshResult {
    /// Get vertex positions (3 floats per vertex).
    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f32> {
        self.mesh.positions.clone()
    }

    /// Get vertex normals (3 floats per vertex).
    #[wasm_bindgen(getter)]
    pub fn normals(&self) -> Vec<f32> {
        self.mesh.normals.clone()
    }

    /// Get vertex colors (3 floats per vertex, in [0, 1]).
    #[wasm_bindgen(getter)]
    pub fn colors(&self) -> Vec<f32> {
        self.mesh.colors.clone()
    }

    /// Get triangle indices.
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u32> {
        self.mesh.indices.clone()
    }

    /// Interleaved vertex buffer: position, normal, color (9 floats per vertex).
    ///
    /// Matches a single WebGPU vertex buffer with stride 36.
    #[wasm_bindgen(getter)]
    pub fn interleaved(&self) -> Vec<f32> {
        bytemuck::cast_slice::<Vertex, f32>(&self.mesh.interleaved()).to_vec()
    }

    /// Number of vertices in the mesh.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Number of triangles in the mesh.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Whether the mesh is empty (no geometry).
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}

impl From<MeshOutput> for MeshResult {
    fn from(mesh: MeshOutput) -> Self {
        Self { mesh }
    }
}

fn to_js_error(err: MesherError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn config(chunk_size: u32, voxel_size: f32) -> Result<MesherConfig, JsValue> {
    let config = MesherConfig {
        chunk_size: chunk_size as usize,
        voxel_size,
        ..MesherConfig::default()
    };
    config.validate().map_err(to_js_error)?;
    Ok(config)
}

/// Mesh a dense voxel grid.
///
/// Takes a 3D grid of block type codes (0 = Air) and generates an optimized
/// mesh. The grid must fit inside one chunk of side `chunk_size`.
///
/// # Arguments
/// * `voxels` - Flat array of block type codes, X-major order
/// * `width`, `height`, `depth` - Grid dimensions
/// * `origin_x`, `origin_y`, `origin_z` - Chunk origin in voxel units
/// * `chunk_size` - Chunk side length (1..=62)
/// * `voxel_size` - Size of each voxel in world units
///
/// # Example (JavaScript)
/// ```javascript
/// const voxels = new Uint8Array(30 * 30 * 30);
/// voxels.fill(1); // All stone
/// const result = mesh_dense_voxels(voxels, 30, 30, 30, 0, 0, 0, 30, 0.1);
/// ```
#[wasm_bindgen]
pub fn mesh_dense_voxels(
    voxels: &[u8],
    width: u32,
    height: u32,
    depth: u32,
    origin_x: i32,
    origin_y: i32,
    origin_z: i32,
    chunk_size: u32,
    voxel_size: f32,
) -> Result<MeshResult, JsValue> {
    let config = config(chunk_size, voxel_size)?;
    let dims = [width as usize, height as usize, depth as usize];
    let origin = Position3D::new(origin_x, origin_y, origin_z);
    let chunk = dense_codes_to_chunk(voxels, dims, config.chunk_size, origin).map_err(to_js_error)?;

    let output = mesh_chunk(&chunk, &NeighborSnapshot::none(), &config);
    log(&format!("meshed dense grid: {} triangles", output.triangle_count()));
    Ok(output.into())
}

/// Mesh voxel center positions into optimized geometry.
///
/// Every position becomes one voxel of block type `voxel_type`.
///
/// # Example (JavaScript)
/// ```javascript
/// const positions = new Float32Array([0.5, 0.5, 0.5, 1.5, 0.5, 0.5]);
/// const result = mesh_voxel_positions(positions, 2, 0, 0, 0, 30, 1.0);
/// ```
#[wasm_bindgen]
pub fn mesh_voxel_positions(
    positions: &[f32],
    voxel_type: u8,
    origin_x: i32,
    origin_y: i32,
    origin_z: i32,
    chunk_size: u32,
    voxel_size: f32,
) -> Result<MeshResult, JsValue> {
    let config = config(chunk_size, voxel_size)?;
    let voxel_type = VoxelType::try_from(voxel_type).map_err(to_js_error)?;
    let origin = Position3D::new(origin_x, origin_y, origin_z);
    let chunk = positions_to_chunk(positions, voxel_size, config.chunk_size, origin, voxel_type)
        .map_err(to_js_error)?;

    Ok(mesh_chunk(&chunk, &NeighborSnapshot::none(), &config).into())
}

/// Mesh statistics for debugging.
#[wasm_bindgen]
pub struct MeshStats {
    quad_count: usize,
    visible_faces: usize,
    vertex_count: usize,
    triangle_count: usize,
    merge_efficiency: f32,
    generation_time_ms: f64,
}

#[wasm_bindgen]
impl MeshStats {
    #[wasm_bindgen(getter)]
    pub fn quad_count(&self) -> usize {
        self.quad_count
    }

    /// Visible voxel faces before merging.
    #[wasm_bindgen(getter)]
    pub fn visible_faces(&self) -> usize {
        self.visible_faces
    }

    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    #[wasm_bindgen(getter)]
    pub fn merge_efficiency(&self) -> f32 {
        self.merge_efficiency
    }

    #[wasm_bindgen(getter)]
    pub fn generation_time_ms(&self) -> f64 {
        self.generation_time_ms
    }
}

impl From<voxel_mesher::MeshStats> for MeshStats {
    fn from(stats: voxel_mesher::MeshStats) -> Self {
        Self {
            quad_count: stats.quad_count,
            visible_faces: stats.visible_faces,
            vertex_count: stats.vertex_count,
            triangle_count: stats.triangle_count,
            merge_efficiency: stats.merge_efficiency,
            generation_time_ms: stats.generation_time.as_secs_f64() * 1000.0,
        }
    }
}

/// Mesh dense voxels and return `[MeshResult, MeshStats]`.
#[wasm_bindgen]
pub fn mesh_dense_voxels_with_stats(
    voxels: &[u8],
    width: u32,
    height: u32,
    depth: u32,
    origin_x: i32,
    origin_y: i32,
    origin_z: i32,
    chunk_size: u32,
    voxel_size: f32,
) -> Result<js_sys::Array, JsValue> {
    let config = config(chunk_size, voxel_size)?;
    let dims = [width as usize, height as usize, depth as usize];
    let origin = Position3D::new(origin_x, origin_y, origin_z);
    let chunk = dense_codes_to_chunk(voxels, dims, config.chunk_size, origin).map_err(to_js_error)?;

    let (output, stats) = mesh_chunk_with_stats(&chunk, &NeighborSnapshot::none(), &config);
    log(&format!(
        "meshed dense grid: {} faces -> {} quads in {:?}",
        stats.visible_faces, stats.quad_count, stats.generation_time
    ));

    let mesh_result: MeshResult = output.into();
    let mesh_stats: MeshStats = stats.into();

    let result = js_sys::Array::new();
    result.push(&JsValue::from(mesh_result));
    result.push(&JsValue::from(mesh_stats));
    Ok(result)
}

// Logging support

thread_local! {
    static LOG_ENABLED: std::cell::Cell<bool> = std::cell::Cell::new(false);
}

/// Enable or disable console logging.
#[wasm_bindgen]
pub fn set_log_enabled(enabled: bool) {
    LOG_ENABLED.with(|flag| flag.set(enabled));
}

fn log(message: &str) {
    if LOG_ENABLED.with(|enabled| enabled.get()) {
        web_sys::console::log_1(&message.into());
    }
}

/// Get the version of the mesher library.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn dense_single_voxel() {
        let mut voxels = vec![0u8; 4 * 4 * 4];
        voxels[0] = 1;
        let result = mesh_dense_voxels(&voxels, 4, 4, 4, 0, 0, 0, 8, 1.0).unwrap();

        assert_eq!(result.vertex_count(), 24);
        assert_eq!(result.triangle_count(), 12);
        assert_eq!(result.colors().len(), result.positions().len());
        assert_eq!(result.interleaved().len(), 24 * 9);
    }

    #[wasm_bindgen_test]
    fn dense_empty_grid() {
        let voxels = vec![0u8; 8];
        let result = mesh_dense_voxels(&voxels, 2, 2, 2, 0, 0, 0, 8, 1.0).unwrap();
        assert!(result.is_empty());
    }

    #[wasm_bindgen_test]
    fn rejects_bad_input() {
        assert!(mesh_dense_voxels(&[0u8; 7], 2, 2, 2, 0, 0, 0, 8, 1.0).is_err());
        assert!(mesh_dense_voxels(&[9u8; 8], 2, 2, 2, 0, 0, 0, 8, 1.0).is_err());
        assert!(mesh_dense_voxels(&[0u8; 8], 2, 2, 2, 0, 0, 0, 0, 1.0).is_err());
        assert!(mesh_voxel_positions(&[0.5, 0.5, 0.5], 42, 0, 0, 0, 8, 1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn positions_mesh() {
        let result = mesh_voxel_positions(&[0.5, 0.5, 0.5, 1.5, 0.5, 0.5], 2, 0, 0, 0, 8, 1.0).unwrap();
        assert_eq!(result.triangle_count(), 12);
    }

    #[wasm_bindgen_test]
    fn stats_array() {
        let voxels = vec![1u8; 27];
        let result = mesh_dense_voxels_with_stats(&voxels, 3, 3, 3, 0, 0, 0, 8, 1.0).unwrap();
        assert_eq!(result.length(), 2);
    }

    #[wasm_bindgen_test]
    fn version_is_set() {
        assert!(!get_version().is_empty());
    }
}
