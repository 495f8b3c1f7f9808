//! Mesher configuration: chunk size, voxel scale and block colors.
//!
//! Configuration is supplied by the host application. It can be built in code
//! or parsed from TOML:
//!
//! ```toml
//! chunk_size = 30
//! voxel_size = 0.5
//!
//! [colors]
//! grass = [0.2, 0.8, 0.2]
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::core::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::error::MesherError;
use crate::voxel::VoxelType;

/// Display color per block type, indexed by [`VoxelType::index`].
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: [[f32; 3]; VoxelType::COUNT],
}

impl Palette {
    /// Color for a block type. Air maps to black and is never emitted.
    #[inline]
    pub fn color(&self, voxel_type: VoxelType) -> [f32; 3] {
        self.colors[voxel_type.index()]
    }

    /// Replace the color for a solid block type.
    pub fn set_color(&mut self, voxel_type: VoxelType, color: [f32; 3]) -> Result<(), MesherError> {
        if !voxel_type.is_solid() {
            return Err(MesherError::AirColor);
        }
        validate_color(voxel_type, color)?;
        self.colors[voxel_type.index()] = color;
        Ok(())
    }

    /// Check every solid color is within `[0, 1]`.
    pub fn validate(&self) -> Result<(), MesherError> {
        for voxel_type in VoxelType::SOLID {
            validate_color(voxel_type, self.color(voxel_type))?;
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                [0.0, 0.0, 0.0],     // Air
                [0.5, 0.5, 0.5],     // Stone
                [0.3, 0.7, 0.2],     // Grass
                [0.45, 0.3, 0.15],   // Dirt
                [0.9, 0.85, 0.55],   // Sand
                [0.2, 0.4, 0.85],    // Water
                [0.95, 0.95, 0.98],  // Snow
            ],
        }
    }
}

fn validate_color(voxel_type: VoxelType, color: [f32; 3]) -> Result<(), MesherError> {
    if color.iter().all(|c| c.is_finite() && (0.0..=1.0).contains(c)) {
        Ok(())
    } else {
        Err(MesherError::InvalidColor { voxel_type, color })
    }
}

/// Configuration consumed by the meshing pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct MesherConfig {
    /// Chunk side length `S` (interior voxels per axis).
    pub chunk_size: usize,
    /// World size of one full-detail voxel.
    pub voxel_size: f32,
    /// Block colors.
    pub palette: Palette,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            voxel_size: 1.0,
            palette: Palette::default(),
        }
    }
}

impl MesherConfig {
    /// Default configuration with a different chunk size.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self, MesherError> {
        let config = Self {
            chunk_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Padded side length (`S + 2`).
    #[inline]
    pub fn padded_size(&self) -> usize {
        self.chunk_size + 2
    }

    pub fn validate(&self) -> Result<(), MesherError> {
        validate_chunk_size(self.chunk_size)?;
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(MesherError::InvalidVoxelSize(self.voxel_size));
        }
        self.palette.validate()
    }

    /// Parse and validate a TOML configuration. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, MesherError> {
        let raw: RawConfig = toml::from_str(text)?;

        let mut palette = Palette::default();
        let mut overrides: Vec<_> = raw.colors.into_iter().collect();
        overrides.sort_by_key(|(voxel_type, _)| *voxel_type);
        for (voxel_type, color) in overrides {
            palette.set_color(voxel_type, color)?;
        }

        let config = Self {
            chunk_size: raw.chunk_size,
            voxel_size: raw.voxel_size,
            palette,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Validate a chunk side length.
pub fn validate_chunk_size(size: usize) -> Result<(), MesherError> {
    if size == 0 || size > MAX_CHUNK_SIZE {
        return Err(MesherError::InvalidChunkSize {
            size,
            max: MAX_CHUNK_SIZE,
        });
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    chunk_size: usize,
    voxel_size: f32,
    colors: HashMap<VoxelType, [f32; 3]>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            voxel_size: 1.0,
            colors: HashMap::new(),
        }
    }
}
