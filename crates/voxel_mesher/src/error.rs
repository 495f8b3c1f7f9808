//! Error types for chunk construction and configuration.
//!
//! Meshing itself is infallible; these errors only come from building inputs.

use thiserror::Error;

use crate::voxel::VoxelType;

/// Errors raised while validating configuration or building chunks.
#[derive(Error, Debug)]
pub enum MesherError {
    /// Chunk side length outside the range a `u64` column can hold with padding.
    #[error("chunk size must be in 1..={max} (got {size})")]
    InvalidChunkSize {
        /// Requested side length.
        size: usize,
        /// Largest supported side length.
        max: usize,
    },

    /// Voxel size is not a positive finite number.
    #[error("voxel size must be finite and > 0 (got {0})")]
    InvalidVoxelSize(f32),

    /// Palette color component outside `[0, 1]`.
    #[error("color for {voxel_type:?} must have finite components in [0, 1] (got {color:?})")]
    InvalidColor {
        /// Block type the color was assigned to.
        voxel_type: VoxelType,
        /// The rejected color.
        color: [f32; 3],
    },

    /// Air never produces faces and cannot carry a color.
    #[error("air cannot be assigned a color")]
    AirColor,

    /// Dense input buffer does not match its declared dimensions.
    #[error("dense voxel buffer holds {actual} cells but dims {dims:?} require {expected}")]
    DenseSizeMismatch {
        /// Declared grid dimensions.
        dims: [usize; 3],
        /// Cells required by `dims`.
        expected: usize,
        /// Cells actually supplied.
        actual: usize,
    },

    /// Dense grid larger than the chunk interior.
    #[error("dense grid {dims:?} does not fit a chunk of size {size}")]
    DenseTooLarge {
        /// Declared grid dimensions.
        dims: [usize; 3],
        /// Chunk side length.
        size: usize,
    },

    /// Wire code that does not name a block type.
    #[error("unknown voxel type code {0}")]
    UnknownVoxelType(u8),

    /// Malformed TOML configuration.
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
