//! Voxel block types.
//!
//! The set of block types is closed and small, so per-type data throughout the
//! mesher lives in fixed arrays indexed by [`VoxelType::index`] rather than in
//! maps keyed by whichever types happen to be present.

use serde::Deserialize;

use crate::error::MesherError;

/// Block type of a single voxel.
///
/// `Air` is the empty sentinel: every face-visibility rule is defined
/// relative to it.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoxelType {
    #[default]
    Air = 0,
    Stone = 1,
    Grass = 2,
    Dirt = 3,
    Sand = 4,
    Water = 5,
    Snow = 6,
}

impl VoxelType {
    /// Number of block types, including Air.
    pub const COUNT: usize = 7;

    /// All block types in index order.
    pub const ALL: [VoxelType; Self::COUNT] = [
        VoxelType::Air,
        VoxelType::Stone,
        VoxelType::Grass,
        VoxelType::Dirt,
        VoxelType::Sand,
        VoxelType::Water,
        VoxelType::Snow,
    ];

    /// Solid block types in index order (everything except Air).
    pub const SOLID: [VoxelType; Self::COUNT - 1] = [
        VoxelType::Stone,
        VoxelType::Grass,
        VoxelType::Dirt,
        VoxelType::Sand,
        VoxelType::Water,
        VoxelType::Snow,
    ];

    /// Dense index for per-type arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for every type except Air.
    #[inline]
    pub const fn is_solid(self) -> bool {
        !matches!(self, VoxelType::Air)
    }

    /// Lowercase display name (matches the config file keys).
    pub const fn name(self) -> &'static str {
        match self {
            VoxelType::Air => "air",
            VoxelType::Stone => "stone",
            VoxelType::Grass => "grass",
            VoxelType::Dirt => "dirt",
            VoxelType::Sand => "sand",
            VoxelType::Water => "water",
            VoxelType::Snow => "snow",
        }
    }
}

impl TryFrom<u8> for VoxelType {
    type Error = MesherError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        VoxelType::ALL
            .get(code as usize)
            .copied()
            .ok_or(MesherError::UnknownVoxelType(code))
    }
}

/// A single voxel cell. No per-voxel lighting or metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Voxel {
    pub voxel_type: VoxelType,
}

impl Voxel {
    /// The empty voxel.
    pub const AIR: Voxel = Voxel { voxel_type: VoxelType::Air };

    pub const fn new(voxel_type: VoxelType) -> Self {
        Self { voxel_type }
    }

    #[inline]
    pub const fn is_solid(&self) -> bool {
        self.voxel_type.is_solid()
    }
}

impl From<VoxelType> for Voxel {
    fn from(voxel_type: VoxelType) -> Self {
        Self::new(voxel_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_all_order() {
        for (i, t) in VoxelType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn only_air_is_empty() {
        assert!(!VoxelType::Air.is_solid());
        for t in VoxelType::SOLID {
            assert!(t.is_solid(), "{:?} should be solid", t);
        }
    }

    #[test]
    fn code_conversion() {
        assert_eq!(VoxelType::try_from(0).unwrap(), VoxelType::Air);
        assert_eq!(VoxelType::try_from(6).unwrap(), VoxelType::Snow);
        assert!(matches!(
            VoxelType::try_from(7),
            Err(MesherError::UnknownVoxelType(7))
        ));
    }

    #[test]
    fn default_voxel_is_air() {
        assert_eq!(Voxel::default(), Voxel::AIR);
        assert!(!Voxel::default().is_solid());
        assert!(Voxel::from(VoxelType::Sand).is_solid());
    }
}
