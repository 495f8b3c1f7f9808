//! Level of detail.

/// Level of detail a chunk was generated at.
///
/// Level `n` cells cover `2^n` full-detail voxels per axis. Chunks at
/// different levels never cull each other's boundary faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lod(u8);

impl Lod {
    /// Full detail (one cell per voxel).
    pub const FULL: Lod = Lod(0);
    /// Coarsest supported level.
    pub const MAX_LEVEL: u8 = 8;

    /// Create a level, clamped to [`Lod::MAX_LEVEL`].
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX_LEVEL {
            Lod(Self::MAX_LEVEL)
        } else {
            Lod(level)
        }
    }

    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Full-detail voxels per cell along each axis.
    #[inline]
    pub const fn scale(self) -> u32 {
        1 << self.0
    }
}
