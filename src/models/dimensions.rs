use std::fmt;

use serde::Serialize;

/// A resolved raster size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Substitute size for vector documents that declare no usable intrinsic
    /// size. 300x150 is the replaced-element default browsers report in the
    /// same situation.
    pub const FALLBACK: Self = Self {
        width: 300,
        height: 150,
    };

    /// Resolve intrinsic dimensions, falling back when either is zero.
    pub fn from_intrinsic(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            Self::FALLBACK
        } else {
            Self { width, height }
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
