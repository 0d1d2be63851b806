//! SVG fixtures and upload builders.

use svgrast::models::{UploadCandidate, SVG_MEDIA_TYPE};

/// 64x64 red square with explicit intrinsic dimensions.
pub const SQUARE_64: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect width="64" height="64" fill="#ff0000"/></svg>"##;

/// Document without width, height, or viewBox: no usable intrinsic size.
pub const NO_INTRINSIC_SIZE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg"><circle cx="20" cy="20" r="10" fill="#00ff00"/></svg>"##;

/// Not an SVG document at all.
pub const MALFORMED: &str = "<svg this is not xml";

/// In-memory upload with the SVG media type declared.
pub fn svg_candidate(name: &str, svg: &str) -> UploadCandidate {
    UploadCandidate::from_bytes(name, SVG_MEDIA_TYPE, svg.as_bytes().to_vec())
}
