use crate::error::ConvertError;
use crate::models::{UploadCandidate, SVG_MEDIA_TYPE};

/// Extension accepted as an SVG marker when the platform misreports the
/// media type.
pub const SVG_EXTENSION: &str = ".svg";

const PNG_EXTENSION: &str = ".png";

/// Check that an upload candidate plausibly is an SVG document.
///
/// The declared media type wins; the extension check is a case-insensitive
/// fallback. No bytes are read here.
pub fn validate(candidate: &UploadCandidate) -> Result<(), ConvertError> {
    if candidate.media_type() == SVG_MEDIA_TYPE
        || candidate.name().to_ascii_lowercase().ends_with(SVG_EXTENSION)
    {
        Ok(())
    } else {
        Err(ConvertError::InvalidFileType(candidate.name().to_string()))
    }
}

/// Derive the download name for the converted file.
///
/// Only an exact `.svg` suffix is swapped for `.png`; any other name passes
/// through unchanged.
pub fn download_name(name: &str) -> String {
    match name.strip_suffix(SVG_EXTENSION) {
        Some(stem) => format!("{stem}{PNG_EXTENSION}"),
        None => name.to_string(),
    }
}
