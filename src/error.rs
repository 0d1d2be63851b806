use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Every variant is terminal for the run that raised it. Recovery is always
/// user-initiated: upload another file or reset the pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid file type: {0} is not an SVG file")]
    InvalidFileType(String),

    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("SVG decode error: {0}")]
    Decode(String),

    #[error("Failed to allocate {width}x{height} pixel surface")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
