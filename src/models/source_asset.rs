use std::path::{Path, PathBuf};

use super::SVG_MEDIA_TYPE;

/// Byte source of an upload: a filesystem path read lazily by the content
/// loader, or bytes already in memory (drag-and-drop payloads, tests).
#[derive(Debug, Clone)]
pub enum AssetSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// An upload as handed over by a presentation layer, before validation.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    name: String,
    media_type: String,
    source: AssetSource,
}

impl UploadCandidate {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        source: AssetSource,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source,
        }
    }

    /// Candidate backed by a file on disk. The declared media type is
    /// derived from the extension, the way platform file pickers do.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = if name.to_ascii_lowercase().ends_with(".svg") {
            SVG_MEDIA_TYPE
        } else {
            "application/octet-stream"
        };
        Self {
            name,
            media_type: media_type.to_string(),
            source: AssetSource::Path(path.to_path_buf()),
        }
    }

    /// Candidate backed by bytes already in memory.
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self::new(name, media_type, AssetSource::Bytes(bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// A validated upload, owned by the single pipeline run that admitted it.
#[derive(Debug, Clone)]
pub struct SourceAsset {
    name: String,
    media_type: String,
    source: AssetSource,
}

impl SourceAsset {
    /// Only intake turns a candidate into an asset.
    pub(crate) fn admit(candidate: UploadCandidate) -> Self {
        Self {
            name: candidate.name,
            media_type: candidate.media_type,
            source: candidate.source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn source(&self) -> &AssetSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_derives_name_and_media_type() {
        let candidate = UploadCandidate::from_path("/tmp/drawings/icon.svg");
        assert_eq!(candidate.name(), "icon.svg");
        assert_eq!(candidate.media_type(), SVG_MEDIA_TYPE);
    }

    #[test]
    fn test_from_path_unknown_extension_is_octet_stream() {
        let candidate = UploadCandidate::from_path("/tmp/notes.txt");
        assert_eq!(candidate.name(), "notes.txt");
        assert_eq!(candidate.media_type(), "application/octet-stream");
    }

    #[test]
    fn test_from_path_uppercase_extension_still_svg() {
        let candidate = UploadCandidate::from_path("/tmp/ICON.SVG");
        assert_eq!(candidate.media_type(), SVG_MEDIA_TYPE);
    }

    #[test]
    fn test_admit_keeps_declared_fields() {
        let candidate = UploadCandidate::from_bytes("picture", SVG_MEDIA_TYPE, b"<svg/>".to_vec());
        let asset = SourceAsset::admit(candidate);
        assert_eq!(asset.name(), "picture");
        assert_eq!(asset.media_type(), SVG_MEDIA_TYPE);
        assert!(matches!(asset.source(), AssetSource::Bytes(_)));
    }
}
