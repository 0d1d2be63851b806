use std::fmt;

use base64::{engine::general_purpose, Engine as _};
use serde::{Serialize, Serializer};

use crate::error::ConvertError;

/// Media type of SVG documents.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Media type of the converted output.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Self-describing inline content: a media type plus raw bytes, rendered as
/// `data:<media-type>;base64,<payload>`.
///
/// The URI form is what presentation layers hand to an image element; the
/// raw bytes are what the rasterizer and the download path consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    media_type: String,
    data: Vec<u8>,
}

impl DataUri {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Render as a `data:` URI string with a base64 payload.
    pub fn to_uri_string(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type,
            general_purpose::STANDARD.encode(&self.data)
        )
    }

    /// Parse a `data:<media-type>;base64,<payload>` string back into its
    /// media type and bytes.
    pub fn parse(uri: &str) -> Result<Self, ConvertError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| ConvertError::Decode("missing data: scheme".to_string()))?;

        let (media_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| ConvertError::Decode("missing base64 marker".to_string()))?;

        let data = general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| ConvertError::Decode(format!("base64 decode failed: {e}")))?;

        Ok(Self {
            media_type: media_type.to_string(),
            data,
        })
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri_string())
    }
}

impl Serialize for DataUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_uri_string())
    }
}
