use async_trait::async_trait;

use crate::error::ConvertError;
use crate::models::{AssetSource, DataUri, SourceAsset, SVG_MEDIA_TYPE};

/// Asynchronous byte source for admitted uploads.
///
/// The pipeline only ever talks to this trait, so tests can substitute a
/// loader with controlled timing.
#[async_trait]
pub trait ContentLoader: Send + Sync {
    /// Read the asset's full content and encode it as a data URI.
    async fn load(&self, asset: &SourceAsset) -> Result<DataUri, ConvertError>;
}

/// Production loader: reads path-backed assets from the filesystem, passes
/// in-memory assets through.
#[derive(Debug, Default)]
pub struct FsContentLoader;

#[async_trait]
impl ContentLoader for FsContentLoader {
    async fn load(&self, asset: &SourceAsset) -> Result<DataUri, ConvertError> {
        let bytes = match asset.source() {
            AssetSource::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                tracing::warn!(
                    file = %asset.name(),
                    error = %e,
                    "Failed to read file"
                );
                // Don't expose the full path in the error message
                ConvertError::FileRead(asset.name().to_string())
            })?,
            AssetSource::Bytes(bytes) => bytes.clone(),
        };

        tracing::debug!(
            file = %asset.name(),
            len = bytes.len(),
            "Loaded file content"
        );

        Ok(DataUri::new(SVG_MEDIA_TYPE, bytes))
    }
}
