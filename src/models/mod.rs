pub mod data_uri;
pub mod dimensions;
pub mod snapshot;
pub mod source_asset;

pub use data_uri::{DataUri, PNG_MEDIA_TYPE, SVG_MEDIA_TYPE};
pub use dimensions::Dimensions;
pub use snapshot::{PipelineState, RasterResult, Snapshot};
pub use source_asset::{AssetSource, SourceAsset, UploadCandidate};
