pub mod content_loader;
pub mod conversion_pipeline;
pub mod intake;

pub use content_loader::{ContentLoader, FsContentLoader};
pub use conversion_pipeline::{AdmittedUpload, ConversionPipeline};
