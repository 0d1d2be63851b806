use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DataUri, Dimensions};

/// Where the pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The encoded output of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RasterResult {
    /// PNG content, ready for preview or download
    pub png: DataUri,
    /// Size the PNG was produced at
    pub dimensions: Dimensions,
    /// Suggested file name for saving the PNG
    pub download_name: String,
    /// When this result was generated
    pub generated_at: DateTime<Utc>,
}

/// Pipeline state as handed to presentation layers.
///
/// A snapshot is a plain value; holding one never blocks the pipeline, and
/// it goes stale the moment a newer upload is admitted.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub state: PipelineState,
    /// Original name of the file being converted
    pub file_name: Option<String>,
    /// SVG content as a data URI, published once loading finished
    pub svg_preview: Option<DataUri>,
    /// Human-readable failure message
    pub error: Option<String>,
    pub result: Option<RasterResult>,
}

impl Snapshot {
    pub fn idle() -> Self {
        Self {
            state: PipelineState::Idle,
            file_name: None,
            svg_preview: None,
            error: None,
            result: None,
        }
    }

    pub fn loading(file_name: impl Into<String>) -> Self {
        Self {
            state: PipelineState::Loading,
            file_name: Some(file_name.into()),
            ..Self::idle()
        }
    }

    pub fn failed(file_name: Option<String>, message: impl Into<String>) -> Self {
        Self {
            state: PipelineState::Failed,
            file_name,
            error: Some(message.into()),
            ..Self::idle()
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::idle()
    }
}
