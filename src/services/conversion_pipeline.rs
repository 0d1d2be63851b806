use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::ConvertError;
use crate::models::{PipelineState, RasterResult, Snapshot, SourceAsset, UploadCandidate};
use crate::rendering::SvgRenderer;
use crate::services::content_loader::{ContentLoader, FsContentLoader};
use crate::services::intake;

/// A validated upload admitted by `select_file`, tagged with the run
/// generation it belongs to.
pub struct AdmittedUpload {
    asset: SourceAsset,
    epoch: u64,
}

/// Everything a completion callback may touch, under one lock.
///
/// The epoch lives next to the snapshot so that checking liveness and
/// mutating state is a single critical section; a stale run can never slip
/// its result in between a newer run's admission and publication.
struct Shared {
    epoch: u64,
    snapshot: Snapshot,
}

/// Orchestrates the conversion: intake → load → rasterize → encode.
///
/// Exactly one upload is live at a time. Admitting a new one (or resetting)
/// bumps the run generation, which invalidates every outstanding completion
/// of the previous run; superseded completions are discarded without
/// touching shared state.
#[derive(Clone)]
pub struct ConversionPipeline {
    loader: Arc<dyn ContentLoader>,
    renderer: Arc<SvgRenderer>,
    shared: Arc<RwLock<Shared>>,
}

impl ConversionPipeline {
    pub fn new() -> Self {
        Self::with_loader(Arc::new(FsContentLoader))
    }

    /// Pipeline with a custom content loader (tests substitute one with
    /// controlled timing).
    pub fn with_loader(loader: Arc<dyn ContentLoader>) -> Self {
        Self {
            loader,
            renderer: Arc::new(SvgRenderer::new()),
            shared: Arc::new(RwLock::new(Shared {
                epoch: 0,
                snapshot: Snapshot::idle(),
            })),
        }
    }

    /// Current pipeline state as a plain value.
    pub async fn snapshot(&self) -> Snapshot {
        self.shared.read().await.snapshot.clone()
    }

    /// Discard whatever is in flight or held and return to Idle.
    pub async fn reset(&self) {
        let mut shared = self.shared.write().await;
        shared.epoch += 1;
        shared.snapshot = Snapshot::idle();
    }

    /// Validate an upload and admit it as the pipeline's current run.
    ///
    /// Admission atomically discards any previous result. A rejected
    /// candidate also supersedes the previous run; the pipeline records
    /// Failed and no further stage runs for it.
    pub async fn select_file(
        &self,
        candidate: UploadCandidate,
    ) -> Result<AdmittedUpload, ConvertError> {
        if let Err(e) = intake::validate(&candidate) {
            tracing::warn!(
                file = %candidate.name(),
                error = %e,
                "Rejected upload"
            );
            let mut shared = self.shared.write().await;
            shared.epoch += 1;
            shared.snapshot =
                Snapshot::failed(Some(candidate.name().to_string()), e.to_string());
            return Err(e);
        }

        let asset = SourceAsset::admit(candidate);
        let mut shared = self.shared.write().await;
        shared.epoch += 1;
        shared.snapshot = Snapshot::loading(asset.name().to_string());

        Ok(AdmittedUpload {
            asset,
            epoch: shared.epoch,
        })
    }

    /// Run the whole pipeline for one candidate.
    ///
    /// Returns the stage error for the caller's convenience; the same
    /// message is recorded in the snapshot. A run superseded mid-flight
    /// returns Ok without having touched shared state.
    pub async fn convert(&self, candidate: UploadCandidate) -> Result<(), ConvertError> {
        let admitted = self.select_file(candidate).await?;
        self.run(admitted).await
    }

    /// Execute the asynchronous stages of an admitted run.
    pub async fn run(&self, admitted: AdmittedUpload) -> Result<(), ConvertError> {
        let AdmittedUpload { asset, epoch } = admitted;

        let svg = match self.loader.load(&asset).await {
            Ok(svg) => svg,
            Err(e) => return self.fail(epoch, &asset, e).await,
        };

        // First suspension point observed: publish the SVG preview, unless
        // a newer run took over while we were reading.
        {
            let mut shared = self.shared.write().await;
            if shared.epoch != epoch {
                tracing::debug!(file = %asset.name(), "Discarding superseded load");
                return Ok(());
            }
            shared.snapshot.svg_preview = Some(svg.clone());
        }

        // Rasterizing and encoding are CPU-bound; keep them off the async
        // runtime.
        let renderer = self.renderer.clone();
        let svg_for_render = svg.clone();
        let rendered =
            tokio::task::spawn_blocking(move || renderer.convert(&svg_for_render))
                .await
                .map_err(|e| ConvertError::Decode(format!("render task failed: {e}")));

        let (png, dimensions) = match rendered {
            Ok(Ok(output)) => output,
            Ok(Err(e)) | Err(e) => return self.fail(epoch, &asset, e).await,
        };

        let mut shared = self.shared.write().await;
        if shared.epoch != epoch {
            tracing::debug!(file = %asset.name(), "Discarding superseded conversion");
            return Ok(());
        }

        tracing::info!(
            file = %asset.name(),
            %dimensions,
            "Conversion succeeded"
        );

        shared.snapshot.state = PipelineState::Succeeded;
        shared.snapshot.result = Some(RasterResult {
            png,
            dimensions,
            download_name: intake::download_name(asset.name()),
            generated_at: Utc::now(),
        });

        Ok(())
    }

    /// Record a stage failure, unless the run was superseded in the
    /// meantime; a stale error must not resurface after the user moved on.
    async fn fail(
        &self,
        epoch: u64,
        asset: &SourceAsset,
        error: ConvertError,
    ) -> Result<(), ConvertError> {
        let mut shared = self.shared.write().await;
        if shared.epoch != epoch {
            tracing::debug!(file = %asset.name(), "Discarding superseded failure");
            return Ok(());
        }

        tracing::warn!(
            file = %asset.name(),
            error = %error,
            "Conversion failed"
        );
        shared.snapshot = Snapshot::failed(Some(asset.name().to_string()), error.to_string());

        Err(error)
    }
}

impl Default for ConversionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
