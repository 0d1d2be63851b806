//! Fake content loaders for exercising pipeline scheduling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use svgrast::error::ConvertError;
use svgrast::models::{DataUri, SourceAsset};
use svgrast::services::{ContentLoader, FsContentLoader};

/// Delegates to the real loader, but holds the first call until released.
///
/// Lets a test start run A, let run B overtake it, and only then allow A's
/// load to complete.
pub struct GatedLoader {
    inner: FsContentLoader,
    calls: AtomicUsize,
    /// Signalled when the gated call has started
    pub entered: Notify,
    /// Signal this to let the gated call proceed
    pub release: Notify,
}

impl GatedLoader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: FsContentLoader,
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    /// How many loads were requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentLoader for GatedLoader {
    async fn load(&self, asset: &SourceAsset) -> Result<DataUri, ConvertError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.load(asset).await
    }
}
