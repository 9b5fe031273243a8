use crate::transport::HttpTransport;
use crate::types::UpdateBatch;
use crate::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub(crate) const UPDATES_ENDPOINT: &str = "updates.json";

/// A producer of change-feed snapshots polled by [`UpdatePoller`](super::UpdatePoller).
#[async_trait]
pub trait UpdateSource: Send + Sync {
    async fn fetch_updates(&self, cancel: &CancellationToken) -> Result<UpdateBatch>;
}

#[async_trait]
impl UpdateSource for HttpTransport {
    async fn fetch_updates(&self, cancel: &CancellationToken) -> Result<UpdateBatch> {
        self.get_json(&[UPDATES_ENDPOINT], cancel).await
    }
}
