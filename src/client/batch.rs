//! Batch lookups on top of [`BatchExecutor`].

use crate::batch::{BatchExecutor, BatchResult};
use crate::client::core::HnClient;
use crate::types::{Item, User};
use crate::Result;
use tokio_util::sync::CancellationToken;

impl HnClient {
    fn batch_executor(&self) -> BatchExecutor {
        BatchExecutor::with_max_concurrency(self.config.concurrency)
    }

    /// Fetch many items with at most `config.concurrency` requests in flight.
    ///
    /// Values come back in completion order. When some lookups fail the
    /// result carries the successes and the first failure; when all fail
    /// the call returns `Err(Error::BatchFailed)`.
    pub async fn get_items_batch(
        &self,
        ids: &[u64],
        cancel: &CancellationToken,
    ) -> Result<BatchResult<Item>> {
        self.batch_executor()
            .execute_concurrent(ids.to_vec(), cancel, |id| self.get_item(id, cancel))
            .await
    }

    /// Fetch many user profiles; same outcome rules as [`HnClient::get_items_batch`].
    pub async fn get_users_batch<S: AsRef<str>>(
        &self,
        usernames: &[S],
        cancel: &CancellationToken,
    ) -> Result<BatchResult<User>> {
        let names: Vec<String> = usernames.iter().map(|s| s.as_ref().to_string()).collect();
        self.batch_executor()
            .execute_concurrent(names, cancel, |name| async move {
                self.get_user(&name, cancel).await
            })
            .await
    }
}
