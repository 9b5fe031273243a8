use crate::client::core::HnClient;
use crate::updates::{UpdatePoller, UpdateStream};
use crate::Result;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

impl HnClient {
    /// Stream `updates.json` every `config.poll_interval` until `cancel` fires.
    ///
    /// Returns immediately; the first poll runs in the background right away.
    /// Must be called from within a tokio runtime.
    pub fn start_updates(&self, cancel: CancellationToken) -> Result<UpdateStream> {
        self.start_updates_with_interval(self.config.poll_interval, cancel)
    }

    /// Like [`HnClient::start_updates`] with an explicit interval.
    pub fn start_updates_with_interval(
        &self,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Result<UpdateStream> {
        let poller = UpdatePoller::new(self.transport.clone(), interval)?;
        Ok(poller.spawn(cancel))
    }
}
