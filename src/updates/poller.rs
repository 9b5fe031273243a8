use super::source::UpdateSource;
use super::stream::UpdateStream;
use crate::types::UpdateBatch;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// One slot, so a batch is already waiting when a slow consumer comes back.
const STREAM_BUFFER: usize = 1;

/// Polls an [`UpdateSource`] on a fixed interval until cancelled.
pub struct UpdatePoller {
    source: Arc<dyn UpdateSource>,
    interval: Duration,
}

impl UpdatePoller {
    pub fn new(source: Arc<dyn UpdateSource>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::configuration_with_context(
                "poll interval must be greater than zero",
                ErrorContext::new()
                    .with_field_path("poll_interval")
                    .with_source("update_poller"),
            ));
        }
        Ok(Self { source, interval })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start the polling task and return its stream without waiting for the first poll.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self, cancel: CancellationToken) -> UpdateStream {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        let task = tokio::spawn(run(self.source, self.interval, cancel, tx));
        UpdateStream::new(rx, task)
    }
}

async fn run(
    source: Arc<dyn UpdateSource>,
    poll_interval: Duration,
    cancel: CancellationToken,
    tx: mpsc::Sender<UpdateBatch>,
) {
    // The first tick completes immediately, which gives the initial poll.
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut polls: u64 = 0;
    let mut delivered: u64 = 0;

    info!(interval_ms = poll_interval.as_millis() as u64, "update poller started");

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tx.closed() => {
                debug!("update stream dropped by consumer");
                break;
            }
            _ = ticker.tick() => {}
        }

        polls += 1;
        let polled = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            res = source.fetch_updates(&cancel) => res,
        };

        let batch = match polled {
            Ok(batch) => batch,
            Err(err) if err.is_cancelled() => break,
            Err(err) => {
                warn!(error = %err, poll = polls, "failed to poll updates");
                continue;
            }
        };

        if batch.is_empty() {
            debug!(poll = polls, "no updates");
            continue;
        }

        debug!(
            poll = polls,
            items = batch.items.len(),
            profiles = batch.profiles.len(),
            "delivering updates"
        );
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            sent = tx.send(batch) => {
                if sent.is_err() {
                    debug!("update stream dropped by consumer");
                    break;
                }
                delivered += 1;
            }
        }
    }

    info!(polls, delivered, "update poller stopped");
}
