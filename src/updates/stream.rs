use crate::types::UpdateBatch;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Consumer end of an update poller.
///
/// Yields `None` exactly once the poller has stopped and every batch it
/// delivered has been read. Dropping the stream stops the poller.
#[derive(Debug)]
pub struct UpdateStream {
    rx: mpsc::Receiver<UpdateBatch>,
    task: JoinHandle<()>,
}

impl UpdateStream {
    pub(crate) fn new(rx: mpsc::Receiver<UpdateBatch>, task: JoinHandle<()>) -> Self {
        Self { rx, task }
    }

    /// Wait for the next non-empty batch.
    pub async fn recv(&mut self) -> Option<UpdateBatch> {
        self.rx.recv().await
    }

    /// Whether the background polling task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Stream for UpdateStream {
    type Item = UpdateBatch;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
