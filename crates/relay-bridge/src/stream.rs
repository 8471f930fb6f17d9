//! The consumer-facing event stream.

use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::mpsc;
use tokio_stream::Stream;

use relay_types::TransactionRecord;

/// Single-subscriber stream of relayed transaction records.
///
/// Opened by [`crate::SubscriptionBridge::attach`]; yields records in bus
/// delivery order and ends (yields `None`) once the bridge detaches.
/// Dropping the stream without detaching does not release the bus
/// registration by itself; the bridge cleans the stale registration up
/// on its next transition.
#[derive(Debug)]
pub struct TransactionStream {
    receiver: mpsc::UnboundedReceiver<TransactionRecord>,
}

impl TransactionStream {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<TransactionRecord>) -> Self {
        Self { receiver }
    }

    /// Receive the next record.
    ///
    /// Returns `None` once the bridge has detached and all forwarded
    /// records were drained.
    pub async fn recv(&mut self) -> Option<TransactionRecord> {
        self.receiver.recv().await
    }

    /// Receive without waiting.
    ///
    /// Returns `None` when no record is ready or the stream has ended.
    pub fn try_recv(&mut self) -> Option<TransactionRecord> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for TransactionStream {
    type Item = TransactionRecord;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
