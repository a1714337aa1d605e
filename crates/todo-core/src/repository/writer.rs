//! Write Queue
//!
//! Mutations hand their serialized snapshot to a background task and return
//! immediately. Writes are applied in the order they were queued, so the
//! latest value for a key always lands last. Failures are logged and dropped;
//! the in-memory state stays authoritative.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{StoreError, StoreResult};
use super::traits::KeyValueStore;

enum WriteRequest {
    Set { key: &'static str, value: String },
    Flush(oneshot::Sender<()>),
}

#[derive(Clone)]
pub struct WriteQueue {
    tx: mpsc::UnboundedSender<WriteRequest>,
}

impl WriteQueue {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn KeyValueStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(store, rx));
        Self { tx }
    }

    pub fn enqueue(&self, key: &'static str, value: String) {
        if self.tx.send(WriteRequest::Set { key, value }).is_err() {
            log::error!("Write queue closed, dropping write to {}", key);
        }
    }

    /// Resolves once every write queued before this call has been attempted
    pub async fn flush(&self) -> StoreResult<()> {
        let (ack, done) = oneshot::channel();
        self.tx
            .send(WriteRequest::Flush(ack))
            .map_err(|_| StoreError::QueueClosed)?;
        done.await.map_err(|_| StoreError::QueueClosed)
    }
}

async fn run_writer(store: Arc<dyn KeyValueStore>, mut rx: mpsc::UnboundedReceiver<WriteRequest>) {
    while let Some(request) = rx.recv().await {
        match request {
            WriteRequest::Set { key, value } => {
                if let Err(e) = store.set(key, &value).await {
                    log::error!("Failed to persist {}: {}", key, e);
                }
            }
            WriteRequest::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    log::debug!("Write queue drained and closed");
}
