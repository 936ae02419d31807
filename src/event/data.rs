//! Data events: lines pushed into the compositor by background producers.
//!
//! Producers never touch widgets. They hold a [`DataSender`] and send
//! [`DataEvent`]s through a bounded channel; the render loop applies each event on
//! its own thread, so list contents have exactly one writer.

use tokio::sync::mpsc;

/// A line to append to the list inside top-level widget `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEvent {
    pub target: usize,
    pub line: String,
}

impl DataEvent {
    /// Create an append event.
    pub fn append(target: usize, line: impl Into<String>) -> Self {
        Self {
            target,
            line: line.into(),
        }
    }
}

/// Sending half handed to producers.
#[derive(Debug, Clone)]
pub struct DataSender {
    tx: mpsc::Sender<DataEvent>,
    target: usize,
}

impl DataSender {
    /// Queue `line` for the bound target, waiting while the channel is full.
    ///
    /// Returns `false` once the compositor has gone away.
    pub async fn send(&self, line: impl Into<String>) -> bool {
        self.tx
            .send(DataEvent::append(self.target, line))
            .await
            .is_ok()
    }

    /// Queue `line` without waiting. Returns `false` if the channel is full or closed.
    pub fn try_send(&self, line: impl Into<String>) -> bool {
        self.tx
            .try_send(DataEvent::append(self.target, line))
            .is_ok()
    }
}

/// Create a bounded data channel. The sender appends to top-level widget `target`.
pub fn channel(capacity: usize, target: usize) -> (DataSender, mpsc::Receiver<DataEvent>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (DataSender { tx, target }, rx)
}
