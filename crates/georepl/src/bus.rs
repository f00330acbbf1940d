use tokio::sync::broadcast;

/// Notifications published by the view store whenever it applies an update.
///
/// Renderers (the shell's printer, an embedding map view) subscribe and pull
/// the current snapshot from the store; the event itself only carries counts.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplEvent {
    /// The transcript ledger replaced its entry.
    TranscriptReplaced { seq: u64, rows: usize },
    /// The highlight overlay replaced its feature set.
    HighlightReplaced { seq: u64, features: usize },
    /// The startup overlay preload finished.
    HighlightPreloaded { features: usize },
}

#[derive(Clone)]
pub struct Bus {
    sender: broadcast::Sender<ReplEvent>,
}

impl Bus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReplEvent> {
        self.sender.subscribe()
    }

    pub fn publish(
        &self,
        event: ReplEvent,
    ) -> Result<usize, broadcast::error::SendError<ReplEvent>> {
        self.sender.send(event)
    }
}
