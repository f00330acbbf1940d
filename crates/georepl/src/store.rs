//! Shared view state: the transcript ledger and the highlight overlay.
//!
//! Both views live behind one store with an explicit update API: dispatch
//! writes, renderers subscribe over the bus, and each update carries the
//! sequence number its dispatch drew at submission, so a slow response can
//! never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::bus::{Bus, ReplEvent};
use crate::client::geojson::Feature;
use crate::types::ResultTable;

#[derive(Default)]
struct ViewState {
    transcript: Option<ResultTable>,
    transcript_seq: u64,
    highlight: Vec<Feature>,
    highlight_seq: u64,
}

pub struct ViewStore {
    inner: Mutex<ViewState>,
    bus: Bus,
    next_seq: AtomicU64,
}

impl ViewStore {
    pub fn new(bus: Bus) -> Self {
        Self {
            inner: Mutex::new(ViewState::default()),
            bus,
            next_seq: AtomicU64::new(0),
        }
    }

    /// Draw the sequence number for a new dispatch cycle. Numbers are handed
    /// out in submission order and start at 1; 0 means "nothing applied yet".
    pub fn begin_dispatch(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Replace the transcript entry, unless a newer dispatch already did.
    /// Returns whether the update was applied.
    pub fn apply_result(&self, seq: u64, table: ResultTable) -> bool {
        let rows = table.rows.len();
        {
            let mut state = self.inner.lock().expect("view state poisoned");
            if seq < state.transcript_seq {
                tracing::warn!(
                    seq,
                    newest = state.transcript_seq,
                    "discarding stale transcript completion"
                );
                return false;
            }
            state.transcript = Some(table);
            state.transcript_seq = seq;
        }
        let _ = self.bus.publish(ReplEvent::TranscriptReplaced { seq, rows });
        true
    }

    /// Replace the highlight feature set, unless a newer highlight already
    /// landed. Callers only invoke this for successful, non-empty results;
    /// empty and failed queries must leave the overlay untouched.
    pub fn apply_highlight(&self, seq: u64, features: Vec<Feature>) -> bool {
        let count = features.len();
        {
            let mut state = self.inner.lock().expect("view state poisoned");
            if seq < state.highlight_seq {
                tracing::warn!(
                    seq,
                    newest = state.highlight_seq,
                    "discarding stale highlight completion"
                );
                return false;
            }
            state.highlight = features;
            state.highlight_seq = seq;
        }
        let _ = self
            .bus
            .publish(ReplEvent::HighlightReplaced { seq, features: count });
        true
    }

    /// Current transcript entry, if any command has completed yet.
    pub fn transcript(&self) -> Option<ResultTable> {
        self.inner.lock().expect("view state poisoned").transcript.clone()
    }

    /// Current highlight overlay snapshot.
    pub fn highlight(&self) -> Vec<Feature> {
        self.inner.lock().expect("view state poisoned").highlight.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReplEvent> {
        self.bus.subscribe()
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }
}
