use std::sync::Arc;

use uuid::Uuid;

use crate::bus::{Bus, ReplEvent};
use crate::client::source::{BoundingBox, QuerySource};
use crate::dispatch;
use crate::error::ClientResult;
use crate::store::ViewStore;
use crate::types::ResultTable;

const BUS_CAPACITY: usize = 32;

/// Primary facade: one `submit` call per command line.
///
/// `submit` takes `&self` and may run from any number of concurrent tasks;
/// overlapping dispatches are resolved by the store's sequence numbers, so a
/// slow early query can never overwrite a faster later one.
pub struct Repl {
    session_id: Uuid,
    source: Arc<dyn QuerySource>,
    store: Arc<ViewStore>,
}

impl Repl {
    pub fn new(source: Arc<dyn QuerySource>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            source,
            store: Arc::new(ViewStore::new(Bus::new(BUS_CAPACITY))),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn store(&self) -> &Arc<ViewStore> {
        &self.store
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ReplEvent> {
        self.store.subscribe()
    }

    /// Run one full dispatch cycle: tokenize, route, apply the results.
    ///
    /// The returned table is what this submission produced, whether or not it
    /// was still fresh enough to land in the ledger.
    pub async fn submit(&self, line: &str) -> ResultTable {
        let command = crate::command::parse(line);
        let seq = self.store.begin_dispatch();
        tracing::debug!(seq, session = %self.session_id, raw = %command.raw_text, "dispatching");

        let result = dispatch::dispatch(&command.tokens, self.source.as_ref()).await;
        if let Some(features) = result.highlight {
            self.store.apply_highlight(seq, features);
        }
        self.store.apply_result(seq, result.table.clone());
        result.table
    }

    /// Fetch the whole-world overlay once at startup.
    ///
    /// Announced on the bus so renderers can pick it up; not stored here,
    /// since the base overlay belongs to the map view, not the interpreter.
    pub async fn preload_overlay(&self) -> ClientResult<usize> {
        let features = self.source.fetch_bounding_box(BoundingBox::WORLD).await?;
        let count = features.len();
        let _ = self
            .store
            .bus()
            .publish(ReplEvent::HighlightPreloaded { features: count });
        tracing::debug!(count, "overlay preload complete");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::geojson::Feature;
    use crate::error::ClientError;
    use crate::types::{self, QueryOutcome};
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Notify;

    fn feature(name: &str) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {},
            "properties": {"name": name}
        }))
        .expect("feature")
    }

    /// Source whose highlight response for the keyword "slow" blocks until
    /// the test releases it, so completion order can be forced.
    struct GatedSource {
        started: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl QuerySource for GatedSource {
        async fn lookup_broadband(&self, _state: &str, _county: &str) -> QueryOutcome {
            QueryOutcome::Success(vec![vec![
                "Broadband percentage for Providence County, Rhode Island: 85.4".to_string(),
            ]])
        }

        async fn search_highlight(&self, keyword: &str) -> (Vec<Feature>, QueryOutcome) {
            if keyword == "slow" {
                self.started.notify_one();
                self.release.notified().await;
            }
            if keyword == "nowhere" {
                return (
                    Vec::new(),
                    QueryOutcome::Failure(types::HIGHLIGHT_NO_RESULTS.to_string()),
                );
            }
            (
                vec![feature(keyword)],
                QueryOutcome::Success(vec![vec![types::HIGHLIGHT_SUCCESS.to_string()]]),
            )
        }

        async fn fetch_bounding_box(&self, _bounds: BoundingBox) -> ClientResult<Vec<Feature>> {
            Err(ClientError::Transport("connection refused".to_string()))
        }
    }

    fn gated() -> (Arc<Repl>, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let source = GatedSource {
            started: started.clone(),
            release: release.clone(),
        };
        (Arc::new(Repl::new(Arc::new(source))), started, release)
    }

    #[tokio::test]
    async fn submit_updates_transcript() {
        let (repl, _, _) = gated();
        let table = repl.submit("broadband <Rhode Island> <Providence County>").await;
        assert_eq!(
            table.rows,
            vec![vec![
                "Broadband percentage for Providence County, Rhode Island: 85.4".to_string()
            ]]
        );
        assert_eq!(repl.store().transcript().expect("entry"), table);
    }

    #[tokio::test]
    async fn submit_highlight_updates_overlay() {
        let (repl, _, _) = gated();
        repl.submit("highlight downtown").await;
        let overlay = repl.store().highlight();
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].properties["name"], "downtown");
    }

    #[tokio::test]
    async fn empty_result_keeps_previous_overlay() {
        let (repl, _, _) = gated();
        repl.submit("highlight downtown").await;
        repl.submit("highlight nowhere").await;

        let overlay = repl.store().highlight();
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].properties["name"], "downtown");
        assert_eq!(
            repl.store().transcript().expect("entry").rows,
            vec![vec![types::HIGHLIGHT_NO_RESULTS.to_string()]]
        );
    }

    #[tokio::test]
    async fn invalid_command_leaves_overlay_untouched() {
        let (repl, _, _) = gated();
        repl.submit("highlight downtown").await;
        repl.submit("nonsense").await;
        assert_eq!(repl.store().highlight().len(), 1);
        assert_eq!(
            repl.store().transcript().expect("entry").rows,
            vec![vec![types::INVALID_COMMAND.to_string()]]
        );
    }

    #[tokio::test]
    async fn late_completion_of_earlier_submission_is_discarded() {
        let (repl, started, release) = gated();

        // Submission A blocks inside its query; it has already drawn its
        // sequence number by the time the gate reports it started.
        let slow = {
            let repl = repl.clone();
            tokio::spawn(async move { repl.submit("highlight slow").await })
        };
        started.notified().await;

        // Submission B starts later and completes first.
        repl.submit("highlight fast").await;
        assert_eq!(repl.store().highlight()[0].properties["name"], "fast");

        // A finally completes; both its views are stale and must be dropped.
        release.notify_one();
        slow.await.expect("join");

        assert_eq!(repl.store().highlight()[0].properties["name"], "fast");
        assert_eq!(
            repl.store().transcript().expect("entry").rows,
            vec![vec![types::HIGHLIGHT_SUCCESS.to_string()]]
        );
    }

    #[tokio::test]
    async fn preload_failure_surfaces_as_error() {
        let (repl, _, _) = gated();
        assert!(repl.preload_overlay().await.is_err());
    }
}
