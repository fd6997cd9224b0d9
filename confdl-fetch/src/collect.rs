//! Fan-out/fan-in collection over the tracked list.
//!
//! Every tracked conference is fetched concurrently on the current task. Each
//! result lands in its own slot; failures become `None` and never cancel the
//! other fetches.

use confdl_core::{CategoryTable, Conference, ConferenceRecord, TrackedConference, aggregate};
use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::document::parse_document;
use crate::error::Result;
use crate::source::DocumentSource;

pub struct ConferenceFetcher<S> {
    source: S,
}

impl<S: DocumentSource> ConferenceFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load and decode one document, surfacing every failure.
    pub async fn try_fetch(&self, tracked: &TrackedConference) -> Result<Vec<ConferenceRecord>> {
        let text = self.source.load(tracked).await?;
        parse_document(&text)
    }

    /// Load and decode one document. Failures are logged and yield `None`.
    pub async fn fetch(&self, tracked: &TrackedConference) -> Option<Vec<ConferenceRecord>> {
        match self.try_fetch(tracked).await {
            Ok(records) => {
                debug!("fetched {tracked}: {} record(s)", records.len());
                Some(records)
            }
            Err(e) => {
                warn!("skipping {tracked}: {e}");
                None
            }
        }
    }

    /// Fetch every tracked conference concurrently, in input order.
    pub async fn fetch_all(
        &self,
        tracked: &[TrackedConference],
    ) -> Vec<(TrackedConference, Option<Vec<ConferenceRecord>>)> {
        join_all(tracked.iter().map(|t| async move { (t.clone(), self.fetch(t).await) })).await
    }

    /// Fetch everything, then flatten into aggregated conference cycles.
    pub async fn collect(
        &self,
        tracked: &[TrackedConference],
        categories: &CategoryTable,
    ) -> Vec<Conference> {
        let results = self.fetch_all(tracked).await;
        let failed = results.iter().filter(|(_, r)| r.is_none()).count();

        let conferences = aggregate(
            results
                .into_iter()
                .filter_map(|(t, records)| records.map(|r| (t, r))),
            categories,
        );

        info!(
            "collected {} conference cycle(s) from {} tracked ({} unavailable)",
            conferences.len(),
            tracked.len(),
            failed
        );
        conferences
    }
}
