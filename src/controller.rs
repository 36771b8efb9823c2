use crate::analyzer;
use crate::model::{History, Snapshot};
use crate::provider::{extract_closes, QuoteProvider};
use crate::registry::{self, TRACKED_INDICES};

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

pub const LIVE_DATA_UNAVAILABLE: &str =
    "Live data could not be retrieved. Showing sample data instead.";

/// Owns the quote provider, the credential, the demo flag and the latest
/// snapshot. One fetch-and-analyze cycle runs at a time; `&mut self` on
/// `refresh` is what enforces that.
pub struct Watcher {
    provider: Box<dyn QuoteProvider>,
    api_key: String,
    demo_mode: bool,
    snapshot: Snapshot,
}

impl Watcher {
    pub fn new(provider: Box<dyn QuoteProvider>, api_key: String, demo_mode: bool) -> Self {
        Self {
            provider,
            api_key,
            demo_mode,
            snapshot: Snapshot::default(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Flipping the flag or swapping the credential does not fetch by
    /// itself; the caller triggers the next `refresh`.
    pub fn set_demo_mode(&mut self, demo_mode: bool) {
        self.demo_mode = demo_mode;
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key;
    }

    /// Runs one fetch-and-analyze cycle and returns the new snapshot.
    ///
    /// Without a key, or in demo mode, no network is touched and the
    /// fallback table is served. Otherwise each tracked index is fetched
    /// sequentially: a payload missing the time-series mapping swaps in
    /// that ticker's fallback entry only, while a transport failure
    /// aborts the cycle, serves fallback data for every ticker and sets
    /// the advisory message. Every path ends in a renderable snapshot.
    pub async fn refresh(&mut self) -> &Snapshot {
        self.snapshot.loading = true;
        self.snapshot.advisory = None;

        let (history, advisory) = if self.demo_mode || self.api_key.is_empty() {
            info!("Demo mode or no API key; serving fallback table");
            (registry::fallback_history(), None)
        } else {
            self.fetch_live().await
        };

        self.snapshot.recommendations = analyzer::recommendations(&history);
        self.snapshot.history = history;
        self.snapshot.advisory = advisory;
        self.snapshot.loading = false;
        self.snapshot.fetched_at = Utc::now();

        info!(
            "Cycle complete: {} series, {} recommendations",
            self.snapshot.history.len(),
            self.snapshot.recommendations.len()
        );
        &self.snapshot
    }

    async fn fetch_live(&self) -> (History, Option<String>) {
        let mut history = History::new();

        for (ticker, symbol) in TRACKED_INDICES {
            info!("Fetching daily series for {} ({})", ticker, symbol);
            let payload = match self.provider.daily_series(symbol, &self.api_key).await {
                Ok(payload) => payload,
                Err(e) => {
                    // Hard failure: drop partial results, mock everything.
                    warn!("Provider request for {} failed: {}", ticker, e);
                    return (
                        registry::fallback_history(),
                        Some(LIVE_DATA_UNAVAILABLE.to_string()),
                    );
                }
            };

            match extract_closes(&payload) {
                Some(closes) => {
                    history.insert((*ticker).to_string(), Value::from(closes));
                }
                None => {
                    warn!("Payload for {} lacks a daily time series; using fallback", ticker);
                    if let Some(series) = registry::fallback_series(ticker) {
                        history.insert((*ticker).to_string(), series);
                    }
                }
            }
        }

        (history, None)
    }
}
