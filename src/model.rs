// Core structs: Trend, Recommendation, Snapshot
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Ordered ticker -> series mapping. `serde_json`'s map keeps insertion
/// order (preserve_order feature), so fetched data stays in registry order.
pub type History = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Rising,
    Falling,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub ticker: String,
    pub trend: Trend,
    pub change: f64,
}

/// Latest completed fetch-and-analyze cycle, owned by the `Watcher`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub history: History,
    pub recommendations: Vec<Recommendation>,
    pub loading: bool,
    /// Set only when a whole cycle degraded to mock data.
    pub advisory: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            history: History::new(),
            recommendations: Vec::new(),
            loading: false,
            advisory: None,
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(String),
    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
