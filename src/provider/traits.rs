use crate::model::ProviderError;
use serde_json::Value;

/// One daily time-series request per index symbol. An `Err` is a
/// transport-level failure; a payload without the expected time-series
/// mapping comes back as `Ok` and is the caller's per-ticker signal.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn daily_series(&self, symbol: &str, api_key: &str) -> Result<Value, ProviderError>;
}
