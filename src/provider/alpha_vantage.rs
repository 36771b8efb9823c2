use crate::model::ProviderError;
use crate::provider::traits::QuoteProvider;

use reqwest::Client;
use serde_json::Value;

const SERIES_KEY: &str = "Time Series (Daily)";
const CLOSE_FIELD: &str = "4. close";
const MAX_POINTS: usize = 7;

pub struct AlphaVantageClient {
    client: Client,
}

impl AlphaVantageClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("IndexWatch/0.1")
            .build()
            .unwrap();

        Self { client }
    }

    fn build_url(&self, symbol: &str, api_key: &str) -> String {
        format!(
            "https://www.alphavantage.co/query?function=TIME_SERIES_DAILY&symbol={}&apikey={}",
            symbol, api_key
        )
    }
}

#[async_trait::async_trait]
impl QuoteProvider for AlphaVantageClient {
    async fn daily_series(&self, symbol: &str, api_key: &str) -> Result<Value, ProviderError> {
        let url = self.build_url(symbol, api_key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

/// Pulls up to the 7 most recent daily closes out of a provider payload
/// and returns them oldest-first. `None` means the payload is missing the
/// time-series mapping or a close failed to parse; the caller substitutes
/// fallback data for that ticker.
pub fn extract_closes(payload: &Value) -> Option<Vec<f64>> {
    let series = payload.get(SERIES_KEY)?.as_object()?;

    // Alpha Vantage lists dates newest first; preserve_order keeps that.
    let mut closes = Vec::new();
    for record in series.values().take(MAX_POINTS) {
        closes.push(parse_close(record.get(CLOSE_FIELD)?)?);
    }
    closes.reverse();
    Some(closes)
}

fn parse_close(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn takes_seven_most_recent_and_reverses() {
        let payload = json!({
            "Time Series (Daily)": {
                "2024-03-12": { "4. close": "108.0" },
                "2024-03-11": { "4. close": "107.0" },
                "2024-03-08": { "4. close": "106.0" },
                "2024-03-07": { "4. close": "105.0" },
                "2024-03-06": { "4. close": "104.0" },
                "2024-03-05": { "4. close": "103.0" },
                "2024-03-04": { "4. close": "102.0" },
                "2024-03-01": { "4. close": "101.0" },
            }
        });
        let closes = extract_closes(&payload).unwrap();
        assert_eq!(closes, vec![102.0, 103.0, 104.0, 105.0, 106.0, 107.0, 108.0]);
    }

    #[test]
    fn short_series_is_kept_as_is() {
        let payload = json!({
            "Time Series (Daily)": {
                "2024-03-05": { "4. close": "103.5" },
                "2024-03-04": { "4. close": "102.0" },
            }
        });
        assert_eq!(extract_closes(&payload).unwrap(), vec![102.0, 103.5]);
    }

    #[test]
    fn missing_series_key_is_malformed() {
        let payload = json!({ "Note": "rate limit exceeded" });
        assert!(extract_closes(&payload).is_none());
    }

    #[test]
    fn unparseable_close_is_malformed() {
        let payload = json!({
            "Time Series (Daily)": {
                "2024-03-05": { "4. close": "oops" },
                "2024-03-04": { "4. close": "102.0" },
            }
        });
        assert!(extract_closes(&payload).is_none());
    }
}
