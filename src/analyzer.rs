use crate::model::{History, Recommendation, Trend};
use serde_json::Value;

/// Derives one recommendation per history entry holding a series of at
/// least two points. Entries that are not arrays, are too short, or whose
/// endpoints are not numeric are skipped, never reported. Output order
/// follows the map's iteration order.
///
/// `change` is last close minus first close; a zero change classifies as
/// `Falling` (`Rising` requires a strictly positive change).
pub fn recommendations(history: &History) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    for (ticker, value) in history {
        let Some(series) = value.as_array() else {
            continue;
        };
        if series.len() < 2 {
            continue;
        }
        let (Some(first), Some(last)) = (
            coerce_number(&series[0]),
            coerce_number(&series[series.len() - 1]),
        ) else {
            continue;
        };
        let change = last - first;
        let trend = if change > 0.0 {
            Trend::Rising
        } else {
            Trend::Falling
        };
        recs.push(Recommendation {
            ticker: ticker.clone(),
            trend,
            change,
        });
    }
    recs
}

/// Accepts JSON numbers and numeric-looking strings.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
