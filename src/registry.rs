// Tracked indices and the static fallback table.
use crate::model::History;
use serde_json::{json, Value};

/// Display name -> Alpha Vantage symbol. Fixed at startup; fetch cycles
/// iterate in declaration order.
pub const TRACKED_INDICES: &[(&str, &str)] = &[
    ("MERVAL", "^MERV"),
    ("DOWJONES", "^DJI"),
    ("SP500", "^GSPC"),
];

/// Seven daily closes per index, used whenever live data is unavailable.
pub fn fallback_history() -> History {
    let mut history = History::new();
    for (ticker, _) in TRACKED_INDICES {
        if let Some(series) = fallback_series(ticker) {
            history.insert((*ticker).to_string(), series);
        }
    }
    history
}

pub fn fallback_series(ticker: &str) -> Option<Value> {
    let series = match ticker {
        "MERVAL" => json!([1100, 1120, 1150, 1130, 1165, 1180, 1195]),
        "DOWJONES" => json!([38500, 38620, 38450, 38700, 38900, 39100, 39050]),
        "SP500" => json!([5050, 5070, 5090, 5080, 5105, 5120, 5115]),
        _ => return None,
    };
    Some(series)
}
