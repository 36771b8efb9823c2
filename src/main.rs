mod analyzer;
mod config;
mod controller;
mod credentials;
mod model;
mod provider;
mod registry;

use config::load_config;
use controller::Watcher;
use credentials::resolve_api_key;
use model::Snapshot;
use provider::AlphaVantageClient;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};
use tracing_subscriber;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file (defaults when absent)
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error: {}; using defaults", e);
            config::AppConfig::default()
        }
    };

    let api_key = resolve_api_key(&config.key_file);
    if api_key.is_empty() {
        warn!("No API key configured; fallback data will be served");
    }

    let provider = AlphaVantageClient::new();
    let mut watcher = Watcher::new(Box::new(provider), api_key, config.demo_mode);

    info!(
        "Tracking {} indices, refreshing every {}s (demo mode: {})",
        registry::TRACKED_INDICES.len(),
        config.refresh_interval_seconds,
        watcher.demo_mode()
    );

    loop {
        let snapshot = watcher.refresh().await;
        render(snapshot);

        info!(
            "Waiting for timer ({}s)...",
            config.refresh_interval_seconds
        );
        tokio::select! {
            _ = sleep(Duration::from_secs(config.refresh_interval_seconds)) => {
                info!("Timer triggered.");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown requested.");
                break;
            }
        }
    }
}

/// Logs the latest snapshot: one line per series, one per recommendation.
fn render(snapshot: &Snapshot) {
    if let Some(advisory) = &snapshot.advisory {
        warn!("{}", advisory);
    }

    for (ticker, series) in &snapshot.history {
        if let Some(points) = series.as_array() {
            let closes: Vec<String> = points.iter().map(|p| p.to_string()).collect();
            info!("{}: [{}]", ticker, closes.join(", "));
        }
    }

    for rec in &snapshot.recommendations {
        info!(
            "{}: {:?} (change: {:+.2})",
            rec.ticker, rec.trend, rec.change
        );
    }
}
