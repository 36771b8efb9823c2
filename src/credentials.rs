// API key resolution: ordered sources, first non-empty wins.
use std::fs;
use std::path::Path;
use tracing::info;

pub const KEY_ENV_VAR: &str = "ALPHA_VANTAGE_KEY";

/// Key baked in at compile time, if any.
const BUILD_TIME_KEY: Option<&str> = option_env!("ALPHA_VANTAGE_KEY");

/// A named place a key may come from. The chain is tried in order and the
/// first source yielding a non-empty string wins; the name is only used
/// for logging which source supplied the key.
pub struct KeySource {
    pub name: &'static str,
    pub value: String,
}

/// Resolves the Alpha Vantage key from, in priority order: the process
/// environment, the build-time environment, then a persisted key file.
/// Returns an empty string when no source has one; the key is treated as
/// an opaque string and never validated.
pub fn resolve_api_key(key_file: &str) -> String {
    let sources = vec![
        KeySource {
            name: "process env",
            value: std::env::var(KEY_ENV_VAR).unwrap_or_default(),
        },
        KeySource {
            name: "build-time env",
            value: BUILD_TIME_KEY.unwrap_or_default().to_string(),
        },
        KeySource {
            name: "key file",
            value: read_key_file(key_file),
        },
    ];
    first_non_empty(sources)
}

fn read_key_file(path: &str) -> String {
    if !Path::new(path).exists() {
        return String::new();
    }
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn first_non_empty(sources: Vec<KeySource>) -> String {
    for source in sources {
        if !source.value.is_empty() {
            info!("API key resolved from {}", source.name);
            return source.value;
        }
    }
    String::new()
}
