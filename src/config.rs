use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub demo_mode: bool,
    pub refresh_interval_seconds: u64,
    pub key_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            refresh_interval_seconds: 300,
            key_file: "alpha_vantage.key".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
