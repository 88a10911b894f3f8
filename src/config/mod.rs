use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::strength::IndicatorConfig;

fn default_input_candidates() -> Vec<String> {
    vec!["password".to_string(), "new-password".to_string()]
}

fn default_meter_id() -> String {
    "strength-meter".to_string()
}

fn default_label_id() -> String {
    "strength-text".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input element ids tried in order; first one present wins.
    #[serde(default = "default_input_candidates")]
    pub input_candidates: Vec<String>,

    /// Meter element id
    #[serde(default = "default_meter_id")]
    pub meter_id: String,

    /// Label element id
    #[serde(default = "default_label_id")]
    pub label_id: String,

    /// Start with the typed password visible instead of masked
    #[serde(default)]
    pub reveal_input: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_candidates: default_input_candidates(),
            meter_id: default_meter_id(),
            label_id: default_label_id(),
            reveal_input: false,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("tsuyosa");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Element ids for the strength indicator
    pub fn indicator(&self) -> IndicatorConfig {
        IndicatorConfig {
            input_candidates: self.input_candidates.clone(),
            meter_id: self.meter_id.clone(),
            label_id: self.label_id.clone(),
        }
    }
}
