//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{AnalyzeError, AnalyzeResult};

use super::model::AnalyzerConfig;

impl AnalyzerConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> AnalyzeResult<Self> {
        let config_path = std::env::var("LOGSIFT_CONFIG_FILE")
            .unwrap_or_else(|_| "logsift.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::debug!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Ok(path) = std::env::var("LOGSIFT_LOG_PATH") {
            config.log_path = path;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> AnalyzeResult<Self> {
        let mut file = File::open(path).map_err(|source| AnalyzeError::ReadSource {
            path: path.into(),
            source,
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| AnalyzeError::ReadSource {
                path: path.into(),
                source,
            })?;

        let config: AnalyzerConfig =
            toml::from_str(&contents).map_err(|e| AnalyzeError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            log_path: std::env::var("LOGSIFT_LOG_PATH")
                .unwrap_or_else(|_| "logs.json".to_string()),
            color: std::env::var("LOGSIFT_COLOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}
