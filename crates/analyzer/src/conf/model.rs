//! Model — AnalyzerConfig.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Default input file used when the CLI does not supply one.
    pub log_path: String,
    /// Enable colored report output.
    pub color: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            log_path: "logs.json".to_string(),
            color: true,
        }
    }
}

impl AnalyzerConfig {
    /// Validate that configuration values are sane
    pub fn validate(&self) -> Result<(), String> {
        if self.log_path.is_empty() {
            return Err("log_path must not be empty".to_string());
        }
        Ok(())
    }
}
