//! Boot — logging init and config load.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::AnalyzerConfig;
use crate::error::{AnalyzeError, AnalyzeResult};

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "analyzer=info".into()),
        )
        // Diagnostics go to stderr; stdout is reserved for query output.
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load and validate configuration.
///
/// Returns the `AnalyzerConfig` on success.
pub fn boot() -> AnalyzeResult<AnalyzerConfig> {
    let config = AnalyzerConfig::load()?;
    config.validate().map_err(AnalyzeError::Config)?;
    info!(
        "Loaded configuration: log_path={}, color={}",
        config.log_path, config.color
    );
    Ok(config)
}
