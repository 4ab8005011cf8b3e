use anyhow::Context;
use insight_config::InsightConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honoring `--config`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<InsightConfig> {
    let config = match &flags.config {
        Some(path) => InsightConfig::load_with_file(path)
            .with_context(|| format!("failed to load config from '{}'", path.display()))?,
        None => InsightConfig::load_with_dotenv().context("failed to load configuration")?,
    };

    tracing::debug!(
        mode = %config.validation.mode,
        allowed_kinds = config.validation.allowed_kinds.len(),
        "configuration loaded"
    );
    Ok(config)
}
