use ::config::{Config, Environment, File};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

/// Local prediction service, same port the backend binds by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Where the prediction backend lives. Resolution order: built-in default
/// (possibly overridden at build time through `.env`), then an optional
/// `stress-monitor.toml` next to the executable, then `STRESS_MONITOR_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn load() -> Result<Self> {
        let default_base_url = option_env!("STRESS_MONITOR_BASE_URL").unwrap_or(DEFAULT_BASE_URL);

        let settings = Config::builder()
            .set_default("base_url", default_base_url)?
            .add_source(File::with_name("stress-monitor").required(false))
            .add_source(Environment::with_prefix("STRESS_MONITOR"))
            .build()
            .context("failed to load backend configuration")?;

        let mut config: BackendConfig = settings
            .try_deserialize()
            .context("invalid backend configuration")?;

        let parsed = Url::parse(&config.base_url)
            .with_context(|| format!("invalid backend base URL: {}", config.base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("backend base URL must be http or https, got: {}", config.base_url);
        }

        // Endpoint paths are appended with a leading slash.
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}
