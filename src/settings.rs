// src/settings.rs
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the analysis backend, without a trailing slash.
    pub api_base_url: String,
}

impl AppConfig {
    /// Defaults target a locally running backend; fields can be overridden
    /// through the INSTAMIND_ environment prefix (e.g. INSTAMIND_API_BASE_URL).
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", "http://127.0.0.1:8000")?
            .add_source(config::Environment::with_prefix("INSTAMIND"))
            .build()
            .context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }
}
