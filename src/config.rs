// src/config.rs

use serde::Deserialize;
use std::{env, error::Error, fs, path::Path};

/// Optional deployment configuration (`bitte.dev.json`). Only the `url`
/// field matters to us; anything else in the file is ignored.
#[derive(Deserialize, Debug, Default)]
pub struct PluginConfig {
    pub url: Option<String>,
}

impl PluginConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| e.into())
    }
}

/// Deployment URL supplied by the hosting environment, used as the fallback
/// when no explicit config URL is set. Empty values count as unset.
pub fn deployment_url() -> Option<String> {
    env::var("DEPLOYMENT_URL").ok().filter(|v| !v.is_empty())
}

/// Picks the manifest's server URL: explicit config first, environment
/// fallback second, absent otherwise.
pub fn resolve_server_url(config: PluginConfig, fallback: Option<&str>) -> Option<String> {
    config.url.or_else(|| fallback.map(str::to_string))
}
