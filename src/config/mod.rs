//! Configuration management.
//!
//! Configuration is optional: everything defaults to the production
//! E-utilities endpoint. A TOML file can override the endpoint, timeout,
//! default result bound, and API key, and `PMID_CHECKER_*` environment
//! variables override the file.
//!
//! ```toml
//! [eutils]
//! base_url = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"
//! api_key = "your-ncbi-api-key"
//! timeout_secs = 30
//! default_max_results = 1000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::models::DEFAULT_MAX_RESULTS;
use crate::sources::PUBMED_ESEARCH_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// E-utilities settings
    #[serde(default)]
    pub eutils: EutilsConfig,
}

/// E-utilities endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EutilsConfig {
    /// esearch endpoint URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// NCBI API key (optional, raises the service's request allowance)
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default maximum-results bound when the caller does not set one
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,
}

impl Default for EutilsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout_secs(),
            default_max_results: default_max_results(),
        }
    }
}

impl EutilsConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    PUBMED_ESEARCH_URL.to_string()
}

fn default_api_key() -> Option<String> {
    std::env::var("NCBI_API_KEY").ok()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Load configuration from a file, with environment variable overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("PMID_CHECKER"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the default locations: `pmid-checker.toml` in
/// the working directory, then `<config dir>/pmid-checker/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("pmid-checker.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("pmid-checker").join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.eutils.base_url, PUBMED_ESEARCH_URL);
        assert_eq!(config.eutils.timeout_secs, 30);
        assert_eq!(config.eutils.default_max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.eutils.timeout(), Duration::from_secs(30));
    }
}
