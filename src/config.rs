//! Loader configuration
//!
//! The loader is configured from YAML, with every field optional:
//!
//! ```yaml
//! base_url: https://pokeapi.co/api/v2/
//! resource: pokemon
//! page_size: 20
//! page_size_param: limit
//! http:
//!   timeout_secs: 30
//!   max_retries: 2
//!   backoff: exponential
//!   headers:
//!     Accept-Language: en
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable that overrides `base_url`
pub const BASE_URL_ENV: &str = "POKEDEX_BASE_URL";

// ============================================================================
// Loader Config
// ============================================================================

/// Configuration for a collection loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// API root; collection and item endpoints are resolved against it
    pub base_url: String,

    /// Collection name under the API root (e.g., "pokemon")
    pub resource: String,

    /// Items per page on the first request
    pub page_size: u32,

    /// Query parameter carrying the page size
    pub page_size_param: String,

    /// HTTP transport settings
    pub http: HttpSettings,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            resource: "pokemon".to_string(),
            page_size: 20,
            page_size_param: "limit".to_string(),
            http: HttpSettings::default(),
        }
    }
}

impl LoaderConfig {
    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check that the config can drive a loader
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        if self.resource.trim().is_empty() {
            return Err(Error::config("resource must not be empty"));
        }
        if self.page_size_param.trim().is_empty() {
            return Err(Error::config("page_size_param must not be empty"));
        }
        self.api_base()?;
        Ok(())
    }

    /// Parsed API root, always ending in `/` so relative joins stay beneath it
    pub fn api_base(&self) -> Result<Url> {
        let mut base = Url::parse(&self.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                self.base_url
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base)
    }

    /// Collection endpoint, e.g. `https://pokeapi.co/api/v2/pokemon`
    pub fn collection_url(&self) -> Result<Url> {
        Ok(self.api_base()?.join(self.resource.trim_matches('/'))?)
    }

    /// Detail endpoint for a single item by name
    pub fn item_url(&self, name: &str) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("base_url '{}' cannot be a base", self.base_url)))?
            .push(name);
        Ok(url)
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds (unset = no client-side timeout)
    pub timeout_secs: Option<u64>,

    /// Retries for transient failures (0 = fail on first error)
    pub max_retries: u32,

    /// Backoff between retries
    pub backoff: BackoffType,

    /// Initial backoff in milliseconds
    pub initial_backoff_ms: u64,

    /// User agent override
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            max_retries: 0,
            backoff: BackoffType::Exponential,
            initial_backoff_ms: 100,
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl HttpSettings {
    /// Build the HTTP client configuration these settings describe
    pub fn client_config(&self) -> HttpClientConfig {
        let defaults = HttpClientConfig::default();
        let mut builder = HttpClientConfig::builder()
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                defaults.max_backoff,
            );
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }
}
