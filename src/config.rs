//! Provider configuration.
//!
//! Holds the OneLogin API credentials and endpoint. Configuration can be
//! deserialized from the host's provider block or read from the environment:
//!
//! | Variable                 | Meaning                                   |
//! |--------------------------|-------------------------------------------|
//! | `ONELOGIN_CLIENT_ID`     | API client id (required)                  |
//! | `ONELOGIN_CLIENT_SECRET` | API client secret (required)              |
//! | `ONELOGIN_OAPI_URL`      | API base URL, overrides the region        |
//! | `ONELOGIN_REGION`        | `us` or `eu`, defaults to `us`            |

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{FieldSchema, ResourceSchema};
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

pub const CLIENT_ID_ENV: &str = "ONELOGIN_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "ONELOGIN_CLIENT_SECRET";
pub const URL_ENV: &str = "ONELOGIN_OAPI_URL";
pub const REGION_ENV: &str = "ONELOGIN_REGION";

/// OneLogin regions with a hosted API endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    /// Base URL of the region's API.
    pub fn api_url(&self) -> &'static str {
        match self {
            Region::Us => "https://api.us.onelogin.com",
            Region::Eu => "https://api.eu.onelogin.com",
        }
    }

    fn parse(value: &str) -> ConfigResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            other => Err(ConfigError::InvalidSetting {
                name: "region".to_string(),
                message: format!("unknown region '{other}', expected 'us' or 'eu'"),
            }),
        }
    }
}

/// Credentials and endpoint for the OneLogin API.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Explicit API base URL; the region's URL is used when absent
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub region: Region,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("url", &self.url)
            .field("region", &self.region)
            .finish()
    }
}

impl ProviderConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            url: None,
            region: Region::default(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Read configuration from an environment-style map.
    pub fn from_env_map(env: &HashMap<String, String>) -> ConfigResult<Self> {
        let setting = |name: &str| {
            env.get(name)
                .filter(|v| !v.is_empty())
                .cloned()
                .ok_or_else(|| ConfigError::missing(name))
        };

        let region = match env.get(REGION_ENV).filter(|v| !v.is_empty()) {
            Some(value) => Region::parse(value)?,
            None => Region::default(),
        };

        let config = Self {
            client_id: setting(CLIENT_ID_ENV)?,
            client_secret: setting(CLIENT_SECRET_ENV)?,
            url: env.get(URL_ENV).filter(|v| !v.is_empty()).cloned(),
            region,
        };
        config.validate()?;
        Ok(config)
    }

    /// Effective API base URL, without a trailing slash.
    pub fn api_url(&self) -> &str {
        self.url
            .as_deref()
            .unwrap_or_else(|| self.region.api_url())
            .trim_end_matches('/')
    }

    /// Check that credentials are present and the URL is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.client_id.is_empty() {
            return Err(ConfigError::missing("client_id"));
        }
        if self.client_secret.is_empty() {
            return Err(ConfigError::missing("client_secret"));
        }

        let url = self.api_url();
        let invalid = || ConfigError::InvalidUrl {
            url: url.to_string(),
        };
        let parsed = Url::parse(url).map_err(|_| invalid())?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid());
        }
        // The parser folds `https:///api` into host `api`; the authority must be written out
        let authority = url.split_once("://").map_or("", |(_, rest)| rest);
        if authority.starts_with('/') {
            return Err(invalid());
        }
        Ok(())
    }

    /// Field schema of the provider block.
    pub fn schema() -> ResourceSchema {
        ResourceSchema::new(
            "onelogin",
            "OneLogin API credentials",
            vec![
                FieldSchema::string("client_id").required(),
                FieldSchema::string("client_secret").required().sensitive(),
                FieldSchema::string("url").optional(),
                FieldSchema::string("region").optional().with_default("us"),
            ],
        )
    }
}
