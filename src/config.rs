// Client configuration for the casino25 API

use crate::errors::{Casino25Error, Casino25Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connection settings for a [`Client`](crate::client::Client).
///
/// Accepts both snake_case keys and the `sslKeyPath` spelling used by
/// existing deployments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC 2.0 endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Verify the server certificate over TLS.
    #[serde(default = "default_ssl_verification")]
    pub ssl_verification: bool,
    /// Log request and response bodies.
    #[serde(default)]
    pub debug: bool,
    /// PEM file holding the client certificate and private key for mutual TLS.
    #[serde(default, alias = "sslKeyPath", skip_serializing_if = "Option::is_none")]
    pub ssl_key_path: Option<PathBuf>,
}

fn default_ssl_verification() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: None,
            ssl_verification: default_ssl_verification(),
            debug: false,
            ssl_key_path: None,
        }
    }
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn without_ssl_verification(mut self) -> Self {
        self.ssl_verification = false;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_ssl_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ssl_key_path = Some(path.into());
        self
    }

    /// The parsed endpoint. Fails if `url` is missing, blank or malformed.
    pub fn endpoint(&self) -> Casino25Result<Url> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Casino25Error::configuration("You must specify url for API"))?;

        Url::parse(url)
            .map_err(|e| Casino25Error::configuration(format!("Invalid API url {url:?}: {e}")))
    }
}
