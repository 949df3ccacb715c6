//! JSON-RPC transport.
//!
//! [`Transport`] is the single primitive the facade needs: send one named
//! call, get back the decoded result. [`HttpTransport`] implements it over
//! HTTPS with reqwest's blocking client.

use crate::config::ClientConfig;
use crate::errors::{Casino25Error, Casino25Result};
use crate::param_validator::Params;
use crate::proto::rpc::{RpcRequest, RpcResponse};
use reqwest::blocking::Client as HttpClient;
use reqwest::{Identity, Url};
use serde_json::Value;
use std::fs;
use tracing::{debug, warn};

/// Generic "invoke remote procedure" primitive.
pub trait Transport {
    fn invoke(&self, method: &str, params: Params) -> Casino25Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn invoke(&self, method: &str, params: Params) -> Casino25Result<Value> {
        (**self).invoke(method, params)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn invoke(&self, method: &str, params: Params) -> Casino25Result<Value> {
        (**self).invoke(method, params)
    }
}

/// JSON-RPC 2.0 over HTTP(S) POST.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    endpoint: Url,
    debug: bool,
}

impl HttpTransport {
    pub fn from_config(config: &ClientConfig) -> Casino25Result<Self> {
        let endpoint = config.endpoint()?;
        let mut builder = HttpClient::builder();

        if !config.ssl_verification {
            warn!(endpoint = %endpoint, "TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(path) = &config.ssl_key_path {
            let pem = fs::read(path).map_err(|e| {
                Casino25Error::io(format!("reading client certificate {}", path.display()), e)
            })?;
            let identity = Identity::from_pem(&pem).map_err(|e| {
                Casino25Error::configuration(format!(
                    "Invalid client certificate {}: {e}",
                    path.display()
                ))
            })?;
            debug!(path = %path.display(), "using client certificate");
            builder = builder.identity(identity);
        }

        let http = builder
            .build()
            .map_err(|e| Casino25Error::network("building HTTP client", e))?;

        Ok(Self {
            http,
            endpoint,
            debug: config.debug,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn invoke(&self, method: &str, params: Params) -> Casino25Result<Value> {
        let id = u64::from(rand::random::<u32>());
        let request = RpcRequest::call(method, params, id);
        let body = serde_json::to_string(&request)
            .map_err(|e| Casino25Error::serialization(format!("encoding {method} request"), e))?;

        if self.debug {
            debug!(target: "casino25::wire", %method, request = %body, "sending request");
        }

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| Casino25Error::network(method, e))?;

        let text = response
            .text()
            .map_err(|e| Casino25Error::network(method, e))?;

        if self.debug {
            debug!(target: "casino25::wire", %method, response = %text, "received response");
        }

        let envelope: RpcResponse = serde_json::from_str(&text)
            .map_err(|e| Casino25Error::malformed_response(method, e))?;

        envelope.into_result(id)
    }
}
