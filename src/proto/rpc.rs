//! JSON-RPC 2.0 envelopes.
//!
//! This module implements the subset of the
//! [JSON-RPC 2.0](https://www.jsonrpc.org/specification) schema the casino25
//! API uses: single calls with named parameters and numeric ids.
//!
//! # Examples
//!
//! ```
//! use casino25_client::proto::rpc::{RpcRequest, RpcResponse};
//! use serde_json::json;
//!
//! let mut params = serde_json::Map::new();
//! params.insert("PlayerId".into(), json!("p1"));
//! let request = RpcRequest::call("Balance.Get", params, 7);
//! let serialized = serde_json::to_string(&request).unwrap();
//! assert_eq!(
//!     serialized,
//!     r#"{"jsonrpc":"2.0","method":"Balance.Get","params":{"PlayerId":"p1"},"id":7}"#
//! );
//!
//! let response: RpcResponse =
//!     serde_json::from_str(r#"{"jsonrpc":"2.0","result":{"Amount":100},"id":7}"#).unwrap();
//! assert_eq!(response.into_result(7).unwrap(), json!({ "Amount": 100 }));
//! ```

use crate::errors::{Casino25Error, Casino25Result};
use crate::param_validator::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC request message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Dotted `Namespace.Verb` method name.
    pub method: String,
    /// Named parameters; omitted when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    pub id: Value,
}

impl RpcRequest {
    /// Build a call to `method`. An empty parameter set is sent without `params`.
    pub fn call(method: impl Into<String>, params: Params, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: method.into(),
            params: (!params.is_empty()).then(|| Value::Object(params)),
            id: Value::from(id),
        }
    }
}

/// A JSON-RPC response message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    /// Result returned on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error information if the call failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl RpcResponse {
    /// Unwrap the envelope of the response to request `expected_id`.
    ///
    /// Server errors become [`Casino25Error::Rpc`] unchanged. A `null` or
    /// missing result decodes as `Value::Null`.
    pub fn into_result(self, expected_id: u64) -> Casino25Result<Value> {
        if let Some(error) = self.error {
            return Err(error.into());
        }

        match self.id {
            Some(id) if id != Value::from(expected_id) => Err(Casino25Error::invalid_response(
                format!("response id {id} does not match request id {expected_id}"),
            )),
            _ => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// Details about a JSON-RPC error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<RpcError> for Casino25Error {
    fn from(err: RpcError) -> Self {
        Casino25Error::Rpc {
            code: err.code,
            message: err.message,
            data: err.data,
        }
    }
}
