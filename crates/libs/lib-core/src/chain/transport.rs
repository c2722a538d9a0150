//! # RPC Transports
//!
//! JSON-RPC 2.0 over HTTP, plus an ordered fallback wrapper.
//!
//! ## Fallback Rules
//!
//! [`FallbackTransport`] tries transports in configuration order:
//!
//! - transport failures (unreachable host, HTTP 401/403/5xx, malformed body) fall
//!   through to the next transport
//! - a JSON-RPC `error` object is a real answer from a healthy node and is returned
//!   as [`AppError::Rpc`] without trying further transports
//! - when every transport fails, the last failure is returned
//!
//! Nothing here is surfaced to the presentation layer.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chain::TransportConfig;
use crate::error::{AppError, Result};

/// A backend able to answer JSON-RPC requests.
#[async_trait(?Send)]
pub trait RpcTransport {
    /// Short name for log lines. Never contains credentials.
    fn label(&self) -> &str;

    async fn request(&self, method: &str, params: Value) -> Result<Value>;
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Interpret a JSON-RPC response body.
pub fn parse_response(body: Value) -> Result<Value> {
    let response: JsonRpcResponse = serde_json::from_value(body)?;

    if let Some(error) = response.error {
        return Err(AppError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    response
        .result
        .ok_or_else(|| AppError::Decoding("JSON-RPC response has neither result nor error".to_string()))
}

/// JSON-RPC over HTTP POST.
pub struct HttpTransport {
    label: String,
    url: String,
    client: reqwest::Client,
    next_id: Cell<u64>,
}

impl HttpTransport {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            client: reqwest::Client::new(),
            next_id: Cell::new(1),
        }
    }

    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(config.label(), config.url())
    }
}

#[async_trait(?Send)]
impl RpcTransport for HttpTransport {
    fn label(&self) -> &str {
        &self.label
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let value: Value = response.json().await?;
        parse_response(value)
    }
}

/// Ordered list of transports tried until one answers.
#[derive(Clone)]
pub struct FallbackTransport {
    transports: Vec<Rc<dyn RpcTransport>>,
}

impl FallbackTransport {
    pub fn new(transports: Vec<Rc<dyn RpcTransport>>) -> Self {
        Self { transports }
    }

    /// One [`HttpTransport`] per configured backend, same order.
    pub fn from_configs(configs: &[TransportConfig]) -> Self {
        Self::new(
            configs
                .iter()
                .map(|config| Rc::new(HttpTransport::from_config(config)) as Rc<dyn RpcTransport>)
                .collect(),
        )
    }

    pub fn labels(&self) -> Vec<&str> {
        self.transports.iter().map(|t| t.label()).collect()
    }

    /// Latest block number, as a convenience over `eth_blockNumber`.
    pub async fn block_number(&self) -> Result<u64> {
        let value = self.request("eth_blockNumber", Value::Array(vec![])).await?;
        parse_quantity(&value)
    }
}

#[async_trait(?Send)]
impl RpcTransport for FallbackTransport {
    fn label(&self) -> &str {
        "fallback"
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let mut last_error = None;

        for transport in &self.transports {
            match transport.request(method, params.clone()).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transport_failure() => {
                    tracing::debug!(
                        transport = transport.label(),
                        error = %err,
                        "transport failed, trying next"
                    );
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::Transport("no transports configured".to_string())))
    }
}

/// Decode a JSON-RPC hex quantity (`"0x1b4"`).
pub fn parse_quantity(value: &Value) -> Result<u64> {
    let raw = value
        .as_str()
        .ok_or_else(|| AppError::Decoding(format!("expected hex quantity, got {value}")))?;
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| AppError::Decoding(format!("missing 0x prefix: {raw}")))?;

    u64::from_str_radix(digits, 16)
        .map_err(|e| AppError::Decoding(format!("invalid hex quantity {raw}: {e}")))
}
