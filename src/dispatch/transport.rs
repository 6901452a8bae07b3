//! Cancellable network transport.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Fully resolved request handed to the transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: reqwest::Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// What came back from the wire, regardless of status class.
///
/// Non-2xx statuses are not transport failures; the dispatcher classifies
/// them. `body` is the parsed JSON payload, a JSON string for non-JSON
/// bodies, or `None` for an empty body.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: Option<Value>,
}

/// Failures where no usable response reached the caller.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("cancelled after exceeding the timeout budget")]
    TimedOut,
}

/// The seam between the dispatcher and the network.
///
/// Implementations must honor the cancellation token: once it fires, the
/// exchange stops consuming network resources and resolves to
/// [`TransportFailure::TimedOut`] so the dispatcher's settle path runs.
pub trait Transport: Send + Sync + 'static {
    fn execute(
        &self,
        request: TransportRequest,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<TransportReply, TransportFailure>> + Send;
}

/// reqwest-backed transport used in production.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: TransportRequest,
        cancel: CancellationToken,
    ) -> Result<TransportReply, TransportFailure> {
        let exchange = async {
            let mut builder = self.client.request(request.method, request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| TransportFailure::Network {
                message: e.to_string(),
            })?;
            let status = response.status().as_u16();
            let bytes = response.bytes().await.map_err(|e| TransportFailure::Network {
                message: e.to_string(),
            })?;

            let body = if bytes.is_empty() {
                None
            } else {
                serde_json::from_slice(&bytes).ok().or_else(|| {
                    Some(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
                })
            };

            Ok(TransportReply { status, body })
        };

        // Dropping the reqwest future tears the connection down, so a
        // hard-aborted call stops consuming the network immediately.
        tokio::select! {
            _ = cancel.cancelled() => Err(TransportFailure::TimedOut),
            result = exchange => result,
        }
    }
}
