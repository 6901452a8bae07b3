//! Failure normalization.
//!
//! Every failed call, whatever its origin, is converted into the single
//! [`NormalizedError`] shape before it reaches calling code. Callers only
//! inspect `cause` when they need more than the friendly message.

use serde_json::Value;
use thiserror::Error;

use super::transport::TransportFailure;

/// Shown when the server supplied no usable error message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when a call was aborted for exceeding its timeout budget.
pub const TIMEOUT_MESSAGE: &str = "The request was cancelled because it took too long.";

/// Raw failure taxonomy, preserved as the `cause` of every normalized error.
#[derive(Debug, Error)]
pub enum CallFailure {
    #[error("server responded with status {status}")]
    Server { status: u16, body: Option<Value> },

    #[error(transparent)]
    Transport(#[from] TransportFailure),

    #[error("invalid request target: {0}")]
    InvalidTarget(#[from] url::ParseError),
}

impl CallFailure {
    /// Whether this failure originated from the guard's hard abort.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(TransportFailure::TimedOut))
    }
}

/// The one uniform error shape surfaced to callers.
#[derive(Debug, Error)]
#[error("{friendly_message}")]
pub struct NormalizedError {
    pub friendly_message: String,
    pub http_status: u16,
    pub raw_payload: Option<Value>,
    #[source]
    pub cause: CallFailure,
}

/// Convert any failure into a [`NormalizedError`]. Total: never panics,
/// however malformed the input.
pub fn normalize(failure: CallFailure) -> NormalizedError {
    match &failure {
        CallFailure::Server { status, body } => {
            let friendly_message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            NormalizedError {
                friendly_message,
                http_status: *status,
                raw_payload: body.clone(),
                cause: failure,
            }
        }
        CallFailure::Transport(TransportFailure::TimedOut) => NormalizedError {
            friendly_message: TIMEOUT_MESSAGE.to_string(),
            http_status: 500,
            raw_payload: None,
            cause: failure,
        },
        CallFailure::Transport(TransportFailure::Network { .. })
        | CallFailure::InvalidTarget(_) => NormalizedError {
            friendly_message: FALLBACK_MESSAGE.to_string(),
            http_status: 500,
            raw_payload: None,
            cause: failure,
        },
    }
}
