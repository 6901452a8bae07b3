//! Outgoing call description.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// One outbound call, created per dispatch and discarded once settled.
///
/// `target` is either a path joined onto the configured base URL or an
/// absolute URL for third-party hosts.
#[derive(Debug, Clone)]
pub struct OutgoingCall {
    pub target: String,
    pub method: Method,
    pub payload: Option<Value>,
    /// Per-call budget; the configured default applies when absent.
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
    /// Whether the call participates in the global loading signal.
    pub tracks_loading: bool,
}

impl OutgoingCall {
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method,
            payload: None,
            timeout: None,
            headers: Vec::new(),
            tracks_loading: true,
        }
    }

    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::GET, target)
    }

    pub fn post(target: impl Into<String>, payload: Value) -> Self {
        let mut call = Self::new(Method::POST, target);
        call.payload = Some(payload);
        call
    }

    pub fn put(target: impl Into<String>, payload: Value) -> Self {
        let mut call = Self::new(Method::PUT, target);
        call.payload = Some(payload);
        call
    }

    pub fn delete(target: impl Into<String>) -> Self {
        Self::new(Method::DELETE, target)
    }

    /// Override the default timeout budget.
    pub fn timeout(mut self, budget: Duration) -> Self {
        self.timeout = Some(budget);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Opt out of the global loading signal (polling, prefetch).
    pub fn background(mut self) -> Self {
        self.tracks_loading = false;
        self
    }
}
