//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the request façade.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FacadeConfig {
    /// Backend API settings.
    pub api: ApiConfig,

    /// Timeout budgets.
    pub timeouts: TimeoutConfig,

    /// Credential injection settings.
    pub auth: AuthConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL that relative call targets are joined onto. A trailing
    /// slash keeps the final path segment when joining.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001/api/".to_string(),
        }
    }
}

/// Timeout budgets.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Default per-call budget when the caller does not specify one.
    /// The slow-call warning always fires at a third of the budget.
    pub default_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { default_secs: 25 }
    }
}

impl TimeoutConfig {
    pub fn default_budget(&self) -> Duration {
        Duration::from_secs(self.default_secs)
    }
}

/// Credential injection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Header the token is injected into.
    pub header: String,

    /// Scheme prefix placed before the token.
    pub scheme: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            header: "authorization".to_string(),
            scheme: "Bearer".to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "api_facade=debug".to_string(),
        }
    }
}
