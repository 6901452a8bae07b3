//! The request façade.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::config::FacadeConfig;
use crate::observability::metrics;
use crate::resilience::TimeoutGuard;
use crate::security::CredentialStore;
use crate::status::{LoadingGauge, NotificationHub};

use super::call::OutgoingCall;
use super::error::{normalize, CallFailure, NormalizedError};
use super::transport::{HttpTransport, Transport, TransportRequest};

const ERROR_TITLE: &str = "Request failed";

/// The only component calling code interacts with.
///
/// Owns nothing global: the credential store, loading gauge and
/// notification hub are injected so independent instances can coexist.
pub struct RequestDispatcher<T: Transport = HttpTransport> {
    transport: T,
    base_url: Url,
    default_timeout: Duration,
    auth_header: String,
    auth_scheme: String,
    credentials: Arc<CredentialStore>,
    loading: Arc<LoadingGauge>,
    guard: TimeoutGuard,
    notifications: Arc<NotificationHub>,
}

impl RequestDispatcher<HttpTransport> {
    pub fn new(
        config: &FacadeConfig,
        credentials: Arc<CredentialStore>,
        loading: Arc<LoadingGauge>,
        notifications: Arc<NotificationHub>,
    ) -> Result<Self, url::ParseError> {
        Self::with_transport(HttpTransport::new(), config, credentials, loading, notifications)
    }
}

impl<T: Transport> RequestDispatcher<T> {
    pub fn with_transport(
        transport: T,
        config: &FacadeConfig,
        credentials: Arc<CredentialStore>,
        loading: Arc<LoadingGauge>,
        notifications: Arc<NotificationHub>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            transport,
            base_url: Url::parse(&config.api.base_url)?,
            default_timeout: config.timeouts.default_budget(),
            auth_header: config.auth.header.clone(),
            auth_scheme: config.auth.scheme.clone(),
            credentials,
            loading,
            guard: TimeoutGuard::new(notifications.clone()),
            notifications,
        })
    }

    /// Issue one call and settle it exactly once.
    ///
    /// Resolves with the response body on a 2xx status; rejects with a
    /// [`NormalizedError`] for server errors, network failures and
    /// guard-triggered aborts. No retries.
    pub async fn send(&self, call: OutgoingCall) -> Result<Option<Value>, NormalizedError> {
        let call_id = Uuid::new_v4();

        let url = match self.resolve_target(&call.target) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(%call_id, target = %call.target, "unresolvable call target");
                return Err(normalize(CallFailure::InvalidTarget(e)));
            }
        };

        // Token is read fresh per dispatch, never cached across calls.
        let mut headers = call.headers.clone();
        if let Some(token) = self.credentials.current() {
            headers.push((
                self.auth_header.clone(),
                format!("{} {}", self.auth_scheme, token),
            ));
        }

        if call.tracks_loading {
            self.loading.increment();
        }

        let budget = call.timeout.unwrap_or(self.default_timeout);
        let ctx = self.guard.arm(budget);
        tracing::debug!(
            %call_id,
            method = %call.method,
            target = %url,
            budget_ms = budget.as_millis() as u64,
            "dispatching call"
        );

        let request = TransportRequest {
            method: call.method.clone(),
            url,
            headers,
            body: call.payload.clone(),
        };
        let result = self
            .transport
            .execute(request, ctx.cancellation_handle())
            .await;

        // Settle sequence: disarm happens-before this call's own
        // notification updates; the decrement is coupled to the one-shot
        // settled flag, not to the gauge.
        self.guard.disarm(&ctx);
        if ctx.mark_settled() && call.tracks_loading {
            self.loading.decrement();
        }
        self.notifications.hide();

        let elapsed = ctx.elapsed();
        match result {
            Ok(reply) if (200..300).contains(&reply.status) => {
                tracing::debug!(
                    %call_id,
                    status = reply.status,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "call settled"
                );
                metrics::record_call("success", reply.status, elapsed);
                Ok(reply.body)
            }
            Ok(reply) => {
                let status = reply.status;
                let err = normalize(CallFailure::Server {
                    status,
                    body: reply.body,
                });
                tracing::warn!(
                    %call_id,
                    status,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "call failed with server error"
                );
                metrics::record_call("server_error", status, elapsed);
                self.notifications
                    .show_error_unless_shadowed(ERROR_TITLE, &err.friendly_message);
                Err(err)
            }
            Err(failure) => {
                let err = normalize(CallFailure::Transport(failure));
                tracing::warn!(
                    %call_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    timeout = err.cause.is_timeout(),
                    "call failed without a response"
                );
                metrics::record_call(
                    if err.cause.is_timeout() { "timeout" } else { "network_error" },
                    err.http_status,
                    elapsed,
                );
                self.notifications
                    .show_error_unless_shadowed(ERROR_TITLE, &err.friendly_message);
                Err(err)
            }
        }
    }

    /// Paths join onto the configured base URL; absolute URLs pass through
    /// for third-party hosts.
    fn resolve_target(&self, target: &str) -> Result<Url, url::ParseError> {
        match Url::parse(target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self.base_url.join(target),
            Err(e) => Err(e),
        }
    }
}
