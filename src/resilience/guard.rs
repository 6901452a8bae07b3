//! Two-stage timeout guard for a single in-flight call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::dispatch::error::TIMEOUT_MESSAGE;
use crate::status::{NotificationHub, NotificationKind};

/// Description shown when a call outlives a third of its budget.
pub const SLOW_CALL_MESSAGE: &str = "This is taking longer than usual.";

const WARNING_TITLE: &str = "Still working";
const ABORT_TITLE: &str = "Request cancelled";

/// Arms and disarms the slow-warning and hard-abort timers for one call.
///
/// None of the guard's own operations can fail; it only triggers effects in
/// the notification slot and on the transport cancellation token.
pub struct TimeoutGuard {
    notifications: Arc<NotificationHub>,
}

/// Timer and cancellation state owned for the duration of one call.
///
/// Both timer handles are released exactly once, whichever of success,
/// failure or guard-triggered abort settles the call first; dropping the
/// context releases them as well.
pub struct LifecycleContext {
    started_at: Instant,
    cancel: CancellationToken,
    disarm: CancellationToken,
    warn_timer: JoinHandle<()>,
    abort_timer: JoinHandle<()>,
    settled: AtomicBool,
}

impl TimeoutGuard {
    pub fn new(notifications: Arc<NotificationHub>) -> Self {
        Self { notifications }
    }

    /// Start both timers for a call with budget `T`: the slow warning at
    /// `T/3` and the hard abort at `T`.
    ///
    /// Each timer races its sleep against the context's disarm token, so a
    /// disarmed timer can never fire.
    pub fn arm(&self, budget: Duration) -> LifecycleContext {
        let cancel = CancellationToken::new();
        let disarm = CancellationToken::new();

        let warn_timer = tokio::spawn({
            let disarm = disarm.clone();
            let notifications = self.notifications.clone();
            let warn_after = budget / 3;
            async move {
                tokio::select! {
                    _ = disarm.cancelled() => {}
                    _ = tokio::time::sleep(warn_after) => {
                        tracing::debug!(warn_after_ms = warn_after.as_millis() as u64, "slow-call warning fired");
                        notifications.show(NotificationKind::Warning, WARNING_TITLE, SLOW_CALL_MESSAGE);
                    }
                }
            }
        });

        let abort_timer = tokio::spawn({
            let disarm = disarm.clone();
            let cancel = cancel.clone();
            let notifications = self.notifications.clone();
            async move {
                tokio::select! {
                    _ = disarm.cancelled() => {}
                    _ = tokio::time::sleep(budget) => {
                        tracing::warn!(budget_ms = budget.as_millis() as u64, "budget exhausted, aborting call");
                        cancel.cancel();
                        notifications.show(NotificationKind::Error, ABORT_TITLE, TIMEOUT_MESSAGE);
                    }
                }
            }
        });

        LifecycleContext {
            started_at: Instant::now(),
            cancel,
            disarm,
            warn_timer,
            abort_timer,
            settled: AtomicBool::new(false),
        }
    }

    /// Release both timers. Idempotent: repeated calls, and calls after a
    /// timer already fired, are no-ops and never re-trigger effects.
    pub fn disarm(&self, ctx: &LifecycleContext) {
        ctx.disarm.cancel();
        ctx.warn_timer.abort();
        ctx.abort_timer.abort();
    }
}

impl LifecycleContext {
    /// Token the transport layer uses to interrupt the underlying network
    /// operation when the hard abort fires.
    pub fn cancellation_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// One-shot settled flag: true exactly once. The dispatcher couples the
    /// loading-gauge decrement to this flag rather than to the gauge.
    pub fn mark_settled(&self) -> bool {
        !self.settled.swap(true, Ordering::SeqCst)
    }

    /// Time since the call was armed.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Drop for LifecycleContext {
    fn drop(&mut self) {
        // A dropped context must not leave armed timers behind.
        self.disarm.cancel();
    }
}
