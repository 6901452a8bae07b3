//! Process-wide loading reference counter.

use tokio::sync::watch;

use crate::observability::metrics;

/// Reference count of in-flight calls driving a single "is loading" signal.
///
/// The counter can never go below zero. The dispatcher couples each
/// decrement to a one-shot settled flag on the call itself, so a settle
/// handler that runs twice cannot double-decrement; if an underflow is
/// attempted anyway it is logged and the count saturates at zero.
pub struct LoadingGauge {
    count: watch::Sender<usize>,
}

impl LoadingGauge {
    pub fn new() -> Self {
        let (count, _) = watch::channel(0);
        Self { count }
    }

    /// Record a participating call entering flight.
    pub fn increment(&self) {
        self.count.send_modify(|c| {
            *c += 1;
            metrics::record_inflight(*c);
        });
    }

    /// Record a participating call settling.
    pub fn decrement(&self) {
        self.count.send_modify(|c| {
            if *c == 0 {
                tracing::error!("loading gauge decremented below zero");
            } else {
                *c -= 1;
            }
            metrics::record_inflight(*c);
        });
    }

    /// True while at least one participating call is outstanding.
    pub fn is_active(&self) -> bool {
        *self.count.borrow() > 0
    }

    /// Current number of outstanding participating calls.
    pub fn count(&self) -> usize {
        *self.count.borrow()
    }

    /// Read-only subscription for the presentation layer's global spinner.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.count.subscribe()
    }
}

impl Default for LoadingGauge {
    fn default() -> Self {
        Self::new()
    }
}
