//! Observability.
//!
//! # Design Decisions
//! - Structured logging through `tracing`; the library only emits events,
//!   the binary installs the subscriber
//! - Metrics go through the `metrics` facade; the host application decides
//!   on an exporter
//! - Every dispatch carries a call ID so its events correlate

pub mod logging;
pub mod metrics;
