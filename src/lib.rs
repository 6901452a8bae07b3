//! Shared outbound-request façade.
//!
//! Every call to the backend or a third-party host goes through
//! [`dispatch::RequestDispatcher`], which wraps the transport exchange with:
//!
//! - credential injection, read freshly at dispatch time;
//! - a two-stage timeout: a slow-call warning at one third of the budget and
//!   a hard abort at the full budget;
//! - a process-wide loading gauge driving a single "is anything loading"
//!   signal;
//! - a single-slot notification state read by the presentation layer;
//! - normalization of every failure into one uniform error shape.
//!
//! ```text
//!                   ┌────────────────────────────────────────────────┐
//!                   │                REQUEST FAÇADE                  │
//!                   │                                                │
//!   caller ────────▶│ dispatch ──▶ security (token) ──▶ transport ───┼──▶ backend /
//!                   │    │                                  ▲        │    third party
//!   Result /        │    │         ┌───────────────┐        │        │
//!   NormalizedError◀┼────┴────────▶│  resilience   │─cancel─┘        │
//!                   │              │ timeout guard │                 │
//!                   │              └───────┬───────┘                 │
//!                   │                      ▼                         │
//!                   │  status: loading gauge + notification slot     │
//!                   └────────────────────────────────────────────────┘
//! ```
//!
//! The gauge and the notification slot are injected state containers, not
//! ambient globals; tests instantiate independent instances per case.

pub mod config;
pub mod dispatch;
pub mod observability;
pub mod resilience;
pub mod security;
pub mod status;

pub use config::FacadeConfig;
pub use dispatch::{NormalizedError, OutgoingCall, RequestDispatcher};
pub use security::CredentialStore;
pub use status::{LoadingGauge, NotificationHub, NotificationKind};
