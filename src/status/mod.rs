//! Shared UI-facing state.
//!
//! # Data Flow
//! ```text
//! Every in-flight call:
//!     → loading.rs (increment on dispatch, decrement on settle)
//!     → notification.rs (warning/error from timers, hide + conditional
//!       error from settle handlers)
//!
//! Presentation layer:
//!     → LoadingGauge::subscribe / is_active (global spinner)
//!     → NotificationHub::subscribe / current (toast/banner)
//! ```
//!
//! # Design Decisions
//! - Both containers are explicit values passed into the dispatcher, never
//!   process globals, so tests can instantiate independent instances
//! - Backed by `tokio::sync::watch`: consumers want latest-value semantics,
//!   not a backlog of transitions
//! - Every mutating operation is safe to call from any settle handler at any
//!   time, including after the call is already finished

pub mod loading;
pub mod notification;

pub use loading::LoadingGauge;
pub use notification::{NotificationHub, NotificationKind, NotificationState};
