//! Per-call resilience.
//!
//! # Data Flow
//! ```text
//! Dispatch of one call:
//!     → guard.rs arms two timers against the call's budget T
//!         slow warning at T/3 → notification slot (kind=warning)
//!         hard abort at T   → cancel transport + notification (kind=error)
//!     → settle handler disarms both timers exactly once
//! ```
//!
//! # Design Decisions
//! - Every outbound call has a deadline; there is no unbounded wait
//! - Disarm is an explicit, idempotent contract, not "clearing an already
//!   fired timer happens to be harmless" folklore
//! - A timer firing after disarm is a defect: it would produce a stale
//!   warning or a stale abort for a call that already settled

pub mod guard;

pub use guard::{LifecycleContext, TimeoutGuard};
