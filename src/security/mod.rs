//! Credential handling.
//!
//! # Responsibilities
//! - Hold the current bearer token, if any
//! - Serve lock-free synchronous reads at dispatch time
//!
//! # Design Decisions
//! - Token acquisition (login flow) is out of scope; the login code stores
//!   the token here and the dispatcher only injects it
//! - Dispatchers read the slot fresh on every call, never caching a token
//!   across calls

pub mod credentials;

pub use credentials::CredentialStore;
