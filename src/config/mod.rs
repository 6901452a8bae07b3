//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors at once)
//!     → FacadeConfig (validated, immutable)
//!     → shared by value with the dispatcher at construction
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a minimal (or absent) config works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ApiConfig, AuthConfig, FacadeConfig, ObservabilityConfig, TimeoutConfig};
