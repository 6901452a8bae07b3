//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees. Returns all
//! violations, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::FacadeConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("api.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("api.base_url must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("timeouts.default_secs must be greater than zero")]
    ZeroTimeout,

    #[error("auth.header must not be empty")]
    EmptyAuthHeader,
}

/// Pure function: `FacadeConfig` in, all violations out.
pub fn validate_config(config: &FacadeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(e.to_string())),
    }

    if config.timeouts.default_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.auth.header.trim().is_empty() {
        errors.push(ValidationError::EmptyAuthHeader);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
