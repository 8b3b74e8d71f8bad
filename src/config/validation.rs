//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the log filter parses and the rejection body is usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem in a config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("log.filter `{filter}` is not a valid filter: {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("entrypoint.rejection_body must not be empty")]
    EmptyRejectionBody,
}

/// Check a parsed config for semantic problems.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = EnvFilter::try_new(&config.log.filter) {
        errors.push(ValidationError::InvalidLogFilter {
            filter: config.log.filter.clone(),
            reason: e.to_string(),
        });
    }

    if config.entrypoint.rejection_body.trim().is_empty() {
        errors.push(ValidationError::EmptyRejectionBody);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
