//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable missing: {0}")]
    MissingEnv(&'static str),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid Stripe API key format")]
    InvalidApiKey,

    #[error("Invalid Stripe webhook secret format: {0}")]
    InvalidWebhookSecret(&'static str),
}
