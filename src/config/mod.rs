//! Configuration module
//!
//! Type-safe configuration for the Stripe integration. Secrets are wrapped in
//! `secrecy::SecretString` so they never appear in debug output or logs.
//! Load from environment variables with [`StripeConfig::from_env`] and call
//! [`StripeConfig::validate`] before first use.

mod error;
mod stripe;

pub use error::{ConfigError, ValidationError};
pub use stripe::{DuplicateCustomerPolicy, StripeConfig};
