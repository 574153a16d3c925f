//! Domain error types.
//!
//! These cover failures detected before any network call (validation) and
//! failures resolving a provider object into a snapshot. Webhook-specific
//! errors live in `domain::webhook`.

use thiserror::Error;

/// Malformed input detected at construction or serialization time.
///
/// Always fails fast; a request that produces a `ValidationError` never
/// reaches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string value was empty.
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),

    /// A line item quantity of zero was supplied.
    #[error("line item quantity must be at least 1")]
    ZeroQuantity,

    /// The return URL is missing the session-ID placeholder the provider
    /// substitutes on redirect.
    #[error("return URL must contain the {{CHECKOUT_SESSION_ID}} placeholder")]
    ReturnUrlMissingPlaceholder,

    /// A session request was submitted with no line items.
    #[error("at least one line item must be added to the checkout session")]
    EmptyLineItems,
}

/// A wire status string outside the known closed set.
///
/// Unknown statuses fail the whole resolution rather than being mapped to a
/// guessed default: a wrong guess here could trigger an incorrect fulfilment
/// decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized {field} '{value}'")]
pub struct StatusParseError {
    pub field: &'static str,
    pub value: String,
}

/// Failure resolving a provider object into a domain snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Setup-mode sessions carry neither payment nor customer details in the
    /// shape the fulfilment predicate needs.
    #[error("setup-mode checkout sessions are not supported")]
    UnsupportedMode,

    #[error(transparent)]
    Status(#[from] StatusParseError),
}
