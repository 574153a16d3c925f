//! Checkout session status lattice.
//!
//! Two closed enums: the session lifecycle status and the payment status.
//! Wire strings outside the known sets fail parsing; there is no fallback
//! variant, because the fulfilment predicate depends on these values.

use crate::domain::errors::StatusParseError;

/// Lifecycle status of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The session finished; payment may or may not have been required.
    Complete,

    /// The session timed out without completing.
    Expired,

    /// The session is still in progress.
    Open,
}

impl SessionStatus {
    /// Parse a wire status string, rejecting unknown values.
    pub fn parse(value: &str) -> Result<Self, StatusParseError> {
        match value {
            "complete" => Ok(SessionStatus::Complete),
            "expired" => Ok(SessionStatus::Expired),
            "open" => Ok(SessionStatus::Open),
            other => Err(StatusParseError {
                field: "checkout session status",
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Complete => "complete",
            SessionStatus::Expired => "expired",
            SessionStatus::Open => "open",
        }
    }
}

/// Payment status of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPaymentStatus {
    /// Nothing was owed (free trial, 100% discount, setup).
    NoPaymentRequired,

    /// Payment has been collected.
    Paid,

    /// Payment is still outstanding (delayed methods, or not attempted).
    Unpaid,
}

impl SessionPaymentStatus {
    /// Parse a wire payment-status string, rejecting unknown values.
    pub fn parse(value: &str) -> Result<Self, StatusParseError> {
        match value {
            "no_payment_required" => Ok(SessionPaymentStatus::NoPaymentRequired),
            "paid" => Ok(SessionPaymentStatus::Paid),
            "unpaid" => Ok(SessionPaymentStatus::Unpaid),
            other => Err(StatusParseError {
                field: "checkout session payment status",
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPaymentStatus::NoPaymentRequired => "no_payment_required",
            SessionPaymentStatus::Paid => "paid",
            SessionPaymentStatus::Unpaid => "unpaid",
        }
    }
}
