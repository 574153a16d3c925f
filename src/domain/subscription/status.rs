//! Subscription status lattice.

use crate::domain::errors::StatusParseError;

/// Status of a provider subscription.
///
/// Closed set; wire strings outside it fail parsing. Note the provider
/// spells the cancelled state `canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    /// Created but the first payment has not completed.
    Incomplete,

    /// First payment never completed within the provider's window.
    IncompleteExpired,

    /// In a trial period.
    Trialing,

    /// Paid and current.
    Active,

    /// A renewal payment failed; the provider is retrying.
    PastDue,

    /// Cancelled.
    Cancelled,

    /// Retries exhausted without payment.
    Unpaid,

    /// Paused by the provider's pause-collection feature.
    Paused,
}

impl SubscriptionStatus {
    /// Parse a wire status string, rejecting unknown values.
    pub fn parse(value: &str) -> Result<Self, StatusParseError> {
        match value {
            "incomplete" => Ok(SubscriptionStatus::Incomplete),
            "incomplete_expired" => Ok(SubscriptionStatus::IncompleteExpired),
            "trialing" => Ok(SubscriptionStatus::Trialing),
            "active" => Ok(SubscriptionStatus::Active),
            "past_due" => Ok(SubscriptionStatus::PastDue),
            "canceled" => Ok(SubscriptionStatus::Cancelled),
            "unpaid" => Ok(SubscriptionStatus::Unpaid),
            "paused" => Ok(SubscriptionStatus::Paused),
            other => Err(StatusParseError {
                field: "subscription status",
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Incomplete => "incomplete",
            SubscriptionStatus::IncompleteExpired => "incomplete_expired",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Cancelled => "canceled",
            SubscriptionStatus::Unpaid => "unpaid",
            SubscriptionStatus::Paused => "paused",
        }
    }

    /// All statuses, for exhaustive predicate tests.
    pub const ALL: [SubscriptionStatus; 8] = [
        SubscriptionStatus::Incomplete,
        SubscriptionStatus::IncompleteExpired,
        SubscriptionStatus::Trialing,
        SubscriptionStatus::Active,
        SubscriptionStatus::PastDue,
        SubscriptionStatus::Cancelled,
        SubscriptionStatus::Unpaid,
        SubscriptionStatus::Paused,
    ];
}
