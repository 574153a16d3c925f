//! Per-endpoint supported event kinds.
//!
//! Each webhook endpoint handles a closed set of event types; anything else
//! is rejected even when correctly signed. The kinds double as classifiers:
//! `from_event_type` maps a verified event's type string onto the endpoint's
//! vocabulary.

/// Event kinds the checkout-session endpoint handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutEventKind {
    /// The buyer finished checkout.
    Completed,

    /// A delayed payment method settled after the session completed.
    AsyncPaymentSucceeded,
}

impl CheckoutEventKind {
    /// Event type strings this endpoint accepts.
    pub const SUPPORTED: &'static [&'static str] = &[
        "checkout.session.completed",
        "checkout.session.async_payment_succeeded",
    ];

    /// Classifies an event type string, returning `None` for unsupported
    /// types.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "checkout.session.completed" => Some(CheckoutEventKind::Completed),
            "checkout.session.async_payment_succeeded" => {
                Some(CheckoutEventKind::AsyncPaymentSucceeded)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutEventKind::Completed => "checkout.session.completed",
            CheckoutEventKind::AsyncPaymentSucceeded => {
                "checkout.session.async_payment_succeeded"
            }
        }
    }
}

/// Event kinds the subscription endpoint handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionEventKind {
    /// Any change to the subscription (status, period, payment method).
    Updated,

    /// The subscription was cancelled and removed.
    Deleted,
}

impl SubscriptionEventKind {
    /// Event type strings this endpoint accepts.
    pub const SUPPORTED: &'static [&'static str] = &[
        "customer.subscription.updated",
        "customer.subscription.deleted",
    ];

    /// Classifies an event type string, returning `None` for unsupported
    /// types.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "customer.subscription.updated" => Some(SubscriptionEventKind::Updated),
            "customer.subscription.deleted" => Some(SubscriptionEventKind::Deleted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionEventKind::Updated => "customer.subscription.updated",
            SubscriptionEventKind::Deleted => "customer.subscription.deleted",
        }
    }
}
