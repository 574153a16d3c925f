//! Wire shape of a provider subscription.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerObject;
use crate::domain::expandable::{Expandable, HasId};

/// Stripe Subscription object (sub_...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionObject {
    /// Unique subscription identifier (sub_...).
    pub id: String,

    /// Subscription status string.
    pub status: String,

    /// Owning customer, by ID or embedded.
    pub customer: Expandable<CustomerObject>,

    /// Whether the subscription ends (rather than renews) at period end.
    #[serde(default)]
    pub cancel_at_period_end: bool,

    /// Billing currency (lowercase ISO code).
    pub currency: String,

    /// Current billing period start (Unix timestamp).
    pub current_period_start: i64,

    /// Current billing period end (Unix timestamp).
    pub current_period_end: i64,

    /// Default payment method, by ID or embedded.
    pub default_payment_method: Option<Expandable<PaymentMethodObject>>,

    /// Custom metadata attached to the subscription.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl HasId for SubscriptionObject {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Minimal payment method wire object; the facade only ever needs its ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethodObject {
    /// Unique payment method identifier (pm_...).
    pub id: String,
}

impl HasId for PaymentMethodObject {
    fn id(&self) -> &str {
        &self.id
    }
}
