//! Resolved subscription snapshot.

use std::collections::HashMap;

use crate::domain::errors::SnapshotError;
use crate::domain::expandable::HasId;

use super::object::SubscriptionObject;
use super::status::SubscriptionStatus;

/// Immutable, fully-resolved view of a subscription.
///
/// As with checkout sessions, resolution is a pure transformation: the status
/// is parsed strictly and related objects are normalized to their IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionSnapshot {
    /// Provider subscription ID (sub_...).
    pub subscription_id: String,

    /// Lifecycle status.
    pub status: SubscriptionStatus,

    /// Owning customer's ID.
    pub customer_id: String,

    /// Whether the subscription ends at the current period boundary.
    pub cancel_at_period_end: bool,

    /// Billing currency (lowercase ISO code).
    pub currency: String,

    /// Current billing period start (Unix timestamp).
    pub current_period_start: i64,

    /// Current billing period end (Unix timestamp).
    pub current_period_end: i64,

    /// Default payment method ID, if one is set.
    pub default_payment_method_id: Option<String>,

    /// Metadata attached to the subscription.
    pub metadata: HashMap<String, String>,
}

impl SubscriptionSnapshot {
    /// Resolve a wire subscription object into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Status` for wire status strings outside the
    /// closed set.
    pub fn from_object(subscription: &SubscriptionObject) -> Result<Self, SnapshotError> {
        let status = SubscriptionStatus::parse(&subscription.status)?;

        Ok(Self {
            subscription_id: subscription.id.clone(),
            status,
            customer_id: subscription.customer.id().to_string(),
            cancel_at_period_end: subscription.cancel_at_period_end,
            currency: subscription.currency.clone(),
            current_period_start: subscription.current_period_start,
            current_period_end: subscription.current_period_end,
            default_payment_method_id: subscription
                .default_payment_method
                .as_ref()
                .map(|pm| pm.id().to_string()),
            metadata: subscription.metadata.clone(),
        })
    }

    /// Should the customer currently receive whatever the subscription
    /// entitles them to?
    ///
    /// True only for trialing and active subscriptions. A subscription that is
    /// past due is still retrying payment but is no longer in good standing.
    pub fn is_in_good_standing(&self) -> bool {
        matches!(
            self.status,
            SubscriptionStatus::Trialing | SubscriptionStatus::Active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::SubscriptionStatus;

    fn subscription_with_status(status: &str) -> SubscriptionObject {
        serde_json::from_value(serde_json::json!({
            "id": "sub_1",
            "status": status,
            "customer": "cus_1",
            "cancel_at_period_end": false,
            "currency": "gbp",
            "current_period_start": 1704067200,
            "current_period_end": 1706745600,
            "default_payment_method": "pm_1",
            "metadata": {"plan": "annual"}
        }))
        .unwrap()
    }

    #[test]
    fn good_standing_holds_exactly_for_trialing_and_active() {
        for status in SubscriptionStatus::ALL {
            let snapshot =
                SubscriptionSnapshot::from_object(&subscription_with_status(status.as_str()))
                    .unwrap();
            let expected = matches!(
                status,
                SubscriptionStatus::Trialing | SubscriptionStatus::Active
            );
            assert_eq!(
                snapshot.is_in_good_standing(),
                expected,
                "status {}",
                status.as_str()
            );
        }
    }

    #[test]
    fn resolves_related_ids_and_fields() {
        let snapshot =
            SubscriptionSnapshot::from_object(&subscription_with_status("active")).unwrap();
        assert_eq!(snapshot.subscription_id, "sub_1");
        assert_eq!(snapshot.customer_id, "cus_1");
        assert_eq!(snapshot.default_payment_method_id.as_deref(), Some("pm_1"));
        assert_eq!(snapshot.currency, "gbp");
        assert_eq!(snapshot.metadata["plan"], "annual");
    }

    #[test]
    fn unknown_status_fails_resolution() {
        let subscription = subscription_with_status("lapsed");
        assert!(matches!(
            SubscriptionSnapshot::from_object(&subscription),
            Err(SnapshotError::Status(_))
        ));
    }
}
