//! Wire shape of a provider checkout session.
//!
//! Only the fields the facade resolves are captured; the rest of the
//! provider's schema is ignored by serde. Related objects use
//! [`Expandable`] because they arrive as bare IDs unless expansion was
//! requested.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerObject;
use crate::domain::expandable::{Expandable, HasId};
use crate::domain::subscription::SubscriptionObject;

/// Stripe Checkout Session object (cs_...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSessionObject {
    /// Unique session identifier (cs_...).
    pub id: String,

    /// Session lifecycle status (open, complete, expired).
    pub status: String,

    /// Payment status (paid, unpaid, no_payment_required).
    pub payment_status: String,

    /// Session mode (payment, subscription, setup).
    pub mode: String,

    /// Client secret for mounting the embedded checkout UI.
    pub client_secret: Option<String>,

    /// Customer, by ID or embedded.
    pub customer: Option<Expandable<CustomerObject>>,

    /// Email passed at session creation. Only populated when the session was
    /// created with an email identity.
    pub customer_email: Option<String>,

    /// Details the buyer entered during this checkout.
    pub customer_details: Option<CustomerDetails>,

    /// Invoice created by the session, by ID or embedded.
    pub invoice: Option<Expandable<InvoiceObject>>,

    /// Subscription created by the session, by ID or embedded.
    pub subscription: Option<Expandable<SubscriptionObject>>,

    /// Custom metadata attached at session creation.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl HasId for CheckoutSessionObject {
    fn id(&self) -> &str {
        &self.id
    }
}

/// What the buyer entered during checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Email the buyer entered in this transaction.
    pub email: Option<String>,

    /// Name the buyer entered.
    pub name: Option<String>,
}

/// Minimal invoice wire object; the facade only ever needs its ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceObject {
    /// Unique invoice identifier (in_...).
    pub id: String,
}

impl HasId for InvoiceObject {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_session_with_bare_id_references() {
        let json = r#"{
            "id": "cs_test_1",
            "status": "complete",
            "payment_status": "paid",
            "mode": "subscription",
            "client_secret": null,
            "customer": "cus_9",
            "customer_email": null,
            "customer_details": {"email": "buyer@example.com", "name": "B"},
            "invoice": "in_5",
            "subscription": "sub_3",
            "metadata": {"order_ref": "ord_1"}
        }"#;

        let session: CheckoutSessionObject = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "cs_test_1");
        assert_eq!(session.customer.as_ref().unwrap().id(), "cus_9");
        assert_eq!(session.invoice.as_ref().unwrap().id(), "in_5");
        assert_eq!(session.subscription.as_ref().unwrap().id(), "sub_3");
        assert_eq!(session.metadata["order_ref"], "ord_1");
    }

    #[test]
    fn deserializes_session_with_missing_optionals() {
        let json = r#"{
            "id": "cs_test_2",
            "status": "open",
            "payment_status": "unpaid",
            "mode": "payment"
        }"#;

        let session: CheckoutSessionObject = serde_json::from_str(json).unwrap();
        assert!(session.customer.is_none());
        assert!(session.customer_details.is_none());
        assert!(session.metadata.is_empty());
    }
}
