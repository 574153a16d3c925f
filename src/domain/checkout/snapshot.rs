//! Resolved checkout session snapshot.

use std::collections::HashMap;

use crate::domain::errors::SnapshotError;
use crate::domain::expandable::{Expandable, HasId};

use super::object::CheckoutSessionObject;
use super::status::{SessionPaymentStatus, SessionStatus};

/// Immutable, fully-resolved view of a checkout session.
///
/// Resolution happens once at construction: statuses are parsed strictly and
/// related objects are normalized to their IDs, whether they arrived as bare
/// strings or embedded objects. Nothing is fetched from the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionSnapshot {
    /// Provider session ID (cs_...).
    pub session_id: String,

    /// Lifecycle status.
    pub status: SessionStatus,

    /// Payment status.
    pub payment_status: SessionPaymentStatus,

    /// Email the buyer entered during checkout, falling back to the email
    /// the session was created with. The checkout-details value wins because
    /// it reflects what the buyer actually typed in this transaction.
    pub customer_email: Option<String>,

    /// Provider customer ID, if a customer was created or attached.
    pub customer_id: Option<String>,

    /// Invoice ID, if the session produced an invoice.
    pub invoice_id: Option<String>,

    /// Subscription ID, if the session created a subscription.
    pub subscription_id: Option<String>,

    /// Metadata attached at session creation.
    pub metadata: HashMap<String, String>,
}

impl CheckoutSessionSnapshot {
    /// Resolve a wire session object into a snapshot.
    ///
    /// # Errors
    ///
    /// - `UnsupportedMode` for setup-mode sessions
    /// - `Status` for wire status strings outside the closed sets
    pub fn from_object(session: &CheckoutSessionObject) -> Result<Self, SnapshotError> {
        if session.mode == "setup" {
            return Err(SnapshotError::UnsupportedMode);
        }

        let status = SessionStatus::parse(&session.status)?;
        let payment_status = SessionPaymentStatus::parse(&session.payment_status)?;

        let customer_email = session
            .customer_details
            .as_ref()
            .and_then(|details| details.email.clone())
            .or_else(|| session.customer_email.clone());

        Ok(Self {
            session_id: session.id.clone(),
            status,
            payment_status,
            customer_email,
            customer_id: session.customer.as_ref().map(resolved_id),
            invoice_id: session.invoice.as_ref().map(resolved_id),
            subscription_id: session.subscription.as_ref().map(resolved_id),
            metadata: session.metadata.clone(),
        })
    }

    /// Has the session completed with either successful payment or no payment
    /// required?
    ///
    /// The caller is responsible for de-duplicating fulfilment actions; this
    /// predicate is deterministic for a given provider state but may be
    /// evaluated from several paths (return page, webhook, manual retrieve).
    pub fn ready_for_fulfilment(&self) -> bool {
        self.status == SessionStatus::Complete
            && self.payment_status != SessionPaymentStatus::Unpaid
    }
}

fn resolved_id<T: HasId>(reference: &Expandable<T>) -> String {
    reference.id().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_json(id: &str, status: &str, payment_status: &str) -> CheckoutSessionObject {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "status": status,
            "payment_status": payment_status,
            "mode": "subscription",
            "customer": "cus_1",
            "customer_details": {"email": "typed@example.com", "name": null},
            "customer_email": "created@example.com",
            "invoice": "in_1",
            "subscription": "sub_1",
            "metadata": {"order_ref": "ord_1"}
        }))
        .unwrap()
    }

    #[test]
    fn complete_paid_session_is_ready_for_fulfilment() {
        let snapshot =
            CheckoutSessionSnapshot::from_object(&session_json("sess_1", "complete", "paid"))
                .unwrap();
        assert!(snapshot.ready_for_fulfilment());
    }

    #[test]
    fn open_unpaid_session_is_not_ready() {
        let snapshot =
            CheckoutSessionSnapshot::from_object(&session_json("sess_2", "open", "unpaid"))
                .unwrap();
        assert!(!snapshot.ready_for_fulfilment());
    }

    #[test]
    fn complete_no_payment_required_session_is_ready() {
        let snapshot = CheckoutSessionSnapshot::from_object(&session_json(
            "sess_3",
            "complete",
            "no_payment_required",
        ))
        .unwrap();
        assert!(snapshot.ready_for_fulfilment());
    }

    #[test]
    fn complete_unpaid_session_is_not_ready() {
        let snapshot =
            CheckoutSessionSnapshot::from_object(&session_json("sess_4", "complete", "unpaid"))
                .unwrap();
        assert!(!snapshot.ready_for_fulfilment());
    }

    #[test]
    fn expired_session_is_not_ready_regardless_of_payment_status() {
        for payment_status in ["paid", "unpaid", "no_payment_required"] {
            let snapshot = CheckoutSessionSnapshot::from_object(&session_json(
                "sess_5",
                "expired",
                payment_status,
            ))
            .unwrap();
            assert!(!snapshot.ready_for_fulfilment());
        }
    }

    #[test]
    fn setup_mode_session_rejected() {
        let session: CheckoutSessionObject = serde_json::from_value(serde_json::json!({
            "id": "cs_setup",
            "status": "complete",
            "payment_status": "no_payment_required",
            "mode": "setup"
        }))
        .unwrap();
        assert_eq!(
            CheckoutSessionSnapshot::from_object(&session),
            Err(SnapshotError::UnsupportedMode)
        );
    }

    #[test]
    fn unknown_status_fails_resolution() {
        let session = session_json("sess_6", "finished", "paid");
        assert!(matches!(
            CheckoutSessionSnapshot::from_object(&session),
            Err(SnapshotError::Status(_))
        ));
    }

    #[test]
    fn checkout_details_email_preferred_over_creation_email() {
        let snapshot =
            CheckoutSessionSnapshot::from_object(&session_json("sess_7", "complete", "paid"))
                .unwrap();
        assert_eq!(snapshot.customer_email.as_deref(), Some("typed@example.com"));
    }

    #[test]
    fn creation_email_used_when_no_checkout_details() {
        let session: CheckoutSessionObject = serde_json::from_value(serde_json::json!({
            "id": "cs_1",
            "status": "complete",
            "payment_status": "paid",
            "mode": "payment",
            "customer_email": "created@example.com"
        }))
        .unwrap();
        let snapshot = CheckoutSessionSnapshot::from_object(&session).unwrap();
        assert_eq!(snapshot.customer_email.as_deref(), Some("created@example.com"));
    }

    #[test]
    fn bare_id_and_embedded_object_resolve_identically() {
        let bare: CheckoutSessionObject = serde_json::from_value(serde_json::json!({
            "id": "cs_same",
            "status": "complete",
            "payment_status": "paid",
            "mode": "subscription",
            "customer": "cus_9",
            "invoice": "in_9"
        }))
        .unwrap();

        let embedded: CheckoutSessionObject = serde_json::from_value(serde_json::json!({
            "id": "cs_same",
            "status": "complete",
            "payment_status": "paid",
            "mode": "subscription",
            "customer": {"id": "cus_9", "email": "a@b.c", "name": null},
            "invoice": {"id": "in_9"}
        }))
        .unwrap();

        let from_bare = CheckoutSessionSnapshot::from_object(&bare).unwrap();
        let from_embedded = CheckoutSessionSnapshot::from_object(&embedded).unwrap();
        assert_eq!(from_bare, from_embedded);
    }

    #[test]
    fn related_ids_are_extracted() {
        let snapshot =
            CheckoutSessionSnapshot::from_object(&session_json("sess_8", "complete", "paid"))
                .unwrap();
        assert_eq!(snapshot.customer_id.as_deref(), Some("cus_1"));
        assert_eq!(snapshot.invoice_id.as_deref(), Some("in_1"));
        assert_eq!(snapshot.subscription_id.as_deref(), Some("sub_1"));
        assert_eq!(snapshot.metadata["order_ref"], "ord_1");
    }
}
