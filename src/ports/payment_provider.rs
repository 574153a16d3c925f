//! Payment provider port.
//!
//! Contract for the hosted-checkout provider integration. The production
//! adapter speaks Stripe's REST API; tests substitute a mock. All operations
//! return wire objects; snapshot resolution happens in the domain layer so
//! the port stays a thin transport seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::checkout::{CheckoutSessionObject, CheckoutSessionRequest};
use crate::domain::customer::CustomerObject;
use crate::domain::subscription::SubscriptionObject;

/// Port for the hosted-checkout payment provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create an embedded checkout session.
    ///
    /// Returns the session and the client secret the frontend mounts the
    /// embedded checkout UI with.
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CreatedSession, ProviderError>;

    /// Retrieve a checkout session by ID.
    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionObject, ProviderError>;

    /// Retrieve a subscription by ID, with the default payment method
    /// expanded. Returns `None` when the subscription does not exist.
    async fn retrieve_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Option<SubscriptionObject>, ProviderError>;

    /// Create a billing portal session for self-service subscription
    /// management.
    async fn create_billing_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, ProviderError>;

    /// Find existing customers with the given email address.
    async fn search_customers(&self, email: &str) -> Result<Vec<CustomerObject>, ProviderError>;
}

/// A freshly created checkout session with its client secret.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedSession {
    /// Client secret for mounting the embedded checkout UI.
    pub client_secret: String,

    /// The session as the provider returned it.
    pub session: CheckoutSessionObject,
}

/// Billing portal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalSession {
    /// Provider's portal session ID (bps_...).
    pub id: String,

    /// URL for the customer to access the portal.
    pub url: String,
}

/// Errors from provider operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Transport-level failure reaching the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider refused the request.
    #[error("provider API error: {0}")]
    Api(String),

    /// The provider's response could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn PaymentProvider) {}
    }

    #[test]
    fn provider_errors_display_their_detail() {
        let err = ProviderError::Api("No such customer: cus_missing".to_string());
        assert_eq!(
            err.to_string(),
            "provider API error: No such customer: cus_missing"
        );
    }
}
