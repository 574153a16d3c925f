//! Mock payment provider for testing.
//!
//! Configurable test double for the `PaymentProvider` port. Supports:
//! - Pre-seeded sessions, subscriptions, and customers
//! - Error injection per method
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::checkout::{CheckoutSessionObject, CheckoutSessionRequest};
use crate::domain::customer::CustomerObject;
use crate::domain::subscription::SubscriptionObject;
use crate::ports::{CreatedSession, PaymentProvider, PortalSession, ProviderError};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
/// mock.seed_session(session_object);
/// mock.set_method_error("retrieve_subscription", ProviderError::Network("down".into()));
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Session returned by the next `create_checkout_session` call.
    next_created: Option<CreatedSession>,

    /// Sessions retrievable by ID.
    sessions: HashMap<String, CheckoutSessionObject>,

    /// Subscriptions retrievable by ID.
    subscriptions: HashMap<String, SubscriptionObject>,

    /// Portal session returned by `create_billing_portal_session`.
    next_portal: Option<PortalSession>,

    /// Customers returned by `search_customers`, keyed by email.
    customers_by_email: HashMap<String, Vec<CustomerObject>>,

    /// Errors injected per method name.
    method_errors: HashMap<String, ProviderError>,

    /// Recorded calls for assertions.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentProvider {
    /// Create a new mock provider with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the session returned by the next `create_checkout_session` call.
    pub fn set_created_session(&self, created: CreatedSession) {
        self.inner.lock().unwrap().next_created = Some(created);
    }

    /// Make a session retrievable by its ID.
    pub fn seed_session(&self, session: CheckoutSessionObject) {
        let id = session.id.clone();
        self.inner.lock().unwrap().sessions.insert(id, session);
    }

    /// Make a subscription retrievable by its ID.
    pub fn seed_subscription(&self, subscription: SubscriptionObject) {
        let id = subscription.id.clone();
        self.inner
            .lock()
            .unwrap()
            .subscriptions
            .insert(id, subscription);
    }

    /// Set the portal session to return.
    pub fn set_portal_session(&self, portal: PortalSession) {
        self.inner.lock().unwrap().next_portal = Some(portal);
    }

    /// Register a customer as a search result for their email.
    pub fn add_customer(&self, customer: CustomerObject) {
        if let Some(email) = customer.email.clone() {
            self.inner
                .lock()
                .unwrap()
                .customers_by_email
                .entry(email)
                .or_default()
                .push(customer);
        }
    }

    /// Inject an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: ProviderError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// All recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Whether a method was called at least once.
    pub fn was_called(&self, method: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .any(|c| c.method == method)
    }

    fn record(&self, method: &str, args: Vec<String>) -> Result<(), ProviderError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CreatedSession, ProviderError> {
        self.record(
            "create_checkout_session",
            vec![request.mode().as_str().to_string()],
        )?;

        self.inner
            .lock()
            .unwrap()
            .next_created
            .clone()
            .ok_or_else(|| ProviderError::Api("mock: no created session configured".to_string()))
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionObject, ProviderError> {
        self.record("retrieve_checkout_session", vec![session_id.to_string()])?;

        self.inner
            .lock()
            .unwrap()
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| {
                ProviderError::Api(format!("No such checkout session: {session_id}"))
            })
    }

    async fn retrieve_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Option<SubscriptionObject>, ProviderError> {
        self.record("retrieve_subscription", vec![subscription_id.to_string()])?;

        Ok(self
            .inner
            .lock()
            .unwrap()
            .subscriptions
            .get(subscription_id)
            .cloned())
    }

    async fn create_billing_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, ProviderError> {
        self.record(
            "create_billing_portal_session",
            vec![customer_id.to_string(), return_url.to_string()],
        )?;

        self.inner
            .lock()
            .unwrap()
            .next_portal
            .clone()
            .ok_or_else(|| ProviderError::Api("mock: no portal session configured".to_string()))
    }

    async fn search_customers(&self, email: &str) -> Result<Vec<CustomerObject>, ProviderError> {
        self.record("search_customers", vec![email.to_string()])?;

        Ok(self
            .inner
            .lock()
            .unwrap()
            .customers_by_email
            .get(email)
            .cloned()
            .unwrap_or_default())
    }
}
