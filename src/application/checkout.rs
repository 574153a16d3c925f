//! Checkout facade.
//!
//! Single entry point tying the domain together: session creation with
//! fail-fast validation, snapshot retrieval, billing portal access, and the
//! webhook pipeline (verify, classify, resolve, respond). The provider is
//! injected behind the port so tests can substitute a mock.

use std::sync::Arc;

use thiserror::Error;

use crate::config::StripeConfig;
use crate::domain::checkout::{
    CheckoutSessionObject, CheckoutSessionRequest, CheckoutSessionSnapshot,
};
use crate::domain::customer::CustomerIdentity;
use crate::domain::errors::{SnapshotError, ValidationError};
use crate::domain::subscription::{SubscriptionObject, SubscriptionSnapshot};
use crate::domain::webhook::{
    CheckoutEventKind, EndpointResponse, RejectReason, SubscriptionEventKind, WebhookOutcome,
    WebhookVerifier,
};
use crate::ports::{CreatedSession, PaymentProvider, PortalSession, ProviderError};

/// Errors surfaced by the facade.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A request failed local validation before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A provider object could not be resolved into a snapshot.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Billing portal sessions need a provider customer ID, not an email.
    #[error("billing portal requires a provider customer ID")]
    RequiresCustomerId,

    /// A verified event carried an object of an unexpected shape.
    #[error("unexpected event object: {0}")]
    UnexpectedEventObject(String),

    /// More than one provider customer matches the email.
    #[error("multiple customers share email {0}")]
    DuplicateCustomers(String),
}

/// Result of running a delivery through the checkout-session endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionWebhookReply {
    /// Verification and classification outcome.
    pub outcome: WebhookOutcome<CheckoutEventKind>,

    /// Resolved snapshot, present only for verified deliveries.
    pub snapshot: Option<CheckoutSessionSnapshot>,

    /// The HTTP response the endpoint should return.
    pub response: EndpointResponse,
}

/// Result of running a delivery through the subscription endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionWebhookReply {
    /// Verification and classification outcome.
    pub outcome: WebhookOutcome<SubscriptionEventKind>,

    /// Resolved snapshot, present only for verified deliveries.
    pub snapshot: Option<SubscriptionSnapshot>,

    /// The HTTP response the endpoint should return.
    pub response: EndpointResponse,
}

/// Facade over the hosted-checkout provider.
pub struct Checkout {
    provider: Arc<dyn PaymentProvider>,
    session_verifier: WebhookVerifier,
    subscription_verifier: WebhookVerifier,
}

impl Checkout {
    /// Create a facade with an injected provider.
    pub fn new(config: &StripeConfig, provider: Arc<dyn PaymentProvider>) -> Self {
        Self {
            provider,
            session_verifier: WebhookVerifier::new(config.session_webhook_secret().clone()),
            subscription_verifier: WebhookVerifier::new(
                config.subscription_webhook_secret().clone(),
            ),
        }
    }

    /// Create a facade backed by the production Stripe client.
    pub fn with_stripe(config: &StripeConfig) -> Self {
        let provider = Arc::new(crate::adapters::stripe::StripeClient::new(config.clone()));
        Self::new(config, provider)
    }

    /// Create an embedded checkout session.
    ///
    /// The request is serialized locally first, so a request with no line
    /// items fails before any network traffic.
    pub async fn create_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CreatedSession, CheckoutError> {
        request.to_form_params()?;

        let created = self.provider.create_checkout_session(request).await?;
        tracing::info!(
            session_id = %created.session.id,
            mode = request.mode().as_str(),
            "checkout session created"
        );
        Ok(created)
    }

    /// Retrieve a session and resolve it into a snapshot.
    pub async fn session_snapshot(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionSnapshot, CheckoutError> {
        let session = self.provider.retrieve_checkout_session(session_id).await?;
        Ok(CheckoutSessionSnapshot::from_object(&session)?)
    }

    /// Retrieve a subscription and resolve it into a snapshot. Returns `None`
    /// when the subscription does not exist.
    pub async fn subscription_snapshot(
        &self,
        subscription_id: &str,
    ) -> Result<Option<SubscriptionSnapshot>, CheckoutError> {
        match self.provider.retrieve_subscription(subscription_id).await? {
            Some(subscription) => Ok(Some(SubscriptionSnapshot::from_object(&subscription)?)),
            None => Ok(None),
        }
    }

    /// Create a billing portal session for self-service management.
    ///
    /// # Errors
    ///
    /// `RequiresCustomerId` when the identity is an email. The portal is tied
    /// to an existing provider customer; resolve the email through
    /// [`CustomerDirectory`](crate::application::CustomerDirectory) first.
    pub async fn billing_portal(
        &self,
        identity: &CustomerIdentity,
        return_url: &str,
    ) -> Result<PortalSession, CheckoutError> {
        let customer_id = match identity {
            CustomerIdentity::CustomerId(id) => id,
            CustomerIdentity::Email(_) => return Err(CheckoutError::RequiresCustomerId),
        };

        Ok(self
            .provider
            .create_billing_portal_session(customer_id, return_url)
            .await?)
    }

    /// Run a delivery through the checkout-session webhook endpoint.
    ///
    /// Verification or classification failures are not errors: they produce a
    /// rejected outcome whose response says why. An error return means the
    /// delivery was authentic but its object could not be resolved, which is
    /// an integration defect rather than a hostile delivery.
    pub async fn handle_session_webhook(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<SessionWebhookReply, CheckoutError> {
        let event = match self.session_verifier.verify(payload, signature_header) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "checkout webhook delivery refused");
                return Ok(rejected_session_reply(err.into_reject_reason()));
            }
        };

        let kind = match CheckoutEventKind::from_event_type(&event.event_type) {
            Some(kind) => kind,
            None => {
                tracing::warn!(
                    event_type = %event.event_type,
                    "unsupported event type at checkout endpoint"
                );
                return Ok(rejected_session_reply(RejectReason::UnsupportedEventType {
                    received: event.event_type.clone(),
                    supported: CheckoutEventKind::SUPPORTED,
                }));
            }
        };

        let session: CheckoutSessionObject = event
            .object()
            .map_err(|e| CheckoutError::UnexpectedEventObject(e.to_string()))?;
        let snapshot = CheckoutSessionSnapshot::from_object(&session)?;

        tracing::info!(
            event_id = %event.id,
            session_id = %snapshot.session_id,
            event_kind = kind.as_str(),
            "checkout webhook verified"
        );

        let outcome = WebhookOutcome::Verified { kind, event };
        let response = outcome.response();
        Ok(SessionWebhookReply {
            outcome,
            snapshot: Some(snapshot),
            response,
        })
    }

    /// Run a delivery through the subscription webhook endpoint.
    pub async fn handle_subscription_webhook(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<SubscriptionWebhookReply, CheckoutError> {
        let event = match self.subscription_verifier.verify(payload, signature_header) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "subscription webhook delivery refused");
                return Ok(rejected_subscription_reply(err.into_reject_reason()));
            }
        };

        let kind = match SubscriptionEventKind::from_event_type(&event.event_type) {
            Some(kind) => kind,
            None => {
                tracing::warn!(
                    event_type = %event.event_type,
                    "unsupported event type at subscription endpoint"
                );
                return Ok(rejected_subscription_reply(
                    RejectReason::UnsupportedEventType {
                        received: event.event_type.clone(),
                        supported: SubscriptionEventKind::SUPPORTED,
                    },
                ));
            }
        };

        let subscription: SubscriptionObject = event
            .object()
            .map_err(|e| CheckoutError::UnexpectedEventObject(e.to_string()))?;
        let snapshot = SubscriptionSnapshot::from_object(&subscription)?;

        tracing::info!(
            event_id = %event.id,
            subscription_id = %snapshot.subscription_id,
            event_kind = kind.as_str(),
            "subscription webhook verified"
        );

        let outcome = WebhookOutcome::Verified { kind, event };
        let response = outcome.response();
        Ok(SubscriptionWebhookReply {
            outcome,
            snapshot: Some(snapshot),
            response,
        })
    }
}

fn rejected_session_reply(reason: RejectReason) -> SessionWebhookReply {
    let outcome = WebhookOutcome::Rejected(reason);
    let response = outcome.response();
    SessionWebhookReply {
        outcome,
        snapshot: None,
        response,
    }
}

fn rejected_subscription_reply(reason: RejectReason) -> SubscriptionWebhookReply {
    let outcome = WebhookOutcome::Rejected(reason);
    let response = outcome.response();
    SubscriptionWebhookReply {
        outcome,
        snapshot: None,
        response,
    }
}
