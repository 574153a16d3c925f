//! Stripe REST client.
//!
//! Implements the `PaymentProvider` port against Stripe's form-encoded API.
//! Requests authenticate with HTTP basic auth, API key as the username. The
//! base URL is configurable so tests can point at a local stub (stripe-mock
//! or similar).

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::config::StripeConfig;
use crate::domain::checkout::{CheckoutSessionObject, CheckoutSessionRequest};
use crate::domain::customer::CustomerObject;
use crate::domain::subscription::SubscriptionObject;
use crate::ports::{CreatedSession, PaymentProvider, PortalSession, ProviderError};

/// Stripe payment provider adapter.
pub struct StripeClient {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    async fn check_response(
        &self,
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<reqwest::Response, ProviderError> {
        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(operation, error = %error_text, "Stripe API call failed");
            return Err(ProviderError::Api(error_text));
        }
        Ok(response)
    }
}

/// Stripe list envelope for search and list endpoints.
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct PortalSessionObject {
    id: String,
    url: String,
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CreatedSession, ProviderError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url());

        // The facade validates before calling; a failure here means the
        // request was constructed outside the facade.
        let params = request
            .to_form_params()
            .map_err(|e| ProviderError::Api(format!("invalid request: {e}")))?;

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key().expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let response = self.check_response(response, "create_checkout_session").await?;

        let session: CheckoutSessionObject = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let client_secret = session
            .client_secret
            .clone()
            .ok_or_else(|| ProviderError::Decode("session missing client_secret".to_string()))?;

        Ok(CreatedSession {
            client_secret,
            session,
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionObject, ProviderError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            self.config.api_base_url(),
            session_id
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key().expose_secret(), Option::<&str>::None)
            .query(&[("expand[]", "line_items")])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let response = self
            .check_response(response, "retrieve_checkout_session")
            .await?;

        response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn retrieve_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Option<SubscriptionObject>, ProviderError> {
        let url = format!(
            "{}/v1/subscriptions/{}",
            self.config.api_base_url(),
            subscription_id
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key().expose_secret(), Option::<&str>::None)
            .query(&[("expand[]", "default_payment_method")])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = self.check_response(response, "retrieve_subscription").await?;

        let subscription: SubscriptionObject = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(Some(subscription))
    }

    async fn create_billing_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, ProviderError> {
        let url = format!("{}/v1/billing_portal/sessions", self.config.api_base_url());

        let params = [("customer", customer_id), ("return_url", return_url)];

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key().expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let response = self
            .check_response(response, "create_billing_portal_session")
            .await?;

        let portal: PortalSessionObject = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(PortalSession {
            id: portal.id,
            url: portal.url,
        })
    }

    async fn search_customers(&self, email: &str) -> Result<Vec<CustomerObject>, ProviderError> {
        let url = format!("{}/v1/customers/search", self.config.api_base_url());

        let query = format!("email:\"{}\"", email.replace('"', "\\\""));

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key().expose_secret(), Option::<&str>::None)
            .query(&[("query", query.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let response = self.check_response(response, "search_customers").await?;

        let list: ListEnvelope<CustomerObject> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(list.data)
    }
}
