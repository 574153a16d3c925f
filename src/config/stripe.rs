//! Stripe configuration

use secrecy::{ExposeSecret, SecretString};

use super::error::{ConfigError, ValidationError};

/// Policy for customer-search results that match more than one customer.
///
/// The provider allows several customers to share an email address. Which
/// behaviour is correct is a product decision, so it is configuration rather
/// than a hardcoded choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateCustomerPolicy {
    /// Log a warning and use the first match.
    #[default]
    WarnAndUseFirst,

    /// Fail the lookup with a typed error.
    Fail,
}

/// Stripe API configuration.
///
/// Each webhook endpoint has its own signing secret: one for the checkout
/// session endpoint and one for the subscription endpoint.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Signing secret for the checkout session webhook endpoint (whsec_...).
    session_webhook_secret: SecretString,

    /// Signing secret for the subscription webhook endpoint (whsec_...).
    subscription_webhook_secret: SecretString,

    /// Base URL for the Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// How to treat multiple customers matching one email.
    duplicate_customer_policy: DuplicateCustomerPolicy,
}

impl StripeConfig {
    /// Create a new configuration with default base URL and policies.
    pub fn new(
        api_key: impl Into<String>,
        session_webhook_secret: impl Into<String>,
        subscription_webhook_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            session_webhook_secret: SecretString::new(session_webhook_secret.into()),
            subscription_webhook_secret: SecretString::new(subscription_webhook_secret.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            duplicate_customer_policy: DuplicateCustomerPolicy::default(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `STRIPE_API_KEY`
    /// - `STRIPE_SESSION_WEBHOOK_SECRET`
    /// - `STRIPE_SUBSCRIPTION_WEBHOOK_SECRET`
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var("STRIPE_API_KEY").map_err(|_| ConfigError::MissingEnv("STRIPE_API_KEY"))?;
        let session_secret = std::env::var("STRIPE_SESSION_WEBHOOK_SECRET")
            .map_err(|_| ConfigError::MissingEnv("STRIPE_SESSION_WEBHOOK_SECRET"))?;
        let subscription_secret = std::env::var("STRIPE_SUBSCRIPTION_WEBHOOK_SECRET")
            .map_err(|_| ConfigError::MissingEnv("STRIPE_SUBSCRIPTION_WEBHOOK_SECRET"))?;

        Ok(Self::new(api_key, session_secret, subscription_secret))
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the duplicate-customer policy.
    pub fn with_duplicate_customer_policy(mut self, policy: DuplicateCustomerPolicy) -> Self {
        self.duplicate_customer_policy = policy;
        self
    }

    /// Check if using Stripe test mode.
    pub fn is_test_mode(&self) -> bool {
        self.api_key.expose_secret().starts_with("sk_test_")
    }

    /// Check if using Stripe live mode.
    pub fn is_live_mode(&self) -> bool {
        self.api_key.expose_secret().starts_with("sk_live_")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        if self.session_webhook_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired(
                "STRIPE_SESSION_WEBHOOK_SECRET",
            ));
        }
        if self.subscription_webhook_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired(
                "STRIPE_SUBSCRIPTION_WEBHOOK_SECRET",
            ));
        }

        // Verify key prefixes for safety
        if !self.api_key.expose_secret().starts_with("sk_") {
            return Err(ValidationError::InvalidApiKey);
        }
        if !self.session_webhook_secret.expose_secret().starts_with("whsec_") {
            return Err(ValidationError::InvalidWebhookSecret(
                "STRIPE_SESSION_WEBHOOK_SECRET",
            ));
        }
        if !self
            .subscription_webhook_secret
            .expose_secret()
            .starts_with("whsec_")
        {
            return Err(ValidationError::InvalidWebhookSecret(
                "STRIPE_SUBSCRIPTION_WEBHOOK_SECRET",
            ));
        }

        Ok(())
    }

    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub(crate) fn session_webhook_secret(&self) -> &SecretString {
        &self.session_webhook_secret
    }

    pub(crate) fn subscription_webhook_secret(&self) -> &SecretString {
        &self.subscription_webhook_secret
    }

    pub(crate) fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub(crate) fn duplicate_customer_policy(&self) -> DuplicateCustomerPolicy {
        self.duplicate_customer_policy
    }
}
