//! Customer lookup by email.
//!
//! The provider allows several customers to share an email address, so a
//! lookup can match zero, one, or many customers. What to do with many is a
//! configured policy, not a hardcoded choice.

use std::sync::Arc;

use crate::config::{DuplicateCustomerPolicy, StripeConfig};
use crate::domain::customer::{CustomerIdentity, CustomerObject};
use crate::ports::PaymentProvider;

use super::checkout::CheckoutError;

/// Email-to-customer resolution over the provider's customer search.
pub struct CustomerDirectory {
    provider: Arc<dyn PaymentProvider>,
    policy: DuplicateCustomerPolicy,
}

impl CustomerDirectory {
    /// Create a directory with the given duplicate-match policy.
    pub fn new(provider: Arc<dyn PaymentProvider>, policy: DuplicateCustomerPolicy) -> Self {
        Self { provider, policy }
    }

    /// Create a directory using the policy configured on [`StripeConfig`].
    pub fn from_config(provider: Arc<dyn PaymentProvider>, config: &StripeConfig) -> Self {
        Self::new(provider, config.duplicate_customer_policy())
    }

    /// Find the customer with the given email, if any.
    ///
    /// # Errors
    ///
    /// `DuplicateCustomers` when several customers match and the policy is
    /// [`DuplicateCustomerPolicy::Fail`].
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CustomerObject>, CheckoutError> {
        let mut matches = self.provider.search_customers(email).await?;

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            count => match self.policy {
                DuplicateCustomerPolicy::WarnAndUseFirst => {
                    tracing::warn!(email, count, "multiple customers share one email; using first");
                    Ok(Some(matches.swap_remove(0)))
                }
                DuplicateCustomerPolicy::Fail => {
                    Err(CheckoutError::DuplicateCustomers(email.to_string()))
                }
            },
        }
    }

    /// Resolve an email into the identity to create a checkout session with:
    /// the existing customer's ID when one matches, otherwise the email
    /// itself so the provider creates a fresh customer.
    pub async fn identify(&self, email: &str) -> Result<CustomerIdentity, CheckoutError> {
        match self.find_by_email(email).await? {
            Some(customer) => Ok(CustomerIdentity::customer_id(customer.id)?),
            None => Ok(CustomerIdentity::email(email)?),
        }
    }
}
