//! Customer identity and wire customer object.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::expandable::HasId;

/// How the customer is identified when creating a checkout session.
///
/// Exactly one of email or provider customer ID, never both. The only
/// construction paths are [`CustomerIdentity::email`] and
/// [`CustomerIdentity::customer_id`], both of which reject empty strings, so
/// an ambiguously-typed identity cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerIdentity {
    /// Identify by email address; the provider creates or matches a customer.
    Email(String),

    /// Identify by an existing provider customer ID (cus_...).
    CustomerId(String),
}

impl CustomerIdentity {
    /// Build an email identity.
    pub fn email(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValidationError::EmptyValue("email"));
        }
        Ok(CustomerIdentity::Email(email))
    }

    /// Build a provider-customer-ID identity.
    pub fn customer_id(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyValue("customer ID"));
        }
        Ok(CustomerIdentity::CustomerId(id))
    }

    /// The held value, whichever variant it is.
    pub fn value(&self) -> &str {
        match self {
            CustomerIdentity::Email(email) => email,
            CustomerIdentity::CustomerId(id) => id,
        }
    }
}

/// Stripe Customer object as returned by retrieve/search calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerObject {
    /// Unique customer identifier (cus_...).
    pub id: String,

    /// Customer email address.
    pub email: Option<String>,

    /// Customer name.
    pub name: Option<String>,

    /// Custom metadata attached to the customer.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl HasId for CustomerObject {
    fn id(&self) -> &str {
        &self.id
    }
}
