//! Checkout-session-creation request.
//!
//! Construction validates the return URL up front; line items are appended
//! unchecked and validated at serialization time. [`to_form_params`] produces
//! the exact flat parameter list the provider's form-encoded API expects.
//!
//! Boolean options are deliberately omitted from the wire request when
//! disabled instead of being sent as `false`; the provider treats a missing
//! key and an explicit `false` differently for some accounts, so the
//! asymmetric encoding must be preserved.
//!
//! [`to_form_params`]: CheckoutSessionRequest::to_form_params

use std::collections::BTreeMap;

use crate::domain::customer::CustomerIdentity;
use crate::domain::errors::ValidationError;

use super::line_item::LineItem;
use super::locale::CheckoutLocale;
use super::mode::CheckoutMode;

/// Token the provider substitutes with the real session ID on redirect.
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Optional behaviours of a checkout session.
///
/// All three are explicit: the caller decides, nothing defaults on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutFlags {
    /// Let the provider compute tax automatically.
    pub automatic_tax: bool,

    /// Allow the customer to enter promotion codes.
    pub allow_promotion_codes: bool,

    /// Require a billing address from the customer.
    pub billing_address_required: bool,
}

/// A validated checkout-session-creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionRequest {
    identity: CustomerIdentity,
    mode: CheckoutMode,
    return_url: String,
    locale: CheckoutLocale,
    flags: CheckoutFlags,
    line_items: Vec<LineItem>,
    // BTreeMap keeps the wire encoding deterministic.
    metadata: BTreeMap<String, String>,
}

impl CheckoutSessionRequest {
    /// Create a request.
    ///
    /// # Errors
    ///
    /// `ReturnUrlMissingPlaceholder` if `return_url` does not contain
    /// `{CHECKOUT_SESSION_ID}`. This is checked here, before any I/O.
    pub fn new(
        identity: CustomerIdentity,
        mode: CheckoutMode,
        return_url: impl Into<String>,
        locale: CheckoutLocale,
        flags: CheckoutFlags,
    ) -> Result<Self, ValidationError> {
        let return_url = return_url.into();
        if !return_url.contains(SESSION_ID_PLACEHOLDER) {
            return Err(ValidationError::ReturnUrlMissingPlaceholder);
        }
        Ok(Self {
            identity,
            mode,
            return_url,
            locale,
            flags,
            line_items: Vec::new(),
            metadata: BTreeMap::new(),
        })
    }

    /// Append a line item. Validation of the collection is deferred to
    /// [`to_form_params`](Self::to_form_params).
    pub fn add_line_item(&mut self, item: LineItem) -> &mut Self {
        self.line_items.push(item);
        self
    }

    /// Attach a metadata entry. Metadata only reaches the wire request when
    /// at least one entry is present.
    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn identity(&self) -> &CustomerIdentity {
        &self.identity
    }

    pub fn mode(&self) -> CheckoutMode {
        self.mode
    }

    pub fn return_url(&self) -> &str {
        &self.return_url
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Serialize into the provider's flat form-encoded parameter list.
    ///
    /// # Errors
    ///
    /// `EmptyLineItems` if no line item was added.
    pub fn to_form_params(&self) -> Result<Vec<(String, String)>, ValidationError> {
        if self.line_items.is_empty() {
            return Err(ValidationError::EmptyLineItems);
        }

        let mut params: Vec<(String, String)> = vec![
            ("ui_mode".into(), "embedded".into()),
            ("mode".into(), self.mode.as_str().into()),
            ("locale".into(), self.locale.as_str().into()),
            ("return_url".into(), self.return_url.clone()),
            // Tax IDs are always collected; the provider only shows the field
            // to customers in regions where one applies.
            ("tax_id_collection[enabled]".into(), "true".into()),
        ];

        for (i, item) in self.line_items.iter().enumerate() {
            params.push((format!("line_items[{i}][price]"), item.price().to_string()));
            params.push((format!("line_items[{i}][quantity]"), item.quantity().to_string()));
        }

        match &self.identity {
            CustomerIdentity::Email(email) => {
                params.push(("customer_email".into(), email.clone()));
            }
            CustomerIdentity::CustomerId(id) => {
                params.push(("customer".into(), id.clone()));
                // Existing customers get their stored details refreshed from
                // whatever they enter at checkout.
                params.push(("customer_update[address]".into(), "auto".into()));
                params.push(("customer_update[name]".into(), "auto".into()));
                params.push(("customer_update[shipping]".into(), "auto".into()));
            }
        }

        if self.flags.automatic_tax {
            params.push(("automatic_tax[enabled]".into(), "true".into()));
        }
        if self.flags.allow_promotion_codes {
            params.push(("allow_promotion_codes".into(), "true".into()));
        }
        if self.flags.billing_address_required {
            params.push(("billing_address_collection".into(), "required".into()));
        }

        if !self.metadata.is_empty() {
            for (key, value) in &self.metadata {
                params.push((format!("metadata[{key}]"), value.clone()));
            }
        }

        Ok(params)
    }
}
