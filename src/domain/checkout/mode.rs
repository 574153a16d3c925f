//! Checkout session mode.

/// Mode of a checkout session.
///
/// `SubscriptionOrMixed` maps to the provider's `subscription` mode, which
/// also covers carts mixing one-off and recurring prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// One-off payment.
    Payment,

    /// Recurring subscription, possibly mixed with one-off items.
    SubscriptionOrMixed,

    /// Collect payment details without charging.
    Setup,
}

impl CheckoutMode {
    /// The wire value the provider API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::SubscriptionOrMixed => "subscription",
            CheckoutMode::Setup => "setup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(CheckoutMode::Payment.as_str(), "payment");
        assert_eq!(CheckoutMode::SubscriptionOrMixed.as_str(), "subscription");
        assert_eq!(CheckoutMode::Setup.as_str(), "setup");
    }
}
