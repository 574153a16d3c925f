//! Application layer - use-case facades over the domain and ports.

pub mod checkout;
pub mod customers;

pub use checkout::{Checkout, CheckoutError, SessionWebhookReply, SubscriptionWebhookReply};
pub use customers::CustomerDirectory;
