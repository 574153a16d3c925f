//! Stripe adapter for the payment provider port.
//!
//! # Module Structure
//!
//! - `client` - production REST client
//! - `mock` - configurable test double

mod client;
mod mock;

pub use client::StripeClient;
pub use mock::{MethodCall, MockPaymentProvider};
