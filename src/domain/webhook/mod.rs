//! Webhook verification, classification, and response encoding.
//!
//! # Module Structure
//!
//! - `signature` - `Stripe-Signature` header parsing
//! - `verifier` - HMAC-SHA256 verification with replay protection
//! - `event` - verified event envelope
//! - `endpoint` - per-endpoint supported event kinds
//! - `errors` - verification failure taxonomy
//! - `outcome` - accept/reject outcome and HTTP response encoding

mod endpoint;
mod errors;
mod event;
mod outcome;
mod signature;
mod verifier;

pub use endpoint::{CheckoutEventKind, SubscriptionEventKind};
pub use errors::{SignatureParseError, WebhookError};
pub use event::{EventData, EventEnvelope};
pub use outcome::{EndpointResponse, RejectReason, WebhookOutcome};
pub use signature::SignatureHeader;
pub use verifier::WebhookVerifier;
