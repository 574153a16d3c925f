//! Checkout Facade - Typed Facade over Stripe Hosted Checkout
//!
//! This crate wraps Stripe's hosted checkout/subscription API behind a small
//! typed surface: building validated checkout-session requests, verifying and
//! classifying webhook deliveries, and resolving provider objects into
//! immutable snapshots that answer "is this purchase ready for fulfilment?".
//!
//! The crate never persists anything and never retries outbound calls; both
//! are caller responsibilities. Fulfilment de-duplication is likewise a caller
//! contract - the facade only guarantees that the same provider state always
//! yields the same readiness answer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
