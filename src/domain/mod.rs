//! Domain module - pure value types and logic.
//!
//! Everything in this module is synchronous and side-effect free: statuses
//! parse or fail, snapshots resolve or fail, and webhook verification is a
//! deterministic function of (body bytes, signature header, secret, clock).
//! Network I/O lives behind the `ports` seam.
//!
//! # Module Structure
//!
//! - `checkout` - checkout session request building, statuses, snapshots
//! - `subscription` - subscription statuses and snapshots
//! - `customer` - customer identity and wire customer object
//! - `webhook` - signature verification, event classification, responses
//! - `expandable` - ID-or-embedded-object union for related provider objects

pub mod checkout;
pub mod customer;
pub mod errors;
pub mod expandable;
pub mod subscription;
pub mod webhook;
