//! Adapters - concrete implementations of the ports.

pub mod stripe;
