//! Ports - boundary contracts between the application core and adapters.

pub mod payment_provider;

pub use payment_provider::{CreatedSession, PaymentProvider, PortalSession, ProviderError};
