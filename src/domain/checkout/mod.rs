//! Checkout session domain module.
//!
//! # Module Structure
//!
//! - `line_item` - price reference + quantity pairs
//! - `locale` / `mode` - closed provider enums for session creation
//! - `status` - session lifecycle and payment status lattices
//! - `request` - validated session-creation request and its wire encoding
//! - `object` - wire shape of a provider checkout session
//! - `snapshot` - immutable resolved view with the fulfilment predicate

mod line_item;
mod locale;
mod mode;
mod object;
mod request;
mod snapshot;
mod status;

pub use line_item::LineItem;
pub use locale::CheckoutLocale;
pub use mode::CheckoutMode;
pub use object::{CheckoutSessionObject, CustomerDetails, InvoiceObject};
pub use request::{CheckoutFlags, CheckoutSessionRequest, SESSION_ID_PLACEHOLDER};
pub use snapshot::CheckoutSessionSnapshot;
pub use status::{SessionPaymentStatus, SessionStatus};
