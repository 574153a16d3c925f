//! Subscription domain module.
//!
//! # Module Structure
//!
//! - `status` - closed subscription status lattice
//! - `object` - wire shape of a provider subscription
//! - `snapshot` - immutable resolved view with the good-standing predicate

mod object;
mod snapshot;
mod status;

pub use object::{PaymentMethodObject, SubscriptionObject};
pub use snapshot::SubscriptionSnapshot;
pub use status::SubscriptionStatus;
