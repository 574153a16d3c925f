//! ID-or-embedded-object union for related provider objects.
//!
//! Stripe "expandable" fields arrive either as a bare string ID or, when the
//! caller asked for expansion, as the full embedded object. Snapshot
//! resolution only ever needs the ID and never fetches the related object
//! eagerly; callers wanting the full object retrieve it themselves.

use serde::{Deserialize, Serialize};

/// A related provider object, by ID or embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// Bare string ID.
    Id(String),

    /// Fully embedded object.
    Object(T),
}

/// Wire objects that carry a provider ID.
pub trait HasId {
    fn id(&self) -> &str;
}

impl<T: HasId> Expandable<T> {
    /// The related object's ID, whichever form it arrived in.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }

    /// The embedded object, if the field was expanded.
    pub fn object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }
}
