//! Verified webhook event envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A provider event as delivered to a webhook endpoint.
///
/// The `data.object` payload stays untyped until the event has been
/// classified; [`EventEnvelope::object`] then deserializes it into the wire
/// type the event kind implies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventEnvelope {
    /// Unique event identifier (evt_...).
    pub id: String,

    /// Event type string, e.g. `checkout.session.completed`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// Unix timestamp when the event was created.
    pub created: i64,

    /// Event payload.
    pub data: EventData,

    /// Whether the event originated in live mode.
    #[serde(default)]
    pub livemode: bool,

    /// API version the payload was rendered with.
    pub api_version: Option<String>,
}

/// The `data` envelope around the event's subject object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventData {
    /// The object the event describes, untyped until classified.
    pub object: Value,

    /// For `*.updated` events, the fields that changed and their prior values.
    pub previous_attributes: Option<Value>,
}

impl EventEnvelope {
    /// Deserializes `data.object` into the wire type implied by the event
    /// kind.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the object does not match `T`.
    pub fn object<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }

    /// Whether the event originated in live mode.
    pub fn is_live(&self) -> bool {
        self.livemode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::CheckoutSessionObject;

    #[test]
    fn deserializes_envelope_and_extracts_typed_object() {
        let json = serde_json::json!({
            "id": "evt_1",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": {
                "object": {
                    "id": "cs_1",
                    "status": "complete",
                    "payment_status": "paid",
                    "mode": "payment"
                }
            },
            "livemode": false,
            "api_version": "2023-10-16"
        });

        let event: EventEnvelope = serde_json::from_value(json).unwrap();
        assert_eq!(event.event_type, "checkout.session.completed");
        assert!(!event.is_live());

        let session: CheckoutSessionObject = event.object().unwrap();
        assert_eq!(session.id, "cs_1");
    }

    #[test]
    fn mismatched_object_shape_fails_extraction() {
        let json = serde_json::json!({
            "id": "evt_2",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": {"object": {"id": "cs_2"}},
            "livemode": true
        });

        let event: EventEnvelope = serde_json::from_value(json).unwrap();
        assert!(event.object::<CheckoutSessionObject>().is_err());
    }
}
