//! Webhook outcome and HTTP response encoding.

use serde_json::{json, Value};

use super::event::EventEnvelope;

/// Why a webhook delivery was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The body was not a well-formed, signed event document.
    InvalidPayload(String),

    /// The signature did not verify against the endpoint's secret.
    InvalidSignature(String),

    /// The event was authentic but of a type this endpoint does not handle.
    UnsupportedEventType {
        /// The type string received, echoed verbatim in the error message.
        received: String,
        /// The types this endpoint accepts.
        supported: &'static [&'static str],
    },
}

impl RejectReason {
    /// Human-readable message carried in the error response body.
    pub fn message(&self) -> String {
        match self {
            RejectReason::InvalidPayload(detail) => format!("invalid payload: {detail}"),
            RejectReason::InvalidSignature(detail) => format!("invalid signature: {detail}"),
            RejectReason::UnsupportedEventType { received, supported } => format!(
                "unsupported event type {received}; this endpoint handles: {}",
                supported.join(", ")
            ),
        }
    }

    /// HTTP status the endpoint replies with. All rejections are client
    /// errors.
    pub fn http_status(&self) -> u16 {
        400
    }
}

/// Result of running a delivery through verification and classification.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookOutcome<K> {
    /// Authentic and of a supported type.
    Verified {
        /// The endpoint-specific event kind.
        kind: K,
        /// The verified envelope, object still untyped.
        event: EventEnvelope,
    },

    /// Refused; the response says why.
    Rejected(RejectReason),
}

impl<K> WebhookOutcome<K> {
    /// Encodes the HTTP response the endpoint should return for this outcome.
    pub fn response(&self) -> EndpointResponse {
        match self {
            WebhookOutcome::Verified { .. } => EndpointResponse::success(),
            WebhookOutcome::Rejected(reason) => {
                EndpointResponse::error(reason.http_status(), reason.message())
            }
        }
    }
}

/// Wire-level response for a webhook endpoint, kept framework-neutral so any
/// HTTP layer can emit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    /// HTTP status code.
    pub status: u16,

    /// JSON body.
    pub body: Value,
}

impl EndpointResponse {
    /// `200 {"success": true}` acknowledgement.
    pub fn success() -> Self {
        Self {
            status: 200,
            body: json!({"success": true}),
        }
    }

    /// Error response carrying the reject message.
    pub fn error(status: u16, message: String) -> Self {
        Self {
            status,
            body: json!({"error": message}),
        }
    }
}
