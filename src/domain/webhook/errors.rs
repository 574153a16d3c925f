//! Webhook verification failure taxonomy.

use thiserror::Error;

use super::outcome::RejectReason;

/// Errors produced while parsing a `Stripe-Signature` header.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureParseError {
    /// The signature header was absent or empty.
    #[error("missing signature header")]
    MissingHeader,

    /// A header element was not a `key=value` pair.
    #[error("malformed header element")]
    MalformedElement,

    /// The `t=` element did not hold a Unix timestamp.
    #[error("invalid timestamp")]
    InvalidTimestamp,

    /// A `v1=` or `v0=` element held invalid hex.
    #[error("invalid {0} signature hex")]
    InvalidHex(&'static str),

    /// No `t=` element was present.
    #[error("missing timestamp")]
    MissingTimestamp,

    /// No `v1=` element was present.
    #[error("missing v1 signature")]
    MissingSignature,
}

/// Errors that occur while verifying a webhook delivery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// The payload was not a well-formed event document.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The signature header could not be parsed.
    #[error("signature header: {0}")]
    SignatureHeader(#[from] SignatureParseError),

    /// The signed timestamp is older than the replay window.
    #[error("timestamp too old ({age_secs}s)")]
    TimestampTooOld { age_secs: i64 },

    /// The signed timestamp is in the future beyond clock skew tolerance.
    #[error("timestamp in the future")]
    TimestampInFuture,

    /// No candidate signature matched the expected HMAC.
    #[error("signature mismatch")]
    SignatureMismatch,
}

impl WebhookError {
    /// Maps a verification failure onto the caller-facing reject reason.
    ///
    /// An absent signature header and an unparseable body are payload
    /// problems; everything else is a signature problem. Either way the
    /// delivery is refused with a 400 so the provider retries or surfaces
    /// the failure in its dashboard.
    pub fn into_reject_reason(self) -> RejectReason {
        match self {
            WebhookError::MalformedPayload(detail) => RejectReason::InvalidPayload(detail),
            WebhookError::SignatureHeader(SignatureParseError::MissingHeader) => {
                RejectReason::InvalidPayload("missing signature header".to_string())
            }
            other => RejectReason::InvalidSignature(other.to_string()),
        }
    }
}
