//! Webhook signature verification.
//!
//! HMAC-SHA256 over the exact delivered bytes, with timestamp bounds to
//! prevent replay. The signed payload is `"{timestamp}.{body}"` where the
//! body participates byte-for-byte; re-serializing the JSON before
//! verification would break signatures over payloads with unusual whitespace
//! or key ordering.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;
use super::event::EventEnvelope;
use super::signature::SignatureHeader;

/// Maximum allowed age for webhook events (5 minutes).
const MAX_EVENT_AGE_SECS: i64 = 300;

/// Maximum allowed clock skew for future events (1 minute).
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Verifier bound to a single endpoint's signing secret.
///
/// Each endpoint (checkout sessions, subscriptions) has its own secret, so a
/// delivery signed for one endpoint never verifies at another.
pub struct WebhookVerifier {
    secret: SecretString,
}

impl WebhookVerifier {
    /// Creates a verifier with the given endpoint signing secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verifies a delivery and parses the event envelope.
    ///
    /// # Verification Steps
    ///
    /// 1. Parse the signature header
    /// 2. Validate the signed timestamp is within bounds
    /// 3. Compute the expected HMAC over the exact payload bytes
    /// 4. Compare against the v1 signature in constant time
    /// 5. Parse the payload into an [`EventEnvelope`]
    ///
    /// # Errors
    ///
    /// - `SignatureHeader` - the header was missing or malformed
    /// - `TimestampTooOld` / `TimestampInFuture` - outside the replay window
    /// - `SignatureMismatch` - the HMAC did not match
    /// - `MalformedPayload` - the body was not a valid event document
    pub fn verify(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<EventEnvelope, WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;

        self.validate_timestamp(header.timestamp)?;

        let expected = self.compute_signature(header.timestamp, payload);
        if !constant_time_compare(&expected, &header.v1_signature) {
            return Err(WebhookError::SignatureMismatch);
        }

        let event: EventEnvelope = serde_json::from_slice(payload)
            .map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;

        Ok(event)
    }

    fn validate_timestamp(&self, timestamp: i64) -> Result<(), WebhookError> {
        let now = chrono::Utc::now().timestamp();
        let age = now - timestamp;

        if age > MAX_EVENT_AGE_SECS {
            return Err(WebhookError::TimestampTooOld { age_secs: age });
        }

        if age < -MAX_CLOCK_SKEW_SECS {
            return Err(WebhookError::TimestampInFuture);
        }

        Ok(())
    }

    /// HMAC-SHA256 over `"{timestamp}.{payload}"`, payload as raw bytes.
    fn compute_signature(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a hex HMAC-SHA256 signature for test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
