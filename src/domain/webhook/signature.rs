//! `Stripe-Signature` header parsing.

use super::errors::SignatureParseError;

/// Parsed components of a `Stripe-Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// v1 signature (HMAC-SHA256).
    pub v1_signature: Vec<u8>,
    /// Optional v0 legacy signature. Parsed but never trusted.
    pub v0_signature: Option<Vec<u8>>,
}

impl SignatureHeader {
    /// Parses a `Stripe-Signature` header string.
    ///
    /// Format: `t=<timestamp>,v1=<signature>[,v0=<legacy>]`. Unknown keys are
    /// ignored for forward compatibility.
    ///
    /// # Errors
    ///
    /// Returns a [`SignatureParseError`] describing the first defect found.
    pub fn parse(header: &str) -> Result<Self, SignatureParseError> {
        if header.trim().is_empty() {
            return Err(SignatureParseError::MissingHeader);
        }

        let mut timestamp: Option<i64> = None;
        let mut v1_signature: Option<Vec<u8>> = None;
        let mut v0_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part
                .trim()
                .split_once('=')
                .ok_or(SignatureParseError::MalformedElement)?;

            match key {
                "t" => {
                    timestamp = Some(
                        value
                            .parse()
                            .map_err(|_| SignatureParseError::InvalidTimestamp)?,
                    );
                }
                "v1" => {
                    v1_signature = Some(
                        hex::decode(value).map_err(|_| SignatureParseError::InvalidHex("v1"))?,
                    );
                }
                "v0" => {
                    v0_signature = Some(
                        hex::decode(value).map_err(|_| SignatureParseError::InvalidHex("v0"))?,
                    );
                }
                _ => {
                    // Ignore unknown fields for forward compatibility
                }
            }
        }

        let timestamp = timestamp.ok_or(SignatureParseError::MissingTimestamp)?;
        let v1_signature = v1_signature.ok_or(SignatureParseError::MissingSignature)?;

        Ok(SignatureHeader {
            timestamp,
            v1_signature,
            v0_signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header_with_v1_only() {
        let signature = "a".repeat(64);
        let header_str = format!("t=1234567890,v1={}", signature);

        let header = SignatureHeader::parse(&header_str).unwrap();

        assert_eq!(header.timestamp, 1234567890);
        assert_eq!(header.v1_signature.len(), 32);
        assert!(header.v0_signature.is_none());
    }

    #[test]
    fn parse_header_with_v0_and_v1() {
        let v1_sig = "a".repeat(64);
        let v0_sig = "b".repeat(64);
        let header_str = format!("t=1234567890,v1={},v0={}", v1_sig, v0_sig);

        let header = SignatureHeader::parse(&header_str).unwrap();

        assert!(header.v0_signature.is_some());
        assert_eq!(header.v0_signature.unwrap().len(), 32);
    }

    #[test]
    fn parse_header_ignores_unknown_fields() {
        let signature = "a".repeat(64);
        let header_str = format!("t=1234567890,v1={},v2=future,scheme=hmac", signature);

        let header = SignatureHeader::parse(&header_str).unwrap();

        assert_eq!(header.timestamp, 1234567890);
        assert_eq!(header.v1_signature.len(), 32);
    }

    #[test]
    fn parse_header_tolerates_spaces_after_commas() {
        let signature = "a".repeat(64);
        let header_str = format!("t=1234567890, v1={}", signature);

        assert!(SignatureHeader::parse(&header_str).is_ok());
    }

    #[test]
    fn parse_empty_header_reports_missing() {
        assert_eq!(
            SignatureHeader::parse(""),
            Err(SignatureParseError::MissingHeader)
        );
        assert_eq!(
            SignatureHeader::parse("   "),
            Err(SignatureParseError::MissingHeader)
        );
    }

    #[test]
    fn parse_header_missing_timestamp_fails() {
        let header_str = format!("v1={}", "a".repeat(64));

        assert_eq!(
            SignatureHeader::parse(&header_str),
            Err(SignatureParseError::MissingTimestamp)
        );
    }

    #[test]
    fn parse_header_missing_v1_fails() {
        assert_eq!(
            SignatureHeader::parse("t=1234567890"),
            Err(SignatureParseError::MissingSignature)
        );
    }

    #[test]
    fn parse_header_invalid_timestamp_fails() {
        let header_str = format!("t=not_a_number,v1={}", "a".repeat(64));

        assert_eq!(
            SignatureHeader::parse(&header_str),
            Err(SignatureParseError::InvalidTimestamp)
        );
    }

    #[test]
    fn parse_header_invalid_hex_fails() {
        assert_eq!(
            SignatureHeader::parse("t=1234567890,v1=not_valid_hex"),
            Err(SignatureParseError::InvalidHex("v1"))
        );
    }

    #[test]
    fn parse_header_no_equals_fails() {
        assert_eq!(
            SignatureHeader::parse("t1234567890"),
            Err(SignatureParseError::MalformedElement)
        );
    }
}
