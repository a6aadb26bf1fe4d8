//! Bearer Token Decoding
//!
//! Reads the display claims out of the middle segment of a bearer token.
//! The signature is never checked here: the result is a hint for what to
//! render, not an identity.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::role::Role;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    Malformed,
    #[error("token payload is not valid base64: {0}")]
    Encoding(String),
    #[error("token payload is not a valid claims object: {0}")]
    Payload(String),
}

/// Claims read from an unverified token
///
/// Only drives which controls are rendered. Anything that needs a
/// trusted identity must come from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntrustedClaims {
    pub username: String,
    pub role: Role,
}

/// Decode the payload segment of `header.payload.signature`
pub fn decode_claims(token: &str) -> Result<UntrustedClaims, TokenError> {
    let mut segments = token.split('.');
    let _header = segments.next();
    let payload = segments
        .next()
        .filter(|p| !p.is_empty())
        .ok_or(TokenError::Malformed)?;

    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
}

#[cfg(test)]
pub(crate) fn encode_token(payload: &serde_json::Value) -> String {
    let body = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.{}.c2lnbmF0dXJl", body)
}
