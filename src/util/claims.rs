//! Bearer-credential claims decoding.
//!
//! The credential is a three-segment token whose middle segment is
//! base64url-encoded JSON naming the subject and role. Decoding here is
//! display-only; signature verification stays with the API, which rejects
//! tampered credentials on the next request.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

use crate::state::session::Role;

/// Claims carried in the credential's payload segment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject claim, holding the account email.
    pub sub: String,
    /// Account role claim.
    pub role: Role,
}

/// Failure decoding a credential's claims payload.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The credential does not have exactly three dot-separated segments.
    #[error("credential is not a three-segment token")]
    Segments,
    /// The payload segment is not valid base64url.
    #[error("claims payload is not valid base64url")]
    Base64,
    /// The payload bytes are not valid UTF-8.
    #[error("claims payload is not valid UTF-8")]
    Utf8,
    /// The payload JSON is missing or mistypes a claim.
    #[error("claims payload is not valid claims JSON: {0}")]
    Json(String),
}

/// Decode the claims payload of a bearer credential.
///
/// Accepts both padded and unpadded base64url payload segments.
///
/// # Errors
///
/// Returns a [`DecodeError`] naming the first structural or claim
/// problem found.
pub fn decode(credential: &str) -> Result<Claims, DecodeError> {
    let mut segments = credential.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(DecodeError::Segments);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| DecodeError::Base64)?;
    let text = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)?;
    serde_json::from_str(&text).map_err(|err| DecodeError::Json(err.to_string()))
}
