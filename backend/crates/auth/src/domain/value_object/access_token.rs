//! Access Token Value Object
//!
//! Signed, time-limited bearer credential proving administrator
//! identity. Wire format: `base64url(claims JSON) . base64url(sig)`
//! where `sig = HMAC-SHA256(secret, payload)`. The token is stateless;
//! callers must still resolve the embedded admin id against the store.

use chrono::Utc;
use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims embedded in an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Administrator rowid
    pub admin_id: i64,
    /// Username at issue time (informational)
    pub username: String,
    /// Expiry as Unix milliseconds
    pub exp_ms: i64,
}

impl TokenClaims {
    pub fn is_expired(&self) -> bool {
        self.exp_ms <= Utc::now().timestamp_millis()
    }
}

/// Token validation failures
///
/// All variants surface to the client identically (an invalid token);
/// the distinction exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token has expired")]
    Expired,
}

/// Sign claims into the wire format
pub fn issue(claims: &TokenClaims, secret: &[u8; 32]) -> String {
    let payload = to_base64url(
        &serde_json::to_vec(claims).expect("token claims serialize to JSON"),
    );
    let signature = hmac_sha256(secret, payload.as_bytes());
    format!("{}.{}", payload, to_base64url(&signature))
}

/// Validate signature and expiry, returning the claims
pub fn verify(token: &str, secret: &[u8; 32]) -> Result<TokenClaims, TokenError> {
    let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

    let signature = from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;
    let expected = hmac_sha256(secret, payload.as_bytes());

    if !constant_time_eq(&signature, &expected) {
        return Err(TokenError::BadSignature);
    }

    let claims_bytes = from_base64url(payload).map_err(|_| TokenError::Malformed)?;
    let claims: TokenClaims =
        serde_json::from_slice(&claims_bytes).map_err(|_| TokenError::Malformed)?;

    if claims.is_expired() {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_expiring_in_ms(delta_ms: i64) -> TokenClaims {
        TokenClaims {
            admin_id: 1,
            username: "admin".to_string(),
            exp_ms: Utc::now().timestamp_millis() + delta_ms,
        }
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let secret = [7u8; 32];
        let claims = claims_expiring_in_ms(60_000);

        let token = issue(&claims, &secret);
        let verified = verify(&token, &secret).unwrap();

        assert_eq!(verified, claims);
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = [7u8; 32];
        let claims = claims_expiring_in_ms(-1_000);

        let token = issue(&claims, &secret);
        assert_eq!(verify(&token, &secret), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = claims_expiring_in_ms(60_000);
        let token = issue(&claims, &[7u8; 32]);

        assert_eq!(verify(&token, &[8u8; 32]), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let secret = [7u8; 32];
        let claims = claims_expiring_in_ms(60_000);
        let token = issue(&claims, &secret);

        // Swap in a forged payload, keep the original signature
        let (_, signature) = token.split_once('.').unwrap();
        let forged_claims = TokenClaims {
            admin_id: 999,
            ..claims
        };
        let forged_payload = to_base64url(&serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{}.{}", forged_payload, signature);

        assert_eq!(verify(&forged, &secret), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let secret = [7u8; 32];
        assert_eq!(verify("", &secret), Err(TokenError::Malformed));
        assert_eq!(verify("no-separator", &secret), Err(TokenError::Malformed));
        // Signature part is not valid base64url
        assert_eq!(verify("abc.$$$", &secret), Err(TokenError::Malformed));

        // Correctly signed, but the payload is not claims JSON
        let payload = to_base64url(b"not json");
        let signature = to_base64url(&hmac_sha256(&secret, payload.as_bytes()));
        let token = format!("{}.{}", payload, signature);
        assert_eq!(verify(&token, &secret), Err(TokenError::Malformed));
    }
}
