//! The credential pair held by the client and the token payloads exchanged
//! with the token endpoints.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::storage::TokenStore;

/// Store key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Store key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// A short-lived bearer credential authorizing API requests.
///
/// The `Debug` implementation masks the token value.
///
/// # Example
///
/// ```rust
/// use temucosoft_api::AccessToken;
///
/// let token = AccessToken::new("T1");
/// assert_eq!(token.bearer(), "Bearer T1");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw access token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Returns the expiry encoded in the token's `exp` claim.
    ///
    /// The token is decoded without verifying its signature; `None` is
    /// returned when it is not a JWT or carries no usable `exp` claim.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<ExpiryClaim>(&self.0, &DecodingKey::from_secret(&[]), &validation).ok()?;
        Utc.timestamp_opt(data.claims.exp, 0).single()
    }

    /// Returns `true` if the token's `exp` claim lies in the past.
    ///
    /// Tokens without a decodable expiry are never considered expired; the
    /// server remains the authority and answers 401 when they are.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at().is_some_and(|expires| Utc::now() > expires)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A longer-lived credential used only to obtain new access tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Wraps a raw refresh token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for RefreshToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken(*****)")
    }
}

#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    exp: i64,
}

/// Payload returned by `POST /token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// The access token.
    pub access: String,
    /// The refresh token.
    pub refresh: String,
}

/// Payload returned by `POST /token/refresh/`.
///
/// `refresh` is only present when the server rotates refresh tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshedToken {
    /// The new access token.
    pub access: String,
    /// A rotated refresh token, if the server issued one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

/// The access/refresh token pair held by the client.
///
/// Either token may be absent. Empty strings read back from a store are
/// treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The current access token.
    pub access_token: Option<AccessToken>,
    /// The current refresh token.
    pub refresh_token: Option<RefreshToken>,
}

impl Credentials {
    /// Reads the credential pair mirrored in `store`.
    #[must_use]
    pub fn load(store: &dyn TokenStore) -> Self {
        let read = |key: &str| store.get(key).filter(|value| !value.is_empty());
        Self {
            access_token: read(ACCESS_TOKEN_KEY).map(AccessToken),
            refresh_token: read(REFRESH_TOKEN_KEY).map(RefreshToken),
        }
    }

    /// Builds the pair issued by a successful login.
    #[must_use]
    pub fn from_token_pair(pair: &TokenPair) -> Self {
        Self {
            access_token: Some(AccessToken::new(pair.access.clone())),
            refresh_token: Some(RefreshToken::new(pair.refresh.clone())),
        }
    }

    /// Returns `true` if an access token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::storage::MemoryTokenStore;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[derive(Serialize)]
    struct Claims {
        token_type: &'static str,
        exp: i64,
        user_id: u64,
    }

    fn jwt_expiring_at(exp: i64) -> String {
        let claims = Claims {
            token_type: "access",
            exp,
            user_id: 7,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_tokens_mask_value_in_debug() {
        assert_eq!(format!("{:?}", AccessToken::new("abc")), "AccessToken(*****)");
        assert_eq!(
            format!("{:?}", RefreshToken::new("abc")),
            "RefreshToken(*****)"
        );
    }

    #[test]
    fn test_expires_at_reads_exp_claim_without_secret() {
        let exp = 1_900_000_000;
        let token = AccessToken::new(jwt_expiring_at(exp));

        let expires = token.expires_at().unwrap();
        assert_eq!(expires.timestamp(), exp);
        assert!(!token.expired());
    }

    #[test]
    fn test_expired_token_is_reported() {
        let past = Utc::now().timestamp() - 3600;
        let token = AccessToken::new(jwt_expiring_at(past));
        assert!(token.expired());
    }

    #[test]
    fn test_opaque_token_has_no_expiry() {
        let token = AccessToken::new("not-a-jwt");
        assert!(token.expires_at().is_none());
        assert!(!token.expired());
    }

    #[test]
    fn test_load_treats_empty_values_as_absent() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN_KEY, "").unwrap();
        store.set(REFRESH_TOKEN_KEY, "R1").unwrap();

        let credentials = Credentials::load(&store);
        assert!(credentials.access_token.is_none());
        assert_eq!(credentials.refresh_token, Some(RefreshToken::new("R1")));
        assert!(!credentials.is_authenticated());
    }

    #[test]
    fn test_refreshed_token_without_rotation() {
        let parsed: RefreshedToken = serde_json::from_str(r#"{"access":"T2"}"#).unwrap();
        assert_eq!(parsed.access, "T2");
        assert!(parsed.refresh.is_none());
    }
}
