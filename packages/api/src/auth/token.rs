//! Signed session tokens (HS256 JWT).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject carried by every token issued for the shared admin login.
pub const ADMIN_SUBJECT: &str = "admin";

/// How long a token stays valid after issuance.
pub const SESSION_LIFETIME_DAYS: i64 = 7;

/// Claims embedded in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Token could not be signed.
#[derive(Debug, Error)]
#[error("could not sign session token: {0}")]
pub struct SigningError(String);

/// Uniform rejection for any token that does not verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid session token")]
pub struct InvalidToken;

/// Issues and verifies session tokens with a single shared secret.
#[derive(Clone)]
pub struct SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self, subject: &str) -> Result<String, SigningError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, SigningError> {
        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(SESSION_LIFETIME_DAYS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| SigningError(e.to_string()))
    }

    /// Check signature and expiry, returning the subject.
    pub fn verify(&self, token: &str) -> Result<String, InvalidToken> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|_| InvalidToken)
    }
}
