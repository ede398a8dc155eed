//! Bearer-token issuing and verification
//!
//! Tokens are compact JWTs signed with HS256 over a process-wide shared
//! secret. A token carries the user's id and username plus issued-at and
//! expiry claims; validity is purely structural and cryptographic, with no
//! server-side revocation state.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// Username at issue time
    pub username: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expiration (unix seconds)
    pub exp: u64,
}

/// Errors produced by token issuing and verification
#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed encoding, or expired token
    #[error("invalid token")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// Signing failed
    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The system clock is before the unix epoch
    #[error("system clock is before the unix epoch")]
    Clock,
}

/// Stateless token issuer and verifier
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl TokenService {
    /// Create a token service from the shared signing secret
    pub fn new(secret: &str, expiry_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_secs,
        }
    }

    /// Issue a signed token for a user identity
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TokenError::Clock)?
            .as_secs();

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now,
            exp: now + self.expiry_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::Invalid)?;
        Ok(data.claims)
    }
}
