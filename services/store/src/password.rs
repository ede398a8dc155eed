//! Credential hashing
//!
//! Passwords are hashed with Argon2id keyed with an application-wide secret
//! (the pepper), on top of a fresh random salt generated per call. The salt
//! and the Argon2 parameters are embedded in the PHC output string, so
//! verification needs no side channel. The work factor (time cost) comes
//! from configuration and is validated once at construction.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};

use crate::error::{StoreError, StoreResult};

/// Stateless salted-and-peppered password hasher
#[derive(Clone)]
pub struct CredentialHasher {
    pepper: String,
    params: Params,
}

impl CredentialHasher {
    /// Create a hasher with the given pepper and time cost
    pub fn new(pepper: String, iterations: u32) -> StoreResult<Self> {
        let params = Params::new(Params::DEFAULT_M_COST, iterations, Params::DEFAULT_P_COST, None)
            .map_err(|e| StoreError::Hashing(e.to_string()))?;

        Ok(Self { pepper, params })
    }

    fn argon2(&self) -> StoreResult<Argon2<'_>> {
        Argon2::new_with_secret(
            self.pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
        .map_err(|e| StoreError::Hashing(e.to_string()))
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, plaintext: &str) -> StoreResult<String> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let hash = self
            .argon2()?
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| StoreError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// A malformed stored hash is reported as a non-match, never an error.
    pub fn verify(&self, plaintext: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        let Ok(argon2) = self.argon2() else {
            return false;
        };

        argon2.verify_password(plaintext.as_bytes(), &parsed).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> CredentialHasher {
        // Low time cost to keep the tests fast
        CredentialHasher::new("unit-test-pepper".to_string(), 1).unwrap()
    }

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = hasher();
        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert!(hasher.verify("correct horse battery staple", &hash));
        assert!(!hasher.verify("correct horse battery stable", &hash));
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let hasher = hasher();
        let first = hasher.hash("password123").unwrap();
        let second = hasher.hash("password123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password123", &first));
        assert!(hasher.verify("password123", &second));
    }

    #[test]
    fn test_malformed_stored_hash_is_a_non_match() {
        let hasher = hasher();

        assert!(!hasher.verify("anything", "not-a-phc-string"));
        assert!(!hasher.verify("anything", ""));
    }

    #[test]
    fn test_different_pepper_does_not_verify() {
        let hash = hasher().hash("password123").unwrap();
        let other = CredentialHasher::new("another-pepper".to_string(), 1).unwrap();

        assert!(!other.verify("password123", &hash));
    }

    #[test]
    fn test_zero_iterations_rejected_at_construction() {
        assert!(CredentialHasher::new("pepper".to_string(), 0).is_err());
    }
}
