//! Password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use crimemap_database::UserError;

/// Credential store backed by Argon2.
///
/// Constructed explicitly and handed to [`crate::UserService`] rather
/// than living as a module-level singleton.
#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Two calls on the same plaintext produce different PHC strings;
    /// the salt is embedded in the output for later verification.
    pub fn hash(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| UserError::PasswordHashingFailed)?
            .to_string();

        Ok(password_hash)
    }

    /// Verify a plaintext password against a stored PHC hash string.
    ///
    /// A mismatch is `Ok(false)`; only a malformed stored hash is an
    /// error.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, UserError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| UserError::InvalidPasswordHash)?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = CredentialHasher::new();
        let password = "test_password_123";
        let hash = hasher.hash(password).unwrap();

        assert_ne!(hash, password);
        assert!(hasher.verify(password, &hash).unwrap());
        assert!(!hasher.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_same_plaintext_hashes_differently() {
        let hasher = CredentialHasher::new();
        let password = "repeatable";

        let first = hasher.hash(password).unwrap();
        let second = hasher.hash(password).unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify(password, &first).unwrap());
        assert!(hasher.verify(password, &second).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = CredentialHasher::new();
        let err = hasher.verify("anything", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, UserError::InvalidPasswordHash));
    }
}
