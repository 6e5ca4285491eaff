//! Argon2 secret scheme - salted one-way hashing for post passwords.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use corkboard_core::ports::{SecretError, SecretScheme};

/// Argon2id-backed scheme, selected with `SECRET_SCHEME=argon2`.
///
/// Secrets sealed by the plaintext scheme cannot be verified once a
/// deployment switches over; existing posts keep their stored value and
/// become uneditable until recreated.
pub struct Argon2Secret {
    argon2: Argon2<'static>,
}

impl Argon2Secret {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2Secret {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretScheme for Argon2Secret {
    fn seal(&self, password: &str) -> Result<String, SecretError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| SecretError::Hashing(e.to_string()))
    }

    fn verify(&self, candidate: &str, stored: &str) -> Result<bool, SecretError> {
        let parsed = PasswordHash::new(stored).map_err(|e| SecretError::Hashing(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok())
    }
}
