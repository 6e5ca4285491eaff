//! Plaintext secret scheme - verbatim storage, equality comparison.

use corkboard_core::ports::{SecretError, SecretScheme};

/// Stores the post password exactly as entered and compares by equality.
///
/// This is the default scheme and matches the board's historical data:
/// anyone with database access can read every secret. Deployments that can
/// afford to invalidate stored secrets should switch to the Argon2 scheme.
pub struct PlaintextSecret;

impl SecretScheme for PlaintextSecret {
    fn seal(&self, password: &str) -> Result<String, SecretError> {
        Ok(password.to_owned())
    }

    fn verify(&self, candidate: &str, stored: &str) -> Result<bool, SecretError> {
        Ok(candidate == stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_is_the_identity() {
        assert_eq!(PlaintextSecret.seal("hunter2").unwrap(), "hunter2");
    }

    #[test]
    fn verify_compares_verbatim() {
        assert!(PlaintextSecret.verify("hunter2", "hunter2").unwrap());
        assert!(!PlaintextSecret.verify("Hunter2", "hunter2").unwrap());
    }
}
