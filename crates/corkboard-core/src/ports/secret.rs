//! Shared-secret scheme guarding post edits and deletions.

use thiserror::Error;

/// How the per-post password is stored and checked.
///
/// The board has no accounts; whoever re-enters the password given at
/// creation may edit or delete the post.
pub trait SecretScheme: Send + Sync {
    /// Prepare a password for storage.
    fn seal(&self, password: &str) -> Result<String, SecretError>;

    /// Check a candidate password against the stored value.
    fn verify(&self, candidate: &str, stored: &str) -> Result<bool, SecretError>;
}

/// Secret scheme errors.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Hashing error: {0}")]
    Hashing(String),
}
