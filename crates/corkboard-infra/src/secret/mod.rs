//! Secret scheme implementations for the edit/delete shared secret.

#[cfg(feature = "hashing")]
mod argon2;

mod plaintext;

#[cfg(feature = "hashing")]
pub use argon2::Argon2Secret;

pub use plaintext::PlaintextSecret;
