//! Password hashing for stored credentials.
//!
//! Argon2 with a per-password random salt. The digest is opaque to the rest of
//! the service: it is stored verbatim and only ever compared through
//! [`verify`], which is safe against timing side channels.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password with a fresh random salt.
/// # Errors
/// Returns an error if the hashing computation fails
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verify a password guess against a stored digest.
///
/// An unparsable digest counts as a mismatch.
#[must_use]
pub fn verify(guess: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };

    Argon2::default()
        .verify_password(guess.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_never_equals_plaintext() {
        let digest = hash("secret").unwrap();

        assert!(!digest.is_empty());
        assert_ne!(digest, "secret");
    }

    #[test]
    fn test_digest_is_salted() {
        let first = hash("secret").unwrap();
        let second = hash("secret").unwrap();

        // same password, different salt, different digest
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_matching_password() {
        let digest = hash("secret").unwrap();

        assert!(verify("secret", &digest));
    }

    #[test]
    fn test_verify_wrong_password() {
        let digest = hash("secret").unwrap();

        assert!(!verify("not-the-secret", &digest));
    }

    #[test]
    fn test_verify_garbage_digest() {
        assert!(!verify("secret", "not-a-phc-string"));
    }
}
