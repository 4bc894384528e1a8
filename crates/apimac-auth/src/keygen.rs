//! Secret key generation for provisioning clients.
//!
//! A secret key is the base64-encoded SHA-512 digest of 512 bytes drawn from
//! the operating system's secure random source. The issuer stores the key
//! alongside the access id it assigns and distributes both out-of-band; this
//! crate never persists or logs either.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::TryRng;
use rand::rngs::SysRng as OsRng;
use sha2::{Digest, Sha512};

use crate::error::AuthError;

/// Number of random bytes fed into the key digest.
const SEED_LEN: usize = 512;

/// Generate a fresh, base64-encoded secret key.
///
/// The output is always 88 printable characters: the base64 encoding of a
/// 64-byte SHA-512 digest.
///
/// # Errors
///
/// Returns [`AuthError::RandomSource`] if the operating system's random
/// source fails. There is no degraded fallback.
pub fn generate_secret_key() -> Result<String, AuthError> {
    let mut seed = [0u8; SEED_LEN];
    OsRng
        .try_fill_bytes(&mut seed)
        .map_err(|e| AuthError::RandomSource(e.to_string()))?;

    Ok(BASE64.encode(Sha512::digest(seed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_generate_fixed_length_printable_key() {
        let key = generate_secret_key().unwrap();

        // base64(SHA-512 digest) = 88 characters.
        assert_eq!(key.len(), 88);
        assert!(key.is_ascii());
    }

    #[test]
    fn test_should_generate_valid_base64_of_512_bit_digest() {
        let key = generate_secret_key().unwrap();
        let decoded = BASE64.decode(&key).unwrap();

        assert_eq!(decoded.len(), 64);
    }

    #[test]
    fn test_should_generate_distinct_keys() {
        let first = generate_secret_key().unwrap();
        let second = generate_secret_key().unwrap();

        assert_ne!(first, second);
    }
}
