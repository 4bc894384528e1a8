//! Error types for MAC request authentication.
//!
//! All signing and verification failures are represented by [`AuthError`],
//! which provides a specific variant for each failure mode. Malformed input
//! never panics; it surfaces as a parse-failure variant (or degrades to a
//! boolean `false` in the [`crate::verify::is_authentic`] API).

/// Errors that can occur during MAC request signing and verification.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is missing from the request.
    #[error("Missing Authorization header")]
    MissingAuthHeader,

    /// The `Authorization` header does not match
    /// `MAC id=<id>,nonce=<nonce>,mac=<mac>`.
    #[error("Invalid Authorization header format")]
    InvalidAuthHeader,

    /// The secret key supplied for signing is empty.
    #[error("Secret key must not be empty")]
    MissingSecretKey,

    /// The access id was not found in the credential store.
    #[error("Access id not found: {0}")]
    AccessIdNotFound(String),

    /// The computed MAC does not match the MAC carried by the request.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,

    /// The operating system's secure random source failed. There is no
    /// degraded fallback for key material.
    #[error("Secure random source unavailable: {0}")]
    RandomSource(String),
}
