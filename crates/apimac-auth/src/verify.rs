//! Request verification and access-id extraction.
//!
//! Verification recomputes the canonical string and MAC exactly as the
//! signer does and compares against the MAC carried in the `Authorization`
//! header, in constant time. All malformed-input failure modes degrade to
//! `false` (or `None`); nothing here panics on attacker-controlled input.

use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::build_canonical_string;
use crate::credentials::CredentialProvider;
use crate::error::AuthError;
use crate::header::AuthorizationHeader;
use crate::request::SignableRequest;
use crate::sign::compute_mac;

/// The result of a successful verification.
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// The access id that signed the request.
    pub access_id: String,
    /// The nonce the signer attached. This crate does not check it for
    /// reuse; callers enforcing a replay window can split it with
    /// [`crate::nonce::parse_nonce`].
    pub nonce: String,
}

/// Determine whether a request's signature is valid for the given secret key.
///
/// Returns `false` when the key is absent, when the `Authorization` header
/// is missing or malformed, and when the MACs do not match. An unresolvable
/// access id is indistinguishable from a bad signature, so pass `None` when
/// the credential lookup fails.
///
/// # Examples
///
/// ```
/// use apimac_auth::{is_authentic, sign};
///
/// let secret_key: &[u8] = b"zq7vKe3P0aFhXkE5hQ3G4";
/// let wrong_key: &[u8] = b"another-key";
///
/// let request = http::Request::builder()
///     .method("GET")
///     .uri("https://example.com/invoices")
///     .body(Vec::new())
///     .unwrap();
///
/// let signed = sign(request, "client42", secret_key).unwrap();
/// assert!(is_authentic(&signed, Some(secret_key)));
/// assert!(!is_authentic(&signed, Some(wrong_key)));
/// assert!(!is_authentic(&signed, None));
/// ```
#[must_use]
pub fn is_authentic<R: SignableRequest>(request: &R, secret_key: Option<&[u8]>) -> bool {
    let Some(secret_key) = secret_key else {
        return false;
    };

    let Ok(header) = parse_request_header(request) else {
        return false;
    };

    let expected = compute_mac(secret_key, &build_canonical_string(request));
    mac_matches(&header.mac, &expected)
}

/// Verify a request against a credential store.
///
/// The richer server-side entry point: parses the `Authorization` header,
/// resolves the secret key through `provider`, and compares MACs in constant
/// time. On success the caller gets back the access id and nonce for its own
/// authorization and freshness policies.
///
/// # Errors
///
/// - [`AuthError::MissingAuthHeader`] / [`AuthError::InvalidAuthHeader`] if
///   the header is absent or malformed
/// - [`AuthError::AccessIdNotFound`] if the provider does not know the id
/// - [`AuthError::SignatureDoesNotMatch`] if the MACs differ
pub fn verify_request<R: SignableRequest>(
    request: &R,
    provider: &dyn CredentialProvider,
) -> Result<AuthResult, AuthError> {
    let header = parse_request_header(request)?;

    debug!(access_id = %header.access_id, "verifying request signature");

    let secret_key = provider.get_secret_key(&header.access_id)?;

    let canonical_string = build_canonical_string(request);
    debug!(canonical_string, "built canonical string");

    let expected = compute_mac(secret_key.as_bytes(), &canonical_string);

    if mac_matches(&header.mac, &expected) {
        debug!(access_id = %header.access_id, "signature verification succeeded");
        Ok(AuthResult {
            access_id: header.access_id,
            nonce: header.nonce,
        })
    } else {
        debug!(access_id = %header.access_id, "signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}

/// Extract the access id from a request's `Authorization` header.
///
/// Servers use this to decide which credential's secret key to look up
/// before calling [`is_authentic`]. Returns `None` for unsigned requests and
/// for headers that fail to parse.
#[must_use]
pub fn extract_access_id<R: SignableRequest>(request: &R) -> Option<String> {
    parse_request_header(request)
        .ok()
        .map(|header| header.access_id)
}

/// Read and decode the `Authorization` header from a request.
fn parse_request_header<R: SignableRequest>(
    request: &R,
) -> Result<AuthorizationHeader, AuthError> {
    let value = request
        .header("authorization")
        .ok_or(AuthError::MissingAuthHeader)?;
    AuthorizationHeader::parse(value)
}

/// Constant-time comparison of the provided and expected MACs.
fn mac_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
