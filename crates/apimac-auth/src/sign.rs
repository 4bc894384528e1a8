//! Request signing.
//!
//! Signing attaches a single `Authorization` header to an outbound request:
//!
//! ```text
//! MAC id=<access_id>,nonce=<unix_seconds>:<token>,mac=<base64 HMAC-SHA1>
//! ```
//!
//! The MAC covers the canonical string only; the nonce rides along for
//! caller-side freshness checks but is not an HMAC input.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use tracing::debug;

use crate::canonical::build_canonical_string;
use crate::error::AuthError;
use crate::header::AuthorizationHeader;
use crate::nonce::generate_nonce;
use crate::request::SignableRequest;

type HmacSha1 = Hmac<Sha1>;

/// Sign a request with the client's access id and secret key.
///
/// Generates a fresh nonce, computes
/// `base64(HMAC-SHA1(secret_key, canonical_string))`, and writes the encoded
/// `Authorization` header onto the request, replacing any previous value.
/// The request is returned with exactly that one header added; no other
/// field is modified.
///
/// # Errors
///
/// Returns [`AuthError::MissingSecretKey`] if `secret_key` is empty. No HMAC
/// is computed in that case and the request is left unsigned.
///
/// # Examples
///
/// ```
/// use apimac_auth::sign;
///
/// let request = http::Request::builder()
///     .method("PUT")
///     .uri("https://example.com/invoices/12")
///     .header("content-type", "application/json")
///     .body(b"{}".to_vec())
///     .unwrap();
///
/// let signed = sign(request, "client42", b"secret").unwrap();
/// assert!(signed.headers().contains_key("authorization"));
/// ```
pub fn sign<R: SignableRequest>(
    mut request: R,
    access_id: &str,
    secret_key: &[u8],
) -> Result<R, AuthError> {
    if secret_key.is_empty() {
        return Err(AuthError::MissingSecretKey);
    }

    let header = AuthorizationHeader {
        access_id: access_id.to_owned(),
        nonce: generate_nonce(),
        mac: compute_mac(secret_key, &build_canonical_string(&request)),
    };

    debug!(access_id = %header.access_id, nonce = %header.nonce, "signed request");

    request.set_header("authorization", &header.encode());
    Ok(request)
}

/// Compute `base64(HMAC-SHA1(secret_key, canonical_string))`.
pub(crate) fn compute_mac(secret_key: &[u8], canonical_string: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(secret_key).expect("HMAC can accept any key length");
    mac.update(canonical_string.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> http::Request<Vec<u8>> {
        http::Request::builder()
            .method("PUT")
            .uri("https://example.com/invoices/12")
            .header("content-type", "application/json")
            .header("x-request-id", "r-1")
            .body(b"{}".to_vec())
            .unwrap()
    }

    #[test]
    fn test_should_compute_mac_matching_rfc2202_vector() {
        // RFC 2202 HMAC-SHA1 test case 1, base64-encoded.
        let mac = compute_mac(&[0x0b; 20], "Hi There");
        assert_eq!(mac, "thcxhlUFcmTii8C2+zeMjvFGvgA=");
    }

    #[test]
    fn test_should_compute_deterministic_mac() {
        assert_eq!(
            compute_mac(b"secret", "a\nb\n/c"),
            compute_mac(b"secret", "a\nb\n/c")
        );
    }

    #[test]
    fn test_should_attach_parsable_authorization_header() {
        let signed = sign(request(), "client42", b"secret").unwrap();

        let value = signed.headers().get("authorization").unwrap().to_str().unwrap();
        let header = AuthorizationHeader::parse(value).unwrap();

        assert_eq!(header.access_id, "client42");
        assert!(!header.mac.is_empty());
    }

    #[test]
    fn test_should_set_exactly_one_authorization_header() {
        let presigned = sign(request(), "client42", b"secret").unwrap();
        let resigned = sign(presigned, "client42", b"secret").unwrap();

        assert_eq!(
            resigned.headers().get_all("authorization").iter().count(),
            1
        );
    }

    #[test]
    fn test_should_leave_other_request_fields_untouched() {
        let signed = sign(request(), "client42", b"secret").unwrap();

        assert_eq!(signed.method(), http::Method::PUT);
        assert_eq!(signed.uri().path(), "/invoices/12");
        assert_eq!(
            signed.headers().get("x-request-id").unwrap(),
            &http::HeaderValue::from_static("r-1")
        );
        assert_eq!(signed.body(), &b"{}".to_vec());
    }

    #[test]
    fn test_should_fail_fast_on_empty_secret_key() {
        let result = sign(request(), "client42", b"");
        assert!(matches!(result, Err(AuthError::MissingSecretKey)));
    }

    #[test]
    fn test_should_not_include_nonce_in_mac_input() {
        // Two signatures of the same request carry different nonces but the
        // same MAC, since the MAC covers only the canonical string.
        let first = sign(request(), "client42", b"secret").unwrap();
        let second = sign(request(), "client42", b"secret").unwrap();

        let parse = |req: &http::Request<Vec<u8>>| {
            AuthorizationHeader::parse(
                req.headers().get("authorization").unwrap().to_str().unwrap(),
            )
            .unwrap()
        };

        assert_eq!(parse(&first).mac, parse(&second).mac);
    }
}
