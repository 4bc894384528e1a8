//! Canonical string construction for MAC request signing.
//!
//! The signer and the verifier must reduce a request to the exact same byte
//! string for their HMACs to agree. The canonical form is:
//!
//! ```text
//! Content-Type + "\n" +
//! Content-MD5 + "\n" +
//! Path
//! ```
//!
//! The canonical set is exactly {content-type, content-md5, path}. The
//! request method is available on the adapter for future extension but is
//! not part of the canonical set.

use crate::request::SignableRequest;

/// Build the canonical string for a request.
///
/// Absent headers contribute an empty slot; both newline delimiters are
/// always present so slot positions stay stable. Header values and the path
/// are used verbatim, with no trimming, no case folding, and no
/// trailing-slash rewriting, so client and server must present the same path
/// form. This operation is total: it cannot fail for any adapter-conformant
/// request.
///
/// # Examples
///
/// ```
/// use apimac_auth::canonical::build_canonical_string;
///
/// let request = http::Request::builder()
///     .method("PUT")
///     .uri("https://example.com/invoices/12")
///     .header("content-type", "application/json")
///     .body(Vec::new())
///     .unwrap();
///
/// assert_eq!(
///     build_canonical_string(&request),
///     "application/json\n\n/invoices/12"
/// );
/// ```
#[must_use]
pub fn build_canonical_string<R: SignableRequest>(request: &R) -> String {
    let content_type = request.content_type().unwrap_or("");
    let content_md5 = request.content_md5().unwrap_or("");
    let path = request.path();

    format!("{content_type}\n{content_md5}\n{path}")
}
