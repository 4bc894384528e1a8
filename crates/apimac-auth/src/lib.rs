//! Shared-secret HMAC request authentication.
//!
//! This crate signs HTTP requests on the client side and verifies those
//! signatures on the server side, in the style of AWS request signing: both
//! parties hold a shared secret key, the client embeds a MAC in the
//! `Authorization` header, and the server recomputes the MAC from header
//! content alone. No TLS client certificates, no server-side session state;
//! authenticity is established per request.
//!
//! The `Authorization` header value has the form:
//!
//! ```text
//! MAC id=<access_id>,nonce=<unix_seconds>:<token>,mac=<base64 HMAC-SHA1>
//! ```
//!
//! # Usage
//!
//! ```
//! use apimac_auth::{extract_access_id, is_authentic, sign};
//!
//! let secret_key: &[u8] = b"zq7vKe3P0aFhXkE5hQ3G4";
//!
//! // Client: sign the outbound request.
//! let request = http::Request::builder()
//!     .method("PUT")
//!     .uri("https://example.com/invoices/12")
//!     .header("content-type", "application/json")
//!     .body(b"{}".to_vec())
//!     .unwrap();
//! let request = sign(request, "client42", secret_key).unwrap();
//!
//! // Server: look up the credential by access id, then verify.
//! let (parts, _body) = request.into_parts();
//! assert_eq!(extract_access_id(&parts).as_deref(), Some("client42"));
//! assert!(is_authentic(&parts, Some(secret_key)));
//! ```
//!
//! Replay protection is out of scope: the nonce is generated fresh per sign
//! operation but is not checked for reuse here. Callers can split it with
//! [`parse_nonce`] and enforce their own freshness window.
//!
//! # Modules
//!
//! - [`request`] - Capability view over concrete request types
//! - [`canonical`] - Canonical string construction
//! - [`header`] - `Authorization` header wire codec
//! - [`sign`] - Request signing
//! - [`verify`] - Signature verification and access-id extraction
//! - [`keygen`] - Secret key generation
//! - [`nonce`] - Nonce generation and splitting
//! - [`credentials`] - Credential store seam

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod header;
pub mod keygen;
pub mod nonce;
pub mod request;
pub mod sign;
pub mod verify;

pub use credentials::{CredentialProvider, StaticCredentialProvider};
pub use error::AuthError;
pub use header::AuthorizationHeader;
pub use keygen::generate_secret_key;
pub use nonce::{generate_nonce, parse_nonce};
pub use request::SignableRequest;
pub use sign::sign;
pub use verify::{AuthResult, extract_access_id, is_authentic, verify_request};
