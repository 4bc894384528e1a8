//! Uniform read/write access to signable requests.
//!
//! Signing and verification never inspect a concrete request type; they
//! operate on the [`SignableRequest`] capability set, so any transport's
//! request object can participate by implementing the trait. Implementations
//! are provided for [`http::Request`] (outbound requests that still carry
//! their body) and [`http::request::Parts`] (inbound requests whose body has
//! already been consumed).

use http::header::{HeaderName, HeaderValue};

/// Capability view over an HTTP request for signing and verification.
///
/// Absent headers are a normal state and surface as `None`; the
/// canonicalization layer turns them into empty slots rather than errors.
pub trait SignableRequest {
    /// The HTTP method, e.g. `GET`.
    fn method(&self) -> &str;

    /// The request path, without scheme, host, or query string.
    fn path(&self) -> &str;

    /// Look up a header value by case-insensitive name.
    fn header(&self, name: &str) -> Option<&str>;

    /// Set a header, replacing any previous value under the same name.
    fn set_header(&mut self, name: &str, value: &str);

    /// The request body, if the underlying representation still carries it.
    fn body(&self) -> Option<&[u8]>;

    /// The `Content-Type` header.
    fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// The `Content-MD5` header.
    fn content_md5(&self) -> Option<&str> {
        self.header("content-md5")
    }

    /// The `Date` header.
    fn date(&self) -> Option<&str> {
        self.header("date")
    }
}

impl<B: AsRef<[u8]>> SignableRequest for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        insert_header(self.headers_mut(), name, value);
    }

    fn body(&self) -> Option<&[u8]> {
        Some(http::Request::body(self).as_ref())
    }
}

impl SignableRequest for http::request::Parts {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn path(&self) -> &str {
        self.uri.path()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        insert_header(&mut self.headers, name, value);
    }

    fn body(&self) -> Option<&[u8]> {
        None
    }
}

impl<T: SignableRequest + ?Sized> SignableRequest for &mut T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value);
    }

    fn body(&self) -> Option<&[u8]> {
        (**self).body()
    }
}

/// Insert a header into the map, dropping names or values that are not legal
/// header content. The values this crate writes are always legal.
fn insert_header(headers: &mut http::HeaderMap, name: &str, value: &str) {
    if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::from_str(value)) {
        headers.insert(name, value);
    }
}
