//! Wire codec for the MAC `Authorization` header.
//!
//! The header value has the form:
//!
//! ```text
//! MAC id=<access_id>,nonce=<timestamp>:<token>,mac=<base64 mac>
//! ```
//!
//! Fields appear in exactly this order with no whitespace around `=` or
//! after the commas. `Authorization` is the header name; the `MAC ...`
//! string is its value. The parser is strict: extra fields, missing fields,
//! reordered fields, or padded delimiters all fail to decode.

use crate::error::AuthError;

/// The authentication scheme literal that opens the header value.
const SCHEME_PREFIX: &str = "MAC ";

/// Structured form of the MAC `Authorization` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationHeader {
    /// Public identifier of the signing credential.
    pub access_id: String,
    /// Per-request freshness token, `<unix_seconds>:<base36 token>`.
    pub nonce: String,
    /// Base64-encoded HMAC over the canonical string.
    pub mac: String,
}

impl AuthorizationHeader {
    /// Encode into the wire form carried as the `Authorization` header value.
    ///
    /// # Examples
    ///
    /// ```
    /// use apimac_auth::header::AuthorizationHeader;
    ///
    /// let header = AuthorizationHeader {
    ///     access_id: "client42".to_owned(),
    ///     nonce: "1755000000:9k2mzq1x".to_owned(),
    ///     mac: "uN8HJ0yS8xQzV5hQ3G4P0aFhXkE=".to_owned(),
    /// };
    /// assert_eq!(
    ///     header.encode(),
    ///     "MAC id=client42,nonce=1755000000:9k2mzq1x,mac=uN8HJ0yS8xQzV5hQ3G4P0aFhXkE="
    /// );
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{SCHEME_PREFIX}id={},nonce={},mac={}",
            self.access_id, self.nonce, self.mac
        )
    }

    /// Parse a raw `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidAuthHeader`] unless the value is exactly
    /// three `key=value` fields, `id`/`nonce`/`mac` in that order, behind
    /// the `MAC ` scheme prefix. A base64 MAC never contains a comma, so a
    /// comma always delimits fields.
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        let rest = value
            .strip_prefix(SCHEME_PREFIX)
            .ok_or(AuthError::InvalidAuthHeader)?;

        let mut fields = rest.split(',');
        let access_id = expect_field(fields.next(), "id=")?;
        let nonce = expect_field(fields.next(), "nonce=")?;
        let mac = expect_field(fields.next(), "mac=")?;

        if fields.next().is_some() {
            return Err(AuthError::InvalidAuthHeader);
        }

        Ok(Self {
            access_id: access_id.to_owned(),
            nonce: nonce.to_owned(),
            mac: mac.to_owned(),
        })
    }
}

/// Strip the expected `key=` prefix from one comma-delimited field.
fn expect_field<'a>(field: Option<&'a str>, key: &str) -> Result<&'a str, AuthError> {
    field
        .and_then(|f| f.strip_prefix(key))
        .ok_or(AuthError::InvalidAuthHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_encode_fields_in_fixed_order() {
        let header = AuthorizationHeader {
            access_id: "abc".to_owned(),
            nonce: "1:xyz".to_owned(),
            mac: "zzz".to_owned(),
        };

        assert_eq!(header.encode(), "MAC id=abc,nonce=1:xyz,mac=zzz");
    }

    #[test]
    fn test_should_parse_well_formed_header() {
        let header = AuthorizationHeader::parse("MAC id=abc,nonce=1:xyz,mac=zzz").unwrap();

        assert_eq!(header.access_id, "abc");
        assert_eq!(header.nonce, "1:xyz");
        assert_eq!(header.mac, "zzz");
    }

    #[test]
    fn test_should_round_trip_encode_and_parse() {
        let header = AuthorizationHeader {
            access_id: "client42".to_owned(),
            nonce: "1755000000:9k2mzq1x".to_owned(),
            mac: "uN8HJ0yS8xQzV5hQ3G4P0aFhXkE=".to_owned(),
        };

        assert_eq!(AuthorizationHeader::parse(&header.encode()).unwrap(), header);
    }

    #[test]
    fn test_should_reject_missing_mac_field() {
        let result = AuthorizationHeader::parse("MAC id=abc,nonce=1:xyz");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_reject_extra_field() {
        let result = AuthorizationHeader::parse("MAC id=abc,nonce=1:xyz,mac=zzz,extra=1");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_reject_reordered_fields() {
        let result = AuthorizationHeader::parse("MAC nonce=1:xyz,id=abc,mac=zzz");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_reject_whitespace_after_commas() {
        let result = AuthorizationHeader::parse("MAC id=abc, nonce=1:xyz, mac=zzz");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_reject_missing_scheme_prefix() {
        let result = AuthorizationHeader::parse("id=abc,nonce=1:xyz,mac=zzz");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_reject_lowercase_scheme() {
        let result = AuthorizationHeader::parse("mac id=abc,nonce=1:xyz,mac=zzz");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_reject_other_auth_schemes() {
        let result = AuthorizationHeader::parse("Bearer abcdef");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_reject_comma_inside_mac_value() {
        // A comma always starts a new field, and a fourth field is an error.
        let result = AuthorizationHeader::parse("MAC id=abc,nonce=1:xyz,mac=zz,z");
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[test]
    fn test_should_accept_empty_field_values() {
        // The access id is caller-controlled and unconstrained.
        let header = AuthorizationHeader::parse("MAC id=,nonce=1:xyz,mac=zzz").unwrap();
        assert_eq!(header.access_id, "");
    }
}
