//! Per-request nonce generation.
//!
//! A nonce is `<unix_seconds>:<base36 token>`. It rides along in the
//! `Authorization` header as an advisory uniqueness value: this crate
//! generates it fresh for every sign operation but does not check it for
//! reuse. Callers wanting replay protection can split a received nonce with
//! [`parse_nonce`] and enforce a freshness window of their own.

use chrono::Utc;
use rand::RngExt;

/// Exclusive upper bound for the random token: 36^8.
const TOKEN_BOUND: u64 = 36u64.pow(8);

/// Generate a fresh nonce of the form `<unix_seconds>:<base36 token>`.
///
/// The token is drawn uniformly from `[0, 36^8)`, so the output always
/// matches `^\d+:[0-9a-z]+$`.
#[must_use]
pub fn generate_nonce() -> String {
    let token = rand::rng().random_range(0..TOKEN_BOUND);
    format!("{}:{}", Utc::now().timestamp(), to_base36(token))
}

/// Split a nonce into its timestamp and token halves.
///
/// Returns `None` unless the value has the `<seconds>:<token>` shape with a
/// decimal timestamp and a non-empty lowercase base36 token.
///
/// # Examples
///
/// ```
/// use apimac_auth::nonce::parse_nonce;
///
/// assert_eq!(parse_nonce("1755000000:9k2mzq1x"), Some((1_755_000_000, "9k2mzq1x")));
/// assert_eq!(parse_nonce("not-a-nonce"), None);
/// ```
#[must_use]
pub fn parse_nonce(nonce: &str) -> Option<(i64, &str)> {
    let (seconds, token) = nonce.split_once(':')?;

    if !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()) {
        return None;
    }

    Some((seconds.parse().ok()?, token))
}

/// Encode a value as lowercase base36.
fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_owned();
    }

    let mut reversed = String::new();
    while value > 0 {
        reversed.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    reversed.chars().rev().collect()
}
