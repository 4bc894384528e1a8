//! apimac-keygen - Credential provisioning tool.
//!
//! Generates (access id, secret key) pairs for distribution to clients.
//! Each credential is printed to stdout as `access_id<TAB>secret_key`, one
//! per line: store the pair in your credential store and hand it to the
//! client out-of-band. Secrets are written to stdout only, never to logs.
//!
//! # Usage
//!
//! ```text
//! apimac-keygen [COUNT]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `KEYGEN_COUNT` | `1` | Number of credentials when COUNT is not given |
//! | `RUST_LOG` | `info` | Tracing filter (logs go to stderr) |

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use apimac_auth::generate_secret_key;

/// Resolve the number of credentials to generate from argv, falling back to
/// the `KEYGEN_COUNT` environment variable.
fn credential_count(arg: Option<&str>) -> Result<usize> {
    let raw = match arg {
        Some(value) => value.to_owned(),
        None => std::env::var("KEYGEN_COUNT").unwrap_or_else(|_| "1".to_owned()),
    };

    let count: usize = raw
        .parse()
        .with_context(|| format!("invalid credential count: {raw}"))?;
    anyhow::ensure!(count > 0, "credential count must be at least 1");

    Ok(count)
}

/// Format one credential line: `access_id<TAB>secret_key`.
fn credential_line(access_id: &str, secret_key: &str) -> String {
    format!("{access_id}\t{secret_key}")
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let count = credential_count(args.get(1).map(String::as_str))?;

    for _ in 0..count {
        let access_id = uuid::Uuid::new_v4().to_string();
        let secret_key = generate_secret_key().context("cannot generate secret key")?;
        println!("{}", credential_line(&access_id, &secret_key));
    }

    info!(count, "generated credentials");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_explicit_count() {
        assert_eq!(credential_count(Some("5")).unwrap(), 5);
    }

    #[test]
    fn test_should_reject_zero_count() {
        assert!(credential_count(Some("0")).is_err());
    }

    #[test]
    fn test_should_reject_non_numeric_count() {
        assert!(credential_count(Some("many")).is_err());
    }

    #[test]
    fn test_should_format_credential_line_with_tab_separator() {
        assert_eq!(credential_line("id-1", "key-1"), "id-1\tkey-1");
    }
}
