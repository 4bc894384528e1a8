//! Credential store seam for the verification side.
//!
//! Persistence of the access-id to secret-key mapping is the caller's
//! concern. [`CredentialProvider`] is the seam a server implements over its
//! own store; [`StaticCredentialProvider`] is an in-memory implementation
//! for tests and development.

use std::collections::HashMap;

use crate::error::AuthError;

/// Trait for resolving secret keys from access ids.
///
/// Implementations may back this with a database, configuration file, or any
/// other credential store.
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the secret key for the given access id.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AccessIdNotFound`] if the access id is not known.
    fn get_secret_key(&self, access_id: &str) -> Result<String, AuthError>;
}

/// In-memory credential provider backed by a `HashMap`.
///
/// Suitable for tests and development. Production servers should implement
/// [`CredentialProvider`] over their own credential store.
///
/// # Examples
///
/// ```
/// use apimac_auth::credentials::{CredentialProvider, StaticCredentialProvider};
///
/// let provider = StaticCredentialProvider::new(vec![
///     ("client42".to_owned(), "zq7vKe3P...".to_owned()),
/// ]);
///
/// assert!(provider.get_secret_key("client42").is_ok());
/// assert!(provider.get_secret_key("unknown").is_err());
/// ```
#[derive(Clone, Default)]
pub struct StaticCredentialProvider {
    credentials: HashMap<String, String>,
}

impl StaticCredentialProvider {
    /// Create a provider from `(access_id, secret_key)` pairs.
    pub fn new(credentials: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            credentials: credentials.into_iter().collect(),
        }
    }
}

// Manual impl: secret keys must never leak through debug output.
impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("credentials", &self.credentials.len())
            .finish()
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn get_secret_key(&self, access_id: &str) -> Result<String, AuthError> {
        self.credentials
            .get(access_id)
            .cloned()
            .ok_or_else(|| AuthError::AccessIdNotFound(access_id.to_owned()))
    }
}
