//! Secret configuration values
//!
//! Connection strings carry database credentials. They are held in a
//! `secrecy::Secret`, which redacts `Debug` output and zeroes the buffer on
//! drop; reading the value requires an explicit `expose_secret()`.
//!
//! # Example
//!
//! ```rust
//! use leadbook::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let dsn = secret_string("postgres://leadbook:pw@db/leads".to_string());
//! assert!(dsn.expose_secret().starts_with("postgres://"));
//! assert!(!format!("{:?}", dsn).contains("pw@"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// String payload stored inside a [`SecretString`]
#[derive(Clone, Debug, Zeroize, Serialize, Deserialize)]
#[serde(transparent)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Host part of a connection URL, i.e. everything after the last `@`
    pub fn after_credentials(&self) -> Option<&str> {
        self.0.rsplit_once('@').map(|(_, host)| host)
    }

    pub fn parse<F: std::str::FromStr>(&self) -> Result<F, F::Err> {
        self.0.parse()
    }
}

/// Secret string that is redacted in logs and zeroed on drop
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
