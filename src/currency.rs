//! Currency codes

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Case-normalized currency code
///
/// Codes are uppercased on construction, so `"usd"`, `"USD"` and `"Usd"` all
/// produce the same key. Any string is accepted; unknown codes are
/// not an error anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Normalize a raw code
    pub fn new(code: &str) -> Self {
        Self(code.to_uppercase())
    }

    /// Get the normalized code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the rate table be queried with an already-normalized &str.
impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
