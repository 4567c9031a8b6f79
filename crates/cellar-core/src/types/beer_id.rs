//! Beer record identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A validated beer record identifier.
///
/// Identifiers are assigned by the store on creation and are 24
/// hexadecimal characters. The format is checked before any lookup is
/// attempted, so a malformed id never reaches the store.
///
/// # Example
///
/// ```
/// use cellar_core::BeerId;
///
/// let id = BeerId::new("5f8d0d55b54764421b7156c3").unwrap();
/// assert_eq!(id.as_str(), "5f8d0d55b54764421b7156c3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BeerId(String);

/// Length of a beer id in hex characters.
const ID_LEN: usize = 24;

impl BeerId {
    /// Create a new id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not 24 hex characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.len() != ID_LEN {
            return Err(Error::InvalidId {
                value: s.to_string(),
                reason: format!("must be exactly {} characters", ID_LEN),
            });
        }

        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidId {
                value: s.to_string(),
                reason: format!("contains non-hex character '{}'", c),
            });
        }

        Ok(())
    }
}

impl fmt::Display for BeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BeerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BeerId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BeerId> for String {
    fn from(id: BeerId) -> Self {
        id.0
    }
}

impl AsRef<str> for BeerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
