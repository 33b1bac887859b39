//! IdTag: a non-empty `CiString20`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ci_string::CiString20;
use crate::error::CiStringError;

/// Identifier of an RFID card or other authorization token
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct IdTag(CiString20);

impl IdTag {
    pub fn new(value: impl Into<String>) -> Result<Self, CiStringError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CiStringError::EmptyValue);
        }
        Ok(Self(CiString20::new(value)?))
    }

    pub fn validate(&self) -> Result<(), CiStringError> {
        if self.0.is_empty() {
            return Err(CiStringError::EmptyValue);
        }
        self.0.validate()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_ci_string(&self) -> &CiString20 {
        &self.0
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_case(other)
    }
}

impl fmt::Display for IdTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for IdTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for IdTag {
    type Err = CiStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for IdTag {
    type Error = CiStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for IdTag {
    type Error = CiStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdTag> for String {
    fn from(value: IdTag) -> Self {
        value.0.into_inner()
    }
}
