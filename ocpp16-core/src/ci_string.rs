//! Case-insensitive bounded ASCII strings
//!
//! OCPP 1.6 defines `CiString20Type` through `CiString500Type`: printable
//! ASCII text with a maximum length. Values are stored exactly as received.
//! Comparison is case-insensitive at the protocol level, which callers get
//! through [`CiString::eq_ignore_case`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CiStringError;

/// Printable ASCII range, space (32) through tilde (126)
pub fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Check `value` against a maximum length and the printable ASCII charset.
///
/// Length is checked first, so an over-long value reports
/// `LengthExceeded` even when it also holds invalid characters.
pub fn validate_bounded(value: &str, max_len: usize) -> Result<(), CiStringError> {
    if value.len() > max_len {
        return Err(CiStringError::LengthExceeded {
            max: max_len,
            actual: value.len(),
        });
    }

    if let Some(position) = value.chars().position(|c| !is_printable_ascii(c)) {
        return Err(CiStringError::InvalidCharacter { position });
    }

    Ok(())
}

/// Printable ASCII string of at most `N` bytes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct CiString<const N: usize>(String);

pub type CiString20 = CiString<20>;
pub type CiString25 = CiString<25>;
pub type CiString50 = CiString<50>;
pub type CiString255 = CiString<255>;
pub type CiString500 = CiString<500>;

impl<const N: usize> CiString<N> {
    pub const MAX_LEN: usize = N;

    /// Validate and wrap a value
    pub fn new(value: impl Into<String>) -> Result<Self, CiStringError> {
        let value = value.into();
        validate_bounded(&value, N)?;
        Ok(Self(value))
    }

    /// Re-run the invariant checks on a constructed value
    pub fn validate(&self) -> Result<(), CiStringError> {
        validate_bounded(&self.0, N)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn max_len(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Protocol-level comparison (ASCII case folded)
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl<const N: usize> fmt::Display for CiString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> AsRef<str> for CiString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> FromStr for CiString<N> {
    type Err = CiStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<const N: usize> TryFrom<String> for CiString<N> {
    type Error = CiStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> TryFrom<&str> for CiString<N> {
    type Error = CiStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> From<CiString<N>> for String {
    fn from(value: CiString<N>) -> Self {
        value.0
    }
}

// Marshalling re-validates instead of trusting the constructor.
impl<const N: usize> Serialize for CiString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&self.0)
    }
}
