//! Scheme type for absolute URIs.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::SchemeError;
use crate::validate::validate_scheme;

/// A validated URI scheme.
///
/// Starts with a letter, ends with a letter or digit, and contains only
/// letters, digits, `+`, `.` and `-`. The original case is preserved.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::Scheme;
///
/// let scheme = Scheme::parse("https").unwrap();
/// assert_eq!(scheme.as_str(), "https");
///
/// assert!(Scheme::parse("1http").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme(String);

impl Scheme {
    /// Parses a scheme from a string (without the trailing ':').
    ///
    /// # Errors
    ///
    /// Returns `SchemeError` if the scheme is empty, does not start with a
    /// letter, does not end with a letter or digit, or contains any other
    /// character than letters, digits, `+`, `.` and `-`.
    pub fn parse(input: &str) -> Result<Self, SchemeError> {
        validate_scheme(input)?;
        Ok(Self(input.to_string()))
    }

    /// Returns the scheme as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Scheme {
    type Error = SchemeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Scheme {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for Scheme {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheme {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Scheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
