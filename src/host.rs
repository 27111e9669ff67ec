//! Host type for URI authorities.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::HostError;
use crate::validate::validate_host;

/// How a validated host was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// A DNS name (e.g., "example.com")
    Domain,
    /// An IPv4 address (e.g., "192.168.0.1")
    Ipv4(Ipv4Addr),
}

/// A validated host.
///
/// The host keeps the exact spelling it was parsed from; neither case nor
/// IPv4 octets are normalized.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::Host;
///
/// let host = Host::parse("www.example.com").unwrap();
/// assert!(host.is_domain());
///
/// let host = Host::parse("127.0.0.1").unwrap();
/// assert!(host.is_localhost());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    raw: String,
    kind: HostKind,
}

impl Host {
    /// Parses a host from a string.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if:
    /// - The host is empty
    /// - An IPv4-shaped host has a part outside 0-255
    /// - A DNS label is empty, longer than 63 characters, starts or ends
    ///   with a hyphen, or contains characters other than letters, digits
    ///   and hyphens
    pub fn parse(input: &str) -> Result<Self, HostError> {
        let kind = validate_host(input)?;
        Ok(Self {
            raw: input.to_string(),
            kind,
        })
    }

    /// Returns the host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns how the host was classified.
    #[must_use]
    pub const fn kind(&self) -> HostKind {
        self.kind
    }

    /// Returns true if the host is a DNS name.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self.kind, HostKind::Domain)
    }

    /// Returns the IPv4 address, if the host is one.
    #[must_use]
    pub const fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.kind {
            HostKind::Ipv4(ip) => Some(ip),
            HostKind::Domain => None,
        }
    }

    /// Returns true if this is a localhost address.
    #[must_use]
    pub fn is_localhost(&self) -> bool {
        match self.kind {
            HostKind::Domain => self.raw.eq_ignore_ascii_case("localhost"),
            HostKind::Ipv4(ip) => ip.is_loopback(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Host {
    type Error = HostError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_domain() {
        let host = Host::parse("Example.COM").unwrap();
        assert_eq!(host.as_str(), "Example.COM");
        assert_eq!(host.kind(), HostKind::Domain);
        assert!(host.ipv4().is_none());
    }

    #[test]
    fn parse_ipv4_keeps_spelling() {
        let host = Host::parse("010.0.0.1").unwrap();
        assert_eq!(host.as_str(), "010.0.0.1");
        assert_eq!(host.ipv4(), Some(Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn localhost_detection() {
        assert!(Host::parse("localhost").unwrap().is_localhost());
        assert!(Host::parse("LOCALHOST").unwrap().is_localhost());
        assert!(Host::parse("127.0.0.1").unwrap().is_localhost());
        assert!(!Host::parse("example.com").unwrap().is_localhost());
        assert!(!Host::parse("10.0.0.1").unwrap().is_localhost());
    }

    #[test]
    fn parse_invalid_fails() {
        assert_eq!(Host::parse(""), Err(HostError::Empty));
        assert!(matches!(
            "example.-com".parse::<Host>(),
            Err(HostError::InvalidLeadingOrTrailingHyphen { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let host = Host::parse("192.168.0.1").unwrap();
        let json = serde_json::to_string(&host).unwrap();
        assert_eq!(json, "\"192.168.0.1\"");
        let back: Host = serde_json::from_str(&json).unwrap();
        assert_eq!(back, host);
    }
}
