//! Syntactic validation of schemes, hosts and ports.
//!
//! These checks are cheap and purely lexical: no DNS resolution and no
//! reserved-range checks. They reject obviously malformed input before it
//! reaches a URI, nothing more.
//!
//! ```text
//! scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )     ; must end ALPHA / DIGIT
//! host   = dotted-digits / dns-name                       ; every digit part 0-255, four parts = IPv4
//! label  = 1*63( ALPHA / DIGIT / "-" )                    ; no leading/trailing "-"
//! port   = 0-65535
//! ```

use std::net::Ipv4Addr;

use crate::constants::{IPV4_PART_COUNT, MAX_DNS_LABEL_LENGTH};
use crate::error::{HostError, PortError, SchemeError};
use crate::host::HostKind;

/// Validates a URI scheme.
///
/// # Errors
///
/// Returns the [`SchemeError`] of the first violated rule, checked in this
/// order: empty, first character not a letter, last character not a letter
/// or digit, interior character outside `[A-Za-z0-9+.-]`.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::{validate_scheme, SchemeError};
///
/// assert!(validate_scheme("svn+ssh").is_ok());
/// assert_eq!(validate_scheme("1http"), Err(SchemeError::InvalidStartChar { found: '1' }));
/// ```
pub fn validate_scheme(scheme: &str) -> Result<(), SchemeError> {
    let (Some(first), Some(last)) = (scheme.chars().next(), scheme.chars().next_back()) else {
        return Err(SchemeError::Empty);
    };

    if !first.is_ascii_alphabetic() {
        return Err(SchemeError::InvalidStartChar { found: first });
    }

    if !last.is_ascii_alphanumeric() {
        return Err(SchemeError::InvalidEndChar { found: last });
    }

    let len = scheme.chars().count();
    for (i, c) in scheme.chars().enumerate().take(len - 1).skip(1) {
        if !is_scheme_char(c) {
            return Err(SchemeError::InvalidChar { char: c, position: i });
        }
    }

    Ok(())
}

/// Validates a host and reports how it was classified.
///
/// A host made only of dot-separated, all-digit parts is checked octet by
/// octet whatever the part count. Exactly four such parts make an IPv4
/// address; any other host is validated as a DNS name.
///
/// Character classes are ASCII-only: a label may hold `A-Z`, `a-z`, `0-9`
/// and `-`, so internationalized names must be passed in their punycode
/// (`xn--`) form.
///
/// # Errors
///
/// Returns [`HostError::Empty`] for an empty host,
/// [`HostError::OctetOutOfRange`] for the first part above 255 of an
/// all-digit host, and one of the label errors for an invalid DNS name.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::{validate_host, HostError, HostKind};
///
/// assert_eq!(validate_host("example.com"), Ok(HostKind::Domain));
/// assert!(matches!(validate_host("192.168.0.1"), Ok(HostKind::Ipv4(_))));
/// assert!(matches!(validate_host("1.1.1.256"), Err(HostError::OctetOutOfRange { .. })));
/// ```
pub fn validate_host(host: &str) -> Result<HostKind, HostError> {
    if host.is_empty() {
        return Err(HostError::Empty);
    }

    if is_dotted_digits(host) {
        let octets = parse_octets(host)?;
        if let Ok(quad) = <[u8; IPV4_PART_COUNT]>::try_from(octets.as_slice()) {
            return Ok(HostKind::Ipv4(Ipv4Addr::from(quad)));
        }
    }

    // TODO: route bracketed IPv6 literals once a validator for them exists
    validate_dns_name(host)?;
    Ok(HostKind::Domain)
}

/// Validates a port number, returning it narrowed to `u16`.
///
/// # Errors
///
/// Returns [`PortError::OutOfRange`] if `port` is negative or above 65535.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::validate_port;
///
/// assert_eq!(validate_port(8080), Ok(8080));
/// assert!(validate_port(70000).is_err());
/// ```
pub fn validate_port(port: i64) -> Result<u16, PortError> {
    u16::try_from(port).map_err(|_| PortError::OutOfRange { port })
}

/// Returns true if the character may appear inside a scheme.
#[must_use]
pub const fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')
}

fn is_dotted_digits(host: &str) -> bool {
    host.split('.')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_octets(host: &str) -> Result<Vec<u8>, HostError> {
    host.split('.')
        .map(|part| {
            let value = part.parse::<u32>().ok();
            value
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| HostError::OctetOutOfRange {
                    part: part.to_string(),
                    value,
                })
        })
        .collect()
}

fn validate_dns_name(host: &str) -> Result<(), HostError> {
    for label in host.split('.') {
        let len = label.chars().count();
        if !(1..=MAX_DNS_LABEL_LENGTH).contains(&len) {
            return Err(HostError::InvalidLabelLength {
                label: label.to_string(),
            });
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(HostError::InvalidLeadingOrTrailingHyphen {
                label: label.to_string(),
            });
        }

        if let Some(c) = label.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return Err(HostError::InvalidChar {
                char: c,
                label: label.to_string(),
            });
        }
    }

    Ok(())
}
