//! Error types for URI component validation.

use std::fmt;

use crate::constants::{MAX_DNS_LABEL_LENGTH, MAX_IPV4_OCTET, MAX_PORT};

/// Errors for scheme validation.
///
/// Rules are checked in a fixed order (empty, start, end, interior), so the
/// first violated rule is the one reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// Scheme is empty
    Empty,
    /// First character is not a letter
    InvalidStartChar {
        /// The character found
        found: char,
    },
    /// Last character is not a letter or digit
    InvalidEndChar {
        /// The character found
        found: char,
    },
    /// Interior character outside `[A-Za-z0-9+.-]`
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "scheme cannot be empty"),
            Self::InvalidStartChar { found } => {
                write!(f, "scheme must start with a letter, found '{found}'")
            }
            Self::InvalidEndChar { found } => {
                write!(f, "scheme must end with a letter or digit, found '{found}'")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "scheme contains invalid character '{char}' at position {position}; only letters, digits, '+', '.' and '-' allowed"
                )
            }
        }
    }
}

impl std::error::Error for SchemeError {}

/// Errors for host validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Host is empty
    Empty,
    /// DNS label is empty or longer than 63 characters
    InvalidLabelLength {
        /// The offending label
        label: String,
    },
    /// DNS label starts or ends with a hyphen
    InvalidLeadingOrTrailingHyphen {
        /// The offending label
        label: String,
    },
    /// DNS label contains a character that is neither alphanumeric nor `-`
    InvalidChar {
        /// The invalid character
        char: char,
        /// The label containing it
        label: String,
    },
    /// IPv4 part is not an integer in `0..=255`
    OctetOutOfRange {
        /// The offending dot-separated part
        part: String,
        /// The parsed value, if the part fits in a `u32`
        value: Option<u32>,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "host cannot be empty"),
            Self::InvalidLabelLength { label } => write!(
                f,
                "invalid DNS label length: '{label}' is {} chars, must be 1-{MAX_DNS_LABEL_LENGTH}",
                label.chars().count()
            ),
            Self::InvalidLeadingOrTrailingHyphen { label } => write!(
                f,
                "invalid character '-' in DNS label '{label}'; labels cannot start or end with a hyphen"
            ),
            Self::InvalidChar { char, label } => {
                write!(f, "invalid character '{char}' in DNS label '{label}'")
            }
            Self::OctetOutOfRange { part, .. } => write!(
                f,
                "invalid IPv4 octet '{part}': must be an integer between 0 and {MAX_IPV4_OCTET}"
            ),
        }
    }
}

impl std::error::Error for HostError {}

/// Errors for port validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// Port is negative or larger than 65535
    OutOfRange {
        /// The rejected value
        port: i64,
    },
}

impl PortError {
    /// Returns the rejected port value.
    #[must_use]
    pub const fn port(&self) -> i64 {
        match self {
            Self::OutOfRange { port } => *port,
        }
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { port } => write!(
                f,
                "port number must be between 0 and {MAX_PORT}, found {port}"
            ),
        }
    }
}

impl std::error::Error for PortError {}

/// Any validation failure raised while configuring a builder.
///
/// The message is the one of the wrapped error, so prefix matching on
/// `to_string()` works the same for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriBuilderError {
    /// Scheme validation failed
    Scheme(SchemeError),
    /// Host validation failed
    Host(HostError),
    /// Port validation failed
    Port(PortError),
}

impl fmt::Display for UriBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheme(e) => write!(f, "{e}"),
            Self::Host(e) => write!(f, "{e}"),
            Self::Port(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UriBuilderError {}

impl From<SchemeError> for UriBuilderError {
    fn from(e: SchemeError) -> Self {
        Self::Scheme(e)
    }
}

impl From<HostError> for UriBuilderError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<PortError> for UriBuilderError {
    fn from(e: PortError) -> Self {
        Self::Port(e)
    }
}
