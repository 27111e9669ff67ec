//! Constants for URI component validation.

/// Largest valid port number.
pub const MAX_PORT: u16 = 65535;

/// DNS label maximum length.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// Largest value of a single IPv4 octet.
pub const MAX_IPV4_OCTET: u8 = 255;

/// Number of dot-separated parts in an IPv4 address.
pub const IPV4_PART_COUNT: usize = 4;
