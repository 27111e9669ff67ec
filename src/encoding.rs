//! Percent-encoding shared by every component the builders escape.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 unreserved set (`ALPHA / DIGIT / "-" / "." / "_" / "~"`).
///
/// Used for path segments, query names and values, the fragment and the
/// userinfo, so none of them can ever introduce a delimiter.
pub const DATA: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input` with the [`DATA`] set, borrowing when nothing
/// needs escaping.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::encode_data;
///
/// assert_eq!(encode_data("a b/c"), "a%20b%2Fc");
/// assert_eq!(encode_data("plain-text_1.0~"), "plain-text_1.0~");
/// ```
#[must_use]
pub fn encode_data(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, DATA).into()
}
