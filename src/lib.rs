//! Fluent builder for validated absolute and relative URIs.
//!
//! This crate assembles URIs from discrete components (scheme, host, port,
//! credentials, path segments, query parameters, fragment), validating the
//! syntactic ones before they are accepted and percent-encoding the rest.
//!
//! # Overview
//!
//! ```text
//! absolute: scheme://[user[:password]@]host[:port]/path[?query][#fragment]
//! relative: /path[?query][#fragment]
//! ```
//!
//! - Scheme and host are validated when an [`AbsoluteUriBuilder`] is
//!   created; a port when it is set with [`AbsoluteUriBuilder::try_port`].
//! - Path components are split on `/`, stripped of empty pieces and
//!   percent-encoded segment by segment ([`PathBuilder`]).
//! - Query parameters form an ordered multi-map; a repeated name renders as
//!   repeated pairs ([`QueryBuilder`]).
//!
//! # Quick Start
//!
//! ```rust
//! use fluent_uri_builder::{AbsoluteUriBuilder, BuildUri};
//!
//! let uri = AbsoluteUriBuilder::new("http", "localhost")
//!     .unwrap()
//!     .add_paths(["Item", "12345"])
//!     .add_query("id", "12345")
//!     .uri();
//!
//! assert_eq!(uri.as_str(), "http://localhost/Item/12345?id=12345");
//! ```
//!
//! Relative references use [`RelativeUriBuilder`]:
//!
//! ```rust
//! use fluent_uri_builder::{BuildUri, RelativeUriBuilder};
//!
//! let uri = RelativeUriBuilder::new()
//!     .add_path("Item")
//!     .add_query("id", "12345")
//!     .add_query("id", "54321")
//!     .uri();
//!
//! assert_eq!(uri.as_str(), "/Item?id=12345&id=54321");
//! ```
//!
//! # Validation
//!
//! | Component | Rule |
//! |-----------|------|
//! | Scheme | letter first, letter or digit last, `[A-Za-z0-9+.-]` inside |
//! | Host (IPv4) | four all-digit parts, each 0-255 |
//! | Host (all-digit) | every part 0-255, whatever the part count |
//! | Host (DNS) | labels of 1-63 ASCII letters, digits, hyphens; no edge hyphen |
//! | Port | 0-65535 |
//!
//! Validation is syntactic only. IPv6 literals are not supported.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod constants;
mod encoding;
mod error;
mod host;
#[cfg(kani)]
mod kani_impls;
mod path;
pub mod prelude;
mod query;
mod scheme;
mod uri;
mod validate;

pub use builder::{AbsoluteUriBuilder, BuildUri, RelativeUriBuilder};
pub use constants::{IPV4_PART_COUNT, MAX_DNS_LABEL_LENGTH, MAX_IPV4_OCTET, MAX_PORT};
pub use encoding::{DATA, encode_data};
pub use error::{HostError, PortError, SchemeError, UriBuilderError};
pub use host::{Host, HostKind};
pub use path::PathBuilder;
pub use query::QueryBuilder;
pub use scheme::Scheme;
pub use uri::Uri;
pub use validate::{is_scheme_char, validate_host, validate_port, validate_scheme};
