//! Convenient re-exports for glob imports.
//!
//! This module brings the builders, the [`BuildUri`](crate::BuildUri) trait
//! needed to call their shared methods, and the error types into scope:
//!
//! ```rust
//! use fluent_uri_builder::prelude::*;
//!
//! let uri = AbsoluteUriBuilder::new("https", "example.com")
//!     .unwrap()
//!     .add_path("docs")
//!     .uri();
//! assert_eq!(uri.as_str(), "https://example.com/docs");
//! ```

pub use crate::{
    // Builders
    AbsoluteUriBuilder, BuildUri, RelativeUriBuilder,
    // Components
    Host, HostKind, PathBuilder, QueryBuilder, Scheme, Uri,
    // Errors
    HostError, PortError, SchemeError, UriBuilderError,
};
