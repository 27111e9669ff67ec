//! Materialized URI values.

use std::fmt;

use log::debug;

use crate::encoding::encode_data;
use crate::host::Host;
use crate::scheme::Scheme;

/// Validated authority parts handed to the assembler by the absolute builder.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Authority<'a> {
    pub(crate) scheme: &'a Scheme,
    pub(crate) host: &'a Host,
    pub(crate) port: Option<u16>,
    pub(crate) user_name: Option<&'a str>,
    pub(crate) password: Option<&'a str>,
}

/// A URI materialized from a builder.
///
/// A `Uri` is a snapshot: later changes to the builder that produced it do
/// not affect it.
///
/// # Structure
///
/// ```text
/// absolute: scheme://[user[:password]@]host[:port]/path[?query][#fragment]
/// relative: /path[?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::{AbsoluteUriBuilder, BuildUri};
///
/// let uri = AbsoluteUriBuilder::new("http", "localhost")
///     .unwrap()
///     .with_port(8080)
///     .add_path("Item")
///     .add_query("id", "12345")
///     .uri();
///
/// assert_eq!(uri.as_str(), "http://localhost:8080/Item?id=12345");
/// assert_eq!(uri.port(), Some(8080));
/// assert_eq!(uri.query(), Some("id=12345"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: Option<Scheme>,
    host: Option<Host>,
    port: Option<u16>,
    user_name: Option<String>,
    password: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
    serialized: String,
}

impl Uri {
    /// Assembles a URI from validated and encoded parts.
    ///
    /// `path` is the rendered path without its leading slash, `query` the
    /// rendered query without `?` and `fragment` the already-encoded
    /// fragment. Empty query and fragment are dropped.
    pub(crate) fn assemble(
        authority: Option<Authority<'_>>,
        path: &str,
        query: &str,
        fragment: Option<&str>,
    ) -> Self {
        let path = format!("/{path}");
        let query = Some(query).filter(|q| !q.is_empty()).map(str::to_string);
        let fragment = fragment.filter(|f| !f.is_empty()).map(str::to_string);

        let user_name = authority
            .and_then(|a| a.user_name)
            .filter(|u| !u.is_empty())
            .map(|u| encode_data(u).into_owned());
        let password = user_name
            .as_ref()
            .and(authority.and_then(|a| a.password))
            .filter(|p| !p.is_empty())
            .map(|p| encode_data(p).into_owned());

        let mut serialized = String::new();
        if let Some(authority) = authority {
            serialized.push_str(authority.scheme.as_str());
            serialized.push_str("://");
            if let Some(user_name) = &user_name {
                serialized.push_str(user_name);
                if let Some(password) = &password {
                    serialized.push(':');
                    serialized.push_str(password);
                }
                serialized.push('@');
            }
            serialized.push_str(authority.host.as_str());
            if let Some(port) = authority.port {
                serialized.push(':');
                serialized.push_str(&port.to_string());
            }
        }
        serialized.push_str(&path);
        if let Some(query) = &query {
            serialized.push('?');
            serialized.push_str(query);
        }
        if let Some(fragment) = &fragment {
            serialized.push('#');
            serialized.push_str(fragment);
        }

        debug!(
            "assembled {} URI with path '{path}'",
            if authority.is_some() { "absolute" } else { "relative" }
        );

        Self {
            scheme: authority.map(|a| a.scheme.clone()),
            host: authority.map(|a| a.host.clone()),
            port: authority.and_then(|a| a.port),
            user_name,
            password,
            path,
            query,
            fragment,
            serialized,
        }
    }

    /// Returns the URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Returns true if the URI has a scheme and authority.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Returns true if the URI is a path-absolute relative reference.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }

    /// Returns the scheme of an absolute URI.
    #[must_use]
    pub const fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_ref()
    }

    /// Returns the host of an absolute URI.
    #[must_use]
    pub const fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    /// Returns the explicit port, if one was set.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the percent-encoded user name, if present.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Returns the percent-encoded password, if present.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the path, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query without the leading `?`, if non-empty.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the percent-encoded fragment without the leading `#`, if non-empty.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialized)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.serialized
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.serialized
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.serialized)
    }
}
