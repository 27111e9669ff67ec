//! Path accumulator with per-segment percent-encoding.

use std::fmt;

use crate::encoding::encode_data;

/// Accumulates percent-encoded path segments.
///
/// Every input is split on `/`, empty pieces are dropped (so leading,
/// trailing and doubled slashes are no-ops), and each remaining piece is
/// percent-encoded on its own. A stored segment therefore never contains a
/// literal `/` and is never empty.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::PathBuilder;
///
/// let mut path = PathBuilder::new();
/// path.add_path("/users/").add_path("john doe");
/// assert_eq!(path.path(), "users/john%20doe");
///
/// path.set_path("items//42");
/// assert_eq!(path.path(), "items/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuilder {
    segments: Vec<String>,
}

impl PathBuilder {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the segments of one slash-separated component.
    pub fn add_path(&mut self, component: &str) -> &mut Self {
        self.segments.extend(Self::encode_component(component));
        self
    }

    /// Appends the segments of several components, in order.
    pub fn add_paths<I, S>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for component in components {
            self.add_path(component.as_ref());
        }
        self
    }

    /// Replaces the whole path with the segments of `component`.
    pub fn set_path(&mut self, component: &str) -> &mut Self {
        self.set_paths([component])
    }

    /// Replaces the whole path with the segments of `components`.
    ///
    /// The new segment list is built before the old one is dropped.
    pub fn set_paths<I, S>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut replacement = Self::new();
        replacement.add_paths(components);
        *self = replacement;
        self
    }

    /// Removes every segment.
    pub fn clear(&mut self) -> &mut Self {
        self.segments.clear();
        self
    }

    /// Returns the segments joined by `/`, without a leading slash.
    ///
    /// An empty path renders as the empty string.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Returns an iterator over the encoded segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if no segment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn encode_component(component: &str) -> impl Iterator<Item = String> + '_ {
        component
            .split('/')
            .filter(|piece| !piece.is_empty())
            .map(|piece| encode_data(piece).into_owned())
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl<S: AsRef<str>> Extend<S> for PathBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_paths(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut path = Self::new();
        path.add_paths(iter);
        path
    }
}
