//! Query accumulator for multi-valued parameters.

use std::cell::OnceCell;
use std::fmt;

use log::trace;

use crate::encoding::encode_data;

/// Accumulates query parameters and renders them as a query string.
///
/// Parameters form an ordered multi-map: names keep the order in which they
/// were first added, and values keep their insertion order under each name.
/// A name added several times renders as repeated pairs (`id=1&id=2`),
/// never as a comma-joined list.
///
/// The rendered string is cached until the next mutation. The cache lives in
/// a [`OnceCell`], so a `QueryBuilder` is `Send` but not `Sync`; share it
/// between threads only behind external synchronization.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::QueryBuilder;
///
/// let mut query = QueryBuilder::new();
/// query.add("id", "1").add("q", "a b").add("id", "2");
/// assert_eq!(query.query(), "id=1&id=2&q=a%20b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    params: Vec<(String, Vec<String>)>,
    rendered: OnceCell<String>,
}

impl QueryBuilder {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one value under `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.values_mut(name.into()).push(value);
        self.rendered.take();
        self
    }

    /// Adds every value of `values` under `name`.
    ///
    /// The name is registered even when `values` is empty; such a name is
    /// skipped when rendering.
    pub fn add_values<I, V>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values_mut(name.into())
            .extend(values.into_iter().map(Into::into));
        self.rendered.take();
        self
    }

    /// Adds every `(name, value)` pair in the iterator's own order.
    ///
    /// Any ordered multi-map that can be viewed as a sequence of pairs can be
    /// imported this way, including another builder's [`iter`](Self::iter).
    pub fn add_all<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.add(name, value);
        }
        self
    }

    /// Returns the rendered query string, without the leading `?`.
    ///
    /// Names that are empty or whitespace-only, and names without values,
    /// are omitted. Names and values are percent-encoded.
    #[must_use]
    pub fn query(&self) -> &str {
        self.rendered.get_or_init(|| self.render())
    }

    /// Returns the first value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns every value for `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Returns the parameter names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(name, _)| name.as_str())
    }

    /// Returns every raw `(name, value)` pair in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(name, values)| {
            values.iter().map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Returns the number of `(name, value)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.iter().map(|(_, values)| values.len()).sum()
    }

    /// Returns true if no value has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn values_mut(&mut self, name: String) -> &mut Vec<String> {
        let idx = match self.params.iter().position(|(n, _)| *n == name) {
            Some(idx) => idx,
            None => {
                self.params.push((name, Vec::new()));
                self.params.len() - 1
            }
        };
        &mut self.params[idx].1
    }

    fn render(&self) -> String {
        trace!("rendering query string from {} parameter names", self.params.len());

        let mut out = String::new();
        for (name, values) in &self.params {
            if name.trim().is_empty() {
                continue;
            }

            let name = encode_data(name);
            for value in values {
                if !out.is_empty() {
                    out.push('&');
                }
                out.push_str(&name);
                out.push('=');
                out.push_str(&encode_data(value));
            }
        }
        out
    }
}

impl PartialEq for QueryBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for QueryBuilder {}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query())
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryBuilder {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryBuilder {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        query.add_all(iter);
        query
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryBuilder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryBuilder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pairs = Vec::<(String, String)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
