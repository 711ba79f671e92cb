//! The routable parts of a URL.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::url::query::{encode_query, parse_flag, parse_query};
use crate::utils::{join_path, parse_decimal, SEGMENT_DELIMITERS};

/// Path segments, query parameters and fragment of a URL.
///
/// A `Url` is built once per navigation or request and never mutated.
/// Path segments are never empty and never contain `/`, `?` or `#`; query
/// keys never contain `&`, `=` or `#`; query values are stored decoded.
/// Together these make `Url::parse(&url.to_string()) == url` hold for
/// every `Url`, however it was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    path: Vec<String>,
    query: BTreeMap<String, String>,
    fragment: Option<String>,
}

impl Url {
    /// Parse a raw `[path][?query][#fragment]` string.
    ///
    /// This never fails. Leading, trailing and repeated slashes are
    /// dropped, so the empty string and `"/"` both produce the root URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_route::Url;
    ///
    /// let url = Url::parse("//user//42/?tab=posts#top");
    /// assert_eq!(url.path(), ["user", "42"]);
    /// assert_eq!(url.get("tab"), Some("posts"));
    /// assert_eq!(url.fragment(), Some("top"));
    /// assert_eq!(url.to_string(), "/user/42?tab=posts#top");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };
        Self::from_raw_parts(path, query, fragment)
    }

    /// The root URL `/` with no query and no fragment.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a URL from path segments.
    ///
    /// Segments are split on `/`, `?` and `#` and empty pieces are
    /// dropped, keeping the same invariants as [`Url::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_route::Url;
    ///
    /// let url = Url::from_segments(["docs/intro", "a?b"]);
    /// assert_eq!(url.path(), ["docs", "intro", "a", "b"]);
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = segments
            .into_iter()
            .flat_map(|segment| split_path(segment.as_ref()))
            .collect();
        Self {
            path,
            ..Self::default()
        }
    }

    pub(crate) fn from_raw_parts(path: &str, query: Option<&str>, fragment: Option<&str>) -> Self {
        Self {
            path: split_path(path),
            query: query.map(parse_query).unwrap_or_default(),
            fragment: fragment.map(str::to_string),
        }
    }

    /// Return a copy of this URL with `key` set to `value`.
    ///
    /// Keys are stored verbatim, so `&`, `=` and `#` are removed from
    /// `key`; the value may hold anything.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut key = key.into();
        key.retain(|c| !matches!(c, '&' | '=' | '#'));
        self.query.insert(key, value.into());
        self
    }

    /// Return a copy of this URL with the given fragment.
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Path segments, in order.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Decoded query parameters.
    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// The fragment, without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether the path has no segments.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Look up a decoded query value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Look up a query value as a decimal integer.
    ///
    /// Returns `None` both when the key is missing and when the value is
    /// not an integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(parse_decimal)
    }

    /// Look up a query value as a boolean.
    ///
    /// `"true"` and `"1"` are true, any other present value is false, and
    /// a missing key is `None`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).map(parse_flag)
    }

    /// Render only the path, e.g. `/user/42`.
    pub fn path_to_string(&self) -> String {
        join_path(&self.path)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_to_string())?;
        if !self.query.is_empty() {
            write!(f, "?{}", encode_query(&self.query))?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

impl From<&str> for Url {
    fn from(raw: &str) -> Self {
        Url::parse(raw)
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Url::parse(raw))
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split(SEGMENT_DELIMITERS)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
