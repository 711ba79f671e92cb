//! Parse-in-progress state.

use crate::url::Url;

/// A cursor into a URL's path segments.
///
/// The state borrows the URL being parsed, so every parser can read the
/// query and fragment no matter how much of the path has been consumed.
/// It is `Copy`: advancing produces a new state and leaves the old one
/// untouched, which is what lets alternatives restart from the same
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState<'u> {
    url: &'u Url,
    offset: usize,
}

impl<'u> ParserState<'u> {
    /// Start at the first path segment of `url`.
    pub fn new(url: &'u Url) -> Self {
        Self { url, offset: 0 }
    }

    /// The URL being parsed.
    pub fn url(&self) -> &'u Url {
        self.url
    }

    /// Segments not yet consumed.
    pub fn remaining(&self) -> &'u [String] {
        &self.url.path()[self.offset..]
    }

    /// Segments consumed so far.
    pub fn consumed(&self) -> &'u [String] {
        &self.url.path()[..self.offset]
    }

    /// The next unconsumed segment.
    pub fn head(&self) -> Option<&'u str> {
        self.remaining().first().map(String::as_str)
    }

    /// Whether every segment has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Consume `count` segments, stopping at the end of the path.
    pub fn advance(self, count: usize) -> Self {
        let offset = self.offset.saturating_add(count).min(self.url.path().len());
        Self { offset, ..self }
    }

    /// Consume every remaining segment.
    pub fn finish(self) -> Self {
        Self {
            offset: self.url.path().len(),
            ..self
        }
    }
}
