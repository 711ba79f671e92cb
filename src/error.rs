//! Error types for route construction and parse diagnostics.
//!
//! Matching itself never fails with an error: parsers and route
//! definitions report a non-match as `None`. The types here cover the
//! few operations that can genuinely go wrong at construction time, and
//! the optional diagnostic returned by [`Parser::parse_with_error`].
//!
//! [`Parser::parse_with_error`]: crate::parser::Parser::parse_with_error

use thiserror::Error;

/// Errors raised while building routing inputs or combinators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// An absolute URL could not be parsed by the `url` crate.
    #[error("Invalid absolute URL: {0}")]
    InvalidAbsoluteUrl(String),

    /// A segment pattern is not a valid regular expression.
    #[error("Invalid segment pattern: {0}")]
    InvalidPattern(String),
}

impl From<::url::ParseError> for RouteError {
    fn from(err: ::url::ParseError) -> Self {
        RouteError::InvalidAbsoluteUrl(err.to_string())
    }
}

impl From<regex::Error> for RouteError {
    fn from(err: regex::Error) -> Self {
        RouteError::InvalidPattern(err.to_string())
    }
}

/// Why a full-match parse did not produce a value.
///
/// Returned by [`Parser::parse_with_error`](crate::parser::Parser::parse_with_error).
/// The outcome is always the same as the one `parse` would give; this
/// only adds detail for debugging and telemetry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The parser rejected the input outright.
    #[error("no route matched path /{}", .path.join("/"))]
    NoMatch {
        /// The full path that was offered to the parser.
        path: Vec<String>,
    },

    /// The parser matched a prefix of the path but segments remained.
    #[error("route matched /{} but left /{} unconsumed", .consumed.join("/"), .remaining.join("/"))]
    Unconsumed {
        /// Segments the parser consumed.
        consumed: Vec<String>,
        /// Segments left over after the parser finished.
        remaining: Vec<String>,
    },
}

impl ParseFailure {
    /// Segments that were left unconsumed, empty for an outright rejection.
    pub fn remaining(&self) -> &[String] {
        match self {
            ParseFailure::NoMatch { .. } => &[],
            ParseFailure::Unconsumed { remaining, .. } => remaining,
        }
    }
}
