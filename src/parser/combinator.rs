//! The `Parser` type and the combinators that compose parsers.

use std::fmt;
use std::sync::Arc;

use crate::error::ParseFailure;
use crate::parser::state::ParserState;
use crate::url::Url;

type Step<A> = dyn for<'u> Fn(ParserState<'u>) -> Option<(A, ParserState<'u>)> + Send + Sync;

/// A composable parser over a URL's path segments.
///
/// A parser is a pure transition from a [`ParserState`] to either a value
/// plus the advanced state, or nothing. On failure the caller still holds
/// its own state, so a failed parser never leaves partial consumption
/// behind. Parsers are cheap to clone and safe to share between threads.
///
/// # Examples
///
/// ```
/// use typed_route::{parser, Url};
///
/// let user = parser::literal("user").then(parser::int());
///
/// assert_eq!(user.parse(&Url::parse("/user/42")), Some(42));
/// assert_eq!(user.parse(&Url::parse("/user/42/posts")), None);
/// assert_eq!(user.parse_partial(&Url::parse("/user/42/posts")), Some(42));
/// ```
pub struct Parser<A> {
    step: Arc<Step<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            step: Arc::clone(&self.step),
        }
    }
}

impl<A> fmt::Debug for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<A: 'static> Parser<A> {
    /// Wrap a transition function as a parser.
    ///
    /// The function must return `None` on failure; it is never given a
    /// chance to observe the state of a failed sibling.
    pub fn new<F>(step: F) -> Self
    where
        F: for<'u> Fn(ParserState<'u>) -> Option<(A, ParserState<'u>)> + Send + Sync + 'static,
    {
        Self {
            step: Arc::new(step),
        }
    }

    /// Run one step of the parser against `state`.
    pub fn run<'u>(&self, state: ParserState<'u>) -> Option<(A, ParserState<'u>)> {
        (self.step)(state)
    }

    /// Parse `url`, requiring every path segment to be consumed.
    ///
    /// A parser that only matches a prefix of the path is a non-match
    /// here, so `/user` never matches a grammar for `/user/:id` and
    /// `/user/42/extra` never matches a grammar for `/user/:id` either.
    pub fn parse(&self, url: &Url) -> Option<A> {
        match self.run(ParserState::new(url)) {
            Some((value, state)) if state.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Parse `url` without requiring full consumption of the path.
    ///
    /// Used when a route match is one part of a larger context that will
    /// consume the rest of the path itself, such as a nested layout.
    pub fn parse_partial(&self, url: &Url) -> Option<A> {
        self.run(ParserState::new(url)).map(|(value, _)| value)
    }

    /// Same outcome as [`Parser::parse`], but a failure says why.
    pub fn parse_with_error(&self, url: &Url) -> Result<A, ParseFailure> {
        let failure = match self.run(ParserState::new(url)) {
            Some((value, state)) if state.is_empty() => return Ok(value),
            Some((_, state)) => ParseFailure::Unconsumed {
                consumed: state.consumed().to_vec(),
                remaining: state.remaining().to_vec(),
            },
            None => ParseFailure::NoMatch {
                path: url.path().to_vec(),
            },
        };
        tracing::debug!(url = %url, error = %failure, "parse failed");
        Err(failure)
    }

    /// Transform the success value.
    pub fn map<B, F>(self, f: F) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Parser::new(move |state| self.run(state).map(|(value, next)| (f(value), next)))
    }

    /// Run `self`, then `next` on what is left, and pair the results.
    ///
    /// If `next` fails the whole sequence fails; `self` is not retried.
    pub fn and<B: 'static>(self, next: Parser<B>) -> Parser<(A, B)> {
        Parser::new(move |state| {
            let (first, state) = self.run(state)?;
            let (second, state) = next.run(state)?;
            Some(((first, second), state))
        })
    }

    /// Sequence with `next` and keep only `next`'s value.
    pub fn then<B: 'static>(self, next: Parser<B>) -> Parser<B> {
        self.and(next).map(|(_, second)| second)
    }

    /// Sequence with `next` and keep only this parser's value.
    pub fn skip<B: 'static>(self, next: Parser<B>) -> Parser<A> {
        self.and(next).map(|(first, _)| first)
    }

    /// Choose the next parser from this parser's value.
    pub fn flat_map<B, F>(self, f: F) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> Parser<B> + Send + Sync + 'static,
    {
        Parser::new(move |state| {
            let (value, state) = self.run(state)?;
            f(value).run(state)
        })
    }

    /// Keep a success only if `predicate` accepts the value.
    pub fn filter<P>(self, predicate: P) -> Parser<A>
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
    {
        Parser::new(move |state| self.run(state).filter(|(value, _)| predicate(value)))
    }

    /// Never fail: `Some(value)` on success, otherwise `None` with the
    /// original state.
    pub fn optional(self) -> Parser<Option<A>> {
        Parser::new(move |state| match self.run(state) {
            Some((value, next)) => Some((Some(value), next)),
            None => Some((None, state)),
        })
    }

    /// Never fail: fall back to `default` without consuming anything.
    pub fn with_default(self, default: A) -> Parser<A>
    where
        A: Clone + Send + Sync,
    {
        self.optional()
            .map(move |value| value.unwrap_or_else(|| default.clone()))
    }
}

/// Run `first` then `second`, pairing both values.
pub fn sequence<A: 'static, B: 'static>(first: Parser<A>, second: Parser<B>) -> Parser<(A, B)> {
    first.and(second)
}

/// Transform a parser's success value.
pub fn map<A, B, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    parser.map(f)
}

/// Try each parser in order against the same starting state; the first
/// success wins.
///
/// Every alternative restarts from the original state, never from where
/// a failed alternative stopped. Order matters: put more specific
/// alternatives first. An empty list never matches.
///
/// # Examples
///
/// ```
/// use typed_route::{parser, Url};
///
/// let route = parser::one_of(vec![
///     parser::literal("a").map(|_| "first"),
///     parser::literal("a").map(|_| "second"),
/// ]);
/// assert_eq!(route.parse(&Url::parse("/a")), Some("first"));
/// ```
pub fn one_of<A: 'static>(parsers: Vec<Parser<A>>) -> Parser<A> {
    Parser::new(move |state| parsers.iter().find_map(|parser| parser.run(state)))
}

/// Never fail; see [`Parser::optional`].
pub fn optional<A: 'static>(parser: Parser<A>) -> Parser<Option<A>> {
    parser.optional()
}

/// Keep successes accepted by `predicate`; see [`Parser::filter`].
pub fn filter<A, P>(parser: Parser<A>, predicate: P) -> Parser<A>
where
    A: 'static,
    P: Fn(&A) -> bool + Send + Sync + 'static,
{
    parser.filter(predicate)
}

/// Fall back to `default`; see [`Parser::with_default`].
pub fn with_default<A>(parser: Parser<A>, default: A) -> Parser<A>
where
    A: Clone + Send + Sync + 'static,
{
    parser.with_default(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::primitives::{int, literal, str, top};

    #[test]
    fn test_sequence_is_strict() {
        let parser = sequence(literal("a"), literal("b"));
        assert!(parser.parse(&Url::parse("/a/b")).is_some());
        assert!(parser.parse(&Url::parse("/a/c")).is_none());
        assert!(parser.parse(&Url::parse("/b/a")).is_none());
    }

    #[test]
    fn test_failed_sequence_leaves_state_alone() {
        let url = Url::parse("/a/x");
        let state = ParserState::new(&url);
        assert!(literal("a").and(int()).run(state).is_none());
        assert_eq!(state.remaining(), ["a", "x"]);
    }

    #[test]
    fn test_one_of_restarts_from_original_state() {
        // the first alternative consumes "a" before failing on "c"
        let parser = one_of(vec![
            literal("a").then(literal("b")).map(|_| 1),
            literal("a").then(literal("c")).map(|_| 2),
        ]);
        assert_eq!(parser.parse(&Url::parse("/a/c")), Some(2));
    }

    #[test]
    fn test_empty_one_of_never_matches() {
        let parser: Parser<()> = one_of(Vec::new());
        assert_eq!(parser.parse(&Url::root()), None);
        assert_eq!(parser.parse_partial(&Url::parse("/a")), None);
    }

    #[test]
    fn test_optional_keeps_original_state_on_failure() {
        let parser = literal("a").optional().and(str());
        assert_eq!(
            parser.parse(&Url::parse("/b")),
            Some((None, "b".to_string()))
        );
        assert_eq!(
            parser.parse(&Url::parse("/a/b")),
            Some((Some(()), "b".to_string()))
        );
    }

    #[test]
    fn test_filter_and_default() {
        let positive = int().filter(|n| *n > 0);
        assert_eq!(positive.parse(&Url::parse("/3")), Some(3));
        assert_eq!(positive.parse(&Url::parse("/-3")), None);

        let page = int().with_default(1);
        assert_eq!(page.parse(&Url::root()), Some(1));
        assert_eq!(page.parse(&Url::parse("/7")), Some(7));
        assert_eq!(page.parse(&Url::parse("/x")), None);
        assert_eq!(page.parse_partial(&Url::parse("/x")), Some(1));
    }

    #[test]
    fn test_flat_map_chooses_next_parser() {
        let parser = str().flat_map(|kind| match kind.as_str() {
            "n" => int().map(|n| n.to_string()),
            _ => str(),
        });
        assert_eq!(parser.parse(&Url::parse("/n/12")), Some("12".to_string()));
        assert_eq!(parser.parse(&Url::parse("/n/x")), None);
        assert_eq!(parser.parse(&Url::parse("/s/x")), Some("x".to_string()));
    }

    #[test]
    fn test_parse_with_error_reports_leftover() {
        let parser = literal("profile");
        let failure = parser
            .parse_with_error(&Url::parse("/profile/extra"))
            .unwrap_err();
        assert_eq!(
            failure,
            ParseFailure::Unconsumed {
                consumed: vec!["profile".to_string()],
                remaining: vec!["extra".to_string()],
            }
        );

        let failure = parser.parse_with_error(&Url::parse("/other")).unwrap_err();
        assert_eq!(
            failure,
            ParseFailure::NoMatch {
                path: vec!["other".to_string()]
            }
        );

        assert_eq!(parser.parse_with_error(&Url::parse("/profile")), Ok(()));
    }

    #[test]
    fn test_parsers_are_shareable() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let parser = literal("a").skip(top());
        assert_send_sync(&parser);

        let clone = parser.clone();
        let handle = std::thread::spawn(move || clone.parse(&Url::parse("/a")));
        assert_eq!(handle.join().unwrap(), Some(()));
    }
}
