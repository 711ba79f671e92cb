//! Primitive parsers: path segments, query parameters and the fragment.
//!
//! Path primitives consume at most one segment and succeed or fail as a
//! unit. Query and fragment primitives never consume path segments.

use crate::parser::combinator::Parser;
use crate::utils::parse_decimal;

/// Succeed with `()` when no path segments remain. Consumes nothing.
pub fn top() -> Parser<()> {
    Parser::new(|state| state.is_empty().then_some(((), state)))
}

/// Match one segment equal to `expected` (case-sensitive).
pub fn literal(expected: impl Into<String>) -> Parser<()> {
    let expected = expected.into();
    custom(move |segment| (segment == expected).then_some(()))
}

/// Match any non-empty segment and return it.
pub fn str() -> Parser<String> {
    custom(|segment| (!segment.is_empty()).then(|| segment.to_string()))
}

/// Match a segment holding a base-10 signed integer, such as `42` or `-5`.
pub fn int() -> Parser<i64> {
    custom(parse_decimal)
}

/// Match one segment accepted by `validate`.
///
/// The segment is consumed only when `validate` returns a value.
///
/// # Examples
///
/// ```
/// use typed_route::{parser, Url};
///
/// let even = parser::custom(|segment| {
///     segment.parse::<u32>().ok().filter(|n| n % 2 == 0)
/// });
/// assert_eq!(even.parse(&Url::parse("/4")), Some(4));
/// assert_eq!(even.parse(&Url::parse("/5")), None);
/// ```
pub fn custom<A, F>(validate: F) -> Parser<A>
where
    A: 'static,
    F: Fn(&str) -> Option<A> + Send + Sync + 'static,
{
    Parser::new(move |state| {
        let value = validate(state.head()?)?;
        Some((value, state.advance(1)))
    })
}

/// Read an optional query parameter. Never fails.
pub fn query(key: impl Into<String>) -> Parser<Option<String>> {
    let key = key.into();
    Parser::new(move |state| Some((state.url().get(&key).map(String::from), state)))
}

/// Read a query parameter as an integer. Missing and unparsable values
/// are both `None`. Never fails.
pub fn query_int(key: impl Into<String>) -> Parser<Option<i64>> {
    let key = key.into();
    Parser::new(move |state| Some((state.url().get_int(&key), state)))
}

/// Read a query parameter as a boolean. Missing is `None`. Never fails.
pub fn query_bool(key: impl Into<String>) -> Parser<Option<bool>> {
    let key = key.into();
    Parser::new(move |state| Some((state.url().get_bool(&key), state)))
}

/// Read a query parameter that must be present.
pub fn query_required(key: impl Into<String>) -> Parser<String> {
    let key = key.into();
    Parser::new(move |state| {
        let value = state.url().get(&key)?.to_string();
        Some((value, state))
    })
}

/// Read the fragment if there is one. Never fails.
pub fn fragment() -> Parser<Option<String>> {
    Parser::new(|state| Some((state.url().fragment().map(String::from), state)))
}

/// Read the fragment, failing when the URL has none.
pub fn fragment_required() -> Parser<String> {
    Parser::new(|state| {
        let value = state.url().fragment()?.to_string();
        Some((value, state))
    })
}
