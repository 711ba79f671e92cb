//! Bidirectional path segments.
//!
//! A [`Segment`] couples a parser with the serializer that writes back
//! exactly the path segments the parser consumes, so the two directions
//! of a route are defined in one place and cannot drift apart.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::parser::{self, Parser};

type Serializer<A> = dyn Fn(&A) -> Vec<String> + Send + Sync;

/// A parser paired with its inverse serializer.
///
/// For every value `a` the parser can produce, `serialize(a)` must be the
/// exact list of segments the parser consumed to produce it.
pub struct Segment<A> {
    parser: Parser<A>,
    serializer: Arc<Serializer<A>>,
}

impl<A> Clone for Segment<A> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            serializer: Arc::clone(&self.serializer),
        }
    }
}

impl<A> fmt::Debug for Segment<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment").finish_non_exhaustive()
    }
}

impl<A: 'static> Segment<A> {
    /// Pair `parser` with `serializer`.
    ///
    /// The caller is responsible for the two agreeing.
    pub fn new<F>(parser: Parser<A>, serializer: F) -> Self
    where
        F: Fn(&A) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            parser,
            serializer: Arc::new(serializer),
        }
    }

    /// The parsing direction.
    pub fn parser(&self) -> &Parser<A> {
        &self.parser
    }

    /// The serializing direction.
    pub fn serialize(&self, value: &A) -> Vec<String> {
        (self.serializer)(value)
    }

    /// Follow this segment with `next`, capturing both values.
    pub fn and<B: 'static>(self, next: Segment<B>) -> Segment<(A, B)> {
        let (first, second) = (self.serializer, next.serializer);
        Segment {
            parser: self.parser.and(next.parser),
            serializer: Arc::new(move |(a, b): &(A, B)| {
                let mut segments = first(a);
                segments.extend(second(b));
                segments
            }),
        }
    }

    /// Follow this segment with a segment that captures nothing.
    pub fn skip(self, next: Segment<()>) -> Segment<A> {
        let (first, second) = (self.serializer, next.serializer);
        Segment {
            parser: self.parser.skip(next.parser),
            serializer: Arc::new(move |value: &A| {
                let mut segments = first(value);
                segments.extend(second(&()));
                segments
            }),
        }
    }

    /// Map the captured value through an isomorphism.
    ///
    /// `into` is applied after parsing and `from` before serializing; they
    /// must be inverses of each other for the values this segment produces.
    pub fn map<B, F, G>(self, into: F, from: G) -> Segment<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
        G: Fn(&B) -> A + Send + Sync + 'static,
    {
        let serializer = self.serializer;
        Segment {
            parser: self.parser.map(into),
            serializer: Arc::new(move |value: &B| serializer(&from(value))),
        }
    }

    pub(crate) fn into_parts(self) -> (Parser<A>, Arc<Serializer<A>>) {
        (self.parser, self.serializer)
    }
}

impl Segment<()> {
    /// Follow this capture-less segment with `next`, keeping `next`'s value.
    pub fn then<B: 'static>(self, next: Segment<B>) -> Segment<B> {
        let (first, second) = (self.serializer, next.serializer);
        Segment {
            parser: self.parser.then(next.parser),
            serializer: Arc::new(move |value: &B| {
                let mut segments = first(&());
                segments.extend(second(value));
                segments
            }),
        }
    }
}

/// A fixed segment. Serializes to `[expected]`.
pub fn literal(expected: impl Into<String>) -> Segment<()> {
    let expected = expected.into();
    Segment::new(parser::literal(expected.clone()), move |_| {
        vec![expected.clone()]
    })
}

/// Any non-empty segment, serialized as-is.
pub fn str() -> Segment<String> {
    Segment::new(parser::str(), |value: &String| vec![value.clone()])
}

/// A signed decimal integer segment.
pub fn int() -> Segment<i64> {
    Segment::new(parser::int(), |value: &i64| vec![value.to_string()])
}

/// A hyphenated UUID segment, serialized in lowercase.
pub fn uuid() -> Segment<Uuid> {
    Segment::new(parser::uuid(), |value: &Uuid| {
        vec![value.hyphenated().to_string()]
    })
}

/// A slug segment such as `hello-world`.
///
/// A route holding a string that is not a slug has no URL:
/// [`build`](crate::builder::build) re-checks the serialized path with
/// this segment's parser and returns `None`.
pub fn slug() -> Segment<String> {
    Segment::new(parser::slug(), |value: &String| vec![value.clone()])
}

/// One segment with caller-supplied parse and serialize functions.
///
/// [`build`](crate::builder::build) only checks that `parse` accepts what
/// `serialize` writes. The caller must make sure
/// `parse(&serialize(&a)) == Some(a)` for every reachable `a`.
///
/// # Examples
///
/// ```
/// use typed_route::{build, segment};
///
/// let hex = segment::custom(
///     |s| u32::from_str_radix(s, 16).ok(),
///     |n: &u32| format!("{:x}", n),
/// );
/// let color = build(segment::literal("color").then(hex), |n| n, |n: &u32| Some(*n));
/// assert_eq!(color.serialize(&255).as_deref(), Some("/color/ff"));
/// assert_eq!(color.parse_str("/color/ff"), Some(255));
/// ```
pub fn custom<A, P, S>(parse: P, serialize: S) -> Segment<A>
where
    A: 'static,
    P: Fn(&str) -> Option<A> + Send + Sync + 'static,
    S: Fn(&A) -> String + Send + Sync + 'static,
{
    Segment::new(parser::custom(parse), move |value| vec![serialize(value)])
}

/// Sequence two segments; see [`Segment::and`].
pub fn sequence<A: 'static, B: 'static>(first: Segment<A>, second: Segment<B>) -> Segment<(A, B)> {
    first.and(second)
}

/// Matches the end of the path and serializes to nothing.
pub fn end() -> Segment<()> {
    Segment::new(parser::top(), |_| Vec::new())
}
