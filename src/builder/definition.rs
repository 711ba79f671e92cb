//! Route definitions: one `parse`/`serialize` pair per route.

use std::fmt;
use std::sync::Arc;

use crate::builder::segment::Segment;
use crate::parser;
use crate::url::Url;
use crate::utils::{is_path_segment, join_path};

type ParseFn<R> = dyn Fn(&Url) -> Option<R> + Send + Sync;
type SerializeFn<R> = dyn Fn(&R) -> Option<String> + Send + Sync;

/// A bidirectional mapping between URLs and route values of type `R`.
///
/// For every route `r` this definition can serialize,
/// `parse(&Url::parse(&serialize(&r)?))` gives back `r`.
pub struct RouteDefinition<R> {
    parse: Arc<ParseFn<R>>,
    serialize: Arc<SerializeFn<R>>,
}

impl<R> Clone for RouteDefinition<R> {
    fn clone(&self) -> Self {
        Self {
            parse: Arc::clone(&self.parse),
            serialize: Arc::clone(&self.serialize),
        }
    }
}

impl<R> fmt::Debug for RouteDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition").finish_non_exhaustive()
    }
}

impl<R: 'static> RouteDefinition<R> {
    /// Wrap a parse function and a serialize function.
    ///
    /// Prefer [`build`], which derives both from a single [`Segment`].
    pub fn new<P, S>(parse: P, serialize: S) -> Self
    where
        P: Fn(&Url) -> Option<R> + Send + Sync + 'static,
        S: Fn(&R) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            parse: Arc::new(parse),
            serialize: Arc::new(serialize),
        }
    }

    /// Parse a URL into a route value.
    pub fn parse(&self, url: &Url) -> Option<R> {
        (self.parse)(url)
    }

    /// Parse a raw URL string into a route value.
    pub fn parse_str(&self, raw: &str) -> Option<R> {
        self.parse(&Url::parse(raw))
    }

    /// Render a route value as a path, or `None` if this definition does
    /// not own the value.
    pub fn serialize(&self, route: &R) -> Option<String> {
        (self.serialize)(route)
    }

    /// Combine definitions, trying each in order.
    ///
    /// Both directions are first-match-wins: `parse` returns the first
    /// definition's successful parse, and `serialize` the first
    /// definition's successful serialization. When two definitions could
    /// serialize the same value, the earlier one decides its URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_route::{build, segment, RouteDefinition};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum Route { Home, User(i64) }
    ///
    /// let routes = RouteDefinition::one_of(vec![
    ///     build(segment::end(), |()| Route::Home, |r| matches!(r, Route::Home).then_some(())),
    ///     build(
    ///         segment::literal("user").then(segment::int()),
    ///         Route::User,
    ///         |r| match r { Route::User(id) => Some(*id), _ => None },
    ///     ),
    /// ]);
    ///
    /// assert_eq!(routes.serialize(&Route::User(42)).as_deref(), Some("/user/42"));
    /// assert_eq!(routes.parse_str("/user/42"), Some(Route::User(42)));
    /// assert_eq!(routes.parse_str("/"), Some(Route::Home));
    /// ```
    pub fn one_of(definitions: Vec<RouteDefinition<R>>) -> Self {
        let parsers = definitions.clone();
        RouteDefinition::new(
            move |url| parsers.iter().find_map(|definition| definition.parse(url)),
            move |route| {
                let path = definitions
                    .iter()
                    .find_map(|definition| definition.serialize(route));
                if path.is_none() {
                    tracing::trace!("no route definition serializes this value");
                }
                path
            },
        )
    }
}

/// Build a route definition from a segment and the mappings between its
/// captured value and the route type.
///
/// `parse` requires the segment to consume the entire path: the segment's
/// parser is followed by an end-of-path check, so a segment shorter than
/// the path never matches a prefix.
///
/// `serialize` returns `None` whenever `from_route` does. It also returns
/// `None` when a serialized segment is empty or contains `/`, `?` or `#`,
/// and when the rendered path is rejected by the segment's own parser
/// (a non-slug string given to [`segment::slug`](crate::builder::segment::slug),
/// for instance). Any path it does return parses back through this
/// definition.
///
/// # Examples
///
/// ```
/// use typed_route::{build, segment};
///
/// let profile = build(segment::literal("profile"), |()| "profile", |_| Some(()));
/// assert_eq!(profile.parse_str("/profile"), Some("profile"));
/// assert_eq!(profile.parse_str("/profile/extra"), None);
/// assert_eq!(profile.serialize(&"profile").as_deref(), Some("/profile"));
/// ```
pub fn build<A, R, T, F>(segment: Segment<A>, to_route: T, from_route: F) -> RouteDefinition<R>
where
    A: 'static,
    R: 'static,
    T: Fn(A) -> R + Send + Sync + 'static,
    F: Fn(&R) -> Option<A> + Send + Sync + 'static,
{
    let (inner, serializer) = segment.into_parts();
    let full = inner.skip(parser::top());
    let check = full.clone();
    RouteDefinition::new(
        move |url| full.parse(url).map(&to_route),
        move |route| {
            let value = from_route(route)?;
            let segments = serializer(&value);
            if !segments.iter().all(|segment| is_path_segment(segment)) {
                tracing::trace!(?segments, "segment value has no path encoding");
                return None;
            }
            let path = join_path(&segments);
            if check.parse(&Url::parse(&path)).is_none() {
                tracing::trace!(%path, "serialized path rejected by its own parser");
                return None;
            }
            Some(path)
        },
    )
}
