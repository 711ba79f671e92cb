//! A route definition with a not-found fallback.
//!
//! Applications usually want total functions at their edges: every URL
//! maps to some route (a 404 page at worst) and every route maps to some
//! URL. [`Router`] binds a fallback route to a [`RouteDefinition`] to
//! provide exactly that.

use crate::builder::definition::RouteDefinition;
use crate::url::Url;

/// Path returned by [`Router::serialize`] for routes no definition owns.
pub const FALLBACK_PATH: &str = "/";

/// Configuration record for a [`Router`].
#[derive(Debug, Clone)]
pub struct RouterConfig<R> {
    /// The grammar, usually built with [`RouteDefinition::one_of`].
    pub definition: RouteDefinition<R>,
    /// Route returned for URLs the grammar does not match.
    pub not_found: R,
}

/// Total `parse`/`serialize` over a route definition.
///
/// # Examples
///
/// ```
/// use typed_route::{build, segment, Router, RouterConfig};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Route { About, NotFound }
///
/// let router = Router::new(RouterConfig {
///     definition: build(segment::literal("about"), |()| Route::About, |r| {
///         matches!(r, Route::About).then_some(())
///     }),
///     not_found: Route::NotFound,
/// });
///
/// assert_eq!(router.parse_str("/about"), Route::About);
/// assert_eq!(router.parse_str("/missing"), Route::NotFound);
/// assert_eq!(router.serialize(&Route::NotFound), "/");
/// ```
#[derive(Debug, Clone)]
pub struct Router<R> {
    definition: RouteDefinition<R>,
    not_found: R,
}

impl<R: Clone + 'static> Router<R> {
    /// Create a router from its configuration.
    pub fn new(config: RouterConfig<R>) -> Self {
        Self {
            definition: config.definition,
            not_found: config.not_found,
        }
    }

    /// Parse a URL, falling back to the not-found route.
    pub fn parse(&self, url: &Url) -> R {
        match self.definition.parse(url) {
            Some(route) => route,
            None => {
                tracing::debug!(url = %url, "no route matched, using not-found route");
                self.not_found.clone()
            }
        }
    }

    /// Parse a raw URL string, falling back to the not-found route.
    pub fn parse_str(&self, raw: &str) -> R {
        self.parse(&Url::parse(raw))
    }

    /// Parse a URL, returning `None` instead of the fallback.
    pub fn try_parse(&self, url: &Url) -> Option<R> {
        self.definition.parse(url)
    }

    /// Serialize a route, falling back to [`FALLBACK_PATH`].
    pub fn serialize(&self, route: &R) -> String {
        self.definition.serialize(route).unwrap_or_else(|| {
            tracing::debug!("route has no URL, using fallback path");
            FALLBACK_PATH.to_string()
        })
    }

    /// The underlying route definition.
    pub fn definition(&self) -> &RouteDefinition<R> {
        &self.definition
    }

    /// The fallback route.
    pub fn not_found(&self) -> &R {
        &self.not_found
    }
}

impl<R: Clone + 'static> From<RouterConfig<R>> for Router<R> {
    fn from(config: RouterConfig<R>) -> Self {
        Router::new(config)
    }
}
