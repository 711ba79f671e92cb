//! typed-route - type-safe, bidirectional URL routing
//!
//! This crate parses a URL's path, query and fragment into an
//! application-defined route value, and serializes route values back into
//! URLs, so that `parse(serialize(route)) == route` for every route the
//! grammar accepts.
//!
//! # Features
//!
//! - **Composable**: routes are built from small parsers with ordinary
//!   function composition
//! - **Bidirectional**: each path segment carries its own serializer, so
//!   the two directions of a route cannot drift apart
//! - **Exact matching**: top-level parsing must consume the whole path
//! - **Total**: malformed input is a non-match (`None`), never a panic
//! - **Shareable**: parsers and route definitions are `Send + Sync`
//!
//! # Quick Start
//!
//! ```
//! use typed_route::{build, segment, RouteDefinition, Url};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Route {
//!     Home,
//!     User(i64),
//! }
//!
//! let routes = RouteDefinition::one_of(vec![
//!     build(segment::end(), |()| Route::Home, |r| matches!(r, Route::Home).then_some(())),
//!     build(
//!         segment::literal("user").then(segment::int()),
//!         Route::User,
//!         |r| match r {
//!             Route::User(id) => Some(*id),
//!             _ => None,
//!         },
//!     ),
//! ]);
//!
//! // URL -> route
//! assert_eq!(routes.parse(&Url::parse("/user/42/")), Some(Route::User(42)));
//!
//! // route -> URL
//! assert_eq!(routes.serialize(&Route::User(42)).as_deref(), Some("/user/42"));
//!
//! // partial matches are rejected
//! assert_eq!(routes.parse(&Url::parse("/user/42/extra")), None);
//! ```
//!
//! # Layers
//!
//! | Module      | Contents |
//! |-------------|----------|
//! | [`url`]     | [`Url`]: path segments, decoded query map, fragment |
//! | [`parser`]  | [`Parser`] combinators over path segments, query and fragment |
//! | [`builder`] | [`Segment`], [`RouteDefinition`], [`Router`] |
//!
//! The [`parser`] module can be used on its own when only the parsing
//! direction is needed, for instance to read query parameters:
//!
//! ```
//! use typed_route::{parser, Url};
//!
//! let search = parser::literal("search")
//!     .then(parser::query_required("q"))
//!     .and(parser::query_int("page"));
//!
//! let url = Url::parse("/search?page=5&q=hello%20world");
//! assert_eq!(search.parse(&url), Some(("hello world".to_string(), Some(5))));
//! ```
//!
//! # Error Handling
//!
//! Matching never returns errors: a URL that does not fit the grammar is
//! `None`. [`RouteError`] covers the few fallible constructors (absolute
//! URL parsing, regex segment patterns), and [`ParseFailure`] is an
//! optional diagnostic from [`Parser::parse_with_error`].

// Re-export the URL model
pub use crate::url::Url;

// Re-export the parser engine
pub use parser::{Parser, ParserState};

// Re-export the route builder
pub use builder::{build, segment, RouteDefinition, Router, RouterConfig, Segment};

// Re-export public types
pub use error::{ParseFailure, RouteError};

// Module declarations
pub mod builder;
pub mod error;
pub mod parser;
pub mod url;
pub mod utils;
