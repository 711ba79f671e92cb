//! Bidirectional route builder.
//!
//! This module keeps parsing and serialization of routes coupled:
//! - [`Segment`]: a parser paired with its inverse serializer
//! - [`RouteDefinition`] and [`build`]: one `parse`/`serialize` pair per route
//! - [`Router`]: a route definition with a not-found fallback

pub mod definition;
pub mod router;
pub mod segment;

pub use definition::{build, RouteDefinition};
pub use router::{Router, RouterConfig, FALLBACK_PATH};
pub use segment::Segment;
