//! Parser combinator engine.
//!
//! This module contains the typed descent over a URL's path segments:
//! - [`ParserState`]: the cursor threaded through a parse
//! - [`Parser`]: the parser type and its combinators
//! - primitives for segments, query parameters and the fragment
//! - typed helpers (UUIDs, slugs, enumerations, regexes, rest-of-path)

pub mod combinator;
pub mod helpers;
pub mod primitives;
pub mod state;

pub use combinator::{filter, map, one_of, optional, sequence, with_default, Parser};
pub use helpers::{enumeration, regex, rest, rest_as_string, slug, uuid};
pub use primitives::{
    custom, fragment, fragment_required, int, literal, query, query_bool, query_int,
    query_required, str, top,
};
pub use state::ParserState;
