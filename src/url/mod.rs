//! URL model.
//!
//! This module contains the routable view of a URL:
//! - [`Url`]: path segments, decoded query map and fragment
//! - query-string parsing and encoding helpers
//! - conversion from absolute URLs / host location objects

pub mod location;
pub mod model;
pub mod query;

pub use model::Url;
pub use query::{encode_query, parse_query};
