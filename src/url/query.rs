//! Query-string parsing and encoding.
//!
//! Keys are taken verbatim; only values are percent-decoded on parse and
//! percent-encoded on serialize.

use std::collections::BTreeMap;

/// Parse a raw query string (without the leading `?`) into a map.
///
/// Pairs are split on `&`, then each pair on its first `=`. A bare key
/// maps to the empty string. Empty pairs are skipped and a repeated key
/// keeps its last value. Values that do not decode to valid UTF-8 are
/// kept as written.
///
/// # Examples
///
/// ```
/// use typed_route::url::query::parse_query;
///
/// let params = parse_query("q=hello%20world&flag");
/// assert_eq!(params.get("q").map(String::as_str), Some("hello world"));
/// assert_eq!(params.get("flag").map(String::as_str), Some(""));
/// ```
pub fn parse_query(raw: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(key.to_string(), decode_value(value));
    }
    params
}

/// Encode a query map as `key=value` pairs joined with `&`.
///
/// Keys come out in sorted order so equal maps always encode to the same
/// string.
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Interpret a query value as a boolean: `"true"` and `"1"` are true,
/// everything else is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(value, "true" | "1")
}

fn decode_value(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}
