//! Small string helpers shared by the URL model, the parser engine and
//! the route builder.

/// Parse a base-10 signed integer.
///
/// Accepts an optional leading `-` followed by one or more ASCII digits.
/// A leading `+`, whitespace, or any other character is rejected, so every
/// accepted input is the canonical rendering of some integer (modulo
/// leading zeros and `-0`).
///
/// # Examples
///
/// ```
/// use typed_route::utils::parse_decimal;
///
/// assert_eq!(parse_decimal("42"), Some(42));
/// assert_eq!(parse_decimal("-5"), Some(-5));
/// assert_eq!(parse_decimal("+5"), None);
/// assert_eq!(parse_decimal("4a"), None);
/// ```
pub fn parse_decimal(input: &str) -> Option<i64> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Check whether a segment is a URL slug: lowercase ASCII letters and
/// digits in runs separated by single hyphens.
///
/// # Examples
///
/// ```
/// use typed_route::utils::is_slug;
///
/// assert!(is_slug("hello-world-2"));
/// assert!(!is_slug("Hello"));
/// assert!(!is_slug("-leading"));
/// assert!(!is_slug("double--hyphen"));
/// ```
pub fn is_slug(input: &str) -> bool {
    !input.is_empty()
        && input.split('-').all(|run| {
            !run.is_empty()
                && run
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Characters that end a path segment when a URL is parsed.
pub const SEGMENT_DELIMITERS: [char; 3] = ['/', '?', '#'];

/// Check whether a string survives as a single path segment: non-empty
/// and free of [`SEGMENT_DELIMITERS`].
///
/// # Examples
///
/// ```
/// use typed_route::utils::is_path_segment;
///
/// assert!(is_path_segment("user"));
/// assert!(is_path_segment("%2F"));
/// assert!(!is_path_segment(""));
/// assert!(!is_path_segment("a/b"));
/// assert!(!is_path_segment("a?b"));
/// ```
pub fn is_path_segment(input: &str) -> bool {
    !input.is_empty() && !input.contains(SEGMENT_DELIMITERS)
}

/// Render path segments as an absolute path: `/` followed by the
/// segments joined with `/`.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::from("/");
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            path.push('/');
        }
        path.push_str(segment.as_ref());
    }
    path
}
