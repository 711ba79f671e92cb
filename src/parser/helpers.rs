//! Typed segment helpers built on the primitives.

use regex::Regex;
use uuid::Uuid;

use crate::error::RouteError;
use crate::parser::combinator::Parser;
use crate::parser::primitives::custom;
use crate::utils::is_slug;

/// Match a hyphenated UUID segment, e.g.
/// `67e55044-10b1-426f-9247-bb680e5fe0c8`. Upper and lower case hex are
/// both accepted.
pub fn uuid() -> Parser<Uuid> {
    custom(|segment| {
        if segment.len() != 36 {
            return None;
        }
        Uuid::parse_str(segment).ok()
    })
}

/// Match a slug segment such as `hello-world-2`.
pub fn slug() -> Parser<String> {
    custom(|segment| is_slug(segment).then(|| segment.to_string()))
}

/// Match a segment against a fixed set of names, returning the value paired
/// with the first matching name.
///
/// # Examples
///
/// ```
/// use typed_route::{parser, Url};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Tab { Posts, Likes }
///
/// let tab = parser::enumeration([("posts", Tab::Posts), ("likes", Tab::Likes)]);
/// assert_eq!(tab.parse(&Url::parse("/likes")), Some(Tab::Likes));
/// assert_eq!(tab.parse(&Url::parse("/other")), None);
/// ```
pub fn enumeration<A, I, S>(options: I) -> Parser<A>
where
    A: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = (S, A)>,
    S: Into<String>,
{
    let options: Vec<(String, A)> = options
        .into_iter()
        .map(|(name, value)| (name.into(), value))
        .collect();
    custom(move |segment| {
        options
            .iter()
            .find(|(name, _)| name == segment)
            .map(|(_, value)| value.clone())
    })
}

/// Match a segment whose whole text matches `pattern`.
///
/// The pattern is anchored at both ends, so `[a-z]+` does not accept
/// `abc1`. Fails with [`RouteError::InvalidPattern`] when the pattern
/// does not compile.
pub fn regex(pattern: &str) -> Result<Parser<String>, RouteError> {
    let anchored = Regex::new(&format!("^(?:{})$", pattern))?;
    Ok(custom(move |segment| {
        anchored.is_match(segment).then(|| segment.to_string())
    }))
}

/// Consume every remaining segment, possibly none.
pub fn rest() -> Parser<Vec<String>> {
    Parser::new(|state| Some((state.remaining().to_vec(), state.finish())))
}

/// Consume every remaining segment and join them with `/`.
pub fn rest_as_string() -> Parser<String> {
    rest().map(|segments| segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::primitives::literal;
    use crate::url::Url;

    #[test]
    fn test_uuid() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        let parsed = uuid().parse(&Url::parse(&format!("/{}", id))).unwrap();
        assert_eq!(parsed.to_string(), id);

        let upper = id.to_uppercase();
        assert_eq!(uuid().parse(&Url::parse(&format!("/{}", upper))), Some(parsed));

        // simple (unhyphenated) form is rejected
        assert_eq!(
            uuid().parse(&Url::parse("/67e5504410b1426f9247bb680e5fe0c8")),
            None
        );
        assert_eq!(uuid().parse(&Url::parse("/not-a-uuid")), None);
    }

    #[test]
    fn test_slug() {
        assert_eq!(
            slug().parse(&Url::parse("/hello-world")),
            Some("hello-world".to_string())
        );
        assert_eq!(slug().parse(&Url::parse("/Hello-World")), None);
    }

    #[test]
    fn test_enumeration_first_name_wins() {
        let parser = enumeration([("a", 1), ("a", 2), ("b", 3)]);
        assert_eq!(parser.parse(&Url::parse("/a")), Some(1));
        assert_eq!(parser.parse(&Url::parse("/b")), Some(3));
    }

    #[test]
    fn test_regex_is_anchored() {
        let parser = regex("[a-z]+").unwrap();
        assert_eq!(parser.parse(&Url::parse("/abc")), Some("abc".to_string()));
        assert_eq!(parser.parse(&Url::parse("/abc1")), None);

        let alternation = regex("a|ab").unwrap();
        assert_eq!(
            alternation.parse(&Url::parse("/ab")),
            Some("ab".to_string())
        );
    }

    #[test]
    fn test_regex_invalid_pattern() {
        assert!(matches!(regex("("), Err(RouteError::InvalidPattern(_))));
    }

    #[test]
    fn test_rest() {
        let files = literal("files").then(rest());
        assert_eq!(
            files.parse(&Url::parse("/files/a/b/c.txt")),
            Some(vec!["a".to_string(), "b".to_string(), "c.txt".to_string()])
        );
        assert_eq!(files.parse(&Url::parse("/files")), Some(Vec::new()));

        let joined = literal("files").then(rest_as_string());
        assert_eq!(
            joined.parse(&Url::parse("/files//a/b/")),
            Some("a/b".to_string())
        );
    }
}
