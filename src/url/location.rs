//! Conversion from absolute URLs and host location objects.
//!
//! Navigation adapters usually hold a full `scheme://host/path?query#frag`
//! location. Only the path, query and fragment are routable; the rest is
//! discarded here.

use crate::error::RouteError;
use crate::url::model::Url;

impl Url {
    /// Take the routable parts of an already-parsed absolute URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_route::Url;
    ///
    /// let location = url::Url::parse("https://example.com/user/42?tab=posts#top").unwrap();
    /// let url = Url::from_location(&location);
    /// assert_eq!(url.to_string(), "/user/42?tab=posts#top");
    /// ```
    pub fn from_location(location: &::url::Url) -> Self {
        Url::from_raw_parts(location.path(), location.query(), location.fragment())
    }

    /// Parse an absolute URL string and keep its routable parts.
    ///
    /// Unlike [`Url::parse`], this can fail, because an absolute URL must
    /// satisfy the full URL grammar (scheme, host, ...).
    pub fn from_absolute(raw: &str) -> Result<Self, RouteError> {
        let location = ::url::Url::parse(raw)?;
        Ok(Url::from_location(&location))
    }
}

impl From<&::url::Url> for Url {
    fn from(location: &::url::Url) -> Self {
        Url::from_location(location)
    }
}
