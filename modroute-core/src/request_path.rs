//! Input shapes accepted by the route parser
//!
//! A request path can arrive as raw text (`/blog/show?id=3`), as segments
//! that were already split by the caller, or through a request object. All
//! three are reduced to at most two raw segments by [`RequestPath::segments`].

use crate::request::PathSource;

/// Only the module and the action level are ever looked at.
pub const MAX_ROUTE_SEGMENTS: usize = 2;

/// A request path in one of its admissible shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPath<'a> {
    /// Raw path text; anything after the first `?` is ignored
    Text(&'a str),
    /// Pre-split segments, no leading empty segment and no query handling
    Segments(Vec<&'a str>),
}

impl<'a> RequestPath<'a> {
    /// Read the path out of a request-like value
    pub fn from_request<R: PathSource + ?Sized>(request: &'a R) -> Self {
        RequestPath::Text(request.request_path())
    }

    /// Reduce the input to its first two raw segments.
    ///
    /// Empty text and an empty list are both treated as the root path `/`.
    /// The query string and every segment past the second are dropped
    /// without being looked at.
    ///
    /// # Examples
    ///
    /// ```
    /// use modroute_core::RequestPath;
    ///
    /// assert_eq!(RequestPath::from("/blog/show/extra?id=3").segments(), vec!["blog", "show"]);
    /// assert_eq!(RequestPath::from("/").segments(), vec![""]);
    /// assert!(RequestPath::from(Vec::<&str>::new()).segments().is_empty());
    /// ```
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            RequestPath::Text(text) => {
                let path = text.split_once('?').map_or(text, |(path, _)| path);
                let path = if path.is_empty() { "/" } else { path };
                let path = path.strip_prefix('/').unwrap_or(path);

                path.split('/').take(MAX_ROUTE_SEGMENTS).collect()
            }
            RequestPath::Segments(ref segments) => {
                segments.iter().take(MAX_ROUTE_SEGMENTS).copied().collect()
            }
        }
    }
}

impl<'a> From<&'a str> for RequestPath<'a> {
    fn from(text: &'a str) -> Self {
        RequestPath::Text(text)
    }
}

impl<'a> From<&'a String> for RequestPath<'a> {
    fn from(text: &'a String) -> Self {
        RequestPath::Text(text.as_str())
    }
}

impl<'a> From<Vec<&'a str>> for RequestPath<'a> {
    fn from(segments: Vec<&'a str>) -> Self {
        RequestPath::Segments(segments)
    }
}

impl<'a> From<&'a [&'a str]> for RequestPath<'a> {
    fn from(segments: &'a [&'a str]) -> Self {
        RequestPath::Segments(segments.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for RequestPath<'a> {
    fn from(segments: [&'a str; N]) -> Self {
        RequestPath::Segments(segments.to_vec())
    }
}

impl<'a> From<&'a [String]> for RequestPath<'a> {
    fn from(segments: &'a [String]) -> Self {
        RequestPath::Segments(segments.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for RequestPath<'a> {
    fn from(segments: &'a Vec<String>) -> Self {
        RequestPath::from(segments.as_slice())
    }
}
