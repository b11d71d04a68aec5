// Route entity: a validated (module, action) pair

use crate::name::format_name;
use crate::parser::{RouteParser, apply_defaults, validate_names};
use crate::request::PathSource;
use crate::request_path::RequestPath;
use crate::{Result, RouteParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Read access shared by anything that names a two-level route
pub trait RouteName {
    fn module_name(&self) -> &str;

    fn action_name(&self) -> &str;

    /// `(module, action)`
    fn path(&self) -> (&str, &str) {
        (self.module_name(), self.action_name())
    }

    /// `/{module}/{action}`
    fn path_name(&self) -> String {
        format!("/{}/{}", self.module_name(), self.action_name())
    }
}

/// A request path resolved to a module name and an action name.
///
/// A `Route` can only be obtained through strict parsing, so both names are
/// always present, lower-case and grammar-valid. It is never modified after
/// construction. Parsers configured with other [`ParseOptions`] produce a
/// [`RawRoute`] instead.
///
/// [`ParseOptions`]: crate::ParseOptions
///
/// # Examples
///
/// ```
/// use modroute_core::Route;
///
/// let route = Route::new("/Blog/Show?id=3").unwrap();
/// assert_eq!(route.module_name(), "blog");
/// assert_eq!(route.action_name(), "show");
/// assert_eq!(route.to_string(), "/blog/show");
///
/// let route = Route::new("").unwrap();
/// assert_eq!(route.path(), ("index", "index"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Route {
    module_name: String,
    action_name: String,
}

impl Route {
    /// Parse a path string, a segment list or a [`RequestPath`]
    pub fn new<'a>(request_path: impl Into<RequestPath<'a>>) -> Result<Self> {
        let (module_name, action_name) = Self::parse_request_path(request_path)?;
        Ok(Self::from_parts(module_name, action_name))
    }

    /// Parse the path of a request-like value
    pub fn from_request<R: PathSource + ?Sized>(request: &R) -> Result<Self> {
        Self::new(RequestPath::from_request(request))
    }

    /// Split a request path into its module and action names without
    /// building a `Route`.
    pub fn parse_request_path<'a>(request_path: impl Into<RequestPath<'a>>) -> Result<(String, String)> {
        RouteParser::default().parse_names(&request_path.into())
    }

    fn from_parts(module_name: String, action_name: String) -> Self {
        Self {
            module_name,
            action_name,
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// `(module, action)`
    pub fn path(&self) -> (&str, &str) {
        (&self.module_name, &self.action_name)
    }

    /// `/{module}/{action}`
    pub fn path_name(&self) -> String {
        format!("/{}/{}", self.module_name, self.action_name)
    }
}

impl RouteName for Route {
    fn module_name(&self) -> &str {
        &self.module_name
    }

    fn action_name(&self) -> &str {
        &self.action_name
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.module_name, self.action_name)
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Route {
    type Error = RouteParseError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Route {
    type Error = RouteParseError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path_name()
    }
}

impl TryFrom<RawRoute> for Route {
    type Error = RouteParseError;

    fn try_from(raw: RawRoute) -> Result<Self> {
        raw.into_route()
    }
}

/// Module and action names as a [`RouteParser`] left them.
///
/// Depending on the parser options the names may keep their case or break
/// the name grammar, so this type makes no promises about its contents.
/// [`RawRoute::into_route`] runs the strict checks and yields a [`Route`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRoute {
    module_name: String,
    action_name: String,
}

impl RawRoute {
    pub fn new(module_name: impl Into<String>, action_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            action_name: action_name.into(),
        }
    }

    pub fn into_parts(self) -> (String, String) {
        (self.module_name, self.action_name)
    }

    /// Format and validate both names the way [`Route::new`] does
    pub fn into_route(self) -> Result<Route> {
        let formatted = [format_name(&self.module_name), format_name(&self.action_name)];
        let (module_name, action_name) = apply_defaults(&formatted);
        validate_names(&module_name, &action_name)?;
        Ok(Route::from_parts(module_name, action_name))
    }
}

impl RouteName for RawRoute {
    fn module_name(&self) -> &str {
        &self.module_name
    }

    fn action_name(&self) -> &str {
        &self.action_name
    }
}

impl fmt::Display for RawRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.module_name, self.action_name)
    }
}

impl From<Route> for RawRoute {
    fn from(route: Route) -> Self {
        Self::new(route.module_name, route.action_name)
    }
}
