//! Request path → (module, action) parsing
//!
//! The pipeline always runs in the same order:
//!
//! 1. reduce the input to at most two raw segments ([`RequestPath::segments`])
//! 2. format each segment ([`format_name`])
//! 3. fill in `index` for whatever is missing ([`apply_defaults`])
//! 4. check both names against their grammar ([`validate_names`])
//!
//! Every step is a pure function. Only the last one can fail.

use crate::name::{DEFAULT_NAME, escape_name, format_name, is_valid_action_name, is_valid_module_name};
use crate::request_path::RequestPath;
use crate::route::{RawRoute, Route};
use crate::{Result, RouteParseError};
use serde::{Deserialize, Serialize};

/// Switches for the optional parts of the pipeline
///
/// The defaults turn everything on. [`ParseOptions::lenient`] reproduces the
/// older behaviour that only trimmed and escaped traversal, leaving case and
/// characters untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Lower-case module and action names
    pub lowercase: bool,
    /// Reject names that do not match the module/action grammar
    pub validate: bool,
}

impl ParseOptions {
    pub const fn strict() -> Self {
        Self {
            lowercase: true,
            validate: true,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            lowercase: false,
            validate: false,
        }
    }

    pub fn with_lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    pub fn with_validation(mut self, enable: bool) -> Self {
        self.validate = enable;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// Turns request paths into module and action names
///
/// The options shape the names in the returned [`RawRoute`]. A [`Route`]
/// is only built from names that also pass the strict checks, see
/// [`RouteParser::parse_route`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteParser {
    options: ParseOptions,
}

impl RouteParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse any accepted input shape with this parser's options
    pub fn parse<'a>(&self, input: impl Into<RequestPath<'a>>) -> Result<RawRoute> {
        self.parse_request_path(&input.into())
    }

    pub fn parse_request_path(&self, input: &RequestPath<'_>) -> Result<RawRoute> {
        let (module, action) = self.parse_names(input)?;
        Ok(RawRoute::new(module, action))
    }

    /// [`RouteParser::parse`] followed by [`RawRoute::into_route`]
    pub fn parse_route<'a>(&self, input: impl Into<RequestPath<'a>>) -> Result<Route> {
        self.parse(input)?.into_route()
    }

    /// Run the pipeline and return the bare `(module, action)` pair
    pub fn parse_names(&self, input: &RequestPath<'_>) -> Result<(String, String)> {
        let segments: Vec<String> = input
            .segments()
            .into_iter()
            .map(|raw| self.format_segment(raw))
            .collect();

        let (module, action) = apply_defaults(&segments);

        if self.options.validate {
            validate_names(&module, &action)?;
        }

        Ok((module, action))
    }

    fn format_segment(&self, raw: &str) -> String {
        if self.options.lowercase {
            format_name(raw)
        } else {
            escape_name(raw).to_string()
        }
    }
}

/// Pick the module and action out of at most two formatted segments.
///
/// A single segment names the action under the default module. Empty
/// segments fall back to `index`.
///
/// ```
/// use modroute_core::apply_defaults;
///
/// assert_eq!(apply_defaults::<&str>(&[]), ("index".to_string(), "index".to_string()));
/// assert_eq!(apply_defaults(&["list"]), ("index".to_string(), "list".to_string()));
/// assert_eq!(apply_defaults(&["blog", ""]), ("blog".to_string(), "index".to_string()));
/// ```
pub fn apply_defaults<S: AsRef<str>>(segments: &[S]) -> (String, String) {
    match segments {
        [] => (DEFAULT_NAME.to_string(), DEFAULT_NAME.to_string()),
        [action] => (DEFAULT_NAME.to_string(), or_default(action.as_ref())),
        [module, action, ..] => (or_default(module.as_ref()), or_default(action.as_ref())),
    }
}

fn or_default(name: &str) -> String {
    if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Check the module name, then the action name.
///
/// The action is not looked at when the module is already invalid.
pub fn validate_names(module: &str, action: &str) -> Result<()> {
    if !is_valid_module_name(module) {
        return Err(RouteParseError::invalid_module_name(module));
    }
    if !is_valid_action_name(action) {
        return Err(RouteParseError::invalid_action_name(action));
    }
    Ok(())
}
