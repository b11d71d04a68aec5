// Core library for modroute
// Resolves request paths into (module, action) routes: input normalization,
// name formatting, defaulting and grammar validation, plus the resolver and
// logging setup used by embedding applications.

pub mod error;
pub mod logging;
pub mod name;
pub mod parser;
pub mod request;
pub mod request_path;
pub mod resolver;
pub mod route;
pub mod strings;

// Re-export commonly used types
pub use error::*;
pub use name::{DEFAULT_NAME, escape_name, format_name, is_valid_action_name, is_valid_module_name};
pub use parser::{ParseOptions, RouteParser, apply_defaults, validate_names};
pub use request::{HttpRequest, PathSource};
pub use request_path::{MAX_ROUTE_SEGMENTS, RequestPath};
pub use resolver::RouteResolver;
pub use route::{RawRoute, Route, RouteName};
