// Error types for route parsing

use crate::strings;
use http::StatusCode;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Message template used when a module name fails its grammar.
pub const MODULE_NAME_ERROR_TEMPLATE: &str = "Invalid for the module name '%{name}'.";

/// Message template used when an action name fails its grammar.
pub const ACTION_NAME_ERROR_TEMPLATE: &str = "Invalid for the action name '%{name}'.";

/// Which half of a route a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Module,
    Action,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Module => "module",
            NameKind::Action => "action",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            NameKind::Module => MODULE_NAME_ERROR_TEMPLATE,
            NameKind::Action => ACTION_NAME_ERROR_TEMPLATE,
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module or action name did not match its grammar.
///
/// The `Display` output is the full human-readable message, e.g.
/// `Invalid for the module name 'モジュール'.`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RouteParseError {
    kind: NameKind,
    name: String,
    message: String,
}

impl RouteParseError {
    /// Error for a module name that failed validation
    pub fn invalid_module_name(name: impl Into<String>) -> Self {
        Self::new(NameKind::Module, name.into())
    }

    /// Error for an action name that failed validation
    pub fn invalid_action_name(name: impl Into<String>) -> Self {
        Self::new(NameKind::Action, name.into())
    }

    fn new(kind: NameKind, name: String) -> Self {
        let values = HashMap::from([("name", name.as_str())]);
        let message = strings::format(kind.template(), &[&values]);
        Self {
            kind,
            name,
            message,
        }
    }

    /// Which name was rejected
    pub fn kind(&self) -> NameKind {
        self.kind
    }

    /// The rejected value, after formatting and defaulting
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the HTTP status code a caller should answer with
    pub fn status_code(&self) -> u16 {
        self.http_status().as_u16()
    }

    /// Get the HTTP status for this error
    pub fn http_status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }
}

/// Result type for route parsing
pub type Result<T> = std::result::Result<T, RouteParseError>;
