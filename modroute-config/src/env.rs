// Environment variable loading

use crate::{ConfigError, Result};
use std::env;

/// Reads `PREFIX_KEY` style environment variables
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Full variable name for `key`, e.g. `MODROUTE_LOG_LEVEL`
    pub fn key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let name = self.key(key);
        env::var(&name).map_err(|e| match e {
            env::VarError::NotPresent => ConfigError::KeyNotFound(name),
            other => ConfigError::EnvError(other),
        })
    }

    /// Load with default value
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }

    /// `None` when the variable is unset
    pub fn load_optional(&self, key: &str) -> Result<Option<String>> {
        match self.load_var(key) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Accepts `1/0`, `true/false`, `yes/no`, `on/off`
    pub fn load_bool(&self, key: &str) -> Result<Option<bool>> {
        let Some(value) = self.load_optional(key)? else {
            return Ok(None);
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::ParseError(format!(
                "{} must be a boolean, got '{}'",
                self.key(key),
                value
            ))),
        }
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
