// Configuration for modroute resolvers
// Parse options and logging settings from environment variables, .env files
// and JSON/TOML files.

pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::Validate;

use modroute_core::logging::{LogConfig, LogFormat, LogLevel};
use modroute_core::{ParseOptions, RouteParser, RouteResolver};
use serde::{Deserialize, Serialize};

/// Prefix used by [`RouterConfig::from_env`]
pub const ENV_PREFIX: &str = "MODROUTE";

/// Resolver configuration
///
/// Missing fields fall back to strict parsing and JSON logging at `info`.
///
/// ```toml
/// log_level = "debug"
/// log_format = "pretty"
///
/// [parse]
/// lowercase = true
/// validate = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub parse: ParseOptions,
    pub log_level: String,
    pub log_format: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            log_level: LogLevel::Info.as_str().to_string(),
            log_format: "json".to_string(),
        }
    }
}

impl RouterConfig {
    /// Load from `MODROUTE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        Self::default().apply_env(&EnvLoader::new(Some(prefix.to_string())))
    }

    /// Override fields with whatever variables `loader` finds
    ///
    /// Reads `LOWERCASE`, `VALIDATE`, `LOG_LEVEL` and `LOG_FORMAT`.
    pub fn apply_env(mut self, loader: &EnvLoader) -> Result<Self> {
        if let Some(lowercase) = loader.load_bool("LOWERCASE")? {
            self.parse.lowercase = lowercase;
        }
        if let Some(validate) = loader.load_bool("VALIDATE")? {
            self.parse.validate = validate;
        }
        if let Some(level) = loader.load_optional("LOG_LEVEL")? {
            self.log_level = level;
        }
        if let Some(format) = loader.load_optional("LOG_FORMAT")? {
            self.log_format = format;
        }

        self.validate()?;
        Ok(self)
    }

    /// Load a `.env` file into the process environment, then read it
    ///
    /// Without a path a missing `.env` is ignored; a malformed one is not.
    pub fn from_dotenv(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => dotenvy::from_path(path).map_err(dotenv_error)?,
            None => ignore_missing_dotenv(dotenvy::dotenv().map(|_| ()))?,
        }
        Self::from_env()
    }

    /// Load from a `.json` or `.toml` file
    pub fn from_file(path: &str) -> Result<Self> {
        let value = ConfigLoader::auto(path)?.load_file(path)?;
        Self::from_value(value)
    }

    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        let value = ConfigLoader::new(format).parse(content)?;
        Self::from_value(value)
    }

    fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Logging setup matching `log_level` and `log_format`
    pub fn log_config(&self) -> Result<LogConfig> {
        let level = self
            .log_level
            .parse::<LogLevel>()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        let format = self
            .log_format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        Ok(LogConfig::new().level(level).format(format))
    }

    pub fn parser(&self) -> RouteParser {
        RouteParser::new(self.parse)
    }

    pub fn resolver(&self) -> RouteResolver {
        RouteResolver::new(self.parse)
    }
}

fn dotenv_error(err: dotenvy::Error) -> ConfigError {
    match err {
        dotenvy::Error::Io(io) => ConfigError::IoError(io),
        other => ConfigError::LoadError(other.to_string()),
    }
}

fn ignore_missing_dotenv(result: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match result {
        Err(dotenvy::Error::Io(io)) if io.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other.map_err(dotenv_error),
    }
}
