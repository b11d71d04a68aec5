// Configuration validation

use crate::{ConfigError, Result, RouterConfig};
use modroute_core::logging::{LogFormat, LogLevel};

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for RouterConfig {
    /// Log level and format must name something the logging setup knows
    fn validate(&self) -> Result<()> {
        self.log_level
            .parse::<LogLevel>()
            .map_err(|e| ConfigError::ValidationError(format!("log_level: {}", e)))?;
        self.log_format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError(format!("log_format: {}", e)))?;
        Ok(())
    }
}
