//! Compiler configuration and validation

/// Default limit for nested parentheses, filters and function calls
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if any setting is out of range or conflicts with
    /// another.
    fn validate(&self) -> ConfigResult<()>;
}

/// Settings that bound the work the parser may do for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Maximum nesting of parenthesized expressions, filter selectors and function calls
    pub max_nesting_depth: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl CompilerConfig {
    #[must_use]
    pub const fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}

impl Validator for CompilerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "max_nesting_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CompilerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let config = CompilerConfig::default().with_max_nesting_depth(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));
    }
}
