//! Configuration validation module.
//!
//! Fails fast on invalid configuration, collecting every problem found
//! instead of stopping at the first one.

use crate::{AppConfig, Backend, DatabaseConfig, LoggingConfig, WalkthroughConfig};
use depot_core::DEPARTMENT_NAME_MAX_LEN;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Walkthrough department name is unusable.
    InvalidDepartmentName { field: String, message: String },
    /// Walkthrough lookup id must be positive.
    InvalidLookupId { value: i32 },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {} exceeds maximum allowed ({})", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{}' must be positive, got {}", name, value)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: off, trace, debug, info, warn, error)",
                    value
                )
            }
            Self::InvalidDepartmentName { field, message } => {
                write!(f, "Invalid walkthrough.{}: {}", field, message)
            }
            Self::InvalidLookupId { value } => {
                write!(f, "walkthrough.lookup_id must be positive, got {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 100;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] =
        &["off", "trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_database(&config.database, &mut errors);
        Self::validate_logging(&config.logging, &mut errors);
        Self::validate_walkthrough(&config.walkthrough, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates database configuration.
    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.backend == Backend::Memory {
            return;
        }

        match Url::parse(&config.url) {
            Ok(url) if url.scheme() == "mysql" => {}
            Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: format!("unsupported scheme '{}', expected mysql://", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: e.to_string(),
            }),
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
        if config.idle_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.idle_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    /// Validates logging configuration.
    ///
    /// Accepts plain levels, bare targets and `target=level` directives.
    fn validate_logging(config: &LoggingConfig, errors: &mut Vec<ConfigValidationError>) {
        let valid = !config.level.trim().is_empty()
            && config
                .level
                .split(',')
                .map(str::trim)
                .filter(|directive| !directive.is_empty())
                .all(Self::is_valid_directive);

        if !valid {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.level.clone(),
            });
        }
    }

    fn is_valid_directive(directive: &str) -> bool {
        match directive.rsplit_once('=') {
            Some((target, level)) => {
                !target.trim().is_empty()
                    && Self::VALID_LOG_LEVELS.contains(&level.trim().to_lowercase().as_str())
            }
            None => directive
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':')),
        }
    }

    /// Validates walkthrough inputs.
    fn validate_walkthrough(config: &WalkthroughConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.lookup_id.into_inner() <= 0 {
            errors.push(ConfigValidationError::InvalidLookupId {
                value: config.lookup_id.into_inner(),
            });
        }

        for (field, name) in [
            ("insert_name", &config.insert_name),
            ("update_name", &config.update_name),
        ] {
            if name.trim().is_empty() {
                errors.push(ConfigValidationError::InvalidDepartmentName {
                    field: field.to_string(),
                    message: "must not be blank".to_string(),
                });
            } else if name.chars().count() > DEPARTMENT_NAME_MAX_LEN {
                errors.push(ConfigValidationError::InvalidDepartmentName {
                    field: field.to_string(),
                    message: format!("longer than {} characters", DEPARTMENT_NAME_MAX_LEN),
                });
            }
        }
    }
}
