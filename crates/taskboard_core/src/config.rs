//! Board configuration.
//!
//! # Responsibility
//! - Hold tunable intake bounds and the preferred log level.
//! - Reject configurations that would make every submission invalid.
//! - Reject log levels the logging bootstrap would refuse.
//!
//! # Invariants
//! - Defaults reproduce the stock board: description longer than 3
//!   characters, 1 to 5 people.

use crate::logging::{default_log_level, parse_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 3;
const DEFAULT_PEOPLE_MIN: u32 = 1;
const DEFAULT_PEOPLE_MAX: u32 = 5;

/// Constraint bounds applied by the intake controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeRules {
    /// Description must be strictly longer than this many characters.
    pub description_min_length: usize,
    /// Inclusive lower bound on assigned people.
    pub people_min: u32,
    /// Inclusive upper bound on assigned people.
    pub people_max: u32,
}

impl Default for IntakeRules {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

/// Top-level board configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub intake: IntakeRules,
    /// Overrides the build-mode default log level when set.
    pub log_level: Option<String>,
}

impl BoardConfig {
    /// Validates cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = &self.intake;
        if rules.people_min == 0 {
            return Err(ConfigError::ZeroPeopleMin);
        }
        if rules.people_min > rules.people_max {
            return Err(ConfigError::InvertedPeopleBounds {
                min: rules.people_min,
                max: rules.people_max,
            });
        }
        if let Some(level) = &self.log_level {
            if parse_level(level).is_err() {
                return Err(ConfigError::UnsupportedLogLevel(level.clone()));
            }
        }
        Ok(())
    }

    /// Level passed to `init_logging`.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroPeopleMin,
    InvertedPeopleBounds { min: u32, max: u32 },
    UnsupportedLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPeopleMin => write!(f, "people_min must be at least 1"),
            Self::InvertedPeopleBounds { min, max } => {
                write!(f, "people_min ({min}) must be <= people_max ({max})")
            }
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "unsupported log_level `{level}`; expected trace|debug|info|warn|error"
            ),
        }
    }
}

impl Error for ConfigError {}
