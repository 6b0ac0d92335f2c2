//! Configuration errors.

/// Error returned when a [`StyleConfig`](super::StyleConfig) is unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size is NaN, infinite or out of range.
    InvalidSize { field: &'static str, value: f64 },
    /// A color was left empty.
    EmptyColor { field: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSize { field, value } => {
                write!(f, "invalid value {} for '{}'", value, field)
            }
            ConfigError::EmptyColor { field } => {
                write!(f, "color '{}' must not be empty", field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
