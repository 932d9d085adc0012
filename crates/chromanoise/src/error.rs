//! Error types for transform configuration.

use thiserror::Error;

/// Result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when a transform configuration is rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A `min`/`max` pair is inverted.
    #[error("invalid range for {name}: min {min} is greater than max {max}")]
    InvertedRange {
        /// Parameter pair name.
        name: &'static str,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },

    /// A probability lies outside the unit interval.
    #[error("{name} must be in [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A numeric parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The spectral curve resolution is zero.
    #[error("n_fft must be a positive number of frequency points")]
    ZeroFftSize,
}

impl ConfigError {
    /// Creates an inverted range error.
    pub fn inverted_range(name: &'static str, min: f64, max: f64) -> Self {
        Self::InvertedRange { name, min, max }
    }

    /// Creates a probability range error.
    pub fn probability(name: &'static str, value: f64) -> Self {
        Self::ProbabilityOutOfRange { name, value }
    }
}

/// Validates that a value is a finite number.
pub(crate) fn validate_finite(name: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name, value });
    }
    Ok(())
}

/// Validates that a probability lies in [0, 1].
pub(crate) fn validate_unit_interval(name: &'static str, value: f64) -> ConfigResult<()> {
    validate_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::probability(name, value));
    }
    Ok(())
}
