// src/error.rs
use std::fmt;

/// Error types for the gbm-paths library
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A simulation input is outside its admissible range
    OutOfRange {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A closed-form quantity could not be represented as a finite number
    NumericalInstability { method: String, reason: String },
}

impl SimError {
    /// Name of the offending parameter, if this is a range error
    pub fn parameter(&self) -> Option<&str> {
        match self {
            SimError::OutOfRange { parameter, .. } => Some(parameter),
            SimError::NumericalInstability { .. } => None,
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::OutOfRange {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Parameter '{}' = {} is out of range: {}",
                    parameter, value, constraint
                )
            }
            SimError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for gbm-paths operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    fn out_of_range(name: &str, value: f64, constraint: &str) -> SimError {
        SimError::OutOfRange {
            parameter: name.to_string(),
            value,
            constraint: constraint.to_string(),
        }
    }

    /// Validate that a parameter is strictly positive (NaN is rejected)
    pub fn validate_positive(name: &str, value: f64) -> SimResult<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(out_of_range(name, value, "must be positive (> 0)"))
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            Err(out_of_range(
                name,
                value,
                "must be finite (not NaN or infinite)",
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a count is at least `min`
    pub fn validate_min_count(name: &str, value: usize, min: usize) -> SimResult<()> {
        if value < min {
            Err(out_of_range(
                name,
                value as f64,
                &format!("must be at least {}", min),
            ))
        } else {
            Ok(())
        }
    }

    /// Validate a probability in the open interval (0, 1)
    pub fn validate_probability(name: &str, p: f64) -> SimResult<()> {
        if p > 0.0 && p < 1.0 {
            Ok(())
        } else {
            Err(out_of_range(name, p, "must be in the open interval (0, 1)"))
        }
    }
}
