//! # Error Types
//!
//! Domain-specific error types for haven-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  haven-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  haven-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → Dashboard inline message            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An aggregate that has no meaning over zero rows was requested.
    ///
    /// ## When This Occurs
    /// - Average price of an empty product list
    /// - Average spend of an empty customer list
    #[error("Cannot compute {metric} over an empty collection")]
    EmptyInput { metric: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a form submission does not meet the field rules.
/// The dashboards show the message inline and leave the tables untouched.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::EmptyInput {
            metric: "average price".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot compute average price over an empty collection"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "supplier".to_string(),
        };
        assert_eq!(err.to_string(), "supplier is required");

        let err = ValidationError::Negative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock must not be negative");

        let err = ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: 1_000_000_000,
        };
        assert_eq!(err.to_string(), "stock must be between 0 and 1000000000");
    }
}
