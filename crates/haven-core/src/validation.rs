//! # Validation Module
//!
//! Field rules for the add/edit forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form                                               │
//! │  ├── "Please fill all required fields!"                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository boundary (haven-db)                               │
//! │  └── THIS MODULE: payload.validate() before any SQL runs               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use haven_core::validation::{validate_required, validate_stock};
//!
//! assert!(validate_required("name", "Gel Pen").is_ok());
//! assert!(validate_stock(-3).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_STOCK;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted value for any text field.
pub const MAX_TEXT_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_TEXT_LEN`] characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock count.
///
/// ## Rules
/// - Must be non-negative (zero means sold out)
/// - Must not exceed [`MAX_STOCK`]
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    if stock > MAX_STOCK {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

/// Validates a monetary amount (price, purchase total).
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed for free items and new customers)
pub fn validate_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Gel Pen").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", &"A".repeat(MAX_TEXT_LEN)).is_ok());
        assert!(validate_required("name", &"A".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(600).is_ok());
        assert!(validate_stock(-1).is_err());
        assert!(validate_stock(MAX_STOCK).is_ok());
        assert_eq!(
            validate_stock(i64::MAX),
            Err(ValidationError::OutOfRange {
                field: "stock".to_string(),
                min: 0,
                max: MAX_STOCK,
            })
        );
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("price", 0.0).is_ok());
        assert!(validate_amount("price", 1200.0).is_ok());
        assert!(validate_amount("price", -0.5).is_err());
        assert_eq!(
            validate_amount("price", f64::NAN),
            Err(ValidationError::NotFinite {
                field: "price".to_string()
            })
        );
        assert!(validate_amount("price", f64::INFINITY).is_err());
    }
}
