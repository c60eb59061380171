//! # Domain Types
//!
//! Core domain types shared by the repositories and the dashboards.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  StaffMember    │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  category       │   │  role           │   │  email          │       │
//! │  │  stock          │   │  email          │   │  phone          │       │
//! │  │  price          │   │  phone          │   │  total_purchases│       │
//! │  │  supplier       │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Insert payloads: NewProduct, NewStaffMember, NewCustomer (no id)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every row gets an autoincrement `id` from SQLite. Ids are never reused and
//! never change once assigned, so the payload types carry no id at all.
//! The three entities are independent: no foreign keys, no cascades.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{
    validate_amount, validate_required, validate_stock, ValidationResult,
};

// =============================================================================
// Product
// =============================================================================

/// A stationery item held in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by storage.
    pub id: i64,

    /// Display name shown in tables and charts.
    pub name: String,

    /// Free-form category (Pens, Notebooks, ...).
    pub category: String,

    /// Units on hand.
    pub stock: i64,

    /// Unit price in rupees.
    pub price: f64,

    /// Supplier the item is ordered from.
    pub supplier: String,
}

impl Product {
    /// Creates a product row (used by tests and fixtures).
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: i64,
        price: f64,
        supplier: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            category: category.into(),
            stock,
            price,
            supplier: supplier.into(),
        }
    }

    /// Stock value of this row: stock × price.
    #[inline]
    pub fn line_value(&self) -> f64 {
        self.stock as f64 * self.price
    }
}

/// Fields for inserting or fully replacing a product.
///
/// `update` replaces every mutable field, so the same payload serves both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
    pub supplier: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        stock: i64,
        price: f64,
        supplier: impl Into<String>,
    ) -> Self {
        NewProduct {
            name: name.into(),
            category: category.into(),
            stock,
            price,
            supplier: supplier.into(),
        }
    }

    /// Checks every field rule. Returns the first violation.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)?;
        validate_required("category", &self.category)?;
        validate_stock(self.stock)?;
        validate_amount("price", self.price)?;
        validate_required("supplier", &self.supplier)?;
        Ok(())
    }
}

// =============================================================================
// Staff
// =============================================================================

/// A member of store staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    /// Job title, e.g. "Store Manager".
    pub role: String,
    pub email: String,
    pub phone: String,
}

/// Fields for adding a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewStaffMember {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}

impl NewStaffMember {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        NewStaffMember {
            name: name.into(),
            role: role.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)?;
        validate_required("role", &self.role)?;
        validate_required("email", &self.email)?;
        validate_required("phone", &self.phone)?;
        Ok(())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer with their cumulative spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Lifetime purchases in rupees.
    ///
    /// Set once at insert time and only read afterwards.
    pub total_purchases: f64,
}

impl Customer {
    /// Creates a customer row (used by tests and fixtures).
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        total_purchases: f64,
    ) -> Self {
        Customer {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            total_purchases,
        }
    }
}

/// Fields for adding a customer.
///
/// The add-customer form never asks for purchases, so `new` starts at zero.
/// Imported or seeded customers can carry a starting total instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub total_purchases: f64,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        NewCustomer {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            total_purchases: 0.0,
        }
    }

    /// Sets the starting purchase total.
    pub fn with_total_purchases(mut self, total: f64) -> Self {
        self.total_purchases = total;
        self
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)?;
        validate_required("email", &self.email)?;
        validate_required("phone", &self.phone)?;
        validate_amount("total_purchases", self.total_purchases)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn test_line_value() {
        let product = Product::new(1, "Gel Pen", "Pens", 150, 25.0, "PenCo");
        assert_eq!(product.line_value(), 3750.0);
    }

    #[test]
    fn test_new_product_validation() {
        assert!(NewProduct::new("Gel Pen", "Pens", 150, 25.0, "PenCo")
            .validate()
            .is_ok());

        // Zero stock and free items are allowed
        assert!(NewProduct::new("Sample", "Misc", 0, 0.0, "House")
            .validate()
            .is_ok());

        let err = NewProduct::new("Gel Pen", "Pens", -1, 25.0, "PenCo")
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: "stock".to_string()
            }
        );

        let err = NewProduct::new("Gel Pen", "   ", 10, 25.0, "PenCo")
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "category".to_string()
            }
        );
    }

    #[test]
    fn test_new_staff_validation() {
        assert!(NewStaffMember::new("Rajesh Kumar", "Store Manager", "r@x.com", "9876543210")
            .validate()
            .is_ok());
        assert!(NewStaffMember::new("Rajesh Kumar", "Store Manager", "", "9876543210")
            .validate()
            .is_err());
    }

    #[test]
    fn test_new_customer_defaults_to_zero_purchases() {
        let customer = NewCustomer::new("Vikram Singh", "vikram@email.com", "9123456789");
        assert_eq!(customer.total_purchases, 0.0);
        assert!(customer.validate().is_ok());

        let seeded = customer.with_total_purchases(2500.0);
        assert_eq!(seeded.total_purchases, 2500.0);
    }

    #[test]
    fn test_new_customer_rejects_negative_purchases() {
        let customer = NewCustomer::new("Vikram Singh", "vikram@email.com", "9123456789")
            .with_total_purchases(-5.0);
        assert!(customer.validate().is_err());
    }

    #[test]
    fn test_new_customer_deserializes_without_purchases() {
        let json = r#"{"name":"Kavya Iyer","email":"kavya@email.com","phone":"9123456792"}"#;
        let customer: NewCustomer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.total_purchases, 0.0);
    }
}
