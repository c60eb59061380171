//! # haven-core: Pure Business Logic for Stationery Haven
//!
//! This crate holds the domain model and every derived dashboard metric
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Stationery Haven Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard Pages (presentation)                  │   │
//! │  │   Dashboard ──► Products ──► Staff ──► Customers ──► Analytics │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ haven-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐                │   │
//! │  │   │   types   │  │ validation │  │ analytics  │                │   │
//! │  │   │  Product  │  │   rules    │  │ totals     │                │   │
//! │  │   │  Staff    │  │   checks   │  │ group-bys  │                │   │
//! │  │   │  Customer │  │            │  │ top-N      │                │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    haven-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, StaffMember, Customer and insert payloads)
//! - [`validation`] - Field rules checked before anything reaches storage
//! - [`analytics`] - Totals, group-bys and top-N over fetched rows
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use haven_core::analytics::{store_value, total_stock};
//! use haven_core::Product;
//!
//! let products = vec![
//!     Product::new(1, "Gel Pen", "Pens", 150, 25.0, "PenCo"),
//!     Product::new(2, "Notebook A4", "Notebooks", 200, 80.0, "PaperMill"),
//! ];
//!
//! assert_eq!(total_stock(&products), 350);
//! assert_eq!(store_value(&products), 19_750.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analytics::{AnalyticsReport, CategoryStock, CategoryValue, DashboardSummary, PriceBin};
pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products with stock strictly below this count are flagged as low stock
/// on the analytics page.
pub const LOW_STOCK_THRESHOLD: i64 = 100;

/// Products priced strictly above this amount count as premium items.
pub const PREMIUM_PRICE_THRESHOLD: f64 = 100.0;

/// Largest stock count a single product may hold.
///
/// Keeps `total_stock` and the per-category sums far from `i64` overflow.
pub const MAX_STOCK: i64 = 1_000_000_000;

/// How many rows the "Top Products" and "Top Customers" charts show.
pub const TOP_N: usize = 5;

/// Number of bins in the price range distribution chart.
pub const PRICE_HISTOGRAM_BINS: usize = 10;
