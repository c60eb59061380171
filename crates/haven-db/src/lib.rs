//! # haven-db: Database Layer for Stationery Haven
//!
//! This crate provides database access for the Stationery Haven dashboards.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Stationery Haven Data Flow                          │
//! │                                                                         │
//! │  Page action (Add Product, Remove staff, open Analytics)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     haven-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ ProductRepo    │   │ 001_initial  │  │   │
//! │  │   │               │◄───│ StaffRepo      │   │ _schema.sql  │  │   │
//! │  │   │  SqlitePool   │    │ CustomerRepo   │   │              │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rows ──► haven_core::analytics (optional) ──► page                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Database handle and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//! - [`repository`] - Product, staff and customer repositories
//! - [`seed`] - Demo catalogs and `seed_if_empty`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use haven_db::{Database, DbConfig};
//! use haven_core::NewProduct;
//!
//! let db = Database::new(DbConfig::from_env()).await?;
//! db.seed_demo_data().await?;
//!
//! let id = db.products().insert(&NewProduct::new("Eraser", "Pencils", 400, 5.0, "PenCo")).await?;
//! let products = db.products().list_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use seed::{Catalog, SeedReport};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::product::ProductRepository;
pub use repository::staff::StaffRepository;
