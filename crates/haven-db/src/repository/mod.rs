//! # Repository Module
//!
//! Database repository implementations for Stationery Haven.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Products page                                                         │
//! │       │                                                                 │
//! │       │  db.products().update(id, &payload)                            │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, payload)      → new id                              │
//! │  ├── update(&self, id, payload)  (products only)                       │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared Rules
//! - `list_all` returns rows in insertion order (ascending id)
//! - Payloads are validated before any SQL runs
//! - `update`/`delete` on a missing id return `DbError::NotFound` and
//!   leave the table unchanged
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD
//! - [`StaffRepository`](staff::StaffRepository) - Staff add/list/remove
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer add/list/remove

pub mod customer;
pub mod product;
pub mod staff;
