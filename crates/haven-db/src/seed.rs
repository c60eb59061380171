//! # Seed Data
//!
//! Fixed demo rows for a brand-new store.
//!
//! ## Seeding Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    SELECT COUNT(*) FROM products                                        │
//! │       │                                                                 │
//! │       ├── > 0 → ROLLBACK, report nothing inserted                       │
//! │       │                                                                 │
//! │       └── = 0 → insert catalog products, demo staff, demo customers     │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are the sentinel table. Everything is inserted in one
//! transaction, so a failure half-way leaves the store empty and the next
//! startup tries again.

use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::repository::customer::insert_customer;
use crate::repository::product::insert_product;
use crate::repository::staff::insert_staff;
use haven_core::{NewCustomer, NewProduct, NewStaffMember};

// =============================================================================
// Catalog Data
// =============================================================================

/// One product line of a seed catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub category: &'static str,
    pub stock: i64,
    pub price: f64,
    pub supplier: &'static str,
}

impl CatalogItem {
    const fn new(
        name: &'static str,
        category: &'static str,
        stock: i64,
        price: f64,
        supplier: &'static str,
    ) -> Self {
        CatalogItem {
            name,
            category,
            stock,
            price,
            supplier,
        }
    }

    pub fn to_new_product(&self) -> NewProduct {
        NewProduct::new(self.name, self.category, self.stock, self.price, self.supplier)
    }
}

/// Products shown on a fresh Stationery Haven dashboard.
pub const DEMO_PRODUCTS: &[CatalogItem] = &[
    CatalogItem::new("Gel Pen", "Pens", 150, 25.0, "PenCo"),
    CatalogItem::new("Notebook A4", "Notebooks", 200, 80.0, "PaperMill"),
    CatalogItem::new("Highlighter Set", "Markers", 75, 120.0, "ColorPro"),
    CatalogItem::new("Stapler", "Accessories", 50, 150.0, "OfficeMax"),
    CatalogItem::new("Sticky Notes", "Paper", 300, 40.0, "NoteIt"),
    CatalogItem::new("Pencil Box", "Accessories", 100, 90.0, "StoragePlus"),
];

/// The full 27-line stationery range.
pub const STATIONERY_CATALOG: &[CatalogItem] = &[
    CatalogItem::new("A4 Paper Ream", "Paper", 150, 320.0, "PaperMill"),
    CatalogItem::new("Ball Pen Blue", "Pens", 500, 10.0, "PenCo"),
    CatalogItem::new("Ball Pen Black", "Pens", 450, 10.0, "PenCo"),
    CatalogItem::new("Gel Pen", "Pens", 300, 25.0, "PenCo"),
    CatalogItem::new("HB Pencil", "Pencils", 600, 8.0, "PenCo"),
    CatalogItem::new("Eraser", "Pencils", 400, 5.0, "PenCo"),
    CatalogItem::new("Sharpener", "Pencils", 350, 7.0, "PenCo"),
    CatalogItem::new("Notebook Single Line", "Notebooks", 250, 45.0, "PaperMill"),
    CatalogItem::new("Notebook Double Line", "Notebooks", 220, 50.0, "PaperMill"),
    CatalogItem::new("Notebook Plain", "Notebooks", 200, 40.0, "PaperMill"),
    CatalogItem::new("Sticky Notes", "Paper", 180, 35.0, "NoteIt"),
    CatalogItem::new("Highlighter", "Markers", 120, 60.0, "ColorPro"),
    CatalogItem::new("Whiteboard Marker", "Markers", 140, 55.0, "ColorPro"),
    CatalogItem::new("Permanent Marker", "Markers", 110, 65.0, "ColorPro"),
    CatalogItem::new("Plastic File", "Files", 300, 25.0, "StoragePlus"),
    CatalogItem::new("Office File Folder", "Files", 260, 30.0, "StoragePlus"),
    CatalogItem::new("Exam Pad", "Paper", 100, 90.0, "PaperMill"),
    CatalogItem::new("Drawing Book", "Art", 130, 70.0, "ColorPro"),
    CatalogItem::new("Sketch Pen Set", "Art", 90, 120.0, "ColorPro"),
    CatalogItem::new("Crayons Box", "Art", 95, 85.0, "ColorPro"),
    CatalogItem::new("Geometry Box", "Accessories", 80, 150.0, "OfficeMax"),
    CatalogItem::new("Stapler", "Accessories", 60, 180.0, "OfficeMax"),
    CatalogItem::new("Stapler Pins", "Accessories", 200, 40.0, "OfficeMax"),
    CatalogItem::new("Glue Stick", "Accessories", 160, 25.0, "OfficeMax"),
    CatalogItem::new("Correction Pen", "Pens", 140, 35.0, "PenCo"),
    CatalogItem::new("Calculator Basic", "Calculators", 45, 450.0, "OfficeMax"),
    CatalogItem::new("Calculator Scientific", "Calculators", 30, 1200.0, "OfficeMax"),
];

/// `(name, role, email, phone)`
pub const DEMO_STAFF: &[(&str, &str, &str, &str)] = &[
    ("Rajesh Kumar", "Store Manager", "rajesh@stationeryhaven.com", "9876543210"),
    ("Priya Sharma", "Sales Associate", "priya@stationeryhaven.com", "9876543211"),
    ("Amit Patel", "Inventory Manager", "amit@stationeryhaven.com", "9876543212"),
    ("Sneha Reddy", "Cashier", "sneha@stationeryhaven.com", "9876543213"),
];

/// `(name, email, phone, total_purchases)`
pub const DEMO_CUSTOMERS: &[(&str, &str, &str, f64)] = &[
    ("Vikram Singh", "vikram@email.com", "9123456789", 2500.0),
    ("Anjali Mehta", "anjali@email.com", "9123456790", 3200.0),
    ("Rohan Desai", "rohan@email.com", "9123456791", 1800.0),
    ("Kavya Iyer", "kavya@email.com", "9123456792", 4100.0),
];

/// Which product list to seed. Staff and customers are the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    /// Six products across five categories.
    Demo,
    /// The 27-line stationery range.
    Stationery,
}

impl Catalog {
    pub fn products(self) -> &'static [CatalogItem] {
        match self {
            Catalog::Demo => DEMO_PRODUCTS,
            Catalog::Stationery => STATIONERY_CATALOG,
        }
    }
}

// =============================================================================
// Seeding
// =============================================================================

/// Rows inserted by one seeding call. All zero when the store was not empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub products: usize,
    pub staff: usize,
    pub customers: usize,
}

impl SeedReport {
    /// True when nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.products == 0 && self.staff == 0 && self.customers == 0
    }
}

/// Inserts `catalog` plus the demo staff and customers if `products` is empty.
pub(crate) async fn seed_if_empty(pool: &SqlitePool, catalog: Catalog) -> DbResult<SeedReport> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        info!(existing, "Products already present, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();

    for item in catalog.products() {
        insert_product(&mut *tx, &item.to_new_product()).await?;
        report.products += 1;
    }

    for (name, role, email, phone) in DEMO_STAFF {
        insert_staff(&mut *tx, &NewStaffMember::new(*name, *role, *email, *phone)).await?;
        report.staff += 1;
    }

    for (name, email, phone, total) in DEMO_CUSTOMERS {
        let customer = NewCustomer::new(*name, *email, *phone).with_total_purchases(*total);
        insert_customer(&mut *tx, &customer).await?;
        report.customers += 1;
    }

    tx.commit()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    info!(
        ?catalog,
        products = report.products,
        staff = report.staff,
        customers = report.customers,
        "Seeded demo data"
    );

    Ok(report)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use haven_core::analytics::{store_value, total_stock};

    async fn setup() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(DEMO_PRODUCTS.len(), 6);
        assert_eq!(STATIONERY_CATALOG.len(), 27);
        assert!(STATIONERY_CATALOG
            .iter()
            .all(|item| item.to_new_product().validate().is_ok()));
    }

    #[tokio::test]
    async fn test_seed_fills_empty_store() {
        let db = setup().await;

        let report = db.seed_demo_data().await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                products: 6,
                staff: 4,
                customers: 4
            }
        );

        assert_eq!(db.products().count().await.unwrap(), 6);
        assert_eq!(db.staff().count().await.unwrap(), 4);
        assert_eq!(db.customers().count().await.unwrap(), 4);

        let products = db.products().list_all().await.unwrap();
        assert_eq!(products[0].name, "Gel Pen");
        assert_eq!(products[5].name, "Pencil Box");

        let customers = db.customers().list_all().await.unwrap();
        assert_eq!(customers[3].total_purchases, 4100.0);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = setup().await;

        db.seed_demo_data().await.unwrap();
        let second = db.seed_demo_data().await.unwrap();
        assert!(second.is_empty());

        assert_eq!(db.products().count().await.unwrap(), 6);
        assert_eq!(db.staff().count().await.unwrap(), 4);
        assert_eq!(db.customers().count().await.unwrap(), 4);

        // Switching catalogs does not add anything either
        assert!(db.seed_stationery_catalog().await.unwrap().is_empty());
        assert_eq!(db.products().count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_seed_skips_when_any_product_exists() {
        let db = setup().await;
        db.products()
            .insert(&NewProduct::new("Eraser", "Pencils", 400, 5.0, "PenCo"))
            .await
            .unwrap();

        assert!(db.seed_demo_data().await.unwrap().is_empty());
        assert_eq!(db.products().count().await.unwrap(), 1);
        assert_eq!(db.staff().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_stationery_catalog_total_stock() {
        let db = setup().await;

        let report = db.seed_stationery_catalog().await.unwrap();
        assert_eq!(report.products, 27);

        let products = db.products().list_all().await.unwrap();
        let expected: i64 = STATIONERY_CATALOG.iter().map(|item| item.stock).sum();
        assert_eq!(total_stock(&products), expected);
        assert_eq!(expected, 5660);
    }

    #[tokio::test]
    async fn test_demo_store_value() {
        let db = setup().await;
        db.seed_demo_data().await.unwrap();

        let products = db.products().list_all().await.unwrap();
        // 3750 + 16000 + 9000 + 7500 + 12000 + 9000
        assert_eq!(store_value(&products), 57_250.0);
    }
}
