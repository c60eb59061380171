//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Full listing for the inventory table and every chart
//! - Insert from the "Add Product" form
//! - Whole-row update and delete from the per-product editor
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  📦 Gel Pen | Stock: 150 | ₹25  (expander)                              │
//! │       │                                                                 │
//! │       ├── ✏️ Update → update(id, NewProduct { all five fields })        │
//! │       │                 UPDATE products SET ... WHERE id = ?            │
//! │       │                                                                 │
//! │       └── 🗑️ Delete → delete(id)                                        │
//! │                         DELETE FROM products WHERE id = ?               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use haven_core::{NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&NewProduct::new("Gel Pen", "Pens", 150, 25.0, "PenCo")).await?;
/// let products = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product in insertion order.
    ///
    /// No pagination and no filtering: the pages and the analytics work on
    /// the full set.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, stock, price, supplier
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, stock, price, supplier
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(i64)` - The id SQLite assigned
    /// * `Err(DbError::Validation)` - Empty field or negative stock/price
    pub async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        insert_product(&mut conn, product).await
    }

    /// Replaces every mutable field of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No product with this id; nothing changed
    /// * `Err(DbError::Validation)` - Payload rejected; nothing changed
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<()> {
        product.validate()?;

        debug!(id, name = %product.name, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                category = ?3,
                stock = ?4,
                price = ?5,
                supplier = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.stock)
        .bind(product.price)
        .bind(&product.supplier)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No product with this id; nothing changed
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Inserts on an existing connection so seeding can share one transaction.
pub(crate) async fn insert_product(
    conn: &mut SqliteConnection,
    product: &NewProduct,
) -> DbResult<i64> {
    product.validate()?;

    debug!(name = %product.name, category = %product.category, "Inserting product");

    let result = sqlx::query(
        r#"
        INSERT INTO products (name, category, stock, price, supplier)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&product.name)
    .bind(&product.category)
    .bind(product.stock)
    .bind(product.price)
    .bind(&product.supplier)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

// =============================================================================
// Unit Tests
// =============================================================================
