//! # Customer Repository
//!
//! Customers are added and removed; nothing in the dashboards edits them.
//! `total_purchases` is written once at insert and only read afterwards.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use haven_core::{Customer, NewCustomer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer in insertion order.
    ///
    /// Rows written by older builds may hold a NULL total; those read as 0.
    pub async fn list_all(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT
                id,
                name,
                email,
                phone,
                COALESCE(total_purchases, 0.0) AS total_purchases
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Gets a customer by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT
                id,
                name,
                email,
                phone,
                COALESCE(total_purchases, 0.0) AS total_purchases
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Adds a customer and returns the new id.
    ///
    /// Payloads from [`NewCustomer::new`] start at zero purchases.
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        insert_customer(&mut conn, customer).await
    }

    /// Removes a customer.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No customer with this id; nothing changed
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Counts all customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

pub(crate) async fn insert_customer(
    conn: &mut SqliteConnection,
    customer: &NewCustomer,
) -> DbResult<i64> {
    customer.validate()?;

    debug!(name = %customer.name, "Inserting customer");

    let result = sqlx::query(
        r#"
        INSERT INTO customers (name, email, phone, total_purchases)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&customer.name)
    .bind(&customer.email)
    .bind(&customer.phone)
    .bind(customer.total_purchases)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
