//! # Staff Repository
//!
//! Staff members are added from a form and removed from their card.
//! There is no edit path.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use haven_core::{NewStaffMember, StaffMember};

/// Repository for staff database operations.
#[derive(Debug, Clone)]
pub struct StaffRepository {
    pool: SqlitePool,
}

impl StaffRepository {
    /// Creates a new StaffRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StaffRepository { pool }
    }

    /// Lists every staff member in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<StaffMember>> {
        let staff = sqlx::query_as::<_, StaffMember>(
            r#"
            SELECT id, name, role, email, phone
            FROM staff
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = staff.len(), "Listed staff");
        Ok(staff)
    }

    /// Gets a staff member by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<StaffMember>> {
        let member = sqlx::query_as::<_, StaffMember>(
            "SELECT id, name, role, email, phone FROM staff WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    /// Adds a staff member and returns the new id.
    pub async fn insert(&self, member: &NewStaffMember) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        insert_staff(&mut conn, member).await
    }

    /// Removes a staff member.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No staff member with this id; nothing changed
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting staff member");

        let result = sqlx::query("DELETE FROM staff WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Staff member", id));
        }

        Ok(())
    }

    /// Counts all staff members.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

pub(crate) async fn insert_staff(
    conn: &mut SqliteConnection,
    member: &NewStaffMember,
) -> DbResult<i64> {
    member.validate()?;

    debug!(name = %member.name, role = %member.role, "Inserting staff member");

    let result = sqlx::query(
        r#"
        INSERT INTO staff (name, role, email, phone)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&member.name)
    .bind(&member.role)
    .bind(&member.email)
    .bind(&member.phone)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn setup() -> StaffRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().staff()
    }

    fn manager() -> NewStaffMember {
        NewStaffMember::new(
            "Rajesh Kumar",
            "Store Manager",
            "rajesh@stationeryhaven.com",
            "9876543210",
        )
    }

    fn cashier() -> NewStaffMember {
        NewStaffMember::new(
            "Sneha Reddy",
            "Cashier",
            "sneha@stationeryhaven.com",
            "9876543213",
        )
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let repo = setup().await;
        let a = repo.insert(&manager()).await.unwrap();
        let b = repo.insert(&cashier()).await.unwrap();
        assert_ne!(a, b);

        let staff = repo.list_all().await.unwrap();
        assert_eq!(staff.len(), 2);
        assert_eq!(
            staff[0],
            StaffMember {
                id: a,
                name: "Rajesh Kumar".to_string(),
                role: "Store Manager".to_string(),
                email: "rajesh@stationeryhaven.com".to_string(),
                phone: "9876543210".to_string(),
            }
        );
        assert_eq!(staff[1].id, b);
    }

    #[tokio::test]
    async fn test_duplicates_are_allowed() {
        let repo = setup().await;
        repo.insert(&manager()).await.unwrap();
        repo.insert(&manager()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup().await;
        let a = repo.insert(&manager()).await.unwrap();
        let b = repo.insert(&cashier()).await.unwrap();

        repo.delete(a).await.unwrap();
        let staff = repo.list_all().await.unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].id, b);

        let err = repo.delete(a).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.list_all().await.unwrap(), staff);
    }

    #[tokio::test]
    async fn test_rejects_blank_fields() {
        let repo = setup().await;
        let blank_phone = NewStaffMember::new("Amit Patel", "Inventory Manager", "amit@x.com", " ");
        assert!(matches!(
            repo.insert(&blank_phone).await,
            Err(DbError::Validation(_))
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
