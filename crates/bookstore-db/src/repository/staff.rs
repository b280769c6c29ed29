//! # Staff Repository
//!
//! Database operations for staff records.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bookstore_core::Staff;

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

    /// Inserts a new staff member.
    pub async fn add(&self, staff: &Staff) -> DbResult<()> {
        debug!(s_id = staff.s_id, name = %staff.s_name, "Inserting staff");

        sqlx::query(
            "INSERT INTO staff (s_id, s_name, s_phone, designation) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(staff.s_id)
        .bind(&staff.s_name)
        .bind(&staff.s_phone)
        .bind(&staff.designation)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a staff member by id. No-op when absent.
    pub async fn delete(&self, s_id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM staff WHERE s_id = ?1")
            .bind(s_id)
            .execute(&self.pool)
            .await?;

        debug!(s_id, rows = result.rows_affected(), "Deleted staff");
        Ok(())
    }

    /// Lists all staff in storage order.
    pub async fn list(&self) -> DbResult<Vec<Staff>> {
        let staff = sqlx::query_as::<_, Staff>(
            "SELECT s_id, s_name, s_phone, designation FROM staff",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(staff)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use bookstore_core::Staff;

    #[tokio::test]
    async fn test_staff_crud_roundtrip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.staff();

        repo.add(&Staff {
            s_id: 1,
            s_name: "ramesh".to_string(),
            s_phone: "9811111111".to_string(),
            designation: "Manager".to_string(),
        })
        .await
        .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].designation, "Manager");

        repo.delete(1).await.unwrap();
        repo.delete(1).await.unwrap(); // no-op, not an error
        assert!(repo.list().await.unwrap().is_empty());
    }
}
