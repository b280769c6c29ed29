//! # Authentication Repository
//!
//! Database operations for login credentials.
//!
//! Passwords are stored and compared in clear text; that is the existing
//! system's behavior, reproduced deliberately rather than upgraded to
//! hashing (which would change the stored credential format).

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bookstore_core::Credentials;

/// Repository for authentication database operations.
#[derive(Debug, Clone)]
pub struct AuthRepository {
    pool: SqlitePool,
}

impl AuthRepository {
    /// Creates a new AuthRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AuthRepository { pool }
    }

    /// Inserts a new credential row.
    pub async fn add(&self, creds: &Credentials) -> DbResult<()> {
        debug!(login_id = %creds.login_id, "Inserting credential");

        sqlx::query("INSERT INTO authentication (login_id, password) VALUES (?1, ?2)")
            .bind(&creds.login_id)
            .bind(&creds.password)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes a credential by login id. No-op when absent; any customer
    /// referencing it has its `login_id` nulled by the schema.
    pub async fn delete(&self, login_id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM authentication WHERE login_id = ?1")
            .bind(login_id)
            .execute(&self.pool)
            .await?;

        debug!(login_id, rows = result.rows_affected(), "Deleted credential");
        Ok(())
    }

    /// Looks up the credential row for a login id.
    pub async fn find(&self, login_id: &str) -> DbResult<Option<Credentials>> {
        let creds = sqlx::query_as::<_, Credentials>(
            "SELECT login_id, password FROM authentication WHERE login_id = ?1",
        )
        .bind(login_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(creds)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use crate::seed;

    #[tokio::test]
    async fn test_find_seeded_credential() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_if_empty(db.pool()).await.unwrap();

        let admin = db.credentials().find("chirag").await.unwrap().unwrap();
        assert_eq!(admin.password, "admin");

        assert!(db.credentials().find("nobody").await.unwrap().is_none());
    }
}
