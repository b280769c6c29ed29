//! # Customer Repository
//!
//! Database operations for customers. The optional `login_id` ties a
//! customer to an authentication row; it is nulled by the schema when
//! that credential is deleted.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bookstore_core::Customer;

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

    /// Inserts a new customer. A `login_id` that doesn't exist in the
    /// authentication table is a foreign key violation.
    pub async fn add(&self, customer: &Customer) -> DbResult<()> {
        debug!(cust_id = customer.cust_id, name = %customer.c_name, "Inserting customer");

        sqlx::query(
            "INSERT INTO customers (cust_id, c_name, address, phoneno, login_id) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(customer.cust_id)
        .bind(&customer.c_name)
        .bind(&customer.address)
        .bind(&customer.phoneno)
        .bind(&customer.login_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a customer by id. No-op when absent. Reports referencing
    /// the customer keep their rows with `c_id` nulled (schema-level).
    pub async fn delete(&self, cust_id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE cust_id = ?1")
            .bind(cust_id)
            .execute(&self.pool)
            .await?;

        debug!(cust_id, rows = result.rows_affected(), "Deleted customer");
        Ok(())
    }

    /// Lists all customers in storage order.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT cust_id, c_name, address, phoneno, login_id FROM customers",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Resolves the customer tied to a login id. Used by session routing
    /// after a successful credential check.
    pub async fn find_by_login(&self, login_id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT cust_id, c_name, address, phoneno, login_id \
             FROM customers WHERE login_id = ?1",
        )
        .bind(login_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use crate::seed;
    use bookstore_core::Customer;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_if_empty(db.pool()).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_add_without_login_id() {
        let db = seeded_db().await;

        db.customers()
            .add(&Customer {
                cust_id: 8,
                c_name: "walk-in".to_string(),
                address: "Nagpur".to_string(),
                phoneno: "9000000000".to_string(),
                login_id: None,
            })
            .await
            .unwrap();

        assert_eq!(db.customers().list().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_add_with_unknown_login_id_violates_fk() {
        let db = seeded_db().await;

        let err = db
            .customers()
            .add(&Customer {
                cust_id: 8,
                c_name: "ghost".to_string(),
                address: "Nowhere".to_string(),
                phoneno: "0000000000".to_string(),
                login_id: Some("no-such-login".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_find_by_login() {
        let db = seeded_db().await;

        let prachi = db
            .customers()
            .find_by_login("prachi")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(prachi.cust_id, 2);

        assert!(db
            .customers()
            .find_by_login("nobody")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_deleting_credential_nulls_customer_login() {
        let db = seeded_db().await;

        db.credentials().delete("prachi").await.unwrap();

        let prachi: Option<String> =
            sqlx::query_scalar("SELECT login_id FROM customers WHERE cust_id = 2")
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert!(prachi.is_none());
    }
}
