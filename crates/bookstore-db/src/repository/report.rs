//! # Report Repository
//!
//! Read access to purchase records. Report rows are written only by the
//! purchase flow ([`crate::purchase`]); this repository lists them for
//! the admin report view and per-customer purchase history.

use sqlx::SqlitePool;

use crate::error::DbResult;
use bookstore_core::Report;

/// Repository for report database operations.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Lists every purchase record in storage order.
    pub async fn list(&self) -> DbResult<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(
            "SELECT r_no, b_id, c_id, date_of_purchase, quantity, price_paise FROM reports",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    /// Lists the purchase history of one customer.
    pub async fn list_for_customer(&self, cust_id: i64) -> DbResult<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(
            "SELECT r_no, b_id, c_id, date_of_purchase, quantity, price_paise \
             FROM reports WHERE c_id = ?1",
        )
        .bind(cust_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    /// Counts all reports (for diagnostics and tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use crate::purchase;
    use crate::seed;

    #[tokio::test]
    async fn test_history_filters_by_customer() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_if_empty(db.pool()).await.unwrap();

        purchase::record_purchase(&db, 2, 101, 1).await.unwrap();
        purchase::record_purchase(&db, 3, 102, 2).await.unwrap();
        purchase::record_purchase(&db, 2, 103, 1).await.unwrap();

        assert_eq!(db.reports().count().await.unwrap(), 3);

        let prachi = db.reports().list_for_customer(2).await.unwrap();
        assert_eq!(prachi.len(), 2);
        assert!(prachi.iter().all(|r| r.c_id == Some(2)));

        let nobody = db.reports().list_for_customer(99).await.unwrap();
        assert!(nobody.is_empty());
    }
}
