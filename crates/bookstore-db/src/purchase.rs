//! # Purchase Flow
//!
//! The one multi-step operation in the system: stock validation, report
//! number assignment, report insert and inventory decrement, all inside
//! a single transaction.
//!
//! ## Flow
//! ```text
//! record_purchase(cust_id, b_id, qty)
//!      │
//!      ▼
//! BEGIN
//!   SELECT quantity, price_paise FROM books WHERE b_id = ?
//!      ├── no row            → BookNotFound,      ROLLBACK (no writes)
//!      ├── qty > stock       → InsufficientStock, ROLLBACK (no writes)
//!      ▼
//!   total = price × qty                 (integer paise, no floats)
//!   r_no  = COALESCE(MAX(r_no), 0) + 1  (1 on an empty table)
//!   INSERT INTO reports ...
//!   UPDATE books SET quantity = quantity - ? WHERE b_id = ? AND quantity >= ?
//!      ├── 0 rows affected   → InsufficientStock, ROLLBACK
//!      ▼
//! COMMIT
//! ```
//!
//! The guarded UPDATE means a concurrent purchaser that slipped past the
//! stock pre-check still cannot drive inventory negative; for a single
//! session the behavior is identical to the plain decrement. Both writes
//! and the reads share one transaction, so a failed purchase leaves no
//! trace. No retries: a reported failure means the purchase did not
//! happen.

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::DbError;
use crate::pool::Database;
use bookstore_core::{CoreError, Money, Report};

/// Errors from the purchase flow.
///
/// Business failures (`Core`) mean the purchase was refused before any
/// write; database failures (`Db`) mean the transaction rolled back.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<sqlx::Error> for PurchaseError {
    fn from(err: sqlx::Error) -> Self {
        PurchaseError::Db(err.into())
    }
}

/// Result type for the purchase flow.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Records a purchase: validates stock, assigns the next report number,
/// writes the report row and decrements inventory, atomically.
///
/// ## Arguments
/// * `cust_id` - the already-authenticated customer
/// * `b_id` - book to purchase
/// * `qty` - desired quantity, must be positive
///
/// ## Returns
/// The inserted [`Report`] (today's date, total price at time of sale).
pub async fn record_purchase(
    db: &Database,
    cust_id: i64,
    b_id: i64,
    qty: i64,
) -> PurchaseResult<Report> {
    if qty <= 0 {
        return Err(CoreError::InvalidQuantity(qty).into());
    }

    debug!(cust_id, b_id, qty, "Recording purchase");

    let mut tx = db.pool().begin().await?;

    let row: Option<(i64, i64)> =
        sqlx::query_as("SELECT quantity, price_paise FROM books WHERE b_id = ?1")
            .bind(b_id)
            .fetch_optional(&mut *tx)
            .await?;

    let (stock, price_paise) = match row {
        Some(found) => found,
        None => return Err(CoreError::BookNotFound(b_id).into()),
    };

    if qty > stock {
        return Err(CoreError::InsufficientStock {
            b_id,
            available: stock,
            requested: qty,
        }
        .into());
    }

    let total = Money::from_paise(price_paise).multiply_quantity(qty);
    let today = Local::now().date_naive();

    let max_r_no: Option<i64> = sqlx::query_scalar("SELECT MAX(r_no) FROM reports")
        .fetch_one(&mut *tx)
        .await?;
    let r_no = max_r_no.unwrap_or(0) + 1;

    sqlx::query(
        "INSERT INTO reports (r_no, b_id, c_id, date_of_purchase, quantity, price_paise) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(r_no)
    .bind(b_id)
    .bind(cust_id)
    .bind(today)
    .bind(qty)
    .bind(total.paise())
    .execute(&mut *tx)
    .await?;

    // Guarded decrement: the WHERE clause re-checks stock so two
    // purchasers reading the same snapshot cannot jointly oversell.
    let result = sqlx::query(
        "UPDATE books SET quantity = quantity - ?1 WHERE b_id = ?2 AND quantity >= ?1",
    )
    .bind(qty)
    .bind(b_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CoreError::InsufficientStock {
            b_id,
            available: stock,
            requested: qty,
        }
        .into());
    }

    tx.commit().await?;

    info!(r_no, cust_id, b_id, qty, total = %total, "Purchase recorded");

    Ok(Report {
        r_no,
        b_id: Some(b_id),
        c_id: Some(cust_id),
        date_of_purchase: today,
        quantity: qty,
        price_paise: total.paise(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::seed;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_if_empty(db.pool()).await.unwrap();
        db
    }

    async fn stock_of(db: &Database, b_id: i64) -> i64 {
        db.books().get(b_id).await.unwrap().unwrap().quantity
    }

    #[tokio::test]
    async fn test_first_purchase_gets_report_number_one() {
        // Empty reports, book 101: quantity 10, ₹499.00
        let db = seeded_db().await;

        let report = record_purchase(&db, 3, 101, 3).await.unwrap();

        assert_eq!(report.r_no, 1);
        assert_eq!(report.price_paise, 149700); // ₹1497.00
        assert_eq!(report.quantity, 3);
        assert_eq!(stock_of(&db, 101).await, 7);
    }

    #[tokio::test]
    async fn test_report_numbers_increase_by_one() {
        let db = seeded_db().await;

        let r1 = record_purchase(&db, 2, 101, 1).await.unwrap();
        let r2 = record_purchase(&db, 3, 102, 1).await.unwrap();
        let r3 = record_purchase(&db, 2, 103, 1).await.unwrap();

        assert_eq!((r1.r_no, r2.r_no, r3.r_no), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_unknown_book_writes_nothing() {
        let db = seeded_db().await;

        let err = record_purchase(&db, 2, 999, 1).await.unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::Core(CoreError::BookNotFound(999))
        ));
        assert_eq!(db.reports().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insufficient_stock_writes_nothing() {
        let db = seeded_db().await;
        // Book 109 (The Shining) has 9 in stock
        let err = record_purchase(&db, 2, 109, 10).await.unwrap_err();

        assert!(matches!(
            err,
            PurchaseError::Core(CoreError::InsufficientStock {
                available: 9,
                requested: 10,
                ..
            })
        ));
        assert_eq!(db.reports().count().await.unwrap(), 0);
        assert_eq!(stock_of(&db, 109).await, 9);
    }

    #[tokio::test]
    async fn test_purchase_of_exact_stock_empties_shelf() {
        let db = seeded_db().await;

        let report = record_purchase(&db, 4, 109, 9).await.unwrap();

        assert_eq!(report.quantity, 9);
        assert_eq!(stock_of(&db, 109).await, 0);

        // the shelf is now empty; one more unit must be refused
        let err = record_purchase(&db, 4, 109, 1).await.unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::Core(CoreError::InsufficientStock { .. })
        ));
    }

    #[tokio::test]
    async fn test_zero_or_negative_quantity_is_rejected() {
        let db = seeded_db().await;

        for qty in [0, -1] {
            let err = record_purchase(&db, 2, 101, qty).await.unwrap_err();
            assert!(matches!(
                err,
                PurchaseError::Core(CoreError::InvalidQuantity(_))
            ));
        }
        assert_eq!(db.reports().count().await.unwrap(), 0);
        assert_eq!(stock_of(&db, 101).await, 10);
    }

    #[tokio::test]
    async fn test_total_price_uses_fixed_point_money() {
        let db = seeded_db().await;
        // Book 106: ₹375.00 × 4 = ₹1500.00, exactly
        let report = record_purchase(&db, 5, 106, 4).await.unwrap();

        assert_eq!(report.price_paise, 150000);
        assert_eq!(report.price().to_string(), "₹1500.00");
    }

    #[tokio::test]
    async fn test_purchase_date_is_today() {
        let db = seeded_db().await;

        let report = record_purchase(&db, 2, 101, 1).await.unwrap();
        assert_eq!(report.date_of_purchase, Local::now().date_naive());

        // and the stored row round-trips the same date
        let stored = db.reports().list().await.unwrap();
        assert_eq!(stored[0].date_of_purchase, report.date_of_purchase);
    }
}
