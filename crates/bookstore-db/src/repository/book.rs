//! # Book Repository
//!
//! Database operations for the book inventory.
//!
//! Stock is mutated in exactly one place, the purchase flow
//! ([`crate::purchase`]); this repository only inserts, deletes and
//! lists. There is no update-in-place for books or any other entity.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bookstore_core::Book;

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.books();
/// let in_stock = repo.list_in_stock().await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Inserts a new book. The caller supplies every field including the
    /// primary key; a duplicate id or negative quantity/price comes back
    /// as a constraint violation, not a pre-check.
    pub async fn add(&self, book: &Book) -> DbResult<()> {
        debug!(b_id = book.b_id, name = %book.b_name, "Inserting book");

        sqlx::query(
            "INSERT INTO books (b_id, b_name, a_name, genre, quantity, price_paise) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(book.b_id)
        .bind(&book.b_name)
        .bind(&book.a_name)
        .bind(&book.genre)
        .bind(book.quantity)
        .bind(book.price_paise)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a book by id. Deleting a nonexistent id is a no-op.
    pub async fn delete(&self, b_id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE b_id = ?1")
            .bind(b_id)
            .execute(&self.pool)
            .await?;

        debug!(b_id, rows = result.rows_affected(), "Deleted book");
        Ok(())
    }

    /// Lists all books in storage order.
    pub async fn list(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT b_id, b_name, a_name, genre, quantity, price_paise FROM books",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Lists books with stock remaining. This is the customer-facing
    /// view: sold-out titles are hidden.
    pub async fn list_in_stock(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT b_id, b_name, a_name, genre, quantity, price_paise \
             FROM books WHERE quantity > 0",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Gets a book by id.
    pub async fn get(&self, b_id: i64) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT b_id, b_name, a_name, genre, quantity, price_paise \
             FROM books WHERE b_id = ?1",
        )
        .bind(b_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
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
    use bookstore_core::Book;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_if_empty(db.pool()).await.unwrap();
        db
    }

    fn sample_book() -> Book {
        Book {
            b_id: 200,
            b_name: "Wings of Fire".to_string(),
            a_name: "A.P.J. Abdul Kalam".to_string(),
            genre: "Autobiography".to_string(),
            quantity: 5,
            price_paise: 25000,
        }
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let db = seeded_db().await;
        let book = sample_book();

        db.books().add(&book).await.unwrap();

        let fetched = db.books().get(200).await.unwrap().unwrap();
        assert_eq!(fetched, book);
    }

    #[tokio::test]
    async fn test_add_duplicate_id_is_rejected() {
        let db = seeded_db().await;

        // 101 exists in the seed
        let dup = Book { b_id: 101, ..sample_book() };
        let err = db.books().add(&dup).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_add_negative_quantity_hits_check_constraint() {
        let db = seeded_db().await;

        let bad = Book { quantity: -1, ..sample_book() };
        let err = db.books().add(&bad).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_noop() {
        let db = seeded_db().await;

        db.books().delete(9999).await.unwrap();
        assert_eq!(db.books().list().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_list_in_stock_hides_sold_out() {
        let db = seeded_db().await;
        db.books()
            .add(&Book { quantity: 0, ..sample_book() })
            .await
            .unwrap();

        let all = db.books().list().await.unwrap();
        let in_stock = db.books().list_in_stock().await.unwrap();

        assert_eq!(all.len(), 11);
        assert_eq!(in_stock.len(), 10);
        assert!(in_stock.iter().all(|b| b.quantity > 0));
    }
}
