//! # Seed Data
//!
//! Fixed initial rows for every entity table, inserted on startup if and
//! only if the table currently holds zero rows. Re-running bootstrap any
//! number of times never duplicates a row and never errors.
//!
//! The report table is deliberately left empty; reports exist only as a
//! product of the purchase flow.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// Login credentials. `chirag` is the admin identity; every other login
/// id matches a seeded customer row. Passwords are clear text by design.
const AUTH_ROWS: &[(&str, &str)] = &[
    ("chirag", "admin"),
    ("prachi", "1234"),
    ("tirthraj", "1234"),
    ("smera", "1234"),
    ("ayush", "1234"),
    ("sairaj", "1234"),
    ("sankalp", "1234"),
];

/// (cust_id, c_name, address, phoneno, login_id)
const CUSTOMER_ROWS: &[(i64, &str, &str, &str, &str)] = &[
    (1, "chirag", "Mumbai", "9999999999", "chirag"),
    (2, "prachi", "Pune", "9876543210", "prachi"),
    (3, "tirthraj", "Delhi", "9123456780", "tirthraj"),
    (4, "smera", "Chennai", "9988776655", "smera"),
    (5, "ayush", "Bangalore", "9112233445", "ayush"),
    (6, "sairaj", "Hyderabad", "9900887766", "sairaj"),
    (7, "sankalp", "Ahmedabad", "9877898765", "sankalp"),
];

/// (a_id, a_name)
const AUTHOR_ROWS: &[(i64, &str)] = &[
    (1, "J.K. Rowling"),
    (2, "George Orwell"),
    (3, "Chetan Bhagat"),
    (4, "Jane Austen"),
    (5, "Dan Brown"),
    (6, "Agatha Christie"),
    (7, "Paulo Coelho"),
    (8, "Mark Manson"),
    (9, "Stephen King"),
    (10, "Khaled Hosseini"),
];

/// (b_id, b_name, a_name, genre, quantity, price_paise)
const BOOK_ROWS: &[(i64, &str, &str, &str, i64, i64)] = &[
    (101, "Harry Potter", "J.K. Rowling", "Fantasy", 10, 49900),
    (102, "1984", "George Orwell", "Dystopian", 8, 34900),
    (103, "2 States", "Chetan Bhagat", "Romance", 15, 29900),
    (104, "Pride and Prejudice", "Jane Austen", "Classic", 12, 39900),
    (105, "The Da Vinci Code", "Dan Brown", "Thriller", 20, 45000),
    (106, "Murder on the Orient Express", "Agatha Christie", "Mystery", 14, 37500),
    (107, "The Alchemist", "Paulo Coelho", "Philosophy", 18, 32000),
    (108, "You Are Not Alone", "Mark Manson", "Self-Help", 22, 29900),
    (109, "The Shining", "Stephen King", "Horror", 9, 42500),
    (110, "The Kite Runner", "Khaled Hosseini", "Drama", 16, 38000),
];

/// (b_id, a_id)
const BOOK_AUTHOR_ROWS: &[(i64, i64)] = &[
    (101, 1),
    (102, 2),
    (103, 3),
    (104, 4),
    (105, 5),
    (106, 6),
    (107, 7),
    (108, 8),
    (109, 9),
    (110, 10),
];

/// Inserts the fixed seed rows into every table that is currently empty.
///
/// Per-table granularity: a table that already has rows (even just one)
/// is skipped entirely, so a half-populated database is topped up rather
/// than duplicated.
pub async fn seed_if_empty(pool: &SqlitePool) -> DbResult<()> {
    if table_is_empty(pool, "authentication").await? {
        for (login_id, password) in AUTH_ROWS {
            sqlx::query("INSERT INTO authentication (login_id, password) VALUES (?1, ?2)")
                .bind(login_id)
                .bind(password)
                .execute(pool)
                .await?;
        }
        info!(rows = AUTH_ROWS.len(), "Seeded authentication");
    }

    if table_is_empty(pool, "customers").await? {
        for (cust_id, c_name, address, phoneno, login_id) in CUSTOMER_ROWS {
            sqlx::query(
                "INSERT INTO customers (cust_id, c_name, address, phoneno, login_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(cust_id)
            .bind(c_name)
            .bind(address)
            .bind(phoneno)
            .bind(login_id)
            .execute(pool)
            .await?;
        }
        info!(rows = CUSTOMER_ROWS.len(), "Seeded customers");
    }

    if table_is_empty(pool, "authors").await? {
        for (a_id, a_name) in AUTHOR_ROWS {
            sqlx::query("INSERT INTO authors (a_id, a_name) VALUES (?1, ?2)")
                .bind(a_id)
                .bind(a_name)
                .execute(pool)
                .await?;
        }
        info!(rows = AUTHOR_ROWS.len(), "Seeded authors");
    }

    if table_is_empty(pool, "books").await? {
        for (b_id, b_name, a_name, genre, quantity, price_paise) in BOOK_ROWS {
            sqlx::query(
                "INSERT INTO books (b_id, b_name, a_name, genre, quantity, price_paise) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(b_id)
            .bind(b_name)
            .bind(a_name)
            .bind(genre)
            .bind(quantity)
            .bind(price_paise)
            .execute(pool)
            .await?;
        }
        info!(rows = BOOK_ROWS.len(), "Seeded books");
    }

    if table_is_empty(pool, "book_authors").await? {
        for (b_id, a_id) in BOOK_AUTHOR_ROWS {
            sqlx::query("INSERT INTO book_authors (b_id, a_id) VALUES (?1, ?2)")
                .bind(b_id)
                .bind(a_id)
                .execute(pool)
                .await?;
        }
        info!(rows = BOOK_AUTHOR_ROWS.len(), "Seeded book_authors");
    }

    // reports intentionally left empty

    Ok(())
}

async fn table_is_empty(pool: &SqlitePool, table: &str) -> DbResult<bool> {
    // table names come from the constants above, never from user input
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    debug!(table, count, "Seed empty-check");
    Ok(count == 0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_if_empty(db.pool()).await.unwrap();
        db
    }

    async fn count(db: &Database, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_seed_populates_every_table() {
        let db = seeded_db().await;

        assert_eq!(count(&db, "authentication").await, 7);
        assert_eq!(count(&db, "customers").await, 7);
        assert_eq!(count(&db, "authors").await, 10);
        assert_eq!(count(&db, "books").await, 10);
        assert_eq!(count(&db, "book_authors").await, 10);
        assert_eq!(count(&db, "reports").await, 0);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = seeded_db().await;

        seed_if_empty(db.pool()).await.unwrap();
        seed_if_empty(db.pool()).await.unwrap();

        assert_eq!(count(&db, "authentication").await, 7);
        assert_eq!(count(&db, "books").await, 10);
    }

    #[tokio::test]
    async fn test_seed_skips_nonempty_table() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        sqlx::query("INSERT INTO authors (a_id, a_name) VALUES (99, 'Existing Author')")
            .execute(db.pool())
            .await
            .unwrap();

        seed_if_empty(db.pool()).await.unwrap();

        // authors untouched, everything else seeded
        assert_eq!(count(&db, "authors").await, 1);
        assert_eq!(count(&db, "books").await, 10);
    }

    #[tokio::test]
    async fn test_seeded_book_101() {
        let db = seeded_db().await;

        let (name, qty, price): (String, i64, i64) = sqlx::query_as(
            "SELECT b_name, quantity, price_paise FROM books WHERE b_id = 101",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();

        assert_eq!(name, "Harry Potter");
        assert_eq!(qty, 10);
        assert_eq!(price, 49900);
    }
}
