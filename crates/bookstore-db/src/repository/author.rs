//! # Author Repository
//!
//! Database operations for authors and the book/author link table.
//! Deleting an author cascades through `book_authors` (schema-level),
//! while the denormalized `books.a_name` copy is left untouched - that
//! inconsistency is part of the existing schema design.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bookstore_core::{Author, BookAuthor};

/// Repository for author database operations.
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    /// Creates a new AuthorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AuthorRepository { pool }
    }

    /// Inserts a new author.
    pub async fn add(&self, author: &Author) -> DbResult<()> {
        debug!(a_id = author.a_id, name = %author.a_name, "Inserting author");

        sqlx::query("INSERT INTO authors (a_id, a_name) VALUES (?1, ?2)")
            .bind(author.a_id)
            .bind(&author.a_name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes an author by id. No-op when absent; existing
    /// `book_authors` links cascade away.
    pub async fn delete(&self, a_id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE a_id = ?1")
            .bind(a_id)
            .execute(&self.pool)
            .await?;

        debug!(a_id, rows = result.rows_affected(), "Deleted author");
        Ok(())
    }

    /// Lists all authors in storage order.
    pub async fn list(&self) -> DbResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT a_id, a_name FROM authors")
            .fetch_all(&self.pool)
            .await?;

        Ok(authors)
    }

    /// Links a book to an author in the many-to-many table.
    pub async fn link_book(&self, link: &BookAuthor) -> DbResult<()> {
        debug!(b_id = link.b_id, a_id = link.a_id, "Linking book to author");

        sqlx::query("INSERT INTO book_authors (b_id, a_id) VALUES (?1, ?2)")
            .bind(link.b_id)
            .bind(link.a_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Lists all book/author links.
    pub async fn list_links(&self) -> DbResult<Vec<BookAuthor>> {
        let links = sqlx::query_as::<_, BookAuthor>("SELECT b_id, a_id FROM book_authors")
            .fetch_all(&self.pool)
            .await?;

        Ok(links)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use crate::seed;
    use bookstore_core::Author;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_if_empty(db.pool()).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_add_delete_list() {
        let db = seeded_db().await;
        let repo = db.authors();

        repo.add(&Author { a_id: 11, a_name: "R.K. Narayan".to_string() })
            .await
            .unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 11);

        repo.delete(11).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 10);

        // deleting again is a no-op
        repo.delete(11).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_author_cascades_links() {
        let db = seeded_db().await;

        // seed links author 1 to book 101
        db.authors().delete(1).await.unwrap();

        let links = db.authors().list_links().await.unwrap();
        assert!(links.iter().all(|l| l.a_id != 1));
        assert_eq!(links.len(), 9);
    }
}
