//! # bookstore-db: Database Layer for the Bookstore
//!
//! This crate provides database access for the bookstore management
//! system. It uses SQLite for local storage with sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Bookstore Data Flow                         │
//! │                                                                  │
//! │  Console menu / web handler (e.g. "purchase book")               │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │                  bookstore-db (THIS CRATE)                 │  │
//! │  │                                                            │  │
//! │  │  ┌────────────┐  ┌──────────────┐  ┌──────────────────┐   │  │
//! │  │  │  Database  │  │ Repositories │  │ purchase / seed  │   │  │
//! │  │  │ (pool.rs)  │  │ (book.rs ..) │  │ (transactional)  │   │  │
//! │  │  │            │  │              │  │                  │   │  │
//! │  │  │ SqlitePool │◄─│ BookRepo     │  │ record_purchase  │   │  │
//! │  │  │ Migrations │  │ AuthorRepo   │  │ seed_if_empty    │   │  │
//! │  │  └────────────┘  └──────────────┘  └──────────────────┘   │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  SQLite database file (bookstore.db)                             │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (book, author, ...)
//! - [`purchase`] - The transactional purchase flow
//! - [`seed`] - First-run sample data
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookstore_db::{Database, DbConfig};
//!
//! // Open (or create) the store database; migrations run on open.
//! let db = Database::new(DbConfig::new("bookstore.db")).await?;
//! bookstore_db::seed::seed_if_empty(db.pool()).await?;
//!
//! // Use repositories
//! let in_stock = db.books().list_in_stock().await?;
//!
//! // Record a sale
//! let report = bookstore_db::purchase::record_purchase(&db, 2, 101, 3).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod purchase;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use purchase::{record_purchase, PurchaseError, PurchaseResult};

// Repository re-exports for convenience
pub use repository::auth::AuthRepository;
pub use repository::author::AuthorRepository;
pub use repository::book::BookRepository;
pub use repository::customer::CustomerRepository;
pub use repository::report::ReportRepository;
pub use repository::staff::StaffRepository;
