//! Application-level error type.
//!
//! Everything fatal funnels into [`AppError`] so `main` can log one
//! line and exit nonzero. Recoverable conditions (bad menu input, a
//! refused purchase) are handled where they occur and never reach this
//! type.

use thiserror::Error;

use bookstore_db::{DbError, PurchaseError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("purchase failed: {0}")]
    Purchase(#[from] PurchaseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidListenAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

pub type AppResult<T> = Result<T, AppError>;
