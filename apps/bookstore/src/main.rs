//! # Bookstore Management System
//!
//! Single-store inventory and sales: books, authors, customers, staff
//! and purchase reports over one SQLite database.
//!
//! ## Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      bookstore (binary)                        │
//! │                                                                │
//! │   console menu (default)          web dashboard (--web)        │
//! │   login → admin/customer menus    axum + maud + cookie session │
//! │            │                               │                   │
//! │            └───────────┬───────────────────┘                   │
//! │                        ▼                                       │
//! │              bookstore-db repositories                         │
//! │                        │                                       │
//! │                        ▼                                       │
//! │              SQLite (bookstore.db)                             │
//! └────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cli;
mod console;
mod error;
mod web;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bookstore_db::{seed, Database, DbConfig};

use crate::cli::Cli;
use crate::error::AppResult;

#[tokio::main]
async fn main() {
    // .env is optional; missing file is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookstore=info")),
        )
        .with_target(true)
        .init();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Fatal error");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    info!(db = %cli.db, "Opening database");
    let db = Database::new(DbConfig::new(&cli.db)).await?;

    // First run against an empty database gets the sample data set
    seed::seed_if_empty(db.pool()).await?;

    if cli.web {
        web::serve(db, &cli.listen).await
    } else {
        console::run(db).await
    }
}
