//! # bookstore-core: Pure Domain Logic for the Bookstore System
//!
//! This crate is the I/O-free heart of the bookstore management system.
//!
//! ## Architecture Position
//! ```text
//! apps/bookstore (console menu / web dashboard)
//!        │
//!        ▼
//! bookstore-db (SQLite repositories, purchase flow)
//!        │
//!        ▼
//! bookstore-core (THIS CRATE)
//!   types • money • validation • errors
//!   NO I/O • NO DATABASE • NO NETWORK
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Book, Author, Customer, Staff, Report, ...)
//! - [`money`] - Fixed-point rupee amounts (integer paise, no floats)
//! - [`error`] - Domain error types
//! - [`validation`] - The few pre-storage input checks
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: deterministic, no side effects
//! 2. **No I/O**: database and network access are forbidden here
//! 3. **Integer money**: all amounts are paise (i64), never floats
//! 4. **Explicit errors**: typed enums, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The single login id that routes to the administrative menu.
///
/// Every other valid login must resolve to exactly one customer row.
/// A fixed identity mirrors the existing system's role model; there is
/// no role column in the schema.
pub const ADMIN_LOGIN_ID: &str = "chirag";
