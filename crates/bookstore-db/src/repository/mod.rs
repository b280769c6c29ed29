//! # Repository Implementations
//!
//! One repository per entity table. Every operation is a single
//! parameterized statement; the only multi-statement flow in the system
//! lives in [`crate::purchase`].
//!
//! Shared conventions:
//! - `add` inserts a fully-specified record (caller supplies the primary
//!   key); constraint violations surface as [`crate::error::DbError`].
//! - `delete` removes by primary key and is a no-op when absent.
//! - `list` returns all rows in storage order.

pub mod auth;
pub mod author;
pub mod book;
pub mod customer;
pub mod report;
pub mod staff;
