//! # Domain Types
//!
//! Entity types used throughout the bookstore system. Each one maps to a
//! row of the corresponding table; primary keys are caller-supplied (the
//! system never auto-generates entity ids).
//!
//! ## Schema Note: Denormalized Author Name
//! `Book.a_name` is a flat copy of the author's name that coexists with
//! the proper `Author`/`BookAuthor` many-to-many link. That duplication
//! is the existing schema design and is preserved as-is rather than
//! silently normalized away.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Authentication
// =============================================================================

/// A login credential row.
///
/// The password is stored and compared in clear text. That is a known
/// weakness of the existing system, reproduced behaviorally on purpose;
/// hashing would change the stored credential format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Credentials {
    /// Unique login identifier.
    pub login_id: String,
    /// Clear-text password.
    pub password: String,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Primary key, supplied by the caller on creation.
    pub cust_id: i64,
    pub c_name: String,
    pub address: String,
    pub phoneno: String,
    /// Optional link to an authentication row. Nulled when the
    /// credential is deleted.
    pub login_id: Option<String>,
}

// =============================================================================
// Author
// =============================================================================

/// An author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Author {
    pub a_id: i64,
    pub a_name: String,
}

// =============================================================================
// Book
// =============================================================================

/// A book in inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Primary key, supplied by the caller on creation.
    pub b_id: i64,
    pub b_name: String,
    /// Denormalized author name (see module docs).
    pub a_name: String,
    pub genre: String,
    /// Current stock. Never negative; mutated only by the purchase flow.
    pub quantity: i64,
    /// Unit price in paise.
    pub price_paise: i64,
}

impl Book {
    /// Returns the unit price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }

    /// Whether any stock remains.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

// =============================================================================
// BookAuthor Link
// =============================================================================

/// Many-to-many link between books and authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BookAuthor {
    pub b_id: i64,
    pub a_id: i64,
}

// =============================================================================
// Staff
// =============================================================================

/// A staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Staff {
    pub s_id: i64,
    pub s_name: String,
    pub s_phone: String,
    pub designation: String,
}

// =============================================================================
// Report
// =============================================================================

/// A purchase transaction record, one row per sale.
///
/// `r_no` is assigned by the purchase flow as `max(existing) + 1`,
/// starting at 1 on an empty table. `b_id`/`c_id` are nulled if the
/// referenced book or customer is later deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Report {
    pub r_no: i64,
    pub b_id: Option<i64>,
    pub c_id: Option<i64>,
    pub date_of_purchase: NaiveDate,
    /// Purchased quantity, always positive.
    pub quantity: i64,
    /// Total sale price in paise (unit price x quantity at time of sale).
    pub price_paise: i64,
}

impl Report {
    /// Returns the total sale price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_price_and_stock() {
        let book = Book {
            b_id: 101,
            b_name: "Harry Potter".to_string(),
            a_name: "J.K. Rowling".to_string(),
            genre: "Fantasy".to_string(),
            quantity: 10,
            price_paise: 49900,
        };
        assert_eq!(book.price(), Money::from_paise(49900));
        assert!(book.in_stock());

        let sold_out = Book { quantity: 0, ..book };
        assert!(!sold_out.in_stock());
    }

    #[test]
    fn test_report_price() {
        let report = Report {
            r_no: 1,
            b_id: Some(101),
            c_id: Some(3),
            date_of_purchase: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            quantity: 3,
            price_paise: 149700,
        };
        assert_eq!(report.price().to_string(), "₹1497.00");
    }
}
