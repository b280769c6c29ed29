//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! bookstore-core errors (this file)
//! ├── CoreError        - Business rule failures (purchase flow)
//! └── ValidationError  - Input validation failures
//!
//! bookstore-db errors (separate crate)
//! ├── DbError          - Database operation failures
//! └── PurchaseError    - CoreError or DbError from the purchase flow
//! ```
//!
//! ## Design Principles
//! 1. `thiserror` derives, never manual impls
//! 2. Include context in messages (book id, available stock, ...)
//! 3. Errors are enum variants, never bare strings
//! 4. Each variant maps to a user-facing message in the front ends

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule failures.
///
/// These come from the purchase flow's pre-checks; a `CoreError` always
/// means nothing was written.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No book exists with the given id.
    #[error("Book not found: {0}")]
    BookNotFound(i64),

    /// Requested quantity exceeds current stock.
    #[error("Insufficient stock for book {b_id}: available {available}, requested {requested}")]
    InsufficientStock {
        b_id: i64,
        available: i64,
        requested: i64,
    },

    /// Purchase quantity must be a positive integer.
    #[error("Invalid purchase quantity: {0}")]
    InvalidQuantity(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before business logic for the few checks the front ends apply
/// to raw input (everything else is left to storage constraints).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            b_id: 101,
            available: 5,
            requested: 6,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for book 101: available 5, requested 6"
        );

        assert_eq!(CoreError::BookNotFound(999).to_string(), "Book not found: 999");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "b_name".to_string(),
        };
        assert_eq!(err.to_string(), "b_name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
