//! # Validation Module
//!
//! The handful of input checks the front ends apply before touching
//! storage. By design most input is *not* pre-validated: constraint
//! violations (duplicate keys, negative quantity/price) surface as
//! storage errors and are reported at the call site. What lives here is
//! only what the forms and prompts need to reject outright: empty
//! required fields and non-positive purchase quantities.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Requires a non-empty (after trimming) text field.
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::require_non_empty;
///
/// assert!(require_non_empty("b_name", "Harry Potter").is_ok());
/// assert!(require_non_empty("b_name", "   ").is_err());
/// ```
pub fn require_non_empty(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Requires a strictly positive integer (purchase quantities).
pub fn require_positive(field: &str, value: i64) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Requires a non-negative integer (initial stock, prices in paise).
pub fn require_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("c_name", "prachi").is_ok());
        assert!(require_non_empty("c_name", "").is_err());
        assert!(require_non_empty("c_name", "  \t").is_err());
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("quantity", 1).is_ok());
        assert!(require_positive("quantity", 0).is_err());
        assert!(require_positive("quantity", -3).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("price", 0).is_ok());
        assert!(require_non_negative("price", -1).is_err());
    }
}
