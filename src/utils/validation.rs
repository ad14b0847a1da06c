//! Input validation helpers
//!
//! Required-field checks for CRUD request bodies. A field counts as missing
//! when it is absent, null, an empty string, or zero — zero wages, prices,
//! and inventories are rejected like absent values, which is the documented
//! API behavior, not an accident.

use crate::utils::AppError;

/// Validate a required text field. Absent, null, or empty → 400.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Validate a required numeric field. Absent, null, or zero → 400.
pub fn require_number(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    match value {
        Some(v) if v != 0.0 => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Validate a required integer field. Absent, null, or zero → 400.
pub fn require_integer(value: Option<i64>, field: &str) -> Result<i64, AppError> {
    match value {
        Some(v) if v != 0 => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_non_empty() {
        assert_eq!(require_text(Some("Waiter".into()), "position").unwrap(), "Waiter");
    }

    #[test]
    fn text_rejects_absent_and_empty() {
        assert!(require_text(None, "name").is_err());
        assert!(require_text(Some(String::new()), "name").is_err());
    }

    #[test]
    fn number_rejects_zero() {
        assert!(require_number(Some(0.0), "wage").is_err());
        assert!(require_number(None, "wage").is_err());
        assert_eq!(require_number(Some(12.5), "wage").unwrap(), 12.5);
    }

    #[test]
    fn integer_rejects_zero() {
        assert!(require_integer(Some(0), "inventory").is_err());
        assert!(require_integer(None, "inventory").is_err());
        assert_eq!(require_integer(Some(8), "inventory").unwrap(), 8);
    }
}
