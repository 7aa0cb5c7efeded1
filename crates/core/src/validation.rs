//! Reusable field-level validation rules.
//!
//! Each rule takes the value under test, a field label and any rule
//! parameter, and fails with a fixed `"<field> should ..."` message. Rules
//! are pure; the caller decides ordering and fail-fast behavior.
//!
//! Absent values are modeled as `None`. The length rules deliberately let
//! `None` pass — absence is the business of [`not_null`] /
//! [`not_null_or_empty`], not of the length bounds.

use crate::error::{DomainResult, ValidationError};

/// Fails with `"<field> should not be null"` when the value is absent.
pub fn not_null<T: ?Sized>(target: Option<&T>, field: &str) -> DomainResult<()> {
    match target {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(format!("{field} should not be null"))),
    }
}

/// Fails with `"<field> should not be null or empty"` when the value is
/// absent, empty, or whitespace-only.
pub fn not_null_or_empty(target: Option<&str>, field: &str) -> DomainResult<()> {
    match target {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new(format!(
            "{field} should not be null or empty"
        ))),
    }
}

/// Fails with `"<field> should have at least <min> characters"` when the
/// value is present and shorter than `min`. Lengths count characters.
pub fn min_length(target: Option<&str>, field: &str, min: usize) -> DomainResult<()> {
    match target {
        Some(value) if value.chars().count() < min => Err(ValidationError::new(format!(
            "{field} should have at least {min} characters"
        ))),
        _ => Ok(()),
    }
}

/// Fails with `"<field> should have at most <max> characters"` when the
/// value is present and longer than `max`. Lengths count characters.
pub fn max_length(target: Option<&str>, field: &str, max: usize) -> DomainResult<()> {
    match target {
        Some(value) if value.chars().count() > max => Err(ValidationError::new(format!(
            "{field} should have at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_ok() {
        assert!(not_null(Some(&"category name"), "Value").is_ok());
    }

    #[test]
    fn not_null_with_null_value() {
        let err = not_null::<String>(None, "FieldName").unwrap_err();
        assert_eq!(err.to_string(), "FieldName should not be null");
    }

    #[test]
    fn not_null_or_empty_ok() {
        assert!(not_null_or_empty(Some("category name"), "Value").is_ok());
    }

    #[test]
    fn not_null_or_empty_rejects_blank_variants() {
        for target in [None, Some(""), Some(" "), Some("  ")] {
            let err = not_null_or_empty(target, "Target").unwrap_err();
            assert_eq!(err.to_string(), "Target should not be null or empty");
        }
    }

    #[test]
    fn min_length_ok() {
        assert!(min_length(Some("category name"), "Value", 5).is_ok());
        // Exactly at the bound passes.
        assert!(min_length(Some("12345"), "Value", 5).is_ok());
    }

    #[test]
    fn min_length_throws_below_bound() {
        for target in [" ", "  ", "1234"] {
            let err = min_length(Some(target), "Target", 5).unwrap_err();
            assert_eq!(err.to_string(), "Target should have at least 5 characters");
        }
    }

    #[test]
    fn min_length_lets_null_pass() {
        assert!(min_length(None, "Target", 5).is_ok());
    }

    #[test]
    fn max_length_ok() {
        assert!(max_length(Some("1234"), "Value", 5).is_ok());
        // Exactly at the bound passes.
        assert!(max_length(Some("12345"), "Value", 5).is_ok());
    }

    #[test]
    fn max_length_throws_above_bound() {
        for target in ["123456", "1234567"] {
            let err = max_length(Some(target), "Target", 5).unwrap_err();
            assert_eq!(err.to_string(), "Target should have at most 5 characters");
        }
    }

    #[test]
    fn max_length_lets_null_pass() {
        assert!(max_length(None, "Target", 5).is_ok());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 5 characters, more than 5 bytes.
        assert!(max_length(Some("ábcdé"), "Value", 5).is_ok());
        assert!(min_length(Some("ábcdé"), "Value", 5).is_ok());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-blank string within bounds passes every rule.
            #[test]
            fn in_bounds_values_pass(value in "[A-Za-z][A-Za-z0-9 ]{2,20}") {
                prop_assert!(not_null(Some(&value), "Value").is_ok());
                prop_assert!(not_null_or_empty(Some(&value), "Value").is_ok());
                prop_assert!(min_length(Some(&value), "Value", 3).is_ok());
                prop_assert!(max_length(Some(&value), "Value", 21).is_ok());
            }

            /// Property: min/max failures carry the parametrized message.
            #[test]
            fn bound_failures_name_the_bound(min in 10usize..100) {
                let err = min_length(Some("short"), "Target", min).unwrap_err();
                prop_assert_eq!(
                    err.to_string(),
                    format!("Target should have at least {min} characters")
                );
            }
        }
    }
}
