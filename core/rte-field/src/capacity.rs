//! Column capacity validation.

use crate::error::{FieldError, FieldResult};
use crate::settings::ColumnType;

/// Share of the raw column capacity content may use.
pub const CAPACITY_MARGIN_PERCENT: u64 = 90;

/// Largest content length in bytes accepted for `column_type`.
#[must_use]
pub const fn storage_limit(column_type: ColumnType) -> u64 {
    column_type.capacity() * CAPACITY_MARGIN_PERCENT / 100
}

/// Checks that `value` fits into `column_type` with the safety margin applied.
///
/// Content is never truncated; oversized values are rejected so the author
/// can shorten them. `attribute` names the field in the error message.
pub fn check_storage_capacity(
    value: &str,
    column_type: ColumnType,
    attribute: &str,
) -> FieldResult<()> {
    let limit = storage_limit(column_type);
    if value.len() as u64 > limit {
        return Err(FieldError::TooLong {
            attribute: attribute.to_string(),
            length: value.len(),
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_apply_margin_rounding_down() {
        assert_eq!(storage_limit(ColumnType::TinyText), 229);
        assert_eq!(storage_limit(ColumnType::Text), 58_981);
        assert_eq!(storage_limit(ColumnType::MediumText), 15_099_493);
        assert_eq!(storage_limit(ColumnType::LongText), 3_865_470_565);
    }

    #[test]
    fn boundary_on_text_column() {
        let limit = storage_limit(ColumnType::Text) as usize;
        assert!(check_storage_capacity(&"a".repeat(limit), ColumnType::Text, "Body").is_ok());

        let err = check_storage_capacity(&"a".repeat(limit + 1), ColumnType::Text, "Body")
            .unwrap_err();
        match err {
            FieldError::TooLong {
                attribute,
                length,
                limit: reported,
            } => {
                assert_eq!(attribute, "Body");
                assert_eq!(length, limit + 1);
                assert_eq!(reported, limit as u64);
            }
            other => panic!("expected TooLong, got {other:?}"),
        }
    }

    #[test]
    fn length_is_measured_in_bytes() {
        // 'é' is two bytes in UTF-8
        let limit = storage_limit(ColumnType::TinyText) as usize;
        let value = "é".repeat(limit / 2 + 1);
        assert!(value.chars().count() < limit);
        assert!(check_storage_capacity(&value, ColumnType::TinyText, "Intro").is_err());
    }
}
