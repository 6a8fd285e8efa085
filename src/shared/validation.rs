use crate::core::error::{AppError, Result};

/// Parse a path segment into a positive integer identifier.
///
/// Runs before any store access so malformed ids are always a 400,
/// never a 500 from a failed query.
pub fn parse_positive_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation(format!("Invalid incident ID: '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id_valid() {
        assert_eq!(parse_positive_id("1").unwrap(), 1);
        assert_eq!(parse_positive_id("42").unwrap(), 42);
        assert_eq!(parse_positive_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn test_parse_positive_id_invalid() {
        assert!(parse_positive_id("abc").is_err()); // non-numeric
        assert!(parse_positive_id("").is_err()); // empty
        assert!(parse_positive_id("1.5").is_err()); // not an integer
        assert!(parse_positive_id("0").is_err()); // not positive
        assert!(parse_positive_id("-3").is_err()); // negative
        assert!(parse_positive_id("2147483648").is_err()); // overflows i32
        assert!(parse_positive_id(" 7").is_err()); // stray whitespace
    }

    #[test]
    fn test_parse_positive_id_error_is_validation() {
        match parse_positive_id("not-a-number") {
            Err(AppError::Validation(msg)) => assert!(msg.contains("not-a-number")),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }
}
