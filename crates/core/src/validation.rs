//! Shared input validation helpers used by the create/update DTOs.

use validator::Validate;

use crate::error::CoreError;

/// Run the derived `validator` rules and convert failures into
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

/// Reject values that are empty once surrounding whitespace is removed.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Treat blank optional strings as absent.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_field_rejected() {
        assert!(require_non_blank("title", "   ").is_err());
        assert!(require_non_blank("title", "Sunset").is_ok());
    }

    #[test]
    fn blank_optional_becomes_none() {
        assert_eq!(blank_to_none(Some("  ".into())), None);
        assert_eq!(blank_to_none(Some("x".into())), Some("x".into()));
        assert_eq!(blank_to_none(None), None);
    }
}
