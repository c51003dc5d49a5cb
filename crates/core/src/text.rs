//! Required / optional text field checks shared by every create and update
//! operation.

use crate::error::CoreError;

/// Require a present, non-blank value. Returns the trimmed text.
///
/// `message` is returned verbatim as the validation error, e.g.
/// `"Comment content is required"`.
pub fn require_text(value: Option<&str>, message: &str) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

/// Validate a field of a partial update.
///
/// Absent stays absent (the stored value is left unchanged); a supplied
/// value must be non-blank after trimming.
pub fn optional_text(value: Option<&str>, message: &str) -> Result<Option<String>, CoreError> {
    match value {
        None => Ok(None),
        Some(raw) => require_text(Some(raw), message).map(Some),
    }
}
