//! Identifier validation for caller-supplied entity references.
//!
//! Every path parameter that names an entity goes through [`parse_id`]
//! before any lookup is attempted.

use crate::error::CoreError;
use crate::types::DbId;

/// Returns `true` if `raw` is a well-formed entity reference.
pub fn is_valid_id(raw: &str) -> bool {
    DbId::try_parse(raw).is_ok()
}

/// Parse a caller-supplied identifier.
///
/// `kind` is the lowercase entity name used in the error message, so
/// `parse_id("nope", "video")` fails with `"Invalid video ID"`.
pub fn parse_id(raw: &str, kind: &str) -> Result<DbId, CoreError> {
    DbId::try_parse(raw.trim()).map_err(|_| CoreError::Validation(format!("Invalid {kind} ID")))
}

/// Parse a list of identifiers, silently dropping malformed entries and
/// duplicates while keeping first-seen order.
pub fn parse_valid_ids<S: AsRef<str>>(raw: &[S]) -> Vec<DbId> {
    let mut ids: Vec<DbId> = Vec::with_capacity(raw.len());
    for value in raw {
        if let Ok(id) = DbId::try_parse(value.as_ref().trim()) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}
