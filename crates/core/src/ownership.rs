//! Owner-only access control.
//!
//! There is no role hierarchy: an entity may be mutated or deleted only by
//! the user recorded as its owner.

use crate::error::CoreError;
use crate::types::DbId;

/// Returns `true` if `caller` is the owner.
pub fn is_owner(owner: DbId, caller: DbId) -> bool {
    owner == caller
}

/// Fail with [`CoreError::Forbidden`] carrying `message` unless `caller`
/// owns the entity.
pub fn ensure_owner(owner: DbId, caller: DbId, message: &str) -> Result<(), CoreError> {
    if is_owner(owner, caller) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(message.to_string()))
    }
}
