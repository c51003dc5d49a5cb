//! Domain failures shared by every crate above `core`.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Rendered as "<entity> not found", e.g. "Video not found".
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    /// Authenticated, but not the owner.
    #[error("Not permitted: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let err = CoreError::not_found("Playlist", Uuid::nil());
        assert_eq!(err.to_string(), "Playlist not found");
    }

    #[test]
    fn validation_keeps_message() {
        let err = CoreError::validation("Tweet content is required");
        assert_matches!(err, CoreError::Validation(ref m) if m == "Tweet content is required");
    }
}
