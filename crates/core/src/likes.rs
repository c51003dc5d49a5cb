//! Like targets.
//!
//! A like points at exactly one of a video, a comment or a tweet. The
//! target is a sum type so "more than one target" cannot be represented.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Discriminant stored in `likes.target_kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeTargetKind {
    Video,
    Comment,
    Tweet,
}

impl LikeTargetKind {
    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Comment => "comment",
            Self::Tweet => "tweet",
        }
    }

    /// Capitalized name for user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Comment => "Comment",
            Self::Tweet => "Tweet",
        }
    }

}

impl std::fmt::Display for LikeTargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The entity a like applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeTarget {
    Video(DbId),
    Comment(DbId),
    Tweet(DbId),
}

impl LikeTarget {
    pub fn new(kind: LikeTargetKind, id: DbId) -> Self {
        match kind {
            LikeTargetKind::Video => Self::Video(id),
            LikeTargetKind::Comment => Self::Comment(id),
            LikeTargetKind::Tweet => Self::Tweet(id),
        }
    }

    pub fn kind(&self) -> LikeTargetKind {
        match self {
            Self::Video(_) => LikeTargetKind::Video,
            Self::Comment(_) => LikeTargetKind::Comment,
            Self::Tweet(_) => LikeTargetKind::Tweet,
        }
    }

    pub fn id(&self) -> DbId {
        match *self {
            Self::Video(id) | Self::Comment(id) | Self::Tweet(id) => id,
        }
    }
}
