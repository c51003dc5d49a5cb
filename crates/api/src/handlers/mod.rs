//! HTTP handlers, one module per resource.
//!
//! Every handler validates path identifiers first, checks ownership before
//! any mutation, and returns the [`ApiResponse`](crate::response::ApiResponse)
//! envelope.

pub mod comment;
pub mod dashboard;
pub mod like;
pub mod playlist;
pub mod subscription;
pub mod tweet;
pub mod video;
