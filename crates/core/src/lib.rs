//! Pure domain logic for vidhub: identifiers, ownership, input validation,
//! pagination and listing options. Nothing in this crate performs I/O.

pub mod error;
pub mod ids;
pub mod likes;
pub mod listing;
pub mod media;
pub mod ownership;
pub mod pagination;
pub mod text;
pub mod types;
