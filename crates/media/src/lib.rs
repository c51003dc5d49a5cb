//! Media ingestion for vidhub.
//!
//! Uploaded files are staged on local disk by the HTTP layer. This crate
//! moves them to object storage (S3 or a local directory), derives
//! metadata such as video duration, and always removes the staged copy.

pub mod ingest;
pub mod local;
pub mod probe;
pub mod s3;
pub mod storage;

pub use ingest::{IngestError, IngestedMedia, MediaIngestor};
pub use local::LocalStorage;
pub use probe::{FfprobeProbe, MediaProbe, ProbeError};
pub use s3::S3Storage;
pub use storage::{ObjectStorage, StorageError, StorageResult};
