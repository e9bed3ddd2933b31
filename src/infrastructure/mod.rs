//! Infrastructure layer - storage-facing implementations
//!
//! This layer contains:
//! - Generic repository over any base entity (repository)

pub mod repository;

pub use repository::{DEFAULT_LIMIT, Repository};
