//! Domain layer - framework-agnostic error types
//!
//! This layer contains NO framework dependencies (no Axum). Only error
//! types shared by every layer above the storage boundary.

pub mod errors;

pub use errors::{AppError, BusinessError, HttpError};
