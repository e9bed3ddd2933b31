pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod schemas;
pub mod types;

pub use infrastructure::Repository;
pub use models::BaseEntity;
