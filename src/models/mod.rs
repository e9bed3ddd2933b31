pub mod base;

pub use base::BaseEntity;
