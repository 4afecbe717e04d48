//! Catalog API Library
//!
//! This library provides the tutorial and order CRUD REST service:
//! actix-web controllers over per-resource services and repositories
//! backed by MySQL.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::orders;
pub use modules::tutorials;
