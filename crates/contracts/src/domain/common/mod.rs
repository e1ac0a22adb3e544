//! Common types for all catalog aggregates

pub mod category;

// Re-exports
pub use category::Category;
