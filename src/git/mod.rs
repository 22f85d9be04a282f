pub mod backend;
pub mod inspect;
pub mod operations;
pub mod status;

// Public API - curated exports only
pub mod api;

// Re-export commonly used items
pub use api::*;
