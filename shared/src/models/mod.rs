//! Data models
//!
//! Wire types of the restaurant booking API (camelCase JSON).
//! All IDs are `i64` (server-side `Long`).

pub mod customer;
pub mod dining_table;
pub mod restaurant;

// Re-exports
pub use customer::*;
pub use dining_table::*;
pub use restaurant::*;
