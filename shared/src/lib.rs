//! Shared types for the restaurant booking back office
//!
//! Models exchanged with the booking API, shared by the client crates.

pub mod models;

// Re-exports
pub use models::{Customer, DiningTable, DiningTableResponse, DiningTableStatus, Restaurant};
pub use serde::{Deserialize, Serialize};
