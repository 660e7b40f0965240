//! Booking Client - state layer of the restaurant booking back office
//!
//! Fetches restaurants, customers and dining tables from the booking API
//! into per-vertical entity stores, exposes them through push-based queries
//! and drives the list screens' debounced search.

pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod http;
pub mod logger;
pub mod pipeline;
pub mod route;
pub mod service;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use context::AppContext;
pub use error::{ClientError, ClientResult, FetchError};
pub use http::{HttpClient, NetworkHttpClient};
pub use route::{Navigator, NoopNavigator, Route};

// Re-export shared models for convenience
pub use shared::{Customer, DiningTable, DiningTableStatus, Restaurant};
