//! Café Lookup Domain Module
//!
//! This module contains the café lookup business logic, including:
//! - Query models and the rejection error type
//! - The read-only city → café catalog
//! - The parse/validate/select/format pipeline
//! - Application state and the REST handler

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod repository;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::CafeQueryError;
pub use repository::CafeRepository;
pub use state::{AppState, SharedState};
