//! Café Application State
//!
//! This module holds the state shared by every request: the read-only café
//! catalog.

use super::repository::CafeRepository;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// City → café catalog, immutable after startup.
    /// Concurrent reads need no synchronization.
    pub repository: CafeRepository,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CafeRepository::with_default_cafes())
    }
}

impl AppState {
    /// Creates the state around an already loaded catalog
    pub fn new(repository: CafeRepository) -> Self {
        tracing::info!(cities = repository.city_count(), "Café catalog loaded");

        Self { repository }
    }

    /// Wraps the state for sharing with the router
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
