//! Café Finder Library
//!
//! This library answers "list up to N cafés in city C" over HTTP, backed by
//! a read-only city → café catalog.

// Domain modules
pub mod cafe;

// Infrastructure
pub mod config;
pub mod router;
