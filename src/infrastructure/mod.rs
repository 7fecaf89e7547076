//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite pool setup and repository implementations

pub mod persistence;
