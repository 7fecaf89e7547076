//! # Quicklink
//!
//! A small URL shortener: long URLs are mapped to short codes, visitors are
//! redirected from the code to the original URL, and every redirect bumps a
//! click counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Code assignment, lookup and click counting
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - Short codes are unique; concurrent requests for the same custom code
//!   yield exactly one success
//! - N concurrent redirects to one code add exactly N clicks
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"   # optional, this is the default
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LogService};
    pub use crate::domain::entities::{Link, LogEntry, NewLink, NewLogEntry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
