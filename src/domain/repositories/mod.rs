//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short code reservation, lookup and click counting
//! - [`LogRepository`] - Append-only event log
//!
//! Mock implementations are generated via `mockall` for unit tests; see
//! `tests/repository_*.rs` for the SQLite-backed behavior.

pub mod link_repository;
pub mod log_repository;

pub use link_repository::LinkRepository;
pub use log_repository::LogRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use log_repository::MockLogRepository;
