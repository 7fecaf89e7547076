//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries over a shared [`sqlx::SqlitePool`].
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Short code store
//! - [`SqliteLogRepository`] - Append-only event log

pub mod pool;
pub mod sqlite_link_repository;
pub mod sqlite_log_repository;

pub use pool::{MIGRATOR, PoolSettings, connect, run_migrations};
pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_log_repository::SqliteLogRepository;
