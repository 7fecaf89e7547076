//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a destination URL with its click count
//! - [`LogEntry`] - An ingested client-side event
//!
//! Entities come in pairs: the persisted record and a `New*` input struct
//! used for creation.

pub mod link;
pub mod log_entry;

pub use link::{Link, NewLink};
pub use log_entry::{LogEntry, NewLogEntry};
