//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one route.

pub mod health;
pub mod logs;
pub mod redirect;
pub mod shorten;
pub mod stats_list;

pub use health::health_handler;
pub use logs::log_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats_list::stats_list_handler;
