//! DTOs for the link statistics listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// One row of `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct LinkStatsItem {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<Link> for LinkStatsItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_code: link.code,
            long_url: link.long_url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
