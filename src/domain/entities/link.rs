//! Link entity representing a short code to destination mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `code`, `long_url` and `created_at` never change after creation; `clicks`
/// only moves through the atomic increment in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for reserving a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    /// Builds a reservation stamped with the current time.
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            0,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.clicks, 0);
    }

    #[test]
    fn test_new_link_is_stamped_now() {
        let before = Utc::now();
        let new_link = NewLink::new("xyz789", "https://rust-lang.org");
        let after = Utc::now();

        assert_eq!(new_link.code, "xyz789");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
        assert!(new_link.created_at >= before && new_link.created_at <= after);
    }
}
