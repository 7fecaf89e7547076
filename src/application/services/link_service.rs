//! Link creation, lookup and click counting service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::destination::validate_destination;
use crate::utils::retry::first_reserved;
use serde_json::json;

/// Number of random codes tried before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Service implementing the short code store contract.
///
/// All uniqueness and counter guarantees come from the repository: the
/// service never checks-then-inserts or reads-then-writes on its own.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `long_url`.
    ///
    /// A blank `custom_code` is treated as absent.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided, validates and reserves it
    /// - Otherwise, draws random 8-character codes, up to
    ///   [`MAX_CODE_ATTEMPTS`] times
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    /// Returns [`AppError::ExhaustedAttempts`] if no free code was found.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Link, AppError> {
        let destination = validate_destination(long_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "long_url": long_url }))
        })?;

        let custom_code = custom_code.map(str::trim).filter(|c| !c.is_empty());

        let link = match custom_code {
            Some(code) => self.reserve_custom_code(code, destination).await?,
            None => self.generate_unique_code(destination).await?,
        };

        tracing::info!(code = %link.code, long_url = %link.long_url, "Short link created");
        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Counts one click on `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn record_click(&self, code: &str) -> Result<(), AppError> {
        if self.link_repository.increment_clicks(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Lists every link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Counts stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Total clicks across all links.
    pub async fn total_clicks(&self) -> Result<i64, AppError> {
        self.link_repository.total_clicks().await
    }

    /// Constructs the full short URL from a base origin and code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    async fn reserve_custom_code(&self, code: &str, destination: &str) -> Result<Link, AppError> {
        validate_custom_code(code)?;

        self.link_repository
            .try_insert(NewLink::new(code, destination))
            .await?
            .ok_or_else(|| {
                tracing::debug!(code, "Custom code already exists");
                AppError::conflict("Custom code already exists", json!({ "code": code }))
            })
    }

    /// Draws random codes until one is reserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ExhaustedAttempts`] after [`MAX_CODE_ATTEMPTS`]
    /// collisions. Storage errors abort immediately.
    pub async fn generate_unique_code(&self, destination: &str) -> Result<Link, AppError> {
        first_reserved(MAX_CODE_ATTEMPTS, generate_code, |code| {
            self.link_repository
                .try_insert(NewLink::new(code, destination))
        })
        .await?
        .ok_or_else(|| {
            tracing::error!(
                attempts = MAX_CODE_ATTEMPTS,
                "Failed to generate unique short code"
            );
            AppError::ExhaustedAttempts {
                attempts: MAX_CODE_ATTEMPTS,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn link_from(new_link: &NewLink) -> Link {
        Link::new(
            1,
            new_link.code.clone(),
            new_link.long_url.clone(),
            new_link.created_at,
            0,
        )
    }

    fn create_test_link(code: &str, url: &str, clicks: i64) -> Link {
        Link::new(7, code.to_string(), url.to_string(), Utc::now(), clicks)
    }

    #[tokio::test]
    async fn test_shorten_generates_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_try_insert()
            .withf(|new_link| {
                new_link.code.len() == 8 && new_link.long_url == "https://example.com/a"
            })
            .times(1)
            .returning(|new_link| Ok(Some(link_from(&new_link))));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .shorten("https://example.com/a", None)
            .await
            .unwrap();

        assert_eq!(link.code.len(), 8);
        assert_eq!(link.long_url, "https://example.com/a");
        assert_eq!(link.clicks, 0);
    }

    #[tokio::test]
    async fn test_shorten_blank_custom_code_generates() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_try_insert()
            .withf(|new_link| new_link.code.len() == 8)
            .times(1)
            .returning(|new_link| Ok(Some(link_from(&new_link))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com", Some("  ")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_try_insert()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        mock_repo
            .expect_try_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_link| Ok(Some(link_from(&new_link))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com", None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_exhausted_attempts() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_try_insert()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com", None).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::ExhaustedAttempts { attempts: 10 }
        ));
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.shorten("not-a-url", None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_with_custom_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_try_insert()
            .withf(|new_link| new_link.code == "abc")
            .times(1)
            .returning(|new_link| Ok(Some(link_from(&new_link))));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .shorten("https://example.com/a", Some("abc"))
            .await
            .unwrap();

        assert_eq!(link.code, "abc");
    }

    #[tokio::test]
    async fn test_shorten_custom_code_conflict() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_try_insert()
            .withf(|new_link| new_link.code == "taken")
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .shorten("https://example.com", Some("taken"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_shorten_invalid_custom_code_never_touches_store() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .shorten("https://example.com", Some("no/slashes"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_storage_error_propagates() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_try_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com", None).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_link_by_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abc")
            .times(1)
            .returning(|_| Ok(Some(create_test_link("abc", "https://example.com", 3))));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.get_link_by_code("abc").await.unwrap();

        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.clicks, 3);
    }

    #[tokio::test]
    async fn test_get_link_by_code_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_link_by_code("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_click() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_clicks()
            .withf(|code| code == "abc")
            .times(1)
            .returning(|_| Ok(true));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.record_click("abc").await.is_ok());
    }

    #[tokio::test]
    async fn test_record_click_unknown_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.record_click("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_links() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                create_test_link("new", "https://example.com/2", 0),
                create_test_link("old", "https://example.com/1", 5),
            ])
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let links = service.list_links().await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].code, "new");
    }

    #[tokio::test]
    async fn test_total_clicks() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_total_clicks().times(1).returning(|| Ok(42));

        let service = LinkService::new(Arc::new(mock_repo));

        assert_eq!(service.total_clicks().await.unwrap(), 42);
    }

    #[test]
    fn test_get_short_url() {
        let service = LinkService::new(Arc::new(MockLinkRepository::new()));

        assert_eq!(
            service.get_short_url("http://localhost:3001/", "abc"),
            "http://localhost:3001/abc"
        );
        assert_eq!(
            service.get_short_url("https://sho.rt", "abc"),
            "https://sho.rt/abc"
        );
    }
}
