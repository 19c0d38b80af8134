//! Contract the article views require from the knowledge-base backend.

use async_trait::async_trait;

use super::types::{Article, ArticleId};
use crate::error::RequestError;

/// Remote knowledge-base operations.
///
/// Implementations must be shareable across tasks; the views hold them
/// behind an `Arc<dyn ArticleService>`.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Fetch one article with its attachments and related links.
    async fn fetch_article(&self, id: &ArticleId) -> Result<Article, RequestError>;

    /// Count a view of the article. Best effort: callers never surface failures.
    async fn record_view(&self, id: &ArticleId) -> Result<(), RequestError>;

    /// Submit a helpful / not-helpful rating.
    async fn submit_rating(&self, id: &ArticleId, is_helpful: bool) -> Result<(), RequestError>;
}
