//! Knowledge-base API: payload types, the service contract and its HTTP client.

mod http;
mod service;
mod types;

pub use http::HttpArticleService;
pub use service::ArticleService;
pub use types::{Article, ArticleId, Attachment, RecordId, RelatedArticle, Tag};
