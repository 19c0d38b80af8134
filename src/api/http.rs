//! `ArticleService` over the CRM's JSON HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::{json, Value};

use super::service::ArticleService;
use super::types::{Article, ArticleId};
use crate::config::ApiConfig;
use crate::error::RequestError;

const ARTICLES_PATH: &str = "knowledge-base/articles";

pub struct HttpArticleService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpArticleService {
    pub fn new(config: &ApiConfig) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/knowledge-base/articles/{id}/{action}` with the trailing slash the API expects.
    fn article_url(&self, id: &ArticleId, action: Option<&str>) -> String {
        let id = urlencoding::encode(id.as_str());
        match action {
            Some(action) => format!("{}/{}/{}/{}/", self.base_url, ARTICLES_PATH, id, action),
            None => format!("{}/{}/{}/", self.base_url, ARTICLES_PATH, id),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RequestError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status.as_u16(), &body))
    }
}

#[async_trait]
impl ArticleService for HttpArticleService {
    async fn fetch_article(&self, id: &ArticleId) -> Result<Article, RequestError> {
        let url = self.article_url(id, None);
        tracing::debug!(%url, "GET article");
        let response = self.send(self.client.get(&url)).await?;
        response
            .json::<Article>()
            .await
            .map_err(|e| RequestError::new(format!("Invalid article payload: {}", e)))
    }

    async fn record_view(&self, id: &ArticleId) -> Result<(), RequestError> {
        let url = self.article_url(id, Some("view"));
        tracing::debug!(%url, "POST view");
        self.send(self.client.post(&url)).await?;
        Ok(())
    }

    async fn submit_rating(&self, id: &ArticleId, is_helpful: bool) -> Result<(), RequestError> {
        let url = self.article_url(id, Some("rate"));
        tracing::debug!(%url, is_helpful, "POST rating");
        self.send(self.client.post(&url).json(&json!({ "is_helpful": is_helpful })))
            .await?;
        Ok(())
    }
}

/// Build a `RequestError` from a non-2xx response body.
///
/// The server's structured message is looked up under `detail`, then
/// `error` (string or `{message}`), then `message`.
fn error_from_body(status: u16, body: &str) -> RequestError {
    let err = RequestError::new(format!("Request failed with status code {}", status))
        .with_status(status);

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return err;
    };

    let detail = value
        .get("detail")
        .and_then(Value::as_str)
        .or_else(|| {
            value.get("error").and_then(|e| {
                e.as_str()
                    .or_else(|| e.get("message").and_then(Value::as_str))
            })
        })
        .or_else(|| value.get("message").and_then(Value::as_str));

    match detail {
        Some(detail) => err.with_detail(detail),
        None => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base_url: &str) -> HttpArticleService {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        HttpArticleService::new(&config).unwrap()
    }

    #[test]
    fn article_urls_keep_trailing_slash() {
        let svc = service("http://crm.local/api/");
        let id = ArticleId::from("12");
        assert_eq!(
            svc.article_url(&id, None),
            "http://crm.local/api/knowledge-base/articles/12/"
        );
        assert_eq!(
            svc.article_url(&id, Some("rate")),
            "http://crm.local/api/knowledge-base/articles/12/rate/"
        );
    }

    #[test]
    fn article_ids_are_percent_encoded() {
        let svc = service("http://crm.local/api");
        let id = ArticleId::from("a b/c");
        assert_eq!(
            svc.article_url(&id, Some("view")),
            "http://crm.local/api/knowledge-base/articles/a%20b%2Fc/view/"
        );
    }

    #[test]
    fn error_body_detail_is_extracted() {
        let err = error_from_body(404, r#"{"detail": "Not found."}"#);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.detail.as_deref(), Some("Not found."));
        assert_eq!(err.message, "Request failed with status code 404");
    }

    #[test]
    fn nested_error_message_is_extracted() {
        let err = error_from_body(400, r#"{"error": {"message": "Already rated"}}"#);
        assert_eq!(err.detail.as_deref(), Some("Already rated"));
    }

    #[test]
    fn non_json_body_has_no_detail() {
        let err = error_from_body(502, "<html>Bad gateway</html>");
        assert!(err.detail.is_none());
        assert_eq!(err.user_message("x"), "Request failed with status code 502");
    }
}
