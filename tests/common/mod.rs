//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use futures_core::future::BoxFuture;
use kb_reader::api::{Article, ArticleId, ArticleService, RelatedArticle};
use kb_reader::content::AllowListSanitizer;
use kb_reader::error::{ErrorRegistry, RequestError};
use kb_reader::ui::article::ArticleController;
use kb_reader::ui::vote::{SubmitVote, DEFAULT_CONFIRMATION};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A scripted reply for one `fetch_article` call.
#[derive(Debug, Clone)]
pub struct ScriptedFetch {
    pub result: Result<Article, RequestError>,
    pub delay: Duration,
}

impl ScriptedFetch {
    pub fn ok(article: Article) -> Self {
        Self {
            result: Ok(article),
            delay: Duration::ZERO,
        }
    }

    pub fn err(error: RequestError) -> Self {
        Self {
            result: Err(error),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// In-memory `ArticleService` with scripted replies and call counters.
///
/// Fetches pop from a per-article queue; once it is empty the last
/// `default_article` for that id (if any) is served.
#[derive(Default)]
pub struct MockService {
    fetches: Mutex<HashMap<ArticleId, VecDeque<ScriptedFetch>>>,
    defaults: Mutex<HashMap<ArticleId, Article>>,
    fetch_calls: Mutex<Vec<ArticleId>>,
    view_calls: Mutex<Vec<ArticleId>>,
    rating_calls: Mutex<Vec<(ArticleId, bool)>>,
    view_error: Mutex<Option<RequestError>>,
    rating_error: Mutex<Option<RequestError>>,
    rating_delay: Mutex<Duration>,
}

impl MockService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Serve `article` for every fetch of its id without a scripted reply.
    pub fn set_article(&self, article: Article) {
        self.defaults.lock().insert(article.id.clone(), article);
    }

    pub fn script_fetch(&self, id: &str, reply: ScriptedFetch) {
        self.fetches
            .lock()
            .entry(ArticleId::from(id))
            .or_default()
            .push_back(reply);
    }

    pub fn fail_views(&self, error: RequestError) {
        *self.view_error.lock() = Some(error);
    }

    pub fn fail_ratings(&self, error: RequestError) {
        *self.rating_error.lock() = Some(error);
    }

    pub fn delay_ratings(&self, delay: Duration) {
        *self.rating_delay.lock() = delay;
    }

    pub fn fetch_calls(&self) -> Vec<ArticleId> {
        self.fetch_calls.lock().clone()
    }

    pub fn view_calls(&self) -> Vec<ArticleId> {
        self.view_calls.lock().clone()
    }

    pub fn rating_calls(&self) -> Vec<(ArticleId, bool)> {
        self.rating_calls.lock().clone()
    }

    /// Record the rating server-side so the next fetch reflects it.
    fn apply_rating(&self, id: &ArticleId, is_helpful: bool) {
        if let Some(article) = self.defaults.lock().get_mut(id) {
            if is_helpful {
                article.helpful_count += 1;
            } else {
                article.not_helpful_count += 1;
            }
        }
    }
}

#[async_trait]
impl ArticleService for MockService {
    async fn fetch_article(&self, id: &ArticleId) -> Result<Article, RequestError> {
        self.fetch_calls.lock().push(id.clone());
        let scripted = self.fetches.lock().get_mut(id).and_then(VecDeque::pop_front);
        if let Some(reply) = scripted {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            return reply.result;
        }

        let article = self.defaults.lock().get(id).cloned();
        article.ok_or_else(|| {
            RequestError::new("Request failed with status code 404")
                .with_status(404)
                .with_detail("Not found.")
        })
    }

    async fn record_view(&self, id: &ArticleId) -> Result<(), RequestError> {
        self.view_calls.lock().push(id.clone());
        let error = self.view_error.lock().clone();
        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn submit_rating(&self, id: &ArticleId, is_helpful: bool) -> Result<(), RequestError> {
        self.rating_calls.lock().push((id.clone(), is_helpful));
        let delay = *self.rating_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let error = self.rating_error.lock().clone();
        if let Some(err) = error {
            return Err(err);
        }
        self.apply_rating(id, is_helpful);
        Ok(())
    }
}

/// A published article with a couple of related entries.
pub fn sample_article(id: &str, helpful: u64, not_helpful: u64) -> Article {
    Article {
        id: ArticleId::from(id),
        article_number: format!("KB-{:0>4}", id),
        title: format!("Article {}", id),
        content: "<p>Hello <strong>world</strong></p><script>alert('x')</script>".to_string(),
        category: "General".to_string(),
        status: Some("published".to_string()),
        author: Some("Support Team".to_string()),
        created_at: "2024-01-05T10:00:00Z".to_string(),
        updated_at: "2024-02-01T08:30:00Z".to_string(),
        view_count: 10,
        helpful_count: helpful,
        not_helpful_count: not_helpful,
        related_articles: Some(vec![
            RelatedArticle {
                id: ArticleId::from("100"),
                title: "First related".to_string(),
                category: "General".to_string(),
                view_count: 1,
            },
            RelatedArticle {
                id: ArticleId::from("101"),
                title: "Second related".to_string(),
                category: "Billing".to_string(),
                view_count: 2,
            },
        ]),
        ..Article::default()
    }
}

/// Controller over `service` with the default sanitizer.
pub fn controller(service: Arc<MockService>) -> ArticleController {
    ArticleController::new(
        service,
        Arc::new(AllowListSanitizer::default()),
        Arc::new(ErrorRegistry::new(16)),
        DEFAULT_CONFIRMATION,
    )
}

/// Vote callback counting invocations and resolving with `result`.
pub fn counting_submit(result: Result<(), RequestError>) -> (SubmitVote, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let submit: SubmitVote = Arc::new(
        move |_id: ArticleId, _helpful: bool| -> BoxFuture<'static, Result<(), RequestError>> {
            counter.fetch_add(1, Ordering::SeqCst);
            let result = result.clone();
            Box::pin(async move { result })
        },
    );
    (submit, calls)
}

/// Poll `check` until it holds or two seconds pass.
pub async fn wait_until<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
