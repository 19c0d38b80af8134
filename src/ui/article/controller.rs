//! Async orchestration for the article view: fetching, view telemetry and
//! the vote callback handed to the voting widget.

use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use futures_core::future::BoxFuture;
use parking_lot::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

use crate::api::{ArticleId, ArticleService};
use crate::content::Sanitizer;
use crate::error::{ErrorRegistry, RequestError};
use crate::ui::vote::{PendingVote, SubmitVote, VoteOutcome};

use super::view::{ArticleView, LoadApplied, LoadRequest};

struct Inner {
    service: Arc<dyn ArticleService>,
    sanitizer: Arc<dyn Sanitizer>,
    view: Mutex<ArticleView>,
    errors: Arc<ErrorRegistry>,
    /// Detached `record_view` tasks, kept only so shutdown can flush them.
    telemetry: Mutex<Vec<JoinHandle<()>>>,
}

/// Cheap-to-clone handle driving one [`ArticleView`].
///
/// The view lock is never held across an `.await`.
#[derive(Clone)]
pub struct ArticleController {
    inner: Arc<Inner>,
}

impl ArticleController {
    pub fn new(
        service: Arc<dyn ArticleService>,
        sanitizer: Arc<dyn Sanitizer>,
        errors: Arc<ErrorRegistry>,
        vote_confirmation: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                service,
                sanitizer,
                view: Mutex::new(ArticleView::new(vote_confirmation)),
                errors,
                telemetry: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Lock the view for reading or synchronous updates (scroll, selection, ticks).
    pub fn view(&self) -> MutexGuard<'_, ArticleView> {
        self.inner.view.lock()
    }

    pub fn errors(&self) -> &ErrorRegistry {
        &self.inner.errors
    }

    /// Fetch `id` and show it, then record the view in the background.
    ///
    /// A result overtaken by a newer load is discarded and records nothing.
    pub async fn load(&self, id: Option<ArticleId>) -> LoadApplied {
        let request = self.inner.view.lock().begin_load(id);
        let Some(request) = request else {
            tracing::warn!("Article view opened without an identifier");
            return LoadApplied::Failed;
        };
        self.run_load(request).await
    }

    /// Reload `id` only if the view still shows it.
    ///
    /// Returns [`LoadApplied::Stale`] without superseding anything when the
    /// user has moved on to another article.
    pub async fn reload_if_current(&self, id: &ArticleId) -> LoadApplied {
        let request = self.inner.view.lock().begin_reload(id);
        match request {
            Some(request) => self.run_load(request).await,
            None => {
                tracing::debug!(article_id = %id, "Skipping reload, view moved on");
                LoadApplied::Stale
            }
        }
    }

    async fn run_load(&self, request: LoadRequest) -> LoadApplied {
        tracing::debug!(article_id = %request.id, token = request.token.value(), "Loading article");
        let result = self.inner.service.fetch_article(&request.id).await;

        let applied = self.inner.view.lock().finish_load(
            request.token,
            result,
            self.inner.sanitizer.as_ref(),
            self.vote_callback(),
        );

        if applied == LoadApplied::Loaded {
            tracing::info!(article_id = %request.id, "Article loaded");
            self.record_view_detached(request.id);
        }
        applied
    }

    /// Submit a rating, then re-run the full load sequence for fresh counts
    /// if the article is still on screen.
    ///
    /// A rejected rating is returned as-is and triggers no reload.
    pub async fn handle_vote(&self, id: ArticleId, is_helpful: bool) -> Result<(), RequestError> {
        self.inner.service.submit_rating(&id, is_helpful).await?;
        tracing::info!(article_id = %id, is_helpful, "Rating submitted, reloading article");
        self.reload_if_current(&id).await;
        Ok(())
    }

    /// The callback handed to voting widgets.
    ///
    /// Holds the controller weakly: the view owns the widget that owns this.
    pub fn vote_callback(&self) -> SubmitVote {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        Arc::new(
            move |id: ArticleId, is_helpful: bool| -> BoxFuture<'static, Result<(), RequestError>> {
                let weak = weak.clone();
                Box::pin(async move {
                    match weak.upgrade() {
                        Some(inner) => ArticleController { inner }.handle_vote(id, is_helpful).await,
                        None => Err(RequestError::new("Article view is closed")),
                    }
                })
            },
        )
    }

    /// Start a vote; the returned future must be run and fed to [`settle_vote`](Self::settle_vote).
    pub fn begin_vote(&self, is_helpful: bool) -> Option<PendingVote> {
        self.inner.view.lock().begin_vote(is_helpful)
    }

    pub fn settle_vote(&self, outcome: VoteOutcome) {
        self.inner.view.lock().settle_vote(outcome, Instant::now());
    }

    /// Begin, await and settle a vote. Returns `false` if the widget refused it.
    pub async fn submit_vote(&self, is_helpful: bool) -> bool {
        let Some(pending) = self.begin_vote(is_helpful) else {
            return false;
        };
        let outcome = pending.run().await;
        self.settle_vote(outcome);
        true
    }

    fn record_view_detached(&self, id: ArticleId) {
        let service = Arc::clone(&self.inner.service);
        let errors = Arc::clone(&self.inner.errors);

        let handle = tokio::spawn(async move {
            if let Err(err) = service.record_view(&id).await {
                tracing::warn!(article_id = %id, error = %err, "Failed to record article view");
                errors.record("record_view", format!("{}: {}", id, err));
            }
        });

        let mut telemetry = self.inner.telemetry.lock();
        telemetry.retain(|h| !h.is_finished());
        telemetry.push(handle);
    }

    /// Wait up to `timeout` for outstanding view-recording tasks.
    pub async fn flush_telemetry(&self, timeout: Duration) {
        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.inner.telemetry.lock());
        if handles.is_empty() {
            return;
        }

        let wait_all = async {
            for handle in handles {
                let _ = handle.await;
            }
        };
        if tokio::time::timeout(timeout, wait_all).await.is_err() {
            tracing::debug!("Gave up waiting for view telemetry");
        }
    }
}
