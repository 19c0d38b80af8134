//! Article view model: load sequencing, scroll, related-article selection
//! and ownership of the voting widget.

use std::time::{Duration, Instant};

use crate::api::{Article, ArticleId};
use crate::content::Sanitizer;
use crate::error::RequestError;
use crate::ui::mvi::Reducer;
use crate::ui::vote::{PendingVote, SubmitVote, VoteOutcome, VotingWidget, DEFAULT_CONFIRMATION};

use super::display::ArticleDisplay;
use super::intent::ArticleIntent;
use super::reducer::ArticleReducer;
use super::state::ArticleViewState;

/// Fallback text when a failed fetch carries no usable diagnostic.
pub const LOAD_ERROR_FALLBACK: &str = "Failed to load article";

/// Monotonic tag for load requests; only the latest may update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LoadToken(u64);

impl LoadToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// A fetch the caller must perform and report back via [`ArticleView::finish_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub token: LoadToken,
    pub id: ArticleId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadApplied {
    Loaded,
    Failed,
    /// A newer load was issued meanwhile; the result was dropped.
    Stale,
}

#[derive(Debug)]
pub struct ArticleView {
    article_id: Option<ArticleId>,
    state: ArticleViewState,
    latest_token: LoadToken,
    voting: Option<VotingWidget>,
    vote_confirmation: Duration,
    scroll: u16,
    related_selection: Option<usize>,
}

impl Default for ArticleView {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRMATION)
    }
}

impl ArticleView {
    pub fn new(vote_confirmation: Duration) -> Self {
        Self {
            article_id: None,
            state: ArticleViewState::default(),
            latest_token: LoadToken::default(),
            voting: None,
            vote_confirmation,
            scroll: 0,
            related_selection: None,
        }
    }

    pub fn article_id(&self) -> Option<&ArticleId> {
        self.article_id.as_ref()
    }

    pub fn state(&self) -> &ArticleViewState {
        &self.state
    }

    pub fn article(&self) -> Option<&Article> {
        self.state.article()
    }

    pub fn voting(&self) -> Option<&VotingWidget> {
        self.voting.as_ref()
    }

    pub fn latest_token(&self) -> LoadToken {
        self.latest_token
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Start loading `id`, superseding any load still in flight.
    ///
    /// Without an identifier the view fails immediately and `None` is returned.
    /// Switching to another article resets scroll, selection and the widget.
    pub fn begin_load(&mut self, id: Option<ArticleId>) -> Option<LoadRequest> {
        self.latest_token = self.latest_token.next();

        let Some(id) = id else {
            self.article_id = None;
            self.voting = None;
            self.reset_position();
            ArticleReducer::dispatch(&mut self.state, ArticleIntent::MissingIdentifier);
            return None;
        };

        if self.article_id.as_ref() != Some(&id) {
            self.voting = None;
            self.reset_position();
        }
        self.article_id = Some(id.clone());
        ArticleReducer::dispatch(&mut self.state, ArticleIntent::StartLoad);

        Some(LoadRequest {
            token: self.latest_token,
            id,
        })
    }

    /// Like [`begin_load`](Self::begin_load), but only while `id` is the
    /// article on screen; otherwise nothing changes and `None` is returned.
    pub fn begin_reload(&mut self, id: &ArticleId) -> Option<LoadRequest> {
        if self.article_id.as_ref() != Some(id) {
            return None;
        }
        self.begin_load(Some(id.clone()))
    }

    /// Apply a fetch result if `token` is still the latest.
    ///
    /// A reload of the same article updates the existing widget's counts so
    /// its recorded vote survives; a new article gets a fresh widget.
    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Article, RequestError>,
        sanitizer: &dyn Sanitizer,
        submit_vote: SubmitVote,
    ) -> LoadApplied {
        if token != self.latest_token {
            tracing::debug!(
                token = token.value(),
                latest = self.latest_token.value(),
                "Discarding stale article load"
            );
            return LoadApplied::Stale;
        }

        match result {
            Ok(article) => {
                let display = ArticleDisplay::build(&article, sanitizer);
                match &mut self.voting {
                    Some(widget) if widget.article_id() == &article.id => {
                        widget.update_counts(article.helpful_count, article.not_helpful_count);
                    }
                    _ => {
                        self.voting = Some(
                            VotingWidget::new(
                                article.id.clone(),
                                article.helpful_count,
                                article.not_helpful_count,
                                submit_vote,
                            )
                            .with_confirmation(self.vote_confirmation),
                        );
                    }
                }
                if let Some(selected) = self.related_selection {
                    let count = article.related_articles().len();
                    self.related_selection = (count > 0).then(|| selected.min(count - 1));
                }
                ArticleReducer::dispatch(
                    &mut self.state,
                    ArticleIntent::Loaded {
                        article: Box::new(article),
                        display: Box::new(display),
                    },
                );
                LoadApplied::Loaded
            }
            Err(err) => {
                tracing::warn!(error = %err, "Article load failed");
                ArticleReducer::dispatch(
                    &mut self.state,
                    ArticleIntent::LoadFailed {
                        message: err.user_message(LOAD_ERROR_FALLBACK),
                    },
                );
                LoadApplied::Failed
            }
        }
    }

    /// Start a vote through the widget; only possible while an article is shown.
    pub fn begin_vote(&mut self, is_helpful: bool) -> Option<PendingVote> {
        if self.state.article().is_none() {
            return None;
        }
        self.voting.as_mut()?.begin_submit(is_helpful)
    }

    pub fn settle_vote(&mut self, outcome: VoteOutcome, now: Instant) {
        if let Some(widget) = self.voting.as_mut() {
            widget.settle(outcome, now);
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        ArticleReducer::dispatch(&mut self.state, ArticleIntent::AnimationTick);
        if let Some(widget) = self.voting.as_mut() {
            widget.on_tick(now);
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta).clamp(0, i32::from(u16::MAX));
        self.scroll = next as u16;
    }

    pub fn related_selection(&self) -> Option<usize> {
        self.related_selection
    }

    /// Move the related-article cursor by `delta`, wrapping around.
    pub fn move_related_selection(&mut self, delta: isize) {
        let count = self
            .state
            .article()
            .map(|a| a.related_articles().len())
            .unwrap_or(0);
        if count == 0 {
            self.related_selection = None;
            return;
        }

        let next = match self.related_selection {
            None if delta >= 0 => 0,
            None => count - 1,
            Some(current) => (current as isize + delta).rem_euclid(count as isize) as usize,
        };
        self.related_selection = Some(next);
    }

    /// Identifier of the highlighted related article.
    pub fn selected_related(&self) -> Option<ArticleId> {
        let index = self.related_selection?;
        self.state
            .article()?
            .related_articles()
            .get(index)
            .map(|r| r.id.clone())
    }

    fn reset_position(&mut self) {
        self.scroll = 0;
        self.related_selection = None;
    }
}
