//! The voting widget model: props from the parent plus local vote state.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_core::future::BoxFuture;

use crate::api::ArticleId;
use crate::error::{RequestError, UNKNOWN_ERROR};
use crate::ui::mvi::Reducer;

use super::intent::VoteIntent;
use super::reducer::VoteReducer;
use super::state::VoteState;

/// Parent-supplied vote submission: resolves on success, rejects with the
/// failure to show inline.
pub type SubmitVote =
    Arc<dyn Fn(ArticleId, bool) -> BoxFuture<'static, Result<(), RequestError>> + Send + Sync>;

/// Default lifetime of the "thanks for your feedback" notice.
pub const DEFAULT_CONFIRMATION: Duration = Duration::from_secs(3);

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// A started submission, detached from the widget so it can be awaited
/// without holding the widget borrowed.
pub struct PendingVote {
    article_id: ArticleId,
    is_helpful: bool,
    instance: u64,
    revision: u64,
    future: BoxFuture<'static, Result<(), RequestError>>,
}

impl PendingVote {
    pub fn article_id(&self) -> &ArticleId {
        &self.article_id
    }

    pub fn is_helpful(&self) -> bool {
        self.is_helpful
    }

    pub async fn run(self) -> VoteOutcome {
        VoteOutcome {
            article_id: self.article_id,
            is_helpful: self.is_helpful,
            instance: self.instance,
            revision: self.revision,
            result: self.future.await,
        }
    }
}

/// Result of a [`PendingVote`], fed back through [`VotingWidget::settle`].
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub article_id: ArticleId,
    pub is_helpful: bool,
    instance: u64,
    revision: u64,
    pub result: Result<(), RequestError>,
}

pub struct VotingWidget {
    article_id: ArticleId,
    /// Unique per widget; outcomes only settle into the widget that started them.
    instance: u64,
    helpful_count: u64,
    not_helpful_count: u64,
    /// Bumped whenever the parent pushes authoritative counts.
    revision: u64,
    /// Side whose count is shown one higher than the props.
    optimistic: Option<bool>,
    state: VoteState,
    confirmation: Duration,
    submit_vote: SubmitVote,
}

impl fmt::Debug for VotingWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VotingWidget")
            .field("article_id", &self.article_id)
            .field("instance", &self.instance)
            .field("helpful_count", &self.helpful_count)
            .field("not_helpful_count", &self.not_helpful_count)
            .field("revision", &self.revision)
            .field("optimistic", &self.optimistic)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl VotingWidget {
    pub fn new(
        article_id: ArticleId,
        helpful_count: u64,
        not_helpful_count: u64,
        submit_vote: SubmitVote,
    ) -> Self {
        Self {
            article_id,
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            helpful_count,
            not_helpful_count,
            revision: 0,
            optimistic: None,
            state: VoteState::default(),
            confirmation: DEFAULT_CONFIRMATION,
            submit_vote,
        }
    }

    pub fn with_confirmation(mut self, confirmation: Duration) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub fn article_id(&self) -> &ArticleId {
        &self.article_id
    }

    pub fn state(&self) -> &VoteState {
        &self.state
    }

    pub fn user_vote(&self) -> Option<bool> {
        self.state.user_vote()
    }

    pub fn controls_disabled(&self) -> bool {
        self.state.controls_disabled()
    }

    /// Start a submission.
    ///
    /// Returns `None` without calling the callback when a vote is already
    /// recorded or in flight.
    pub fn begin_submit(&mut self, is_helpful: bool) -> Option<PendingVote> {
        if self.state.controls_disabled() {
            tracing::debug!(
                article_id = %self.article_id,
                "Ignoring vote: already voted or submitting"
            );
            return None;
        }

        VoteReducer::dispatch(&mut self.state, VoteIntent::Submit { choice: is_helpful });
        let future = (self.submit_vote)(self.article_id.clone(), is_helpful);
        Some(PendingVote {
            article_id: self.article_id.clone(),
            is_helpful,
            instance: self.instance,
            revision: self.revision,
            future,
        })
    }

    /// Apply the outcome of a submission started by [`begin_submit`](Self::begin_submit).
    ///
    /// The optimistic bump is skipped when fresher counts already arrived
    /// while the vote was in flight.
    pub fn settle(&mut self, outcome: VoteOutcome, now: Instant) {
        if outcome.instance != self.instance {
            tracing::debug!(
                shown = %self.article_id,
                voted = %outcome.article_id,
                "Dropping vote outcome started by another widget"
            );
            return;
        }

        match outcome.result {
            Ok(()) => {
                tracing::info!(
                    article_id = %self.article_id,
                    is_helpful = outcome.is_helpful,
                    "Vote recorded"
                );
                if outcome.revision == self.revision {
                    self.optimistic = Some(outcome.is_helpful);
                }
                VoteReducer::dispatch(
                    &mut self.state,
                    VoteIntent::Succeeded {
                        choice: outcome.is_helpful,
                        confirmation_until: now.checked_add(self.confirmation),
                    },
                );
            }
            Err(err) => {
                tracing::info!(article_id = %self.article_id, error = %err, "Vote failed");
                VoteReducer::dispatch(
                    &mut self.state,
                    VoteIntent::Failed {
                        message: format!(
                            "Failed to submit vote: {}",
                            err.user_message(UNKNOWN_ERROR)
                        ),
                    },
                );
            }
        }
    }

    /// Submit and wait for the callback, then settle.
    pub async fn submit(&mut self, is_helpful: bool) {
        if let Some(pending) = self.begin_submit(is_helpful) {
            let outcome = pending.run().await;
            self.settle(outcome, Instant::now());
        }
    }

    /// Replace the props with authoritative counts, dropping any optimistic bump.
    pub fn update_counts(&mut self, helpful_count: u64, not_helpful_count: u64) {
        self.helpful_count = helpful_count;
        self.not_helpful_count = not_helpful_count;
        self.revision += 1;
        self.optimistic = None;
    }

    pub fn on_tick(&mut self, now: Instant) {
        VoteReducer::dispatch(&mut self.state, VoteIntent::Tick { now });
    }

    /// `(helpful, not_helpful)` as displayed, including the optimistic bump.
    pub fn displayed_counts(&self) -> (u64, u64) {
        match self.optimistic {
            Some(true) => (self.helpful_count.saturating_add(1), self.not_helpful_count),
            Some(false) => (self.helpful_count, self.not_helpful_count.saturating_add(1)),
            None => (self.helpful_count, self.not_helpful_count),
        }
    }

    pub fn summary(&self) -> String {
        let (helpful, not_helpful) = self.displayed_counts();
        helpfulness_summary(helpful, not_helpful)
    }
}

/// Rounded share of helpful votes, `None` when nobody voted.
pub fn helpful_percentage(helpful: u64, not_helpful: u64) -> Option<u64> {
    let total = helpful.saturating_add(not_helpful);
    if total == 0 {
        return None;
    }
    Some((helpful as f64 / total as f64 * 100.0).round() as u64)
}

pub fn helpfulness_summary(helpful: u64, not_helpful: u64) -> String {
    let total = helpful.saturating_add(not_helpful);
    match helpful_percentage(helpful, not_helpful) {
        Some(percent) => format!(
            "{}% of readers found this helpful ({} {})",
            percent,
            total,
            if total == 1 { "vote" } else { "votes" }
        ),
        None => "Be the first to rate this article".to_string(),
    }
}
