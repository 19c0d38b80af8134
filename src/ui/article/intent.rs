//! Intents for the article detail view.

use crate::api::Article;
use crate::ui::mvi::Intent;

use super::display::ArticleDisplay;

#[derive(Debug, Clone)]
pub enum ArticleIntent {
    /// A fetch was issued for the current identifier.
    StartLoad,

    /// The latest fetch succeeded.
    Loaded {
        article: Box<Article>,
        display: Box<ArticleDisplay>,
    },

    /// The latest fetch failed; `message` is already user-facing.
    LoadFailed { message: String },

    /// The view was opened without an article identifier.
    MissingIdentifier,

    /// Spinner tick.
    AnimationTick,
}

impl Intent for ArticleIntent {}
