//! State for the article detail view.

use crate::api::Article;
use crate::ui::mvi::UiState;

use super::display::ArticleDisplay;

/// Shown when the view has neither an article nor an error message.
pub const NOT_FOUND_MESSAGE: &str = "Article not found";

#[derive(Debug, Clone, PartialEq)]
pub enum ArticleViewState {
    /// A fetch is in flight; only a busy indicator is shown.
    Loading { animation_tick: u8 },

    Loaded {
        article: Box<Article>,
        display: Box<ArticleDisplay>,
    },

    /// The fetch failed (or there was nothing to fetch).
    Failed { message: String },
}

impl Default for ArticleViewState {
    fn default() -> Self {
        Self::Loading { animation_tick: 0 }
    }
}

impl UiState for ArticleViewState {}

impl ArticleViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn article(&self) -> Option<&Article> {
        match self {
            Self::Loaded { article, .. } => Some(article),
            _ => None,
        }
    }

    pub fn display(&self) -> Option<&ArticleDisplay> {
        match self {
            Self::Loaded { display, .. } => Some(display),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } if !message.trim().is_empty() => Some(message),
            Self::Failed { .. } => Some(NOT_FOUND_MESSAGE),
            _ => None,
        }
    }
}
