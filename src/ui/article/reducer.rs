//! Reducer for the article detail view.

use crate::ui::mvi::Reducer;

use super::intent::ArticleIntent;
use super::state::ArticleViewState;

/// Message for a view opened without an identifier.
pub const MISSING_IDENTIFIER_MESSAGE: &str = "No article specified";

pub struct ArticleReducer;

impl Reducer for ArticleReducer {
    type State = ArticleViewState;
    type Intent = ArticleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticleIntent::StartLoad => ArticleViewState::Loading { animation_tick: 0 },

            ArticleIntent::Loaded { article, display } => {
                ArticleViewState::Loaded { article, display }
            }

            ArticleIntent::LoadFailed { message } => ArticleViewState::Failed { message },

            ArticleIntent::MissingIdentifier => ArticleViewState::Failed {
                message: MISSING_IDENTIFIER_MESSAGE.to_string(),
            },

            ArticleIntent::AnimationTick => match state {
                ArticleViewState::Loading { animation_tick } => ArticleViewState::Loading {
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },
        }
    }
}
