//! State for the helpfulness voting widget.

use std::time::Instant;

use crate::ui::mvi::UiState;

/// Lifecycle of one widget's vote.
///
/// `Voted` is terminal: once reached, the widget never accepts another
/// submission for the rest of its life.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteState {
    /// Waiting for a vote; `error` holds the last failed attempt, if any.
    Idle { error: Option<String> },

    /// The injected submit callback is in flight.
    Submitting {
        /// Side the user pressed.
        choice: bool,
        /// Spinner frame counter.
        animation_tick: u8,
    },

    /// The vote was accepted.
    Voted {
        choice: bool,
        /// While set, the transient confirmation is shown until this instant.
        confirmation_until: Option<Instant>,
    },
}

impl Default for VoteState {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

impl UiState for VoteState {}

impl VoteState {
    /// The user's recorded vote, `None` until a submission succeeds.
    pub fn user_vote(&self) -> Option<bool> {
        match self {
            Self::Voted { choice, .. } => Some(*choice),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Both controls are disabled while submitting and after a vote.
    pub fn controls_disabled(&self) -> bool {
        !matches!(self, Self::Idle { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn shows_confirmation(&self) -> bool {
        matches!(
            self,
            Self::Voted {
                confirmation_until: Some(_),
                ..
            }
        )
    }

    pub fn animation_tick(&self) -> u8 {
        match self {
            Self::Submitting { animation_tick, .. } => *animation_tick,
            _ => 0,
        }
    }
}
