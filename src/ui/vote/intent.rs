//! Intents for the voting widget.

use std::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum VoteIntent {
    /// User pressed one of the two controls.
    Submit { choice: bool },

    /// The submit callback resolved.
    Succeeded {
        choice: bool,
        /// When the transient confirmation should disappear; `None` keeps
        /// the acknowledgement only.
        confirmation_until: Option<Instant>,
    },

    /// The submit callback rejected; `message` is already user-facing.
    Failed { message: String },

    /// Periodic UI tick: advances the spinner and expires the confirmation.
    Tick { now: Instant },
}

impl Intent for VoteIntent {}
