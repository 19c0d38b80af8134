//! Reducer for the voting widget.

use crate::ui::mvi::Reducer;

use super::intent::VoteIntent;
use super::state::VoteState;

pub struct VoteReducer;

impl Reducer for VoteReducer {
    type State = VoteState;
    type Intent = VoteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VoteIntent::Submit { choice } => match state {
                // Starting a submission clears the previous error
                VoteState::Idle { .. } => VoteState::Submitting {
                    choice,
                    animation_tick: 0,
                },
                other => other,
            },

            VoteIntent::Succeeded {
                choice,
                confirmation_until,
            } => match state {
                VoteState::Submitting { .. } => VoteState::Voted {
                    choice,
                    confirmation_until,
                },
                other => other,
            },

            VoteIntent::Failed { message } => match state {
                VoteState::Submitting { .. } => VoteState::Idle {
                    error: Some(message),
                },
                other => other,
            },

            VoteIntent::Tick { now } => match state {
                VoteState::Submitting {
                    choice,
                    animation_tick,
                } => VoteState::Submitting {
                    choice,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                VoteState::Voted {
                    choice,
                    confirmation_until: Some(until),
                } if now >= until => VoteState::Voted {
                    choice,
                    confirmation_until: None,
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn submitting(choice: bool) -> VoteState {
        VoteState::Submitting {
            choice,
            animation_tick: 0,
        }
    }

    #[test]
    fn submit_from_idle_clears_error() {
        let state = VoteState::Idle {
            error: Some("previous".into()),
        };
        let new_state = VoteReducer::reduce(state, VoteIntent::Submit { choice: true });
        assert_eq!(new_state, submitting(true));
        assert_eq!(new_state.error_message(), None);
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let new_state = VoteReducer::reduce(submitting(true), VoteIntent::Submit { choice: false });
        assert_eq!(new_state, submitting(true));
    }

    #[test]
    fn submit_after_vote_is_ignored() {
        let voted = VoteState::Voted {
            choice: true,
            confirmation_until: None,
        };
        let new_state = VoteReducer::reduce(voted.clone(), VoteIntent::Submit { choice: false });
        assert_eq!(new_state, voted);
    }

    #[test]
    fn success_fixes_choice() {
        let until = Instant::now() + Duration::from_secs(3);
        let new_state = VoteReducer::reduce(
            submitting(false),
            VoteIntent::Succeeded {
                choice: false,
                confirmation_until: Some(until),
            },
        );
        assert_eq!(new_state.user_vote(), Some(false));
        assert!(new_state.shows_confirmation());
    }

    #[test]
    fn failure_returns_to_idle_with_error() {
        let new_state = VoteReducer::reduce(
            submitting(true),
            VoteIntent::Failed {
                message: "Failed to submit vote: offline".into(),
            },
        );
        assert_eq!(new_state.user_vote(), None);
        assert_eq!(new_state.error_message(), Some("Failed to submit vote: offline"));
        assert!(!new_state.controls_disabled());
    }

    #[test]
    fn stray_failure_does_not_touch_a_recorded_vote() {
        let voted = VoteState::Voted {
            choice: true,
            confirmation_until: None,
        };
        let new_state = VoteReducer::reduce(
            voted.clone(),
            VoteIntent::Failed {
                message: "late".into(),
            },
        );
        assert_eq!(new_state, voted);
    }

    #[test]
    fn tick_expires_confirmation_only_after_deadline() {
        let start = Instant::now();
        let until = start + Duration::from_secs(3);
        let voted = VoteState::Voted {
            choice: true,
            confirmation_until: Some(until),
        };

        let early = VoteReducer::reduce(
            voted,
            VoteIntent::Tick {
                now: start + Duration::from_secs(1),
            },
        );
        assert!(early.shows_confirmation());

        let late = VoteReducer::reduce(early, VoteIntent::Tick { now: until });
        assert!(!late.shows_confirmation());
        assert_eq!(late.user_vote(), Some(true));
    }

    #[test]
    fn tick_advances_spinner() {
        let new_state = VoteReducer::reduce(
            submitting(true),
            VoteIntent::Tick {
                now: Instant::now(),
            },
        );
        assert_eq!(new_state.animation_tick(), 1);
    }
}
