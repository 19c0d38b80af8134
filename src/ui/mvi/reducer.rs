use super::intent::Intent;
use super::state::UiState;

/// The single place a view's state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intent` to the state stored in `slot`.
    fn dispatch(slot: &mut Self::State, intent: Self::Intent) {
        *slot = Self::reduce(std::mem::take(slot), intent);
    }
}
