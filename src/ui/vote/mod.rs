//! "Was this helpful?" voting widget.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Vote lifecycle enum
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `widget.rs` - Props, optimistic counts and the submit callback
//! - `render.rs` - Rendering

mod intent;
mod reducer;
mod render;
mod state;
mod widget;

pub use intent::VoteIntent;
pub use reducer::VoteReducer;
pub use render::{render_voting_widget, widget_height, widget_lines, SPINNER_FRAMES};
pub use state::VoteState;
pub use widget::{
    helpful_percentage, helpfulness_summary, PendingVote, SubmitVote, VoteOutcome, VotingWidget,
    DEFAULT_CONFIRMATION,
};
