//! Model-View-Intent primitives shared by the article and voting views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──── key press / API result ──┘
//! ```
//!
//! Reducers are pure; side effects (HTTP calls, timers) live in the view
//! models and the controller, which feed their results back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
