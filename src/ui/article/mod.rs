//! Knowledge-base article detail view.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loading / loaded / failed
//! - `intent.rs` - Load lifecycle events
//! - `reducer.rs` - State transitions
//! - `view.rs` - Load sequencing, scroll and the embedded voting widget
//! - `controller.rs` - Async fetch, view telemetry and vote handling
//! - `render.rs` - Rendering

mod controller;
mod display;
mod intent;
mod reducer;
mod render;
mod state;
mod view;

pub use controller::ArticleController;
pub use display::{ArticleDisplay, AttachmentDisplay};
pub use intent::ArticleIntent;
pub use reducer::{ArticleReducer, MISSING_IDENTIFIER_MESSAGE};
pub use render::{article_lines, render_article_view};
pub use state::{ArticleViewState, NOT_FOUND_MESSAGE};
pub use view::{ArticleView, LoadApplied, LoadRequest, LoadToken, LOAD_ERROR_FALLBACK};
