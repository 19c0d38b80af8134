//! Article body and metadata presentation helpers.

mod format;
mod sanitize;
mod text;

pub use format::{format_date, format_file_size};
pub use sanitize::{AllowListSanitizer, Sanitizer, SanitizerConfig, CONTENT_STRIPPED_TAGS};
pub use text::html_to_lines;
