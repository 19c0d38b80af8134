pub mod api;
pub mod args;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod ui;
