//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::api::ArticleId;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "kb-reader",
    version,
    about = "Read and rate knowledge-base articles from the terminal"
)]
pub struct Args {
    /// Identifier of the article to open
    pub article_id: Option<String>,

    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to an alternative config file
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter (e.g. "debug", "kb_reader=trace")
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }

    pub fn article_id(&self) -> Option<ArticleId> {
        self.article_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ArticleId::from)
    }
}
