use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use kb_reader::api::HttpArticleService;
use kb_reader::args::Args;
use kb_reader::config::Config;
use kb_reader::content::AllowListSanitizer;
use kb_reader::error::ErrorRegistry;
use kb_reader::logging;
use kb_reader::ui::app::App;
use kb_reader::ui::article::ArticleController;
use kb_reader::ui::runtime;
use kb_reader::ui::theme::Theme;

const TELEMETRY_FLUSH: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init(&config.log_level, &log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    tracing::info!(base_url = %config.api.base_url, "Starting kb-reader");

    let theme = Theme::from_config(&config.theme).map_err(anyhow::Error::msg)?;
    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let service = HttpArticleService::new(&config.api).context("Failed to build HTTP client")?;
    let sanitizer = AllowListSanitizer::new(config.sanitizer.clone());
    let controller = ArticleController::new(
        Arc::new(service),
        Arc::new(sanitizer),
        Arc::new(ErrorRegistry::new(100)),
        Duration::from_secs(config.vote.confirmation_secs),
    );

    let handle = tokio_runtime.handle().clone();
    let base_url = config.api.base_url.clone();
    let app_controller = controller.clone();
    let result = runtime::run(args.article_id(), move |events| {
        App::new(app_controller, handle, events, theme, base_url)
    });

    tokio_runtime.block_on(controller.flush_telemetry(TELEMETRY_FLUSH));
    for record in controller.errors().recent() {
        tracing::debug!(source = record.source, message = %record.message, "Recorded error");
    }
    tracing::info!("Exiting kb-reader");

    result.context("Terminal UI failed")
}
