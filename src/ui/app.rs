use std::sync::mpsc::Sender;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::ArticleId;
use crate::error::ErrorRegistry;
use crate::ui::article::ArticleController;
use crate::ui::events::AppEvent;
use crate::ui::theme::Theme;

/// Maximum entries kept on the listing screen.
pub const RECENT_LIMIT: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Article,
    Listing,
}

/// An article opened during this session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecentArticle {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
}

pub struct App {
    should_quit: bool,
    route: Route,
    controller: ArticleController,
    runtime: Handle,
    events: Sender<AppEvent>,
    theme: Theme,
    base_url: String,
    recent: Vec<RecentArticle>,
    listing_selection: usize,
    /// Background loads and votes still running.
    tasks: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(
        controller: ArticleController,
        runtime: Handle,
        events: Sender<AppEvent>,
        theme: Theme,
        base_url: String,
    ) -> Self {
        Self {
            should_quit: false,
            route: Route::Article,
            controller,
            runtime,
            events,
            theme,
            base_url,
            recent: Vec::new(),
            listing_selection: 0,
            tasks: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn controller(&self) -> &ArticleController {
        &self.controller
    }

    pub fn error_registry(&self) -> &ErrorRegistry {
        self.controller.errors()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recent(&self) -> &[RecentArticle] {
        &self.recent
    }

    pub fn listing_selection(&self) -> usize {
        self.listing_selection
    }

    /// Show the article view and load `id`; `None` shows the missing-article error.
    pub fn open_article(&mut self, id: Option<ArticleId>) {
        self.route = Route::Article;
        let controller = self.controller.clone();
        self.spawn(async move {
            controller.load(id).await;
        });
    }

    /// Re-run the load sequence for the current article.
    pub fn reload(&mut self) {
        let id = self.controller.view().article_id().cloned();
        self.open_article(id);
    }

    pub fn vote(&mut self, is_helpful: bool) {
        let Some(pending) = self.controller.begin_vote(is_helpful) else {
            return;
        };
        let controller = self.controller.clone();
        self.spawn(async move {
            let outcome = pending.run().await;
            controller.settle_vote(outcome);
        });
    }

    pub fn scroll_article(&mut self, delta: i32) {
        self.controller.view().scroll_by(delta);
    }

    pub fn move_related_selection(&mut self, delta: isize) {
        self.controller.view().move_related_selection(delta);
    }

    pub fn open_selected_related(&mut self) {
        let id = self.controller.view().selected_related();
        if let Some(id) = id {
            self.open_article(Some(id));
        }
    }

    pub fn back_to_listing(&mut self) {
        self.sync_recent();
        self.route = Route::Listing;
        self.listing_selection = 0;
    }

    pub fn move_listing_selection(&mut self, delta: isize) {
        if self.recent.is_empty() {
            self.listing_selection = 0;
            return;
        }
        let len = self.recent.len() as isize;
        self.listing_selection =
            (self.listing_selection as isize + delta).rem_euclid(len) as usize;
    }

    pub fn open_selected_recent(&mut self) {
        if let Some(id) = self.recent.get(self.listing_selection).map(|r| r.id.clone()) {
            self.open_article(Some(id));
        }
    }

    pub fn on_tick(&mut self) {
        self.controller.view().on_tick(Instant::now());
        self.sync_recent();
    }

    pub fn on_redraw(&mut self) {
        self.sync_recent();
    }

    /// Move the currently shown article to the front of the recent list.
    fn sync_recent(&mut self) {
        let entry = {
            let view = self.controller.view();
            let Some(article) = view.article() else {
                return;
            };
            RecentArticle {
                id: article.id.clone(),
                title: article.title.clone(),
                category: article.category.clone(),
            }
        };

        if self.recent.first() == Some(&entry) {
            return;
        }
        self.recent.retain(|r| r.id != entry.id);
        self.recent.insert(0, entry);
        self.recent.truncate(RECENT_LIMIT);
    }

    /// Wait for every background load and vote started so far.
    pub async fn wait_for_tasks(&mut self) {
        for task in std::mem::take(&mut self.tasks) {
            let _ = task.await;
        }
        self.sync_recent();
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let events = self.events.clone();
        let handle = self.runtime.spawn(async move {
            task.await;
            let _ = events.send(AppEvent::Redraw);
        });
        self.tasks.retain(|t| !t.is_finished());
        self.tasks.push(handle);
    }
}
