use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::{App, Route};
use crate::ui::article::render_article_view;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::listing::render_listing;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let theme = app.theme();

    frame.render_widget(
        Header::new(theme).widget(app.route(), app.base_url(), app.error_registry().len()),
        header,
    );
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Article => {
            let view = app.controller().view();
            render_article_view(frame, body, &view, theme);
        }
        Route::Listing => {
            render_listing(frame, body, app.recent(), app.listing_selection(), theme);
        }
    }

    frame.render_widget(Footer::new(theme).widget(app.route(), footer), footer);
}
