use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Route};

/// Lines moved per PgUp/PgDn.
const PAGE: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Article => handle_article_key(app, key),
        Route::Listing => handle_listing_key(app, key),
    }
}

fn handle_article_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => app.vote(true),
        KeyCode::Char('n') => app.vote(false),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('b') | KeyCode::Esc => app.back_to_listing(),
        KeyCode::Up => app.scroll_article(-1),
        KeyCode::Down => app.scroll_article(1),
        KeyCode::PageUp => app.scroll_article(-PAGE),
        KeyCode::PageDown => app.scroll_article(PAGE),
        KeyCode::Tab => app.move_related_selection(1),
        KeyCode::BackTab => app.move_related_selection(-1),
        KeyCode::Enter => app.open_selected_related(),
        _ => {}
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_listing_selection(-1),
        KeyCode::Down => app.move_listing_selection(1),
        KeyCode::Enter => app.open_selected_recent(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
