use std::io;
use std::time::Duration;

use crate::api::ArticleId;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Build the app and drive it until the user quits.
///
/// `make_app` receives the sender background tasks use to request a redraw.
pub fn run<F>(initial: Option<ArticleId>, make_app: F) -> io::Result<()>
where
    F: FnOnce(std::sync::mpsc::Sender<AppEvent>) -> App,
{
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let events = EventHandler::new(tick_rate);
    let mut app = make_app(events.sender());
    app.open_article(initial);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Redraw) => app.on_redraw(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
