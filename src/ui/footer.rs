use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Route;
use crate::ui::theme::Theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn hints(route: Route) -> &'static str {
        match route {
            Route::Article => {
                " y/n: Rate │ ↑↓ PgUp/PgDn: Scroll │ Tab: Related │ Enter: Open │ b: Back │ r: Reload │ q: Quit"
            }
            Route::Listing => " ↑↓: Select │ Enter: Open │ q: Quit",
        }
    }

    pub fn widget(&self, route: Route, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(route);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count, for the box-drawing separators
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(self.theme.text)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            )
    }
}
