use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Route;
use crate::ui::theme::Theme;

pub struct Header<'a> {
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn widget(&self, route: Route, base_url: &str, error_count: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.theme.text);
        let separator_style = Style::default().fg(self.theme.border);
        let accent_style = Style::default().fg(self.theme.accent);

        let screen = match route {
            Route::Article => "Article",
            Route::Listing => "Recently viewed",
        };
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Knowledge Base", accent_style),
            Span::styled("  │  ", separator_style),
            Span::styled(screen.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(base_url.to_string(), Style::default().fg(self.theme.muted)),
        ];
        if error_count > 0 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} background error(s)", error_count),
                Style::default().fg(self.theme.error),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(separator_style),
        )
    }
}
