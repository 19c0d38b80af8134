//! Listing of articles opened during this session.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::RecentArticle;
use crate::ui::theme::Theme;

pub fn render_listing(
    frame: &mut Frame,
    area: Rect,
    recent: &[RecentArticle],
    selection: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Knowledge base ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(
        Paragraph::new(listing_lines(recent, selection, theme)).block(block),
        area,
    );
}

pub fn listing_lines(
    recent: &[RecentArticle],
    selection: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.muted);
    if recent.is_empty() {
        return vec![
            Line::from(""),
            Line::from(Span::styled("  No articles viewed yet.", muted)),
            Line::from(Span::styled(
                "  Start kb-reader with an article id to open one.",
                muted,
            )),
        ];
    }

    let mut lines = vec![
        Line::from(Span::styled(" Recently viewed", muted)),
        Line::from(""),
    ];
    for (index, entry) in recent.iter().enumerate() {
        let selected = index == selection;
        let style = if selected {
            Style::default()
                .fg(theme.accent)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let marker = if selected { " › " } else { "   " };
        let mut spans = vec![Span::styled(format!("{}{}", marker, entry.title), style)];
        if !entry.category.is_empty() {
            spans.push(Span::styled(format!("  {}", entry.category), muted));
        }
        lines.push(Line::from(spans));
    }
    lines
}
