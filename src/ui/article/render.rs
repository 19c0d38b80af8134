//! Rendering for the article detail view.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Article;
use crate::ui::theme::Theme;
use crate::ui::vote::{render_voting_widget, widget_height, SPINNER_FRAMES};

use super::display::ArticleDisplay;
use super::state::ArticleViewState;
use super::view::ArticleView;

pub fn render_article_view(frame: &mut Frame, area: Rect, view: &ArticleView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let vote_height = match (view.state(), view.voting()) {
        (ArticleViewState::Loaded { .. }, Some(widget)) => widget_height(widget).min(inner.height),
        _ => 0,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(vote_height)])
        .split(inner);

    let content_width = chunks[0].width.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(article_lines(view, theme, content_width))
        .scroll((view.scroll(), 0));
    frame.render_widget(paragraph, chunks[0]);

    if vote_height > 0 {
        if let Some(widget) = view.voting() {
            render_voting_widget(frame, chunks[1], widget, theme);
        }
    }
}

/// Body lines for the current state, before scrolling.
pub fn article_lines(view: &ArticleView, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    match view.state() {
        ArticleViewState::Loading { animation_tick } => {
            let frame = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {} Loading article...", frame),
                    Style::default().fg(theme.accent),
                )),
            ]
        }
        ArticleViewState::Failed { .. } => {
            let message = view.state().error_message().unwrap_or_default().to_string();
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", message),
                    Style::default().fg(theme.error),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  [b] Back to knowledge base",
                    Style::default().fg(theme.muted),
                )),
            ]
        }
        ArticleViewState::Loaded { article, display } => {
            loaded_lines(article, display, view.related_selection(), theme, width)
        }
    }
}

fn loaded_lines(
    article: &Article,
    display: &ArticleDisplay,
    selection: Option<usize>,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(theme.text);
    let muted = Style::default().fg(theme.muted);
    let heading = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();

    let mut badges = vec![Span::styled(format!(" {} ", article.article_number), muted)];
    if !article.category.is_empty() {
        badges.push(Span::styled(format!("│ {} ", article.category), muted));
    }
    if let Some(status) = article.status.as_deref().filter(|s| !s.is_empty()) {
        badges.push(Span::styled(format!("│ {} ", status), muted));
    }
    lines.push(Line::from(badges));
    lines.push(Line::from(Span::styled(format!(" {}", article.title), heading)));

    if let Some(summary) = article.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(Line::from(Span::styled(format!(" {}", summary.trim()), muted)));
    }

    let mut meta = format!(" By {} · Created {}", display.author, display.created);
    if let Some(published) = &display.published {
        meta.push_str(&format!(" · Published {}", published));
    }
    meta.push_str(&format!(" · Updated {}", display.updated));
    lines.push(Line::from(Span::styled(meta, muted)));
    lines.push(Line::from(Span::styled(
        format!(
            " {} views · {}% found this helpful",
            article.view_count, display.helpfulness_percent
        ),
        muted,
    )));

    if !article.tags.is_empty() {
        let mut spans = vec![Span::raw(" ")];
        for tag in &article.tags {
            spans.push(Span::styled(
                format!("#{}", tag.name),
                Style::default().fg(theme.tag_color(tag.color.as_deref())),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    for line in display.body_lines(width).iter() {
        lines.push(Line::from(Span::styled(format!(" {}", line), text)));
    }

    if !display.attachments.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Attachments", heading)));
        for attachment in &display.attachments {
            lines.push(Line::from(vec![
                Span::styled(format!("   {} ", attachment.name), text),
                Span::styled(format!("({})", attachment.size), muted),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", attachment.location),
                muted,
            )));
        }
    }

    let related = article.related_articles();
    if !related.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Related articles", heading)));
        for (index, entry) in related.iter().enumerate() {
            let selected = selection == Some(index);
            let marker = if selected { " › " } else { "   " };
            let style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                text
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{}", marker, entry.title), style),
                Span::styled(
                    format!("  {} · {} views", entry.category, entry.view_count),
                    muted,
                ),
            ]));
        }
    }

    lines
}
