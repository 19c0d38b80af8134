//! Rendering for the voting widget.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Theme;

use super::state::VoteState;
use super::widget::VotingWidget;

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows needed to draw the widget, borders included.
pub fn widget_height(widget: &VotingWidget) -> u16 {
    // title line, buttons, summary, borders
    let mut height = 5;
    if widget.state().error_message().is_some() {
        height += 1;
    }
    if widget.user_vote().is_some() {
        height += 1;
    }
    if widget.state().shows_confirmation() {
        height += 1;
    }
    height
}

pub fn render_voting_widget(frame: &mut Frame, area: Rect, widget: &VotingWidget, theme: &Theme) {
    let block = Block::default()
        .title(" Was this article helpful? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let paragraph = Paragraph::new(widget_lines(widget, theme))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn widget_lines(widget: &VotingWidget, theme: &Theme) -> Vec<Line<'static>> {
    let state = widget.state();
    let (helpful, not_helpful) = widget.displayed_counts();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            button("y", "Yes", helpful, true, state, theme),
            Span::raw("    "),
            button("n", "No", not_helpful, false, state, theme),
        ]),
    ];

    if let Some(choice) = widget.user_vote() {
        let text = if choice {
            "  You found this article helpful."
        } else {
            "  You found this article not helpful."
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(theme.text))));
    }

    if state.shows_confirmation() {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(theme.ok)),
            Span::styled("Thank you for your feedback!", Style::default().fg(theme.ok)),
        ]));
    }

    if let Some(error) = state.error_message() {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(theme.error),
        )));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", widget.summary()),
        Style::default().fg(theme.muted),
    )));

    lines
}

/// One control: `[y] Yes (12)`, spinner while submitting, dimmed when disabled.
fn button(
    key: &str,
    label: &str,
    count: u64,
    side: bool,
    state: &VoteState,
    theme: &Theme,
) -> Span<'static> {
    let prefix = match state {
        VoteState::Submitting { animation_tick, .. } => {
            SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()].to_string()
        }
        _ => format!("[{}]", key),
    };
    let text = format!(" {} {} ({}) ", prefix, label, count);

    let style = match state.user_vote() {
        Some(choice) if choice == side => Style::default()
            .fg(theme.ok)
            .bg(theme.highlight)
            .add_modifier(Modifier::BOLD),
        _ if state.controls_disabled() => {
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
        }
        _ => Style::default().fg(theme.text).bg(theme.highlight),
    };

    Span::styled(text, style)
}
