//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub is_playing: bool,
    pub at_breakpoint: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = if data.at_breakpoint {
        theme.breakpoint
    } else if data.is_playing {
        theme.success
    } else {
        theme.primary
    };

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", data.current_step + 1, data.total_steps),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default().bg(theme.current_line_bg).fg(theme.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(theme.current_line_bg).fg(theme.fg),
        ),
    ];

    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.current_line_bg))
        .alignment(Alignment::Left);

    let hints = "←/→ step  space play  c continue  b breakpoint  t theme  q quit ";
    let right = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(theme.comment),
    )))
    .style(Style::default().bg(theme.current_line_bg))
    .alignment(Alignment::Right);

    frame.render_widget(left, layout[0]);
    frame.render_widget(right, layout[1]);
}
