//! Variables pane: the current step's bindings and its description

use crate::snapshot::ExecutionStep;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the variables pane. Bindings whose value differs from the previous
/// step (or that are new) are highlighted.
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    step: &ExecutionStep,
    previous: Option<&ExecutionStep>,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Variables ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal));

    let mut lines = vec![
        Line::from(Span::styled(
            step.description.clone(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (name, value) in &step.variables {
        let changed = previous.map_or(true, |prev| prev.variables.get(name) != Some(value));
        let value_style = if changed {
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", name), Style::default().fg(theme.keyword)),
            Span::styled("= ", Style::default().fg(theme.comment)),
            Span::styled(value.to_string(), value_style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.bg));
    frame.render_widget(paragraph, area);
}
