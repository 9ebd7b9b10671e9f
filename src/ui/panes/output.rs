//! Output pane rendering: everything printed up to the current step

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the captured output, keeping the most recent lines visible
pub fn render_output_pane(frame: &mut Frame, area: Rect, lines: &[&str], theme: &Theme) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal));

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(theme.comment).bg(theme.bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let skip = lines.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = lines
        .iter()
        .skip(skip)
        .map(|line| ListItem::new(*line).style(Style::default().fg(theme.fg)))
        .collect();

    let list = List::new(items)
        .block(block.padding(Padding::new(1, 0, 0, 0)))
        .style(Style::default().bg(theme.bg));
    frame.render_widget(list, area);
}
