//! Source code pane rendering with syntax highlighting
//!
//! Displays the traced program with line numbers, a marker on the line the
//! current step is attributed to, breakpoint dots, and the editing cursor used
//! to place breakpoints. The view scrolls to keep the current line centred.

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the source pane needs from the app for one frame
pub struct SourceRenderData<'a> {
    pub source: &'a str,
    /// 1-based line of the current step
    pub current_line: usize,
    /// 1-based line under the breakpoint cursor
    pub cursor_line: usize,
    pub breakpoints: &'a [usize],
}

const KEYWORDS: &[&str] = &[
    "let", "const", "var", "for", "if", "else", "while", "return", "function",
];

fn keyword_style(word: &str, theme: &Theme) -> Style {
    if KEYWORDS.contains(&word) {
        Style::default().fg(theme.keyword).add_modifier(Modifier::BOLD)
    } else if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
        Style::default().fg(theme.number)
    } else {
        Style::default().fg(theme.fg)
    }
}

/// Word-level highlighting for a single source line
fn highlight_line<'a>(line: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == '$' || (c == '.' && word_start.is_some()) {
            word_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = word_start.take() {
            spans.push(Span::styled(&line[start..i], keyword_style(&line[start..i], theme)));
        }

        if c == '/' && line[i..].starts_with("//") {
            spans.push(Span::styled(&line[i..], Style::default().fg(theme.comment)));
            return spans;
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(theme.primary),
            _ => Style::default().fg(theme.fg),
        };
        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }

    if let Some(start) = word_start {
        spans.push(Span::styled(&line[start..], keyword_style(&line[start..], theme)));
    }

    spans
}

/// First visible line index so that `current_line` sits near the middle
fn scroll_offset(current_line: usize, visible_height: usize, total_lines: usize) -> usize {
    let max_offset = total_lines.saturating_sub(visible_height);
    current_line
        .saturating_sub(1)
        .saturating_sub(visible_height / 2)
        .min(max_offset)
}

/// Render the source code pane
pub fn render_source_pane(frame: &mut Frame, area: Rect, data: &SourceRenderData, theme: &Theme) {
    let border_style = Style::default()
        .fg(theme.border_focused)
        .add_modifier(Modifier::BOLD);

    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let source_lines: Vec<&str> = data.source.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let gutter_width = source_lines.len().max(1).to_string().len();
    let offset = scroll_offset(data.current_line, visible_height, source_lines.len());

    let lines: Vec<Line> = source_lines
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(index, text)| {
            let number = index + 1;
            let is_current = number == data.current_line;

            let marker = if data.breakpoints.contains(&number) {
                Span::styled("● ", Style::default().fg(theme.breakpoint))
            } else {
                Span::raw("  ")
            };
            let arrow = if is_current {
                Span::styled("→ ", Style::default().fg(theme.success).add_modifier(Modifier::BOLD))
            } else if number == data.cursor_line {
                Span::styled("› ", Style::default().fg(theme.border_focused))
            } else {
                Span::raw("  ")
            };
            let gutter = Span::styled(
                format!("{:>width$} ", number, width = gutter_width),
                Style::default().fg(theme.comment),
            );

            let mut spans = vec![marker, gutter, arrow];
            spans.extend(highlight_line(text, theme));

            let line = Line::from(spans);
            if is_current {
                line.style(Style::default().bg(theme.current_line_bg))
            } else {
                line
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK_THEME;

    #[test]
    fn test_highlight_preserves_text() {
        let line = "  if (arr[j] > arr[j + 1]) { // compare";
        let spans = highlight_line(line, &DARK_THEME);
        let rebuilt: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_scroll_keeps_current_line_visible() {
        assert_eq!(scroll_offset(1, 10, 40), 0);
        assert_eq!(scroll_offset(20, 10, 40), 14);
        assert_eq!(scroll_offset(40, 10, 40), 30);
        assert_eq!(scroll_offset(5, 10, 3), 0);
    }
}
