//! Bar chart of the traced array
//!
//! The chart is derived purely from the step's array-shaped bindings: the
//! first array in scope order is drawn. Loop counters, when bound, colour the
//! pair at `j`/`j + 1` and the already-sorted tail of `n - i` onward.

use crate::memory::value::format_number;
use crate::snapshot::ExecutionStep;
use crate::trace::rules::RESULT_VARIABLE;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Bar heights are integers in `1..=RESOLUTION + 1`.
const RESOLUTION: f64 = 1000.0;

/// Finite bounds the bars are scaled between. The floor never exceeds 0 so
/// the smallest positive element still gets a visible bar.
fn bounds(items: &[f64]) -> (f64, f64) {
    items
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Integer bar height for `value`, at least 1. Infinite values pin to the
/// bounds and NaN gets the shortest bar.
fn bar_height(value: f64, (floor, ceiling): (f64, f64)) -> u64 {
    let ratio = if value.is_nan() || value == f64::NEG_INFINITY {
        0.0
    } else if value == f64::INFINITY || ceiling == floor {
        1.0
    } else {
        // Halved so a span like 1e308 - -1e308 stays finite
        (value / 2.0 - floor / 2.0) / (ceiling / 2.0 - floor / 2.0)
    };
    (ratio.clamp(0.0, 1.0) * RESOLUTION).round() as u64 + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Normal,
    Compared,
    Sorted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub height: u64,
    pub label: String,
    pub value_text: String,
    pub state: BarState,
}

/// Build the bars for the first array binding of `step`
pub fn bar_specs(step: &ExecutionStep) -> Option<(&str, Vec<BarSpec>)> {
    let (name, items) = step.array_variables().next()?;
    let len = items.len();

    let bounds = bounds(items);
    let finished = step.variables.contains_key(RESULT_VARIABLE);
    let sorted_from = match step.number("i") {
        _ if finished => 0,
        Some(i) => len.saturating_sub(i as usize),
        None => len,
    };
    let compared = match step.number("j") {
        Some(j) if !finished && (j as usize) + 1 < len => Some(j as usize),
        _ => None,
    };

    let bars = items
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let state = if compared.is_some_and(|j| index == j || index == j + 1) {
                BarState::Compared
            } else if index >= sorted_from {
                BarState::Sorted
            } else {
                BarState::Normal
            };
            BarSpec {
                height: bar_height(*value, bounds),
                label: index.to_string(),
                value_text: format_number(*value),
                state,
            }
        })
        .collect();

    Some((name, bars))
}

/// Render the chart pane
pub fn render_chart_pane(frame: &mut Frame, area: Rect, step: &ExecutionStep, theme: &Theme) {
    let Some((name, specs)) = bar_specs(step) else {
        let paragraph = Paragraph::new("(no array in scope)")
            .block(Block::default().title(" Chart ").borders(Borders::ALL))
            .style(Style::default().fg(theme.comment).bg(theme.bg));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = Block::default()
        .title(format!(" Chart: {} ", name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal));

    let bars: Vec<Bar> = specs
        .into_iter()
        .map(|spec| {
            let color = match spec.state {
                BarState::Normal => theme.bar,
                BarState::Compared => theme.bar_active,
                BarState::Sorted => theme.success,
            };
            Bar::default()
                .value(spec.height)
                .text_value(spec.value_text)
                .label(Line::from(spec.label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.bg).bg(color).add_modifier(Modifier::BOLD))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let count = bars.len().max(1);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 9) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .style(Style::default().bg(theme.bg));
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::generator::generate;

    #[test]
    fn test_compared_pair_and_sorted_tail() {
        let steps = generate("let arr = [3, 1, 2];").unwrap();
        // Second pass, first comparison: i = 1, j = 0
        let step = steps
            .iter()
            .find(|s| s.number("i") == Some(1.0) && s.description.starts_with("Compare"))
            .unwrap();
        let (name, bars) = bar_specs(step).unwrap();

        assert_eq!(name, "arr");
        let states: Vec<BarState> = bars.iter().map(|b| b.state).collect();
        assert_eq!(
            states,
            [BarState::Compared, BarState::Compared, BarState::Sorted]
        );
    }

    #[test]
    fn test_everything_sorted_at_the_end() {
        let steps = generate("let arr = [2, -1];").unwrap();
        let (_, bars) = bar_specs(steps.last().unwrap()).unwrap();

        assert!(bars.iter().all(|b| b.state == BarState::Sorted));
        assert_eq!(bars[0].value_text, "-1");
        // -1 is the floor: smallest bar still visible
        assert_eq!(bars[0].height, 1);
        assert_eq!(bars[1].height, 1001);
    }

    fn render(step: &ExecutionStep) {
        use crate::ui::theme::DARK_THEME;
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_chart_pane(f, area, step, &DARK_THEME)
            })
            .unwrap();
    }

    #[test]
    fn test_huge_value_keeps_heights_bounded() {
        let steps = generate("let arr = [1e300, 1];").unwrap();
        let (_, bars) = bar_specs(&steps[0]).unwrap();

        assert_eq!(bars[0].height, 1001);
        assert_eq!(bars[1].height, 1);
        assert_eq!(bars[0].value_text, "1e+300");
        render(&steps[0]);
    }

    #[test]
    fn test_infinite_values_pin_to_bounds() {
        let steps = generate("let arr = [1 / 0, 1, -1 / 0];").unwrap();
        let (_, bars) = bar_specs(&steps[0]).unwrap();

        let heights: Vec<u64> = bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, [1001, 1001, 1]);
        assert_eq!(bars[0].value_text, "Infinity");
        assert_eq!(bars[2].value_text, "-Infinity");
        render(&steps[0]);
    }

    #[test]
    fn test_opposite_extremes_do_not_overflow_span() {
        let steps = generate("let arr = [1e308, -1e308, 0];").unwrap();
        let (_, bars) = bar_specs(&steps[0]).unwrap();

        let heights: Vec<u64> = bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, [1001, 1, 501]);
        render(&steps[0]);
    }
}
