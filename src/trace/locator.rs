//! Source line lookup for trace events

/// 1-based number of the first line at or after `start_index` (0-based)
/// containing `needle`.
///
/// When nothing matches, the event is attributed to `start_index + 1`,
/// clamped to the last line so the result always names a line that exists.
/// The result is never zero.
pub fn locate_line(lines: &[&str], needle: &str, start_index: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(start_index)
        .find(|(_, line)| line.contains(needle))
        .map(|(index, _)| index + 1)
        .unwrap_or_else(|| fallback_line(lines.len(), start_index))
}

fn fallback_line(line_count: usize, start_index: usize) -> usize {
    (start_index + 1).min(line_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 4] = [
        "let arr = [3, 1];",
        "let n = arr.length;",
        "for (let i = 0; i < n; i++) {",
        "console.log(arr);",
    ];

    #[test]
    fn test_first_match_at_or_after_start() {
        assert_eq!(locate_line(&LINES, "arr", 0), 1);
        assert_eq!(locate_line(&LINES, "arr", 1), 2);
        assert_eq!(locate_line(&LINES, "for (let i", 0), 3);
    }

    #[test]
    fn test_missing_needle_falls_back_to_start() {
        assert_eq!(locate_line(&LINES, "while", 0), 1);
        assert_eq!(locate_line(&LINES, "while", 2), 3);
    }

    #[test]
    fn test_fallback_is_clamped() {
        assert_eq!(locate_line(&LINES, "while", 10), 4);
        assert_eq!(locate_line(&[], "anything", 0), 1);
    }
}
