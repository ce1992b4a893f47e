use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_chars` characters, ending in "..." when cut.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Seconds with two decimals, as shown in the completion banner.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

/// Simulate how text wraps with trimming (matching ratatui Wrap { trim: true } behavior)
/// Handles both explicit newlines (\n) and automatic wrapping at max_width
/// Returns a vector of (line_text, start_index, end_index) for each visual line
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<(String, usize, usize)> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    let mut line_start_idx = 0;

    for (char_idx, ch) in text.char_indices() {
        if ch == '\n' {
            // Force line break at explicit newline - trim current line
            let trimmed = current_line.trim_end().to_string();
            lines.push((trimmed, line_start_idx, char_idx));

            // Start new line after the newline
            current_line = String::new();
            current_width = 0;
            line_start_idx = char_idx + 1;
        } else {
            let char_width = ch.width().unwrap_or(1);

            if current_width + char_width > max_width && current_width > 0 {
                // Auto-wrap to next line - trim trailing whitespace from current line
                let trimmed = current_line.trim_end().to_string();
                lines.push((trimmed, line_start_idx, char_idx));

                // Start new line with this character
                current_line = ch.to_string();
                current_width = char_width;
                line_start_idx = char_idx;
            } else {
                current_line.push(ch);
                current_width += char_width;
            }
        }
    }

    // Add the last line, trimmed
    if !current_line.is_empty() || text.ends_with('\n') {
        let trimmed = current_line.trim_end().to_string();
        lines.push((trimmed, line_start_idx, text.len()));
    }

    lines
}

/// Calculate the line and column position of a cursor within wrapped text.
/// Accounts for trimming behavior (matching ratatui Wrap { trim: true }).
/// Returns (line_number, column_in_line) for the given cursor position in the text.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor_index == 0 {
        return (0, 0);
    }

    // Simulate how the text would be wrapped and trimmed
    let wrapped_lines = simulate_wrapped_lines(text, max_width);

    // Find which visual line contains the cursor
    for (line_idx, (_, start_idx, end_idx)) in wrapped_lines.iter().enumerate() {
        if cursor_index >= *start_idx && cursor_index <= *end_idx {
            // Cursor is in this visual line
            let col_in_line = text.get(*start_idx..cursor_index).map_or(0, |s| s.width());
            return (line_idx, col_in_line);
        }
    }

    // Cursor is beyond the last line or in trimmed space
    // Find the closest visual line
    if let Some((_, _, last_end)) = wrapped_lines.last() {
        if cursor_index >= *last_end {
            let last_line_idx = wrapped_lines.len().saturating_sub(1);
            let last_line_len = wrapped_lines
                .last()
                .map(|(text, _, _)| text.chars().count())
                .unwrap_or(0);
            return (last_line_idx, last_line_len);
        }
    }

    // Fallback
    (0, 0)
}
