//! Test helpers for rendering verification.

use ratatui::buffer::Buffer;

/// Converts a buffer to text, one line per row, with trailing spaces trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        let line: String = (buf.area.left()..buf.area.right())
            .filter_map(|x| buf.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect();
        result.push_str(line.trim_end_matches(' '));
        result.push('\n');
    }
    result
}
