//! Rendering of a timeline entry (platform B).
//!
//! The entry only carries raw text. Parsing and the empty/populated decision
//! happen here, at render time, through the same core the list engine uses.
//! Rows on this platform are informational; they carry no tap routing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use widget_protocol::{RenderState, Rgb, color};

use crate::layout::{MIN_ROW_WIDTH, ROW_HEIGHT, SWATCH_WIDTH, TEXT_OFFSET};
use crate::row::{SWATCH_SYMBOL, terminal_color, truncate_string};
use crate::timeline::Entry;

/// Marker drawn inside an item swatch.
const ITEM_MARKER: &str = "□";

/// Marker drawn inside the empty-state swatch.
const EMPTY_MARKER: &str = "✓";

/// The interpreted view of one entry.
///
/// # Examples
///
/// ```
/// use widget_render::{EntryView, timeline::Entry};
///
/// let view = EntryView::new(&Entry::now("not json"), None);
/// assert_eq!(view.state().empty_message(), Some("All task completed!"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    state: RenderState,
}

impl EntryView {
    /// Interprets an entry. Empty text means the document was absent.
    #[must_use]
    pub fn new(entry: &Entry, empty_message: Option<&str>) -> Self {
        let document = (!entry.text.is_empty()).then_some(entry.text.as_str());
        Self {
            state: RenderState::build(document, empty_message),
        }
    }

    /// The render state this view draws.
    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }
}

/// Renders an entry view into `area`.
///
/// ```text
/// █□█ 5 minutes stretching      █✓█ All task completed!
/// █□█ Voice Call
/// ```
///
/// The empty state is a single fixed-size row with the accent swatch.
pub fn render_entry(view: &EntryView, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_ROW_WIDTH || area.height == 0 {
        return;
    }

    match view.state() {
        RenderState::Empty { message } => {
            render_swatch_row(Rgb::ACCENT, EMPTY_MARKER, message, area, buf);
        }
        RenderState::Populated { items } => {
            let rows = (area.y..area.bottom()).step_by(usize::from(ROW_HEIGHT));
            for (item, y) in items.iter().zip(rows) {
                let row_area = Rect {
                    y,
                    height: ROW_HEIGHT,
                    ..area
                };
                render_swatch_row(
                    color::resolve(item.color()),
                    ITEM_MARKER,
                    item.content(),
                    row_area,
                    buf,
                );
            }
        }
    }
}

fn render_swatch_row(fill: Rgb, marker: &str, text: &str, area: Rect, buf: &mut Buffer) {
    let fill = terminal_color(fill);
    let swatch = Style::default().fg(fill).bg(fill);
    for dx in 0..SWATCH_WIDTH {
        buf.set_string(area.x + dx, area.y, SWATCH_SYMBOL, swatch);
    }
    buf.set_string(
        area.x + SWATCH_WIDTH / 2,
        area.y,
        marker,
        Style::default().fg(Color::White).bg(fill),
    );

    let text_width = usize::from(area.width - TEXT_OFFSET);
    buf.set_string(
        area.x + TEXT_OFFSET,
        area.y,
        truncate_string(text, text_width),
        Style::default().add_modifier(Modifier::BOLD),
    );
}
