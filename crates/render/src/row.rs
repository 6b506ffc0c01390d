//! Rows produced by the list adapter.
//!
//! A [`RenderedRow`] is everything the host needs to draw one list item and
//! route a tap on it: the text, the color of the two swatch regions, and the
//! fill-in payload identifying the item.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use widget_protocol::{FillIn, Rgb, TodoItem, color};

use crate::layout::{MIN_ROW_WIDTH, SWATCH_WIDTH, TEXT_OFFSET};

/// Text of the static row shown while a refresh is pending.
pub const LOADING_TEXT: &str = "Loading…";

/// Glyph used to paint swatch cells.
pub(crate) const SWATCH_SYMBOL: &str = "█";

/// One materialized list row.
///
/// # Examples
///
/// ```
/// use widget_protocol::{Rgb, TodoItem};
/// use widget_render::RenderedRow;
///
/// let row = RenderedRow::from_item(&TodoItem::new("1", "Buy milk", "#FF3333"));
/// assert_eq!(row.text, "Buy milk");
/// assert_eq!(row.swatch_color, Rgb::new(255, 51, 51));
/// assert_eq!(row.fill_in.as_ref().map(|f| f.item_id()), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Text shown next to the swatch.
    pub text: String,
    /// Background of the swatch container region.
    pub container_color: Rgb,
    /// Color of the inner swatch.
    pub swatch_color: Rgb,
    /// Tap payload, absent for non-interactive rows.
    pub fill_in: Option<FillIn>,
}

impl RenderedRow {
    /// Builds the row for an item, resolving its color once for both regions.
    #[must_use]
    pub fn from_item(item: &TodoItem) -> Self {
        let resolved = color::resolve(item.color());
        Self {
            text: item.content().to_string(),
            container_color: resolved,
            swatch_color: resolved,
            fill_in: Some(FillIn::new(item.id())),
        }
    }

    /// The static loading row. It never depends on store data.
    #[must_use]
    pub fn loading() -> Self {
        let gray = Rgb::new(0x80, 0x80, 0x80);
        Self {
            text: LOADING_TEXT.to_string(),
            container_color: gray,
            swatch_color: gray,
            fill_in: None,
        }
    }
}

/// Converts a resolved color into a terminal color.
#[must_use]
pub const fn terminal_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Renders a list row into the first line of `area`.
///
/// ```text
/// ███ Buy milk
/// ^^^ container region, inner cell is the swatch
/// ```
///
/// Rows narrower than [`MIN_ROW_WIDTH`] are skipped.
pub fn render_row(row: &RenderedRow, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_ROW_WIDTH || area.height == 0 {
        return;
    }

    let container = terminal_color(row.container_color);
    for dx in 0..SWATCH_WIDTH {
        let style = Style::default().fg(container).bg(container);
        buf.set_string(area.x + dx, area.y, SWATCH_SYMBOL, style);
    }
    let swatch = terminal_color(row.swatch_color);
    buf.set_string(
        area.x + SWATCH_WIDTH / 2,
        area.y,
        SWATCH_SYMBOL,
        Style::default().fg(swatch).bg(swatch),
    );

    let text_style = if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::White)
    };
    let text_width = usize::from(area.width - TEXT_OFFSET);
    buf.set_string(
        area.x + TEXT_OFFSET,
        area.y,
        truncate_string(&row.text, text_width),
        text_style,
    );
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 1 {
        let truncated: String = s.chars().take(max_width - 1).collect();
        format!("{truncated}…")
    } else {
        s.chars().take(max_width).collect()
    }
}
