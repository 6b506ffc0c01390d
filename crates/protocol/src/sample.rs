//! Sample data for previews and tests.
//!
//! The sample mirrors what the host app writes after a user adds two todos.

use crate::item::TodoItem;

/// A two-item document in the host app's wire format.
pub const SAMPLE_DOCUMENT: &str = r##"[{"id": "1111", "content": "5 minutes stretching", "color": "#FF3333"}, {"id": "2222", "content": "Voice Call", "color": "#AA33EE"}]"##;

/// The items [`SAMPLE_DOCUMENT`] decodes to.
///
/// # Examples
///
/// ```
/// use widget_protocol::document::parse;
/// use widget_protocol::sample::{SAMPLE_DOCUMENT, sample_items};
///
/// assert_eq!(parse(Some(SAMPLE_DOCUMENT)), sample_items());
/// ```
#[must_use]
pub fn sample_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new("1111", "5 minutes stretching", "#FF3333"),
        TodoItem::new("2222", "Voice Call", "#AA33EE"),
    ]
}
