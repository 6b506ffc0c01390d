//! Defensive parsing of the `todos` document.
//!
//! The host app writes the document as a JSON array of
//! `{"id", "content", "color"}` objects. The widget must keep rendering no
//! matter what it finds under that key, so [`parse`] never fails: an absent
//! key yields an empty list silently, and anything undecodable yields an
//! empty list plus a diagnostic.
//!
//! Decoding is all-or-nothing. A single malformed element rejects the whole
//! document rather than salvaging the well-formed ones.

use tracing::warn;

use crate::error::Result;
use crate::item::TodoItem;

/// Decodes a raw document, reporting why it was rejected.
///
/// Element order is preserved. Unknown fields on items are ignored; missing,
/// `null` or non-string `id`/`content`/`color` fields reject the document.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of well-formed items.
///
/// # Examples
///
/// ```
/// use widget_protocol::document::try_parse;
///
/// let items = try_parse(r##"[{"id":"1","content":"a","color":"#000000"}]"##).unwrap();
/// assert_eq!(items.len(), 1);
///
/// assert!(try_parse("not json").is_err());
/// ```
pub fn try_parse(raw: &str) -> Result<Vec<TodoItem>> {
    Ok(serde_json::from_str(raw)?)
}

/// Parses the raw document read from the shared store.
///
/// `None` means the key was never written and is not treated as an error.
/// Decode failures are logged and collapse to an empty list; they are never
/// propagated to the caller.
///
/// # Examples
///
/// ```
/// use widget_protocol::document::parse;
///
/// assert!(parse(None).is_empty());
/// assert!(parse(Some("not json")).is_empty());
///
/// let items = parse(Some(r##"[{"id":"1","content":"Buy milk","color":"#FF3333"}]"##));
/// assert_eq!(items[0].content(), "Buy milk");
/// ```
#[must_use]
pub fn parse(raw: Option<&str>) -> Vec<TodoItem> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match try_parse(raw) {
        Ok(items) => items,
        Err(error) => {
            warn!(%error, len = raw.len(), "discarding undecodable todo document");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_document_is_empty() {
        assert!(parse(None).is_empty());
    }

    #[test]
    fn empty_text_is_empty() {
        assert!(parse(Some("")).is_empty());
    }

    #[test]
    fn empty_array_is_empty() {
        assert!(parse(Some("[]")).is_empty());
    }

    #[test]
    fn not_json_is_empty() {
        assert!(parse(Some("not json")).is_empty());
    }

    #[test]
    fn object_at_top_level_is_empty() {
        assert!(parse(Some(r##"{"id":"1","content":"x","color":"#000000"}"##)).is_empty());
    }

    #[test]
    fn null_at_top_level_is_empty() {
        assert!(parse(Some("null")).is_empty());
    }

    #[test]
    fn preserves_order_and_fields() {
        let items = parse(Some(
            r##"[
                {"id": "1111", "content": "5 minutes stretching", "color": "#FF3333"},
                {"id": "2222", "content": "Voice Call", "color": "#AA33EE"}
            ]"##,
        ));

        assert_eq!(
            items,
            vec![
                TodoItem::new("1111", "5 minutes stretching", "#FF3333"),
                TodoItem::new("2222", "Voice Call", "#AA33EE"),
            ]
        );
    }

    #[test]
    fn malformed_color_keeps_item() {
        let items = parse(Some(r#"[{"id":"1","content":"x","color":"zz"}]"#));
        assert_eq!(items, vec![TodoItem::new("1", "x", "zz")]);
    }

    #[test]
    fn one_bad_element_rejects_whole_document() {
        let items = parse(Some(
            r##"[
                {"id": "1", "content": "fine", "color": "#FFFFFF"},
                {"id": "2", "content": null, "color": "#FFFFFF"}
            ]"##,
        ));
        assert!(items.is_empty());
    }

    #[test]
    fn try_parse_reports_error() {
        assert!(try_parse("[1, 2, 3]").is_err());
    }
}
