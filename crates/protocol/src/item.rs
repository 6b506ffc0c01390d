//! The todo item display unit.

use serde::{Deserialize, Serialize};

/// A single todo entry as written by the host app.
///
/// Items are immutable once parsed: fields are private and only exposed
/// through accessors. The `color` is kept as the raw string from the
/// document and resolved at render time, so a malformed color never drops
/// the item.
///
/// # Examples
///
/// ```
/// use widget_protocol::TodoItem;
///
/// let item = TodoItem::new("1111", "5 minutes stretching", "#FF3333");
/// assert_eq!(item.id(), "1111");
/// assert_eq!(item.content(), "5 minutes stretching");
/// assert_eq!(item.color(), "#FF3333");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    id: String,
    content: String,
    color: String,
}

impl TodoItem {
    /// Creates a new item.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            color: color.into(),
        }
    }

    /// Opaque identifier, unique within one document snapshot.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Raw hex color string, possibly malformed.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let item: TodoItem = serde_json::from_str(
            r##"{"id":"1","content":"x","color":"#000000","done":false}"##,
        )
        .expect("deserialize");
        assert_eq!(item, TodoItem::new("1", "x", "#000000"));
    }

    #[test]
    fn deserialize_rejects_null_field() {
        let result: Result<TodoItem, _> =
            serde_json::from_str(r##"{"id":null,"content":"x","color":"#000000"}"##);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_missing_field() {
        let result: Result<TodoItem, _> = serde_json::from_str(r#"{"id":"1","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_numeric_id() {
        let result: Result<TodoItem, _> =
            serde_json::from_str(r##"{"id":1,"content":"x","color":"#000000"}"##);
        assert!(result.is_err());
    }
}
