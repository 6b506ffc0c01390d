//! The render model shared by both engines.
//!
//! A [`RenderState`] is derived from one read of the shared store and
//! recomputed on every refresh. It is never cached across refreshes and
//! never persisted.

use crate::document::parse;
use crate::item::TodoItem;

/// Message shown when the list is empty and no override is stored.
pub const FALLBACK_EMPTY_MESSAGE: &str = "All task completed!";

/// The interpretation of one document snapshot.
///
/// # Examples
///
/// ```
/// use widget_protocol::{RenderState, FALLBACK_EMPTY_MESSAGE};
///
/// let state = RenderState::build(None, None);
/// assert_eq!(
///     state,
///     RenderState::Empty { message: FALLBACK_EMPTY_MESSAGE.to_string() }
/// );
///
/// let state = RenderState::build(Some("[]"), Some("Nothing to do"));
/// assert_eq!(state.empty_message(), Some("Nothing to do"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// No items to display.
    Empty {
        /// The message to show in place of the list.
        message: String,
    },
    /// At least one item, in document order.
    Populated {
        /// The items to display.
        items: Vec<TodoItem>,
    },
}

impl RenderState {
    /// Builds the render state from the two raw store values.
    ///
    /// The document is parsed with [`parse`]; if it yields no items the
    /// state is `Empty` with `raw_empty_message` (or
    /// [`FALLBACK_EMPTY_MESSAGE`] when absent). The two values are
    /// interpreted independently.
    #[must_use]
    pub fn build(raw_document: Option<&str>, raw_empty_message: Option<&str>) -> Self {
        Self::from_items(parse(raw_document), raw_empty_message)
    }

    /// Builds the render state from already-parsed items.
    #[must_use]
    pub fn from_items(items: Vec<TodoItem>, raw_empty_message: Option<&str>) -> Self {
        if items.is_empty() {
            Self::Empty {
                message: raw_empty_message
                    .unwrap_or(FALLBACK_EMPTY_MESSAGE)
                    .to_string(),
            }
        } else {
            Self::Populated { items }
        }
    }

    /// Returns `true` for the `Empty` variant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Returns the number of displayed items (zero while `Empty`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Returns the displayed items (an empty slice while `Empty`).
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        match self {
            Self::Empty { .. } => &[],
            Self::Populated { items } => items,
        }
    }

    /// Returns the empty-state message, if this state is `Empty`.
    #[must_use]
    pub fn empty_message(&self) -> Option<&str> {
        match self {
            Self::Empty { message } => Some(message),
            Self::Populated { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ITEM: &str = r##"[{"id":"1","content":"Buy milk","color":"#FF3333"}]"##;

    #[test]
    fn absent_document_uses_fallback_message() {
        let state = RenderState::build(None, None);
        assert_eq!(state.empty_message(), Some(FALLBACK_EMPTY_MESSAGE));
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn malformed_document_uses_fallback_message() {
        let state = RenderState::build(Some("not json"), None);
        assert_eq!(
            state,
            RenderState::Empty {
                message: "All task completed!".to_string()
            }
        );
    }

    #[test]
    fn override_message_is_used() {
        let state = RenderState::build(Some("[]"), Some("Nothing left"));
        assert_eq!(state.empty_message(), Some("Nothing left"));
    }

    #[test]
    fn empty_override_is_kept() {
        let state = RenderState::build(None, Some(""));
        assert_eq!(state.empty_message(), Some(""));
    }

    #[test]
    fn populated_ignores_message() {
        let state = RenderState::build(Some(ONE_ITEM), Some("Nothing left"));
        assert_eq!(
            state,
            RenderState::Populated {
                items: vec![TodoItem::new("1", "Buy milk", "#FF3333")]
            }
        );
        assert_eq!(state.empty_message(), None);
        assert!(!state.is_empty());
    }

    #[test]
    fn build_is_idempotent() {
        for doc in [None, Some("not json"), Some("[]"), Some(ONE_ITEM)] {
            assert_eq!(
                RenderState::build(doc, Some("msg")),
                RenderState::build(doc, Some("msg"))
            );
        }
    }

    #[test]
    fn from_items_with_no_items_is_empty() {
        assert!(RenderState::from_items(Vec::new(), None).is_empty());
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The state is empty exactly when the parser yields nothing.
        #[test]
        fn empty_iff_parse_empty(doc in "\\PC{0,80}", msg in proptest::option::of("\\PC{0,20}")) {
            let state = RenderState::build(Some(&doc), msg.as_deref());
            prop_assert_eq!(state.is_empty(), parse(Some(&doc)).is_empty());
            if state.is_empty() {
                let expected = msg.as_deref().unwrap_or(FALLBACK_EMPTY_MESSAGE);
                prop_assert_eq!(state.empty_message(), Some(expected));
            }
        }
    }
}
