//! In-memory shared store.
//!
//! Values are fixed at construction time. There is no way to change them
//! afterwards through the store, matching the widget's read-only view.

use std::collections::HashMap;

use crate::error::Result;
use crate::store::SharedStore;

/// A shared store holding a fixed set of values.
///
/// # Examples
///
/// ```
/// use widget_store::{MemoryStore, SharedStore};
///
/// let store = MemoryStore::new("group.com.example.widget")
///     .with_value("empty-string", "Nothing to do");
///
/// assert_eq!(store.get_string("empty-string").unwrap().as_deref(), Some("Nothing to do"));
/// assert_eq!(store.get_string("todos").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    group_id: String,
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store for the given group.
    #[must_use]
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            values: HashMap::new(),
        }
    }

    /// Returns the store with an additional value.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SharedStore for MemoryStore {
    fn group_id(&self) -> &str {
        &self.group_id
    }

    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_value_wins() {
        let store = MemoryStore::new("g")
            .with_value("todos", "a")
            .with_value("todos", "b");
        assert_eq!(store.get_string("todos").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn reports_group() {
        assert_eq!(MemoryStore::new("group.x").group_id(), "group.x");
    }
}
