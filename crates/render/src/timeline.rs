//! The snapshot/timeline provider (platform B).
//!
//! The host asks the provider for entries; each entry carries only the raw
//! document text read at call time. Interpretation happens later, in
//! [`crate::entry_view`], so the provider stays a thin reader that tests can
//! drive without any scheduler.
//!
//! Timelines never schedule their own reload. The host app asks the OS to
//! reload after it writes, and every call here reads the store again.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};
use widget_store::{SharedStore, read_document, read_empty_message};

/// Text of the placeholder entry shown before any data exists.
pub const PLACEHOLDER_TEXT: &str = "Placeholder";

/// A single timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// When the entry becomes relevant.
    pub date: DateTime<Utc>,
    /// The raw, unparsed document text.
    pub text: String,
}

impl Entry {
    /// Creates an entry dated now.
    #[must_use]
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            date: Utc::now(),
            text: text.into(),
        }
    }
}

/// When the host should ask for a new timeline on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RefreshPolicy {
    /// Only reload when explicitly asked to.
    Never,
}

/// A sequence of entries plus its refresh policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    /// The entries, in display order.
    pub entries: Vec<Entry>,
    /// When to reload.
    pub policy: RefreshPolicy,
}

/// The query protocol a timeline host drives.
pub trait TimelineProvider {
    /// A static entry usable before any data exists.
    fn placeholder(&self) -> Entry;

    /// An entry for transient display, built from the store at call time.
    fn snapshot(&self) -> Entry;

    /// The timeline to display until the next explicit reload.
    fn timeline(&self) -> Timeline;
}

/// Timeline provider over the shared store's todo document.
///
/// # Examples
///
/// ```
/// use widget_protocol::TODOS_KEY;
/// use widget_render::{RefreshPolicy, TimelineProvider, TodoTimelineProvider};
/// use widget_store::MemoryStore;
///
/// let store = MemoryStore::new("group.com.example.widget").with_value(TODOS_KEY, "[]");
/// let provider = TodoTimelineProvider::new(store);
///
/// let timeline = provider.timeline();
/// assert_eq!(timeline.entries.len(), 1);
/// assert_eq!(timeline.entries[0].text, "[]");
/// assert_eq!(timeline.policy, RefreshPolicy::Never);
/// ```
#[derive(Debug, Clone)]
pub struct TodoTimelineProvider<S> {
    store: S,
}

impl<S: SharedStore> TodoTimelineProvider<S> {
    /// Creates a provider reading from `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the empty-state message override for the entry view.
    #[must_use]
    pub fn empty_message(&self) -> Option<String> {
        read_empty_message(&self.store)
    }

    fn current_entry(&self) -> Entry {
        Entry::now(read_document(&self.store).unwrap_or_default())
    }
}

impl<S: SharedStore> TimelineProvider for TodoTimelineProvider<S> {
    fn placeholder(&self) -> Entry {
        Entry::now(PLACEHOLDER_TEXT)
    }

    fn snapshot(&self) -> Entry {
        self.current_entry()
    }

    #[instrument(skip(self), fields(group = self.store.group_id()))]
    fn timeline(&self) -> Timeline {
        let entry = self.current_entry();
        debug!(len = entry.text.len(), "timeline built");
        Timeline {
            entries: vec![entry],
            policy: RefreshPolicy::Never,
        }
    }
}
