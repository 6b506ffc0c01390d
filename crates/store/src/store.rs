//! The shared store read capability.
//!
//! Every read is a single call that returns either the complete stored value
//! or nothing. The two widget keys are read independently; the store gives no
//! guarantee that they reflect the same host app state.

use std::sync::Arc;

use tracing::{debug, warn};
use widget_protocol::{EMPTY_MESSAGE_KEY, RenderState, TODOS_KEY};

use crate::error::Result;

/// Read-only view of a namespaced key-value store shared with the host app.
pub trait SharedStore {
    /// The group identifier this view is scoped to.
    fn group_id(&self) -> &str;

    /// Reads a string value.
    ///
    /// Returns `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be accessed.
    fn get_string(&self, key: &str) -> Result<Option<String>>;
}

impl<S: SharedStore + ?Sized> SharedStore for &S {
    fn group_id(&self) -> &str {
        (**self).group_id()
    }

    fn get_string(&self, key: &str) -> Result<Option<String>> {
        (**self).get_string(key)
    }
}

impl<S: SharedStore + ?Sized> SharedStore for Arc<S> {
    fn group_id(&self) -> &str {
        (**self).group_id()
    }

    fn get_string(&self, key: &str) -> Result<Option<String>> {
        (**self).get_string(key)
    }
}

/// Reads a value, treating any access failure as absent.
///
/// A crashing widget is disabled by the host OS, so storage errors are
/// logged here and never surface to the caller.
pub fn read_or_absent<S: SharedStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get_string(key) {
        Ok(value) => {
            debug!(group = store.group_id(), key, present = value.is_some(), "read shared value");
            value
        }
        Err(error) => {
            warn!(group = store.group_id(), key, %error, "shared store read failed, treating as absent");
            None
        }
    }
}

/// Reads the raw `todos` document.
pub fn read_document<S: SharedStore + ?Sized>(store: &S) -> Option<String> {
    read_or_absent(store, TODOS_KEY)
}

/// Reads the raw empty-state message override.
pub fn read_empty_message<S: SharedStore + ?Sized>(store: &S) -> Option<String> {
    read_or_absent(store, EMPTY_MESSAGE_KEY)
}

/// Reads both keys and builds a fresh render state.
pub fn read_render_state<S: SharedStore + ?Sized>(store: &S) -> RenderState {
    let document = read_document(store);
    let empty_message = read_empty_message(store);
    RenderState::build(document.as_deref(), empty_message.as_deref())
}
