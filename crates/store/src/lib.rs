//! Read-only access to the shared document store.
//!
//! The host app owns the shared store and writes two keys into it, scoped by
//! a group identifier. The widget side only ever reads: the [`SharedStore`]
//! trait has no write operation.
//!
//! # Overview
//!
//! - [`store`]: The `SharedStore` capability and the degrade-to-absent read helpers
//! - [`file`]: A file-backed store, one JSON object per group
//! - [`memory`]: An in-memory store for previews and tests
//! - [`error`]: Error types for store access
//!
//! # Examples
//!
//! ```
//! use widget_protocol::{RenderState, TODOS_KEY};
//! use widget_store::{MemoryStore, read_render_state};
//!
//! let store = MemoryStore::new("group.com.example.widget")
//!     .with_value(TODOS_KEY, r##"[{"id":"1","content":"Buy milk","color":"#FF3333"}]"##);
//!
//! let state = read_render_state(&store);
//! assert_eq!(state.len(), 1);
//! ```

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

// Re-export primary types at crate root for convenience
pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{
    SharedStore, read_document, read_empty_message, read_or_absent, read_render_state,
};
