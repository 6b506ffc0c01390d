//! Shared-store key names.
//!
//! The host app and the widget agree on these two keys inside the shared
//! group. They are read independently; there is no transaction spanning both.

/// Key holding the JSON todo document.
pub const TODOS_KEY: &str = "todos";

/// Key holding the empty-state message override.
pub const EMPTY_MESSAGE_KEY: &str = "empty-string";
