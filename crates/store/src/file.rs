//! File-backed shared store.
//!
//! Each group is one JSON object holding string values, the same shape a
//! platform preferences file has:
//!
//! ```text
//! ~/.local/share/todo-widget/shared/          # Linux
//! ~/Library/Application Support/todo-widget/shared/  # macOS
//! └── group.com.example.widget.json
//! ```
//!
//! The file is re-read on every access. Writers are expected to replace it
//! atomically, so a read sees either the old or the new content.

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::error::{Result, StoreError};
use crate::store::SharedStore;

/// Read-only view of one group's backing file.
///
/// # Examples
///
/// ```no_run
/// use widget_store::{FileStore, SharedStore};
///
/// # fn example() -> widget_store::Result<()> {
/// let store = FileStore::new("group.com.example.widget")?;
/// if let Some(todos) = store.get_string("todos")? {
///     println!("{todos}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
    group_id: String,
}

impl FileStore {
    /// Opens the group in the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or the
    /// group identifier is invalid.
    #[instrument]
    pub fn new(group_id: &str) -> Result<Self> {
        let base_path = default_store_dir().ok_or(StoreError::NoDataDirectory)?;
        Self::with_path(base_path, group_id)
    }

    /// Opens the group under a custom directory.
    ///
    /// Nothing is created on disk; a missing directory simply reads as an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the group identifier is empty or contains path
    /// separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_store::FileStore;
    ///
    /// let store = FileStore::with_path("/tmp/shared", "group.com.example.widget").unwrap();
    /// assert!(store.path().ends_with("group.com.example.widget.json"));
    ///
    /// assert!(FileStore::with_path("/tmp/shared", "../escape").is_err());
    /// ```
    pub fn with_path(base_path: impl Into<PathBuf>, group_id: &str) -> Result<Self> {
        if !is_valid_group_id(group_id) {
            return Err(StoreError::InvalidGroup(group_id.to_string()));
        }

        let base_path = base_path.into();
        debug!(?base_path, group_id, "opening shared store");
        Ok(Self {
            base_path,
            group_id: group_id.to_string(),
        })
    }

    /// Returns the backing file path for this group.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", self.group_id))
    }

    fn load(&self) -> Result<Option<Map<String, Value>>> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map(Some)
                .map_err(|source| StoreError::Corrupt { path, source }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "shared store file not found");
                Ok(None)
            }
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }
}

impl SharedStore for FileStore {
    fn group_id(&self) -> &str {
        &self.group_id
    }

    #[instrument(skip(self), fields(group = %self.group_id))]
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        let Some(mut values) = self.load()? else {
            return Ok(None);
        };

        match values.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                warn!(key, kind = value_kind(&other), "ignoring non-string shared value");
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

/// Returns the default store directory inside the platform data directory.
#[must_use]
pub fn default_store_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("todo-widget").join("shared"))
}

fn is_valid_group_id(group_id: &str) -> bool {
    !group_id.is_empty()
        && group_id != "."
        && group_id != ".."
        && !group_id.contains(['/', '\\'])
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
