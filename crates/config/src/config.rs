//! The widget identity configuration.
//!
//! This module provides [`WidgetConfig`], which carries the values the host
//! app's writer and the widget's reader must agree on.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;
use widget_protocol::intent::DEFAULT_ENTRY_SURFACE;

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file};

/// Shared group identifier used when none is configured.
pub const DEFAULT_GROUP_ID: &str = "group.com.example.widget";

/// Environment variable overriding [`WidgetConfig::group_id`].
pub const ENV_GROUP_ID: &str = "TODO_WIDGET_GROUP_ID";

/// Environment variable overriding [`WidgetConfig::store_dir`].
pub const ENV_STORE_DIR: &str = "TODO_WIDGET_STORE_DIR";

/// Identity and location settings for the widget.
///
/// # Examples
///
/// ```
/// use widget_config::{WidgetConfig, DEFAULT_GROUP_ID};
///
/// let config = WidgetConfig::default();
/// assert_eq!(config.group_id, DEFAULT_GROUP_ID);
/// assert_eq!(config.display_name, "dooboo");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Shared group identifier scoping the store.
    ///
    /// Must match the identifier the host app writes under.
    #[serde(default = "default_group_id")]
    pub group_id: String,

    /// Widget kind, used by the OS to tell widget types apart.
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Name shown in the OS widget gallery.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Description shown in the OS widget gallery.
    #[serde(default = "default_description")]
    pub description: String,

    /// Host app entry surface that activations open.
    #[serde(default = "default_entry_surface")]
    pub entry_surface: String,

    /// Directory holding the file-backed store.
    ///
    /// Falls back to the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
}

fn default_group_id() -> String {
    DEFAULT_GROUP_ID.to_string()
}

fn default_kind() -> String {
    "widget".to_string()
}

fn default_display_name() -> String {
    "dooboo".to_string()
}

fn default_description() -> String {
    "The dooboo Todo Widget. Instantly view your tasks at a glance.".to_string()
}

fn default_entry_surface() -> String {
    DEFAULT_ENTRY_SURFACE.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            group_id: default_group_id(),
            kind: default_kind(),
            display_name: default_display_name(),
            description: default_description(),
            entry_surface: default_entry_surface(),
            store_dir: None,
        }
    }
}

impl WidgetConfig {
    /// Loads configuration from the default file locations and the
    /// environment.
    ///
    /// If no configuration file is found, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be read
    /// or parsed, or if the resulting configuration is invalid.
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Self = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from a variable lookup.
    ///
    /// Empty values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_config::WidgetConfig;
    ///
    /// let mut config = WidgetConfig::default();
    /// config.apply_overrides(|name| {
    ///     (name == "TODO_WIDGET_GROUP_ID").then(|| "group.com.acme.todo".to_string())
    /// });
    /// assert_eq!(config.group_id, "group.com.acme.todo");
    /// ```
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(group_id) = lookup(ENV_GROUP_ID) {
            debug!(%group_id, "group id overridden from environment");
            self.group_id = group_id;
        }
        if let Some(store_dir) = lookup(ENV_STORE_DIR) {
            debug!(%store_dir, "store dir overridden from environment");
            self.store_dir = Some(PathBuf::from(store_dir));
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the group identifier is empty or contains path
    /// separators, or if the kind or entry surface is empty.
    pub fn validate(&self) -> Result<()> {
        if self.group_id.trim().is_empty() {
            return Err(invalid("group_id", "must not be empty"));
        }
        if self.group_id.contains(['/', '\\']) || matches!(self.group_id.as_str(), "." | "..") {
            return Err(invalid("group_id", "must not contain path separators"));
        }
        if self.kind.trim().is_empty() {
            return Err(invalid("kind", "must not be empty"));
        }
        if self.entry_surface.trim().is_empty() {
            return Err(invalid("entry_surface", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidIdentity {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.group_id, DEFAULT_GROUP_ID);
        assert_eq!(config.kind, "widget");
        assert_eq!(config.entry_surface, "main");
        assert!(config.store_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: WidgetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"group_id": "group.com.acme.todo"}"#).unwrap();
        assert_eq!(config.group_id, "group.com.acme.todo");
        assert_eq!(config.display_name, "dooboo");
    }

    #[test]
    fn store_dir_not_serialized_when_none() {
        let json = serde_json::to_string(&WidgetConfig::default()).unwrap();
        assert!(!json.contains("store_dir"));
    }

    #[test]
    fn validate_rejects_empty_group() {
        let config = WidgetConfig {
            group_id: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidIdentity {
                field: "group_id",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_path_in_group() {
        let config = WidgetConfig {
            group_id: "../group".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_entry_surface() {
        let config = WidgetConfig {
            entry_surface: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn overrides_apply() {
        let mut config = WidgetConfig::default();
        config.apply_overrides(|name| match name {
            ENV_GROUP_ID => Some("group.other".to_string()),
            ENV_STORE_DIR => Some("/tmp/shared".to_string()),
            _ => None,
        });
        assert_eq!(config.group_id, "group.other");
        assert_eq!(config.store_dir, Some(PathBuf::from("/tmp/shared")));
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let mut config = WidgetConfig::default();
        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widget.json5");
        std::fs::write(
            &path,
            r#"
            {
                group_id: "group.com.acme.todo",
                display_name: "Acme",
                store_dir: "/var/shared",
            }
            "#,
        )
        .unwrap();

        let config = WidgetConfig::load_from(&path).unwrap();
        assert_eq!(config.group_id, "group.com.acme.todo");
        assert_eq!(config.display_name, "Acme");
        assert_eq!(config.store_dir, Some(PathBuf::from("/var/shared")));
        assert_eq!(config.kind, "widget");
    }

    #[test]
    fn load_from_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widget.json");
        std::fs::write(&path, r#"{"group_id": ""}"#).unwrap();

        assert!(WidgetConfig::load_from(&path).is_err());
    }
}
