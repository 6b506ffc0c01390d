//! Configuration for the todo widget.
//!
//! The widget's identity surface (the shared group identifier, the widget
//! kind and its display metadata) is normally injected at build time. This
//! crate loads it from a file so the same values can be shared by the host
//! app's writer and the widget's reader.
//!
//! # Overview
//!
//! - [`config`]: The `WidgetConfig` struct, defaults, overrides and validation
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`TODO_WIDGET_GROUP_ID`, `TODO_WIDGET_STORE_DIR`)
//! 2. Local config (`./widget.json5` or `./widget.json`)
//! 3. User config (`~/.config/todo-widget/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! A group identifier that does not match the host app's silently reads as
//! an empty store; it is not detected here.
//!
//! # Examples
//!
//! ```no_run
//! use widget_config::WidgetConfig;
//!
//! # fn example() -> widget_config::Result<()> {
//! let config = WidgetConfig::load()?;
//! println!("Reading group {}", config.group_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{DEFAULT_GROUP_ID, WidgetConfig};
pub use error::{ConfigError, Result};
