//! Shared protocol types for the todo widget.
//!
//! This crate holds the platform-independent core that both rendering engines
//! agree on: the todo document format written by the host app, the color
//! resolver, the render model and the click router.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`item`]: The `TodoItem` display unit
//! - [`document`]: Defensive parsing of the raw `todos` document
//! - [`color`]: Hex color resolution with a deterministic fallback
//! - [`render_state`]: The `Empty` / `Populated` render model
//! - [`intent`]: Activation intents routed back into the host app
//! - [`keys`]: Shared-store key names
//! - [`sample`]: A sample document for previews and tests
//! - [`error`]: Error types for document decoding
//!
//! Nothing in this crate performs I/O. Callers read the shared store and
//! hand the raw text over.
//!
//! # Examples
//!
//! ```
//! use widget_protocol::{ClickRouter, RenderState, Rgb, color};
//!
//! let doc = r##"[{"id":"1","content":"Buy milk","color":"#FF3333"}]"##;
//! let state = RenderState::build(Some(doc), None);
//!
//! let item = &state.items()[0];
//! assert_eq!(item.content(), "Buy milk");
//! assert_eq!(color::resolve(item.color()), Rgb::new(255, 51, 51));
//!
//! let intent = ClickRouter::default().route_activation(item.id());
//! assert_eq!(intent.item_id(), Some("1"));
//! ```

pub mod color;
pub mod document;
pub mod error;
pub mod intent;
pub mod item;
pub mod keys;
pub mod render_state;
pub mod sample;

// Re-export primary types at crate root for convenience
pub use color::Rgb;
pub use error::{DocumentError, Result};
pub use intent::{ActivationIntent, ClickRouter, FillIn, ITEM_ID};
pub use item::TodoItem;
pub use keys::{EMPTY_MESSAGE_KEY, TODOS_KEY};
pub use render_state::{FALLBACK_EMPTY_MESSAGE, RenderState};
