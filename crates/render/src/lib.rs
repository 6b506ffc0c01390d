//! Rendering engines for the todo widget.
//!
//! Two hosts render the same shared store through different protocols:
//!
//! - Platform A pulls rows one by one from a [`CollectionAdapter`]
//!   ([`list`]), inside a container that switches between the list and an
//!   empty-state region ([`container`]).
//! - Platform B asks a [`TimelineProvider`] for a single entry carrying the
//!   raw document ([`timeline`]) and interprets it at render time
//!   ([`entry_view`]).
//!
//! Both engines go through the same parser, color resolver and render model
//! from `widget_protocol`, so they agree on what is shown. Rows are drawn
//! into Ratatui buffers, which also lets the [`app`] module preview both
//! engines side by side in a terminal.
//!
//! # Overview
//!
//! - [`row`]: The rendered row produced by the list adapter
//! - [`list`]: The pull-based list adapter
//! - [`container`]: The platform-A container update and tap resolution
//! - [`timeline`]: The snapshot/timeline provider
//! - [`entry_view`]: Rendering of a timeline entry
//! - [`layout`]: Shared row geometry
//! - [`app`], [`event`], [`terminal`]: The terminal preview
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use widget_protocol::TODOS_KEY;
//! use widget_render::{CollectionAdapter, TodoListAdapter, list::render_list};
//! use widget_store::MemoryStore;
//!
//! let store = MemoryStore::new("group.com.example.widget")
//!     .with_value(TODOS_KEY, r##"[{"id":"1","content":"Buy milk","color":"#FF3333"}]"##);
//!
//! let mut adapter = TodoListAdapter::new(store);
//! adapter.on_create();
//! assert_eq!(adapter.item_count(), 1);
//!
//! let area = Rect::new(0, 0, 20, 3);
//! let mut buf = Buffer::empty(area);
//! render_list(&adapter, None, area, &mut buf);
//! ```

pub mod app;
pub mod container;
pub mod entry_view;
pub mod event;
pub mod layout;
pub mod list;
pub mod row;
pub mod terminal;
pub mod timeline;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use container::{CollectionWidget, ContainerView, Hit, Visibility, WidgetId};
pub use entry_view::EntryView;
pub use list::{CollectionAdapter, TodoListAdapter};
pub use row::RenderedRow;
pub use timeline::{Entry, RefreshPolicy, Timeline, TimelineProvider, TodoTimelineProvider};
