//! The pull-based list adapter (platform A).
//!
//! The host constructs an adapter once per widget refresh and then queries
//! it row by row. The adapter owns nothing but the last computed
//! [`RenderState`]; every lifecycle callback that signals new data re-reads
//! the shared store from scratch.
//!
//! Row ids are plain positions. That is only sound because every data change
//! rebuilds the whole sequence; partial updates would need content-derived
//! ids.

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, instrument};
use widget_protocol::RenderState;
use widget_store::{SharedStore, read_render_state};

use crate::layout::ROW_HEIGHT;
use crate::row::{RenderedRow, render_row};

/// The query protocol a collection host drives.
pub trait CollectionAdapter {
    /// Called once when the adapter is first constructed.
    fn on_create(&mut self);

    /// Called when the host is told the underlying data changed.
    fn on_data_set_changed(&mut self);

    /// Called when the host discards the adapter.
    fn on_destroy(&mut self);

    /// Number of rows currently available.
    fn item_count(&self) -> usize;

    /// Materializes the row at `position`, or `None` when out of range.
    fn view_at(&self, position: usize) -> Option<RenderedRow>;

    /// Row shown while a refresh is pending. Must not depend on data.
    fn loading_view(&self) -> RenderedRow {
        RenderedRow::loading()
    }

    /// Number of distinct row layouts.
    fn view_type_count(&self) -> usize {
        1
    }

    /// Identifier of the row at `position` within the current dataset.
    fn stable_id(&self, position: usize) -> u64;

    /// Whether [`CollectionAdapter::stable_id`] is stable within a dataset.
    fn has_stable_ids(&self) -> bool;
}

/// List adapter over the shared store's todo document.
///
/// # Examples
///
/// ```
/// use widget_protocol::TODOS_KEY;
/// use widget_render::{CollectionAdapter, TodoListAdapter};
/// use widget_store::MemoryStore;
///
/// let store = MemoryStore::new("group.com.example.widget")
///     .with_value(TODOS_KEY, r##"[{"id":"2222","content":"Voice Call","color":"#AA33EE"}]"##);
///
/// let mut adapter = TodoListAdapter::new(store);
/// assert_eq!(adapter.item_count(), 0);
///
/// adapter.on_create();
/// let row = adapter.view_at(0).unwrap();
/// assert_eq!(row.text, "Voice Call");
/// assert_eq!(adapter.stable_id(0), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TodoListAdapter<S> {
    store: S,
    state: Option<RenderState>,
}

impl<S: SharedStore> TodoListAdapter<S> {
    /// Creates an adapter reading from `store`. No data is read until
    /// [`CollectionAdapter::on_create`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store, state: None }
    }

    /// The state computed by the last refresh, if any.
    #[must_use]
    pub fn state(&self) -> Option<&RenderState> {
        self.state.as_ref()
    }

    #[instrument(skip(self), fields(group = self.store.group_id()))]
    fn reload(&mut self) {
        let state = read_render_state(&self.store);
        debug!(items = state.len(), "list adapter reloaded");
        self.state = Some(state);
    }
}

impl<S: SharedStore> CollectionAdapter for TodoListAdapter<S> {
    fn on_create(&mut self) {
        self.reload();
    }

    fn on_data_set_changed(&mut self) {
        self.reload();
    }

    fn on_destroy(&mut self) {
        self.state = None;
    }

    fn item_count(&self) -> usize {
        self.state.as_ref().map_or(0, RenderState::len)
    }

    fn view_at(&self, position: usize) -> Option<RenderedRow> {
        let item = self.state.as_ref()?.items().get(position)?;
        Some(RenderedRow::from_item(item))
    }

    fn stable_id(&self, position: usize) -> u64 {
        position as u64
    }

    fn has_stable_ids(&self) -> bool {
        true
    }
}

/// Renders the adapter's rows into `area`, pulling them one at a time.
///
/// When the adapter has no rows the static loading view is drawn instead;
/// the container only shows the list once there is something to list.
/// Rows beyond the bottom of `area` are never requested.
pub fn render_list(
    adapter: &impl CollectionAdapter,
    selected: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height == 0 {
        return;
    }

    let count = adapter.item_count();
    if count == 0 {
        render_row(&adapter.loading_view(), false, row_area(area, 0), buf);
        return;
    }

    let visible = usize::from(area.height / ROW_HEIGHT).min(count);
    for position in 0..visible {
        if let Some(row) = adapter.view_at(position) {
            render_row(&row, selected == Some(position), row_area(area, position), buf);
        }
    }
}

/// Maps a terminal position inside the list area to a row position.
///
/// Returns `None` outside the area or past the last row.
#[must_use]
pub fn row_at(area: Rect, column: u16, row: u16, count: usize) -> Option<usize> {
    if !area.contains(ratatui::layout::Position::new(column, row)) {
        return None;
    }
    let position = usize::from((row - area.y) / ROW_HEIGHT);
    (position < count).then_some(position)
}

fn row_area(area: Rect, position: usize) -> Rect {
    let offset = u16::try_from(position).unwrap_or(u16::MAX).saturating_mul(ROW_HEIGHT);
    Rect {
        y: area.y.saturating_add(offset),
        height: ROW_HEIGHT.min(area.height.saturating_sub(offset)),
        ..area
    }
}
