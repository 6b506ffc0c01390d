//! The platform-A container update.
//!
//! For every placed widget instance the host asks for a container view. The
//! container decides whether the list or the empty-state region is visible,
//! and wires two intents: the container's own default activation and the
//! template that row fill-ins are merged into.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use tracing::{debug, instrument};
use widget_protocol::{ActivationIntent, ClickRouter, FillIn, RenderState};
use widget_store::{SharedStore, read_render_state};

use crate::list::{CollectionAdapter, TodoListAdapter, render_list};
use crate::row::truncate_string;

/// Identifier of one placed widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u32);

/// Which region of the container is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// The list is hidden and the message is shown in its place.
    Empty {
        /// The empty-state message.
        message: String,
    },
    /// The list is shown; rows come from the adapter.
    List,
}

/// Where a tap landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// A list row, identified by its fill-in.
    Row(FillIn),
    /// The container background or the empty-state region.
    Container,
}

/// The container for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerView {
    /// The instance this view belongs to.
    pub widget_id: WidgetId,
    /// The visible region.
    pub visibility: Visibility,
    /// Fired for taps on the container or the empty region.
    pub container_intent: ActivationIntent,
    /// Template the row fill-ins are merged into.
    pub template_intent: ActivationIntent,
}

impl ContainerView {
    /// Resolves a tap into the intent to fire.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_protocol::{ClickRouter, FillIn};
    /// use widget_render::{CollectionWidget, Hit, WidgetId};
    /// use widget_store::MemoryStore;
    ///
    /// let widget = CollectionWidget::new(MemoryStore::new("g"), ClickRouter::default());
    /// let view = widget.update(WidgetId(1));
    ///
    /// assert_eq!(view.activate(&Hit::Row(FillIn::new("2222"))).item_id(), Some("2222"));
    /// assert_eq!(view.activate(&Hit::Container).item_id(), None);
    /// ```
    #[must_use]
    pub fn activate(&self, hit: &Hit) -> ActivationIntent {
        match hit {
            Hit::Row(fill_in) => self.template_intent.with_fill_in(fill_in),
            Hit::Container => self.container_intent.clone(),
        }
    }
}

/// The collection widget provider: builds container views and list adapters
/// over one shared store.
#[derive(Debug, Clone)]
pub struct CollectionWidget<S> {
    store: S,
    router: ClickRouter,
}

impl<S: SharedStore> CollectionWidget<S> {
    /// Creates the provider.
    #[must_use]
    pub fn new(store: S, router: ClickRouter) -> Self {
        Self { store, router }
    }

    /// Builds the container view for every placed instance.
    ///
    /// Each instance reads the store on its own.
    #[must_use]
    pub fn on_update(&self, widget_ids: &[WidgetId]) -> Vec<ContainerView> {
        widget_ids.iter().map(|&id| self.update(id)).collect()
    }

    /// Builds the container view for one instance.
    #[instrument(skip(self), fields(group = self.store.group_id()))]
    #[must_use]
    pub fn update(&self, widget_id: WidgetId) -> ContainerView {
        let visibility = match read_render_state(&self.store) {
            RenderState::Empty { message } => Visibility::Empty { message },
            RenderState::Populated { .. } => Visibility::List,
        };
        debug!(?visibility, "container updated");

        ContainerView {
            widget_id,
            visibility,
            container_intent: self.router.route_default_activation(),
            template_intent: self.router.route_default_activation(),
        }
    }
}

impl<S: SharedStore + Clone> CollectionWidget<S> {
    /// Creates a fresh list adapter bound to the same store.
    #[must_use]
    pub fn adapter(&self) -> TodoListAdapter<S> {
        TodoListAdapter::new(self.store.clone())
    }
}

/// Renders the container: the empty-state message or the adapter's list.
pub fn render_container(
    view: &ContainerView,
    adapter: &impl CollectionAdapter,
    selected: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    match &view.visibility {
        Visibility::Empty { message } => {
            let text = truncate_string(message, usize::from(area.width));
            buf.set_string(area.x, area.y, text, Style::default().fg(Color::Gray));
        }
        Visibility::List => render_list(adapter, selected, area, buf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use widget_protocol::{EMPTY_MESSAGE_KEY, ITEM_ID, TODOS_KEY, sample::SAMPLE_DOCUMENT};
    use widget_store::MemoryStore;

    fn widget(store: MemoryStore) -> CollectionWidget<MemoryStore> {
        CollectionWidget::new(store, ClickRouter::new("MainActivity"))
    }

    #[test]
    fn empty_store_shows_fallback_message() {
        let view = widget(MemoryStore::new("g")).update(WidgetId(7));
        assert_eq!(view.widget_id, WidgetId(7));
        assert_eq!(
            view.visibility,
            Visibility::Empty {
                message: "All task completed!".to_string()
            }
        );
    }

    #[test]
    fn empty_store_uses_override_message() {
        let store = MemoryStore::new("g")
            .with_value(TODOS_KEY, "[]")
            .with_value(EMPTY_MESSAGE_KEY, "Inbox zero");
        let view = widget(store).update(WidgetId(1));
        assert_eq!(
            view.visibility,
            Visibility::Empty {
                message: "Inbox zero".to_string()
            }
        );
    }

    #[test]
    fn populated_store_shows_list() {
        let store = MemoryStore::new("g").with_value(TODOS_KEY, SAMPLE_DOCUMENT);
        let view = widget(store).update(WidgetId(1));
        assert_eq!(view.visibility, Visibility::List);
    }

    #[test]
    fn on_update_builds_one_view_per_instance() {
        let views = widget(MemoryStore::new("g")).on_update(&[WidgetId(1), WidgetId(2)]);
        let ids: Vec<_> = views.iter().map(|v| v.widget_id).collect();
        assert_eq!(ids, vec![WidgetId(1), WidgetId(2)]);
    }

    #[test]
    fn row_tap_merges_fill_in_into_template() {
        let store = MemoryStore::new("g").with_value(TODOS_KEY, SAMPLE_DOCUMENT);
        let widget = widget(store);
        let view = widget.update(WidgetId(1));
        let mut adapter = widget.adapter();
        adapter.on_create();

        let fill_in = adapter.view_at(1).and_then(|row| row.fill_in).expect("fill-in");
        let intent = view.activate(&Hit::Row(fill_in));

        assert_eq!(intent.target(), "MainActivity");
        assert_eq!(intent.extra(ITEM_ID), Some("2222"));
    }

    #[test]
    fn container_tap_has_no_item() {
        let view = widget(MemoryStore::new("g")).update(WidgetId(1));
        let intent = view.activate(&Hit::Container);
        assert_eq!(intent.target(), "MainActivity");
        assert!(intent.extras().is_empty());
    }

    #[test]
    fn render_empty_container() {
        let widget = widget(MemoryStore::new("g"));
        let view = widget.update(WidgetId(1));
        let adapter = widget.adapter();
        let area = Rect::new(0, 0, 24, 2);
        let mut buf = Buffer::empty(area);

        render_container(&view, &adapter, None, area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @"All task completed!");
    }

    #[test]
    fn render_list_container() {
        let store = MemoryStore::new("g").with_value(TODOS_KEY, SAMPLE_DOCUMENT);
        let widget = widget(store);
        let view = widget.update(WidgetId(1));
        let mut adapter = widget.adapter();
        adapter.on_create();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);

        render_container(&view, &adapter, None, area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ███ 5 minutes stret…
        ███ Voice Call
        ");
    }
}
