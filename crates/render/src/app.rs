//! The terminal preview.
//!
//! [`App`] hosts both engines over the same store, side by side: the left
//! pane plays the platform-A host (container plus pulled list rows), the
//! right pane plays the platform-B host (one timeline entry). Pressing `r`
//! stands in for the host app's "data changed" broadcast.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::debug;
use widget_config::WidgetConfig;
use widget_protocol::{ActivationIntent, ClickRouter};
use widget_store::SharedStore;

use crate::{
    container::{CollectionWidget, ContainerView, Hit, Visibility, WidgetId, render_container},
    entry_view::{EntryView, render_entry},
    event::{Message, event_to_message, poll_event},
    list::{CollectionAdapter, TodoListAdapter, row_at},
    terminal::AppTerminal,
    timeline::{TimelineProvider, TodoTimelineProvider},
};

/// The single widget instance the preview places.
const PREVIEW_WIDGET: WidgetId = WidgetId(1);

const HEADER_HEIGHT: u16 = 3;

const HELP_TEXT: &str = "r refresh  ↑↓ select  Enter open item  e open app  q quit";

/// The preview application.
#[derive(Debug)]
pub struct App<S> {
    config: WidgetConfig,
    widget: CollectionWidget<S>,
    adapter: TodoListAdapter<S>,
    provider: TodoTimelineProvider<S>,
    container: ContainerView,
    entry: EntryView,
    selected: Option<usize>,
    last_activation: Option<ActivationIntent>,
    should_quit: bool,
    /// Container area from the last render, used for click hit-testing.
    last_list_area: Rect,
}

impl<S: SharedStore + Clone> App<S> {
    /// Creates the preview and performs the initial read of both engines.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_config::WidgetConfig;
    /// use widget_protocol::{TODOS_KEY, sample::SAMPLE_DOCUMENT};
    /// use widget_render::App;
    /// use widget_store::MemoryStore;
    ///
    /// let config = WidgetConfig::default();
    /// let store = MemoryStore::new(&config.group_id).with_value(TODOS_KEY, SAMPLE_DOCUMENT);
    /// let app = App::new(store, config);
    /// assert_eq!(app.selected(), Some(0));
    /// ```
    #[must_use]
    pub fn new(store: S, config: WidgetConfig) -> Self {
        let router = ClickRouter::new(config.entry_surface.as_str());
        let widget = CollectionWidget::new(store.clone(), router);
        let mut adapter = widget.adapter();
        adapter.on_create();
        let provider = TodoTimelineProvider::new(store);
        let container = widget.update(PREVIEW_WIDGET);
        let entry = current_entry(&provider);

        let mut app = Self {
            config,
            widget,
            adapter,
            provider,
            container,
            entry,
            selected: None,
            last_activation: None,
            should_quit: false,
            last_list_area: Rect::default(),
        };
        app.clamp_selection();
        app
    }

    /// The selected list row, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The intent fired by the most recent tap.
    #[must_use]
    pub fn last_activation(&self) -> Option<&ActivationIntent> {
        self.last_activation.as_ref()
    }

    /// Whether the preview has been asked to exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a message.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Quit => self.should_quit = true,
            Message::Refresh => self.refresh(),
            Message::NavigateUp => {
                self.selected = self.selected.map(|s| s.saturating_sub(1));
            }
            Message::NavigateDown => {
                let count = self.visible_rows();
                self.selected = self.selected.map(|s| (s + 1).min(count.saturating_sub(1)));
            }
            Message::Activate => {
                if let Some(position) = self.selected {
                    self.activate_row(position);
                }
            }
            Message::ActivateContainer => self.activate(&Hit::Container),
            Message::ClickAt { column, row } => self.handle_click(column, row),
        }
    }

    /// Re-reads the store through both engines, as the OS would after the
    /// host app's broadcast.
    pub fn refresh(&mut self) {
        self.container = self.widget.update(PREVIEW_WIDGET);
        self.adapter.on_data_set_changed();
        self.entry = current_entry(&self.provider);
        self.clamp_selection();
    }

    fn visible_rows(&self) -> usize {
        match self.container.visibility {
            Visibility::List => self.adapter.item_count(),
            Visibility::Empty { .. } => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_rows();
        self.selected = (count > 0).then(|| self.selected.unwrap_or(0).min(count - 1));
    }

    fn activate_row(&mut self, position: usize) {
        let fill_in = self.adapter.view_at(position).and_then(|row| row.fill_in);
        if let Some(fill_in) = fill_in {
            self.activate(&Hit::Row(fill_in));
        }
    }

    fn activate(&mut self, hit: &Hit) {
        let intent = self.container.activate(hit);
        debug!(%intent, "widget activated");
        self.last_activation = Some(intent);
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let area = self.last_list_area;
        if !area.contains((column, row).into()) {
            return;
        }

        match row_at(area, column, row, self.visible_rows()) {
            Some(position) => {
                self.selected = Some(position);
                self.activate_row(position);
            }
            None => self.activate(&Hit::Container),
        }
    }

    /// Draws the preview.
    pub fn view(&mut self, frame: &mut Frame) {
        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [list_area, timeline_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(content_area);

        self.render_header(frame, header_area);

        let list_block = pane("List");
        let list_inner = list_block.inner(list_area);
        frame.render_widget(list_block, list_area);
        self.last_list_area = list_inner;
        render_container(
            &self.container,
            &self.adapter,
            self.selected,
            list_inner,
            frame.buffer_mut(),
        );

        let timeline_block = pane("Timeline");
        let timeline_inner = timeline_block.inner(timeline_area);
        frame.render_widget(timeline_block, timeline_area);
        render_entry(&self.entry, timeline_inner, frame.buffer_mut());

        self.render_status(frame, status_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                self.config.display_name.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" [{}]", self.config.kind),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(" - "),
            Span::styled(
                self.config.description.as_str(),
                Style::default().fg(Color::White),
            ),
        ]));
        frame.render_widget(title, inner);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.last_activation {
            Some(intent) => Line::from(vec![
                Span::styled("Opened ", Style::default().fg(Color::DarkGray)),
                Span::styled(intent.to_string(), Style::default().fg(Color::Yellow)),
            ]),
            None => Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Runs the preview until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or polling the terminal fails.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

fn pane(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {title} "))
}

/// Builds the entry view for the provider's current timeline.
fn current_entry<S: SharedStore>(provider: &TodoTimelineProvider<S>) -> EntryView {
    let timeline = provider.timeline();
    let entry = timeline
        .entries
        .into_iter()
        .next()
        .unwrap_or_else(|| provider.placeholder());
    EntryView::new(&entry, provider.empty_message().as_deref())
}
